// Bind/unbind bookkeeping, kept free of web-sys so host tests can drive it.

/// Something that attaches handlers to the page and can detach them again.
pub trait Binding {
    fn bind(&mut self);
    fn unbind(&mut self);
    fn is_bound(&self) -> bool;
}

/// Guard for an idempotent bind/unbind pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BindState {
    bound: bool,
}

impl BindState {
    /// Returns `true` if the caller should attach; `false` when already bound.
    #[inline]
    pub fn begin_bind(&mut self) -> bool {
        !std::mem::replace(&mut self.bound, true)
    }

    /// Returns `true` if the caller should detach; `false` when not bound.
    #[inline]
    pub fn begin_unbind(&mut self) -> bool {
        std::mem::replace(&mut self.bound, false)
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.bound
    }
}

/// Holds at most one bound controller for the page. Installing a new one
/// unbinds the previous, so two controllers never handle the same click.
pub struct BindSlot<B: Binding> {
    held: Option<B>,
}

impl<B: Binding> BindSlot<B> {
    pub const fn new() -> Self {
        Self { held: None }
    }

    /// Unbind whatever is held, then bind and keep `binding`.
    pub fn install(&mut self, mut binding: B) {
        self.release();
        binding.bind();
        self.held = Some(binding);
    }

    /// Unbind and drop the held controller. Returns whether one was held.
    pub fn release(&mut self) -> bool {
        match self.held.take() {
            Some(mut b) => {
                b.unbind();
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.held.is_some()
    }
}

impl<B: Binding> Default for BindSlot<B> {
    fn default() -> Self {
        Self::new()
    }
}
