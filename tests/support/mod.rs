// In-memory stand-in for a DOM element's class list.
// Clones share the same class set, like two handles to one node.
use crate::state::{ClassTarget, NavElements};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

#[derive(Clone, Debug, Default)]
pub struct FakeElement {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes(classes: &[&str]) -> Self {
        let el = Self::new();
        for c in classes {
            el.add_class(c);
        }
        el
    }

    pub fn classes(&self) -> BTreeSet<String> {
        self.classes.borrow().clone()
    }
}

impl ClassTarget for FakeElement {
    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        let mut set = self.classes.borrow_mut();
        if set.remove(class) {
            false
        } else {
            set.insert(class.to_string());
            true
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

/// Handles to a typical page: one header, one button, one panel, two menu
/// links, one dropdown and a fade overlay.
pub struct Page {
    pub header: FakeElement,
    pub button: FakeElement,
    pub panel: FakeElement,
    pub dropdown: FakeElement,
    pub fade: FakeElement,
    pub elements: NavElements<FakeElement>,
}

impl Page {
    pub fn new() -> Self {
        let header = FakeElement::new();
        let button = FakeElement::new();
        let panel = FakeElement::new();
        let dropdown = FakeElement::new();
        let fade = FakeElement::new();
        let elements = NavElements {
            header: vec![header.clone()],
            toggle_button: vec![button.clone()],
            menu_panel: vec![panel.clone()],
            menu_items: vec![FakeElement::new(), FakeElement::new()],
            dropdown: vec![dropdown.clone()],
            fade: vec![fade.clone()],
        };
        Self {
            header,
            button,
            panel,
            dropdown,
            fade,
            elements,
        }
    }
}
