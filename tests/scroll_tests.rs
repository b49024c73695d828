// Host-side tests for scroll-driven header state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod error {
    include!("../src/error.rs");
}
mod config {
    include!("../src/config.rs");
}
mod state {
    include!("../src/state.rs");
}
mod support;

use constants::*;
use state::*;
use support::{FakeElement, Page};

fn assert_scrolled(page: &Page) {
    assert!(page.header.has_class(CLASS_HEADER_DARK));
    assert!(!page.header.has_class(CLASS_HEADER_CLEAR_MOD));
    assert!(!page.header.has_class(CLASS_HEADER_CLEAR));
    assert!(page.fade.has_class(CLASS_FADED));
}

fn assert_at_top(page: &Page) {
    assert!(!page.header.has_class(CLASS_HEADER_DARK));
    assert!(page.header.has_class(CLASS_HEADER_CLEAR_MOD));
    assert!(page.header.has_class(CLASS_HEADER_CLEAR));
    assert!(!page.fade.has_class(CLASS_FADED));
}

#[test]
fn state_from_offset_uses_inclusive_threshold() {
    let t = SCROLL_THRESHOLD_PX;
    assert_eq!(ScrollHeaderState::from_offset(0.0, t), ScrollHeaderState::AtTop);
    assert_eq!(ScrollHeaderState::from_offset(199.9, t), ScrollHeaderState::AtTop);
    assert_eq!(ScrollHeaderState::from_offset(200.0, t), ScrollHeaderState::Scrolled);
    assert_eq!(ScrollHeaderState::from_offset(5000.0, t), ScrollHeaderState::Scrolled);
}

#[test]
fn nan_offset_reads_as_at_top() {
    let s = ScrollHeaderState::from_offset(f64::NAN, SCROLL_THRESHOLD_PX);
    assert_eq!(s, ScrollHeaderState::AtTop);
    assert!(!s.is_scrolled());
}

#[test]
fn header_classes_follow_threshold_for_many_offsets() {
    for offset in [0.0, 1.0, 50.0, 150.0, 199.0, 200.0, 201.0, 250.0, 1000.0, 1e6] {
        let page = Page::new();
        let state = page.elements.on_scroll_or_load(offset, SCROLL_THRESHOLD_PX);
        if offset >= 200.0 {
            assert_eq!(state, ScrollHeaderState::Scrolled, "offset {}", offset);
            assert_scrolled(&page);
        } else {
            assert_eq!(state, ScrollHeaderState::AtTop, "offset {}", offset);
            assert_at_top(&page);
        }
    }
}

#[test]
fn recompute_is_idempotent() {
    for offset in [0.0, 250.0] {
        let page = Page::new();
        page.elements.on_scroll_or_load(offset, SCROLL_THRESHOLD_PX);
        let header_once = page.header.classes();
        let fade_once = page.fade.classes();
        page.elements.on_scroll_or_load(offset, SCROLL_THRESHOLD_PX);
        assert_eq!(page.header.classes(), header_once);
        assert_eq!(page.fade.classes(), fade_once);
    }
}

#[test]
fn load_scroll_down_and_back_restores_initial_classes() {
    let page = Page::new();
    page.elements.on_scroll_or_load(0.0, SCROLL_THRESHOLD_PX);
    assert!(page.header.has_class(CLASS_HEADER_CLEAR_MOD));
    assert!(!page.header.has_class(CLASS_HEADER_DARK));
    let header_initial = page.header.classes();
    let fade_initial = page.fade.classes();

    page.elements.on_scroll_or_load(250.0, SCROLL_THRESHOLD_PX);
    assert!(page.header.has_class(CLASS_HEADER_DARK));
    assert!(page.fade.has_class(CLASS_FADED));

    page.elements.on_scroll_or_load(0.0, SCROLL_THRESHOLD_PX);
    assert_eq!(page.header.classes(), header_initial);
    assert_eq!(page.fade.classes(), fade_initial);
}

#[test]
fn stale_classes_are_overwritten_not_toggled() {
    // A header left in an inconsistent state by markup is corrected on load.
    let page = Page::new();
    page.header.add_class(CLASS_HEADER_DARK);
    page.header.add_class(CLASS_HEADER_CLEAR_MOD);
    page.elements.on_scroll_or_load(10.0, SCROLL_THRESHOLD_PX);
    assert_at_top(&page);
}

#[test]
fn unrelated_header_classes_survive() {
    let page = Page::new();
    page.header.add_class("sticky");
    page.elements.on_scroll_or_load(300.0, SCROLL_THRESHOLD_PX);
    page.elements.on_scroll_or_load(0.0, SCROLL_THRESHOLD_PX);
    assert!(page.header.has_class("sticky"));
}

#[test]
fn custom_threshold_is_respected() {
    let page = Page::new();
    assert_eq!(
        page.elements.on_scroll_or_load(80.0, 64.0),
        ScrollHeaderState::Scrolled
    );
    assert_scrolled(&page);
    assert_eq!(
        page.elements.on_scroll_or_load(63.0, 64.0),
        ScrollHeaderState::AtTop
    );
    assert_at_top(&page);
}

#[test]
fn missing_fade_element_is_a_no_op() {
    let header = FakeElement::new();
    let elements = NavElements {
        header: vec![header.clone()],
        ..NavElements::default()
    };
    elements.on_scroll_or_load(400.0, SCROLL_THRESHOLD_PX);
    assert!(header.has_class(CLASS_HEADER_DARK));
}

#[test]
fn empty_page_scroll_does_not_panic() {
    let elements: NavElements<FakeElement> = NavElements::default();
    assert_eq!(
        elements.on_scroll_or_load(0.0, SCROLL_THRESHOLD_PX),
        ScrollHeaderState::AtTop
    );
    assert_eq!(
        elements.on_scroll_or_load(999.0, SCROLL_THRESHOLD_PX),
        ScrollHeaderState::Scrolled
    );
}

#[test]
fn every_matched_header_is_updated() {
    let a = FakeElement::new();
    let b = FakeElement::with_classes(&[CLASS_HEADER_DARK]);
    let elements = NavElements {
        header: vec![a.clone(), b.clone()],
        ..NavElements::default()
    };
    elements.on_scroll_or_load(0.0, SCROLL_THRESHOLD_PX);
    for el in [&a, &b] {
        assert!(el.has_class(CLASS_HEADER_CLEAR_MOD));
        assert!(!el.has_class(CLASS_HEADER_DARK));
    }
}
