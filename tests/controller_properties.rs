//! Property-based tests for the gallery selection controller.
//!
//! Drives random sequences of user events against the controller and checks
//! the state invariants after every step.

use dioxus::prelude::Key;
use proptest::prelude::*;

use credfolio::cards::CREDENTIAL_CARDS;
use credfolio::selection::{PointerHit, Selection};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Events the gallery controller can receive from the UI.
#[derive(Debug, Clone)]
enum GalleryOp {
    Select(usize), // Index into the fixed card list
    Dismiss,
    Escape,
    OtherKey,
    ClickPanel,
    ClickOutside,
}

/// Generate a sequence of gallery events, biased toward selection so runs
/// spend time in the Active state.
fn gallery_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<GalleryOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0..CREDENTIAL_CARDS.len()).prop_map(GalleryOp::Select),
            1 => Just(GalleryOp::Dismiss),
            1 => Just(GalleryOp::Escape),
            1 => Just(GalleryOp::OtherKey),
            1 => Just(GalleryOp::ClickPanel),
            1 => Just(GalleryOp::ClickOutside),
        ],
        0..max_ops,
    )
}

fn apply(selection: &mut Selection, op: &GalleryOp) {
    match op {
        GalleryOp::Select(i) => selection.select(CREDENTIAL_CARDS[*i]),
        GalleryOp::Dismiss => selection.dismiss(),
        GalleryOp::Escape => selection.handle_key(&Key::Escape),
        GalleryOp::OtherKey => selection.handle_key(&Key::Enter),
        GalleryOp::ClickPanel => selection.handle_pointer(PointerHit::Panel),
        GalleryOp::ClickOutside => selection.handle_pointer(PointerHit::Outside),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// After every event: scroll lock is held iff a card is active, and the
    /// active card is always a member of the fixed list.
    #[test]
    fn invariants_hold_after_every_event(ops in gallery_ops_strategy(40)) {
        let mut selection = Selection::default();

        for op in &ops {
            apply(&mut selection, op);

            prop_assert_eq!(selection.scroll_locked(), selection.is_active());
            if let Some(card) = selection.active_card() {
                prop_assert!(CREDENTIAL_CARDS.iter().any(|c| c == card));
            }
        }
    }

    /// The controller behaves exactly like a trivial reference model: the
    /// last selection wins, and any dismissal trigger clears it.
    #[test]
    fn controller_matches_reference_model(ops in gallery_ops_strategy(60)) {
        let mut selection = Selection::default();
        let mut model: Option<usize> = None;

        for op in &ops {
            apply(&mut selection, op);

            match op {
                GalleryOp::Select(i) => model = Some(*i),
                GalleryOp::Dismiss | GalleryOp::Escape | GalleryOp::ClickOutside => model = None,
                GalleryOp::OtherKey | GalleryOp::ClickPanel => {}
            }

            prop_assert_eq!(
                selection.active_card(),
                model.map(|i| &CREDENTIAL_CARDS[i])
            );
        }
    }

    /// Escape ends any event sequence in the Closed state with scroll
    /// unlocked, no matter what came before.
    #[test]
    fn escape_always_closes(ops in gallery_ops_strategy(40)) {
        let mut selection = Selection::default();

        for op in &ops {
            apply(&mut selection, op);
        }

        selection.handle_key(&Key::Escape);
        prop_assert_eq!(selection, Selection::Closed);
        prop_assert!(!selection.scroll_locked());
    }
}
