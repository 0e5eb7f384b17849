//! Selection state machine for the card gallery.
//!
//! Tracks which card, if any, is currently expanded, and maps the two
//! dismissal triggers (Escape key, pointer outside the panel) onto
//! transitions. Every transition is total and synchronous; there are no
//! error paths.

use dioxus::prelude::Key;

use crate::cards::CardRecord;

/// Where a pointer event landed relative to the expanded panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerHit {
    /// Inside the expanded panel bounds.
    Panel,
    /// On the backdrop or anywhere else outside the panel.
    Outside,
}

/// The gallery's selection state: closed, or exactly one card expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Selection {
    #[default]
    Closed,
    Active(CardRecord),
}

impl Selection {
    /// Expand `card`. Re-selection while another card is active is allowed.
    pub fn select(&mut self, card: CardRecord) {
        tracing::debug!(title = card.title, "card selected");
        *self = Selection::Active(card);
    }

    /// Collapse back to the plain list. Idempotent on `Closed`.
    pub fn dismiss(&mut self) {
        if let Selection::Active(card) = self {
            tracing::debug!(title = card.title, "card dismissed");
        }
        *self = Selection::Closed;
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Selection::Active(_))
    }

    pub fn active_card(&self) -> Option<&CardRecord> {
        match self {
            Selection::Active(card) => Some(card),
            Selection::Closed => None,
        }
    }

    /// Page scroll must be locked exactly while a card is expanded.
    pub fn scroll_locked(&self) -> bool {
        self.is_active()
    }

    /// Keyboard dismissal trigger: Escape collapses, everything else is
    /// ignored. Safe to call in any state.
    pub fn handle_key(&mut self, key: &Key) {
        if *key == Key::Escape {
            self.dismiss();
        }
    }

    /// Pointer dismissal trigger: a hit outside the panel collapses, a hit
    /// on the panel itself leaves the selection unchanged.
    pub fn handle_pointer(&mut self, hit: PointerHit) {
        if hit == PointerHit::Outside {
            self.dismiss();
        }
    }
}
