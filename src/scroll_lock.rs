//! Scroll lock side effect.
//!
//! The gallery page calls [`apply`] whenever the selection changes so the
//! page behind the modal cannot scroll while a card is expanded.

use dioxus::document;

const LOCK: &str = "document.body.style.overflow = 'hidden';";
const UNLOCK: &str = "document.body.style.overflow = 'auto';";

/// Set the host document's scroll behavior. Re-applying the current state
/// is a harmless no-op, so callers can invoke this on every render pass.
pub fn apply(locked: bool) {
    tracing::debug!(locked, "applying scroll lock");
    let _ = document::eval(if locked { LOCK } else { UNLOCK });
}
