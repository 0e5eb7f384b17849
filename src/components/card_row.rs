//! Card Row Component
//!
//! Collapsed summary of one credential in the gallery list.

use dioxus::prelude::*;

use super::CardHeader;
use crate::cards::CardRecord;

/// One collapsed credential row: thumbnail, header, and a call-to-action.
///
/// Clicking anywhere on the row selects the card for expansion.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     CardRow {
///         card: CREDENTIAL_CARDS[0],
///         on_select: move |card| selection.write().select(card),
///     }
/// }
/// ```
#[component]
pub fn CardRow(
    /// Credential data
    card: CardRecord,
    /// Called with the card when the row is clicked
    on_select: EventHandler<CardRecord>,
) -> Element {
    rsx! {
        li {
            class: "card-row",
            onclick: move |_| on_select.call(card),

            div { class: "card-row__summary",
                img {
                    class: "card-row__thumb",
                    src: "{card.image}",
                    alt: "{card.title}",
                }
                CardHeader {
                    title: "{card.title}",
                    issuer: "{card.issuer}",
                }
            }

            button { class: "cta-button",
                "{card.cta_label}"
            }
        }
    }
}
