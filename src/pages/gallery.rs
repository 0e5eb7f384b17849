//! Gallery page - the credential list plus the expand/collapse controller.
//!
//! Owns the selection signal and wires the three dismissal triggers (close
//! button, backdrop click, Escape) plus the scroll-lock side effect.

use dioxus::prelude::*;

use crate::cards::CREDENTIAL_CARDS;
use crate::components::{CardDetailModal, CardRow};
use crate::scroll_lock;
use crate::selection::Selection;

/// Main gallery page component.
#[component]
pub fn Gallery() -> Element {
    let mut selection = use_signal(Selection::default);

    // Scroll lock follows the selection: locked exactly while a card is
    // expanded. Re-running on an unchanged state just rewrites the same
    // style value.
    use_effect(move || {
        scroll_lock::apply(selection.read().scroll_locked());
    });

    rsx! {
        if let Selection::Active(card) = selection() {
            CardDetailModal {
                card,
                on_dismiss: move |_| selection.write().dismiss(),
                on_pointer: move |hit| selection.write().handle_pointer(hit),
                on_key: move |key| selection.write().handle_key(&key),
            }
        }

        main { class: "gallery",
            h1 { class: "page-title", "Credentials" }

            ul { class: "card-list",
                for card in CREDENTIAL_CARDS.iter() {
                    CardRow {
                        key: "{card.title}",
                        card: *card,
                        on_select: move |card| selection.write().select(card),
                    }
                }
            }
        }
    }
}
