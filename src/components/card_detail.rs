//! Card Detail Modal Component
//!
//! Backdrop plus expanded panel for the active credential. Dismissal is
//! wired three ways: the close button, a pointer hit on the backdrop, and
//! the Escape key. Clicks inside the panel stop propagating so they never
//! read as outside hits.

use dioxus::prelude::*;

use super::{CardHeader, SkillPills};
use crate::cards::CardRecord;
use crate::selection::PointerHit;

/// Expanded detail view for one credential.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     CardDetailModal {
///         card: active_card,
///         on_dismiss: move |_| selection.write().dismiss(),
///         on_pointer: move |hit| selection.write().handle_pointer(hit),
///         on_key: move |key| selection.write().handle_key(&key),
///     }
/// }
/// ```
#[component]
pub fn CardDetailModal(
    /// The active credential
    card: CardRecord,
    /// Explicit dismissal (close button)
    on_dismiss: EventHandler<()>,
    /// Pointer hit, classified as panel or outside
    on_pointer: EventHandler<PointerHit>,
    /// Keyboard input while the modal is open
    on_key: EventHandler<Key>,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "0",
            autofocus: true,
            onmounted: move |evt| async move {
                // The overlay must hold focus for Escape to reach us
                let _ = evt.set_focus(true).await;
            },
            onkeydown: move |evt| on_key.call(evt.key()),
            onclick: move |_| on_pointer.call(PointerHit::Outside),

            div {
                class: "card-detail",
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_pointer.call(PointerHit::Panel);
                },

                button {
                    class: "modal-close-btn",
                    onclick: move |_| on_dismiss.call(()),
                    "\u{00D7}"
                }

                img {
                    class: "card-detail__image",
                    src: "{card.image}",
                    alt: "{card.title}",
                }

                div { class: "card-detail__body",
                    div { class: "card-detail__header-row",
                        CardHeader {
                            title: "{card.title}",
                            issuer: "{card.issuer}",
                        }

                        // No call-to-action at all while the credential
                        // is pending, rather than a dead link
                        if let Some(link) = card.link {
                            a {
                                class: "credential-link",
                                href: "{link}",
                                target: "_blank",
                                "{card.credential_label}"
                            }
                        }
                    }

                    div { class: "card-detail__skills",
                        h4 { class: "card-detail__skills-title", "Skills" }
                        SkillPills {
                            skills: card.skills.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                        }
                    }

                    div { class: "card-detail__content",
                        {card.content.render()}
                    }
                }
            }
        }
    }
}
