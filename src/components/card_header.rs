//! Card Header Component
//!
//! Title and issuer line shared by the collapsed row and the expanded panel.

use dioxus::prelude::*;

/// Card header with title and issuer.
///
/// This is the element that visually carries over between the list row and
/// the expanded panel, so both render it with the same structure.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     CardHeader {
///         title: "Google Ads Search Certification",
///         issuer: "Google",
///     }
/// }
/// ```
#[component]
pub fn CardHeader(
    /// Credential title
    title: String,
    /// Issuer line shown under the title
    issuer: String,
) -> Element {
    rsx! {
        div { class: "card-header",
            h3 { class: "card-header__title",
                "{title}"
            }
            p { class: "card-header__issuer",
                "{issuer}"
            }
        }
    }
}
