//! Root application component.

use dioxus::prelude::*;

use crate::pages::Gallery;
use crate::theme::GLOBAL_STYLES;

/// Root component: global styles plus the gallery page.
///
/// There is no router; the gallery is the whole app.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Gallery {}
    }
}
