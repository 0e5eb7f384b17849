//! Skill Pills Component
//!
//! Horizontal wrap of skill tag badges shown on the expanded panel.

use dioxus::prelude::*;

/// Properties for the SkillPills component
#[derive(Clone, PartialEq, Props)]
pub struct SkillPillsProps {
    /// Skill labels, in the order they should appear
    pub skills: Vec<String>,
}

/// Displays a wrapping row of skill badges.
///
/// Purely presentational: pills are not clickable and carry no state.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SkillPills {
///         skills: vec!["SEO".to_string(), "Content Strategy".to_string()],
///     }
/// }
/// ```
#[component]
pub fn SkillPills(props: SkillPillsProps) -> Element {
    if props.skills.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div {
            class: "skill-pills",
            role: "list",
            "aria-label": "Skills",
            for skill in props.skills.iter() {
                span {
                    key: "{skill}",
                    class: "pill",
                    role: "listitem",
                    "{skill}"
                }
            }
        }
    }
}
