//! Credential card records.
//!
//! The card list is fixed, compiled-in content: five credentials with
//! descriptive text, skill tags, and a lazy body renderer each.

use dioxus::prelude::*;

/// Lazy producer of a card's expanded body markup.
///
/// Wraps a plain function so the capability has an explicit contract (one
/// `render` method) while staying `Copy + PartialEq` for use in props.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentRenderer(fn() -> Element);

impl ContentRenderer {
    pub const fn new(body: fn() -> Element) -> Self {
        Self(body)
    }

    /// Produce the body markup. Invoked only when the card is expanded.
    pub fn render(&self) -> Element {
        (self.0)()
    }
}

/// One credential's descriptive data and renderer.
///
/// Records are defined once in [`CREDENTIAL_CARDS`] and never mutated.
/// Titles are unique within the list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRecord {
    pub title: &'static str,
    /// Short issuer line shown under the title ("Google", "Meta", ...).
    pub issuer: &'static str,
    /// Asset path for the certificate image.
    pub image: &'static str,
    /// Call-to-action label on the collapsed list row.
    pub cta_label: &'static str,
    /// Call-to-action label on the expanded panel's credential link.
    pub credential_label: &'static str,
    /// Credential URL. `None` means the credential is not available yet,
    /// in which case no call-to-action is rendered at all.
    pub link: Option<&'static str>,
    pub skills: &'static [&'static str],
    pub content: ContentRenderer,
}

/// Look up a card by its (unique) title.
pub fn card_by_title(title: &str) -> Option<&'static CardRecord> {
    CREDENTIAL_CARDS.iter().find(|card| card.title == title)
}

/// The fixed credential list, in display order.
pub static CREDENTIAL_CARDS: &[CardRecord] = &[
    CardRecord {
        title: "Google Ads Search Certification",
        issuer: "Google",
        image: "assets/google-ads.png",
        cta_label: "View Details",
        credential_label: "View Credentials",
        link: Some("https://drive.google.com/file/d/1u9tQpM6Uai6Rn2htT4B6K_lJ1cSz6GO_/view"),
        skills: &[
            "Data Analysis",
            "Social Media Strategy",
            "Social Media Marketing",
            "Media Strategy",
            "Performance Metrics",
        ],
        content: ContentRenderer::new(google_ads_body),
    },
    CardRecord {
        title: "Google Analytics for Beginners",
        issuer: "Google",
        image: "assets/analytics-cert.png",
        cta_label: "View Details",
        credential_label: "View Credentials",
        link: Some("https://drive.google.com/file/d/1QHEPf8onCSX8TVcblIr26RooH6twv4HB/view"),
        skills: &[
            "Social Media Advertising",
            "Media Trends",
            "Audience Targeting",
            "Pricing Strategy",
            "Business Strategy",
        ],
        content: ContentRenderer::new(analytics_body),
    },
    CardRecord {
        title: "Fundamentals of Digital Marketing",
        issuer: "Google",
        image: "assets/digital-marketing.png",
        cta_label: "View Details",
        credential_label: "View Credentials",
        link: Some(
            "https://drive.google.com/file/d/1trcriiC2rqcyeE-vdfxf99-9YCgqx_D5/view?usp=sharing",
        ),
        skills: &["Content Strategy", "SEO", "Lead Generation", "Content Creation"],
        content: ContentRenderer::new(digital_marketing_body),
    },
    CardRecord {
        title: "TikTok Ads - Practical Expertise",
        issuer: "TikTok For Business",
        image: "assets/tiktok.jpg",
        cta_label: "View Details",
        credential_label: "View Credentials",
        link: None,
        skills: &[
            "Short-form Video",
            "Trend Marketing",
            "Gen Z Targeting",
            "Creative Direction",
        ],
        content: ContentRenderer::new(tiktok_body),
    },
    CardRecord {
        title: "Meta Ads - Practical Expertise",
        issuer: "Meta",
        image: "assets/meta.png",
        cta_label: "View Details",
        credential_label: "View Credentials",
        link: None,
        skills: &[
            "Data Analysis",
            "Conversion Tracking",
            "User Behavior Analysis",
            "Reporting",
        ],
        content: ContentRenderer::new(meta_body),
    },
];

fn google_ads_body() -> Element {
    rsx! {
        p {
            "Advanced proficiency in creating and optimizing Google Ads campaigns \
             across Search, Display, and Video networks."
        }
    }
}

fn analytics_body() -> Element {
    rsx! {
        p {
            "Expert-level knowledge in Facebook and Instagram advertising, \
             including campaign strategy, audience targeting, and analytics."
        }
    }
}

fn digital_marketing_body() -> Element {
    rsx! {
        p {
            "Comprehensive understanding of content marketing principles, strategy \
             development, and implementation for business growth."
        }
    }
}

fn tiktok_body() -> Element {
    rsx! {
        p {
            "Specialized knowledge in creating and managing high-performing TikTok \
             advertising campaigns for brand awareness and conversions."
        }
    }
}

fn meta_body() -> Element {
    rsx! {
        p {
            "Advanced proficiency in analyzing website traffic, user behavior, and \
             marketing campaign performance using Google Analytics."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn titles_are_unique() {
        let titles: HashSet<_> = CREDENTIAL_CARDS.iter().map(|c| c.title).collect();
        assert_eq!(titles.len(), CREDENTIAL_CARDS.len());
    }

    #[test]
    fn card_by_title_finds_every_card() {
        for card in CREDENTIAL_CARDS {
            assert_eq!(card_by_title(card.title), Some(card));
        }
        assert_eq!(card_by_title("No Such Credential"), None);
    }

    #[test]
    fn links_are_absent_or_nonempty() {
        // A missing credential is None, never an empty string, so a
        // Some link is always a usable URL.
        for card in CREDENTIAL_CARDS {
            if let Some(link) = card.link {
                assert!(!link.is_empty(), "{} has an empty link", card.title);
                assert!(link.starts_with("https://"), "{} link is not a URL", card.title);
            }
        }
    }

    #[test]
    fn pending_credentials_have_no_link() {
        let pending: Vec<_> = CREDENTIAL_CARDS
            .iter()
            .filter(|c| c.link.is_none())
            .map(|c| c.title)
            .collect();
        assert_eq!(
            pending,
            vec![
                "TikTok Ads - Practical Expertise",
                "Meta Ads - Practical Expertise"
            ]
        );
    }

    #[test]
    fn every_card_has_skills() {
        for card in CREDENTIAL_CARDS {
            assert!(!card.skills.is_empty(), "{} has no skills", card.title);
        }
    }
}
