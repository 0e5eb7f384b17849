//! UI components for the credential gallery.

mod card_detail;
mod card_header;
mod card_row;
mod skill_pills;

pub use card_detail::CardDetailModal;
pub use card_header::CardHeader;
pub use card_row::CardRow;
pub use skill_pills::SkillPills;
