//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod button;
pub mod loading;
pub mod note_card;
pub mod summary_panel;
pub mod toast;

pub use button::Button;
pub use loading::{CardSkeleton, Loading};
pub use note_card::NoteCard;
pub use summary_panel::SummaryPanel;
pub use toast::Toast;
