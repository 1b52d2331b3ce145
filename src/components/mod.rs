//! UI Components
//!
//! Reusable Leptos components.

mod character_bar;
mod character_card;
mod detail_panel;
mod new_character_form;
mod votes_form;

pub use character_bar::CharacterBar;
pub use character_card::CharacterGrid;
pub use detail_panel::DetailPanel;
pub use new_character_form::NewCharacterForm;
pub use votes_form::VotesForm;
