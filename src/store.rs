//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is the
//! single owner of loaded characters and the current selection; it is only
//! mutated with server-returned records, never with raw local increments.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Character;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All loaded characters, in server order
    pub characters: Vec<Character>,
    /// Currently displayed character's id
    pub selected: Option<u32>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Set the selection, iff the id refers to a loaded character
pub fn store_select_character(store: &AppStore, id: u32) {
    if contains_character(&store.characters().read(), id) {
        store.selected().set(Some(id));
    }
}

/// Current selection's record, if any
pub fn selected_character(store: &AppStore) -> Option<Character> {
    let id = store.selected().get()?;
    store.characters().read().iter().find(|c| c.id == id).cloned()
}

/// Replace the local record with the server-returned value
pub fn store_replace_character(store: &AppStore, updated: Character) {
    replace_character(&mut store.characters().write(), updated);
}

/// Append a newly created character
pub fn store_add_character(store: &AppStore, character: Character) {
    store.characters().write().push(character);
}

/// Remove a character from the displayed list (local only, never a DELETE)
pub fn store_remove_character(store: &AppStore, id: u32) {
    store.characters().write().retain(|c| c.id != id);
    if store.selected().get() == Some(id) {
        store.selected().set(None);
    }
}

// ========================
// Pure Helpers
// ========================

fn contains_character(characters: &[Character], id: u32) -> bool {
    characters.iter().any(|c| c.id == id)
}

fn replace_character(characters: &mut Vec<Character>, updated: Character) {
    if let Some(c) = characters.iter_mut().find(|c| c.id == updated.id) {
        *c = updated;
    }
}

/// Parse the vote-amount input; any integer, validity is checked by `next_votes`
pub fn parse_vote_amount(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// New absolute vote total for a positive delta; `None` rejects the request
/// (non-positive delta, or a total outside `u32`)
pub fn next_votes(current: u32, delta: i64) -> Option<u32> {
    if delta <= 0 {
        return None;
    }
    u32::try_from(i64::from(current) + delta).ok()
}

/// Trimmed (name, image) for a create request; `None` rejects it client-side
pub fn validate_new_character(name: &str, image: &str) -> Option<(String, String)> {
    let name = name.trim();
    let image = image.trim();
    if name.is_empty() || image.is_empty() {
        return None;
    }
    Some((name.to_string(), image.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_character(id: u32, votes: u32) -> Character {
        Character {
            id,
            name: format!("Character {}", id),
            image: format!("https://example.com/{}.jpg", id),
            votes,
        }
    }

    #[test]
    fn test_next_votes_adds_delta() {
        assert_eq!(next_votes(3, 5), Some(8));
    }

    #[test]
    fn test_next_votes_rejects_non_positive_delta() {
        assert_eq!(next_votes(3, 0), None);
        assert_eq!(next_votes(3, -2), None);
    }

    #[test]
    fn test_next_votes_rejects_overflow() {
        assert_eq!(next_votes(u32::MAX, 1), None);
    }

    #[test]
    fn test_parse_vote_amount() {
        assert_eq!(parse_vote_amount("5"), Some(5));
        assert_eq!(parse_vote_amount(" 12 "), Some(12));
        assert_eq!(parse_vote_amount("-3"), Some(-3));
        assert_eq!(parse_vote_amount("abc"), None);
        assert_eq!(parse_vote_amount(""), None);
    }

    #[test]
    fn test_replace_character_takes_server_value() {
        // Server clamped: local computed 8, server answered 5
        let mut characters = vec![make_character(1, 3), make_character(2, 7)];
        replace_character(&mut characters, make_character(1, 5));
        assert_eq!(characters[0].votes, 5);
        assert_eq!(characters[1].votes, 7);
    }

    #[test]
    fn test_replace_character_unknown_id_is_noop() {
        let mut characters = vec![make_character(1, 3)];
        replace_character(&mut characters, make_character(9, 4));
        assert_eq!(characters, vec![make_character(1, 3)]);
    }

    #[test]
    fn test_validate_new_character_trims_inputs() {
        assert_eq!(
            validate_new_character(" Wowzers ", " wowzers.jpg "),
            Some(("Wowzers".to_string(), "wowzers.jpg".to_string())),
        );
    }

    #[test]
    fn test_validate_new_character_rejects_empty_fields() {
        assert_eq!(validate_new_character("", "wowzers.jpg"), None);
        assert_eq!(validate_new_character("Wowzers", ""), None);
        assert_eq!(validate_new_character("", ""), None);
    }

    #[test]
    fn test_validate_new_character_rejects_whitespace_only() {
        assert_eq!(validate_new_character("   ", "wowzers.jpg"), None);
        assert_eq!(validate_new_character("Wowzers", "  \t"), None);
    }

    #[test]
    fn test_contains_character() {
        let characters = vec![make_character(1, 0), make_character(2, 0)];
        assert!(contains_character(&characters, 2));
        assert!(!contains_character(&characters, 3));
    }
}
