//! Frontend Models
//!
//! Data structures matching the REST service's JSON.

use serde::{Deserialize, Serialize};

/// Character record (matches the `/characters` collection)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub votes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_votes_default_to_zero() {
        let c: Character =
            serde_json::from_str(r#"{"id":1,"name":"Wowzers","image":"wowzers.jpg"}"#).unwrap();
        assert_eq!(c.votes, 0);
    }
}
