// src/models/deck.rs
// the JSON-based card deck model

use serde::{Deserialize, Serialize};

use std::fs;
use std::path::Path;

use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct Deck {
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Deck {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let deck: Deck = serde_json::from_str(&content)?;
        Ok(deck)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_parses_from_json() {
        let json = r#"{
            "cards": [
                { "title": "A", "description": "first", "features": ["x", "y"] },
                { "title": "B", "description": "second" }
            ]
        }"#;
        let deck: Deck = serde_json::from_str(json).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get(0).unwrap().features.len(), 2);
        // features is optional
        assert!(deck.get(1).unwrap().features.is_empty());
        assert!(deck.get(2).is_none());
    }
}
