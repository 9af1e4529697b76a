//! Stable-schema record handed to interpretation and presentation layers.
//!
//! Every field is always present: `seed` is `null` for entropy draws,
//! `question` is `""` when none was asked, and `suit`/`rank` are `null` for
//! the Major Arcana.

use serde::{Deserialize, Serialize};

use crate::tarot_engine::{
    error::DrawResult,
    models::{Arcana, CardId, DrawnCard, Orientation, Rank, Reading, Suit},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub index: usize,
    pub position: String,
    pub card_id: CardId,
    pub slug: String,
    pub name: String,
    pub arcana: Arcana,
    pub suit: Option<Suit>,
    pub rank: Option<Rank>,
    pub orientation: Orientation,
    /// Upright or reversed meaning, whichever `orientation` selects.
    pub meaning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRecord {
    pub seed: Option<u64>,
    pub reversed_probability: f64,
    pub question: String,
    pub spread: String,
    pub cards: Vec<CardRecord>,
}

impl From<&DrawnCard> for CardRecord {
    fn from(drawn: &DrawnCard) -> Self {
        let card = drawn.card;
        CardRecord {
            index: drawn.index,
            position: drawn.position.label.to_string(),
            card_id: card.id,
            slug: card.slug.clone(),
            name: card.name.clone(),
            arcana: card.arcana,
            suit: card.suit,
            rank: card.rank,
            orientation: drawn.orientation,
            meaning: drawn.meaning().to_string(),
        }
    }
}

/// Convert a reading into its record, cards in spread position order.
pub fn to_record(reading: &Reading) -> ReadingRecord {
    ReadingRecord {
        seed: reading.seed,
        reversed_probability: reading.reversed_probability,
        question: reading.question.clone().unwrap_or_default(),
        spread: reading.spread.id.to_string(),
        cards: reading.cards.iter().map(CardRecord::from).collect(),
    }
}

impl ReadingRecord {
    pub fn to_json(&self) -> DrawResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> DrawResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(s: &str) -> DrawResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// `None` when the record carries the empty question.
    pub fn question(&self) -> Option<&str> {
        Some(self.question.as_str()).filter(|q| !q.is_empty())
    }
}
