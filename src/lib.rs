//! # tarot_draw
//!
//! A deterministic tarot draw engine for the 78-card Rider–Waite–Smith deck.
//!
//! The engine shuffles the deck, lays the top cards into a named spread,
//! decides each card's orientation, and emits a stable-schema record that an
//! interpretation layer (typically a hosted language model) and a
//! presentation layer can consume directly.
//!
//! ## How it works
//!
//! 1. Create a [`DrawRequest`] with a spread size (1, 3, 5 or 10), a reversed
//!    probability, an optional seed, and an optional question.
//! 2. Call [`draw`]. The engine builds one ChaCha8 generator, runs a
//!    Fisher–Yates shuffle over the full deck, deals the top N cards, then
//!    draws one orientation per card in position order.
//! 3. Convert the returned [`Reading`] with [`to_record`] and serialise the
//!    [`ReadingRecord`] to JSON, or pass it to [`build_prompt`] /
//!    [`interpret_reading`] for the interpretation layer.
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` reproduces cards *and*
//!   orientations bit for bit, on any platform.
//! - **No replacement**: cards are dealt from one shuffled deck, so a reading
//!   never repeats a card.
//! - **Stable schema**: every record field is always present; `seed` is
//!   `null` and `question` is `""` when absent.
//!
//! ## Quick start
//!
//! ```rust
//! use tarot_draw::{draw, to_record, DrawRequest, Orientation};
//!
//! // Three-card spread, entropy seed, 50% reversals:
//! let reading = draw(DrawRequest::new(3)).unwrap();
//! assert_eq!(reading.cards.len(), 3);
//!
//! // Fully reproducible single card that can never be reversed:
//! let a = draw(DrawRequest::new(1).with_seed(42).with_reversed_probability(0.0)).unwrap();
//! let b = draw(DrawRequest::new(1).with_seed(42).with_reversed_probability(0.0)).unwrap();
//! assert_eq!(a.cards[0].card.id, b.cards[0].card.id);
//! assert_eq!(a.cards[0].orientation, Orientation::Upright);
//!
//! let json = to_record(&a).to_json().unwrap();
//! assert!(json.contains("\"seed\":42"));
//! ```

pub mod config;
pub mod interpretation;
#[cfg(feature = "cli")]
pub mod logging;
pub mod tarot_engine;

// Convenience re-exports so callers can use `tarot_draw::draw`
// directly without reaching into `tarot_engine::`.
pub use config::EngineConfig;
pub use interpretation::{
    build_prompt, card_image_path, interpret_reading, InterpretError, Interpretation, Interpreter,
};
pub use tarot_engine::{
    draw, draw_spread, get_spread, get_spread_by_id, list_spreads, to_record, Arcana, Card,
    CardId, CardRecord, DrawError, DrawRequest, DrawResult, DrawnCard, Orientation,
    PositionLabel, Rank, Reading, ReadingRecord, SpreadDefinition, SpreadKind, Suit,
};

#[cfg(test)]
mod tests;
