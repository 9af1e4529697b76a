//! Core draw engine — catalogue, shuffling, spreads, drawing, and the output record.
//!
//! ## Module overview
//!
//! | Module    | Purpose |
//! |-----------|---------|
//! | `models`  | Shared types: cards, orientations, spreads, request/reading structs |
//! | `cards`   | The 78-card Rider–Waite–Smith catalogue (read-only, built once) |
//! | `shuffle` | ChaCha8-backed Fisher–Yates shuffle and per-draw generator |
//! | `deck`    | Shuffled working copy of the catalogue that cards are dealt from |
//! | `spreads` | Static spread layouts with ordered position labels |
//! | `draw`    | Single entry point `draw()`: validate, shuffle, deal, orient |
//! | `record`  | Stable-schema `ReadingRecord` for downstream consumers |
//! | `error`   | `DrawError` and the `DrawResult` alias |

pub mod cards;
pub mod deck;
pub mod draw;
pub mod error;
pub mod models;
pub mod record;
pub mod shuffle;
pub mod spreads;

pub use draw::{draw, draw_spread};
pub use error::{DrawError, DrawResult};
pub use models::{
    Arcana, Card, CardId, DrawRequest, DrawnCard, Orientation, PositionLabel, Rank,
    Reading, SpreadDefinition, SpreadKind, Suit, DEFAULT_REVERSED_PROBABILITY,
};
pub use record::{to_record, CardRecord, ReadingRecord};
pub use spreads::{get_spread, get_spread_by_id, list_spreads};
