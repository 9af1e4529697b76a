//! Static spread layouts.
//!
//! Each definition lists its positions in reading order; a drawn card's
//! index in the reading is its index here.

use crate::tarot_engine::{
    error::{DrawError, DrawResult},
    models::{PositionLabel, SpreadDefinition, SpreadKind},
};

const fn pos(label: &'static str, meaning: &'static str) -> PositionLabel {
    PositionLabel { label, meaning }
}

static SINGLE: [PositionLabel; 1] = [
    pos("Focus", "The central message of this draw"),
];

static THREE_CARD: [PositionLabel; 3] = [
    pos("Past", "Influences that led to the current situation"),
    pos("Present", "The situation as it stands now"),
    pos("Future", "Where things are heading if nothing changes"),
];

static FIVE_CARD: [PositionLabel; 5] = [
    pos("Issue", "The heart of the matter"),
    pos("Action", "What can be done"),
    pos("Obstacle", "What stands in the way"),
    pos("Resource", "Help or strength to draw on"),
    pos("Outcome", "The likely result"),
];

static CELTIC_CROSS: [PositionLabel; 10] = [
    pos("Situation", "The present circumstances"),
    pos("Challenge", "The obstacle crossing the situation"),
    pos("Subconscious", "Root cause and underlying influence"),
    pos("Past", "Recent events now passing"),
    pos("Conscious", "Conscious goal or intention"),
    pos("Near Future", "What is approaching"),
    pos("Self", "The querent's inner attitude"),
    pos("Environment", "Outside influences and other people"),
    pos("Hopes and Fears", "What is hoped for or dreaded"),
    pos("Outcome", "Where the current path leads"),
];

static SPREADS: [SpreadDefinition; 4] = [
    SpreadDefinition {
        kind: SpreadKind::Single,
        id: "single",
        name: "Single Card",
        size: 1,
        positions: &SINGLE,
    },
    SpreadDefinition {
        kind: SpreadKind::ThreeCard,
        id: "three_card",
        name: "Three Card (Past / Present / Future)",
        size: 3,
        positions: &THREE_CARD,
    },
    SpreadDefinition {
        kind: SpreadKind::FiveCard,
        id: "five_card",
        name: "Five Card (Issue / Action / Obstacle / Resource / Outcome)",
        size: 5,
        positions: &FIVE_CARD,
    },
    SpreadDefinition {
        kind: SpreadKind::CelticCross,
        id: "celtic_cross",
        name: "Celtic Cross",
        size: 10,
        positions: &CELTIC_CROSS,
    },
];

/// All supported spreads, smallest first.
pub fn list_spreads() -> &'static [SpreadDefinition] {
    &SPREADS
}

pub fn spread(kind: SpreadKind) -> &'static SpreadDefinition {
    match kind {
        SpreadKind::Single      => &SPREADS[0],
        SpreadKind::ThreeCard   => &SPREADS[1],
        SpreadKind::FiveCard    => &SPREADS[2],
        SpreadKind::CelticCross => &SPREADS[3],
    }
}

/// Spread with exactly `size` positions.
pub fn get_spread(size: usize) -> DrawResult<&'static SpreadDefinition> {
    SpreadKind::from_size(size)
        .map(spread)
        .ok_or(DrawError::UnsupportedSpread { size })
}

/// Spread by id (`single`, `three_card`, `five_card`, `celtic_cross`).
pub fn get_spread_by_id(id: &str) -> DrawResult<&'static SpreadDefinition> {
    SpreadKind::from_id(id)
        .map(spread)
        .ok_or_else(|| DrawError::UnknownSpread(id.to_string()))
}
