use std::fmt;
use serde::{Deserialize, Serialize};

use crate::tarot_engine::shuffle::seed_from_text;

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arcana {
    Major,
    Minor,
}

impl fmt::Display for Arcana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arcana::Major => write!(f, "Major Arcana"),
            Arcana::Minor => write!(f, "Minor Arcana"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

impl Suit {
    /// The four suits in canonical deck order.
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    /// Lowercase key used in card slugs (e.g. `minor_cups_queen`).
    pub fn key(self) -> &'static str {
        match self {
            Suit::Wands     => "wands",
            Suit::Cups      => "cups",
            Suit::Swords    => "swords",
            Suit::Pentacles => "pentacles",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Wands     => write!(f, "Wands"),
            Suit::Cups      => write!(f, "Cups"),
            Suit::Swords    => write!(f, "Swords"),
            Suit::Pentacles => write!(f, "Pentacles"),
        }
    }
}

/// Rank of a Minor Arcana card. Pips serialise as numerals, courts by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "ace")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "page")]
    Page,
    #[serde(rename = "knight")]
    Knight,
    #[serde(rename = "queen")]
    Queen,
    #[serde(rename = "king")]
    King,
}

impl Rank {
    /// The fourteen ranks in canonical suit order.
    pub const ALL: [Rank; 14] = [
        Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five,
        Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten,
        Rank::Page, Rank::Knight, Rank::Queen, Rank::King,
    ];

    /// Slug key, identical to the serialised form.
    pub fn key(self) -> &'static str {
        match self {
            Rank::Ace    => "ace",
            Rank::Two    => "2",
            Rank::Three  => "3",
            Rank::Four   => "4",
            Rank::Five   => "5",
            Rank::Six    => "6",
            Rank::Seven  => "7",
            Rank::Eight  => "8",
            Rank::Nine   => "9",
            Rank::Ten    => "10",
            Rank::Page   => "page",
            Rank::Knight => "knight",
            Rank::Queen  => "queen",
            Rank::King   => "king",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rank::Ace    => "Ace",
            Rank::Two    => "Two",
            Rank::Three  => "Three",
            Rank::Four   => "Four",
            Rank::Five   => "Five",
            Rank::Six    => "Six",
            Rank::Seven  => "Seven",
            Rank::Eight  => "Eight",
            Rank::Nine   => "Nine",
            Rank::Ten    => "Ten",
            Rank::Page   => "Page",
            Rank::Knight => "Knight",
            Rank::Queen  => "Queen",
            Rank::King   => "King",
        };
        write!(f, "{}", s)
    }
}

/// Position of a card in the canonical 78-card catalogue (0..=77).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u8);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Upright,
    Reversed,
}

impl Orientation {
    pub fn is_reversed(self) -> bool {
        matches!(self, Orientation::Reversed)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Upright  => write!(f, "upright"),
            Orientation::Reversed => write!(f, "reversed"),
        }
    }
}

/// One entry of the Rider–Waite–Smith catalogue.
///
/// Cards are built once by [`cards::all_cards`](crate::tarot_engine::cards::all_cards)
/// and only ever handed out by shared reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub id: CardId,
    /// Stable string key, e.g. `major_00_the_fool` or `minor_wands_ace`.
    pub slug: String,
    pub name: String,
    pub arcana: Arcana,
    /// `None` for the Major Arcana.
    pub suit: Option<Suit>,
    /// `None` for the Major Arcana.
    pub rank: Option<Rank>,
    /// Trump number 0..=21; `None` for the Minor Arcana.
    pub number: Option<u8>,
    pub upright_meaning: &'static str,
    pub reversed_meaning: &'static str,
}

impl Card {
    /// Meaning text that applies in the given orientation.
    pub fn meaning(&self, orientation: Orientation) -> &'static str {
        match orientation {
            Orientation::Upright  => self.upright_meaning,
            Orientation::Reversed => self.reversed_meaning,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ---------------------------------------------------------------------------
// Spreads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadKind {
    Single,
    ThreeCard,
    FiveCard,
    CelticCross,
}

impl SpreadKind {
    pub const ALL: [SpreadKind; 4] = [
        SpreadKind::Single,
        SpreadKind::ThreeCard,
        SpreadKind::FiveCard,
        SpreadKind::CelticCross,
    ];

    pub fn size(self) -> usize {
        match self {
            SpreadKind::Single      => 1,
            SpreadKind::ThreeCard   => 3,
            SpreadKind::FiveCard    => 5,
            SpreadKind::CelticCross => 10,
        }
    }

    pub fn from_size(size: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.size() == size)
    }

    pub fn id(self) -> &'static str {
        match self {
            SpreadKind::Single      => "single",
            SpreadKind::ThreeCard   => "three_card",
            SpreadKind::FiveCard    => "five_card",
            SpreadKind::CelticCross => "celtic_cross",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }
}

impl fmt::Display for SpreadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A slot in a spread with its interpretive meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionLabel {
    pub label: &'static str,
    pub meaning: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpreadDefinition {
    pub kind: SpreadKind,
    pub id: &'static str,
    pub name: &'static str,
    pub size: usize,
    pub positions: &'static [PositionLabel],
}

// ---------------------------------------------------------------------------
// Draw request / reading types
// ---------------------------------------------------------------------------

/// Reversed probability used when a request does not set one.
pub const DEFAULT_REVERSED_PROBABILITY: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawRequest {
    pub spread_size: usize,
    /// Chance in `[0, 1]` that each card lands reversed.
    pub reversed_probability: f64,
    /// `Some` makes cards and orientations fully reproducible.
    pub rng_seed: Option<u64>,
    /// Passed through to the reading untouched apart from trimming.
    pub question: Option<String>,
}

impl DrawRequest {
    /// Request for `spread_size` cards with defaults: p = 0.5, entropy, no question.
    pub fn new(spread_size: usize) -> Self {
        Self {
            spread_size,
            reversed_probability: DEFAULT_REVERSED_PROBABILITY,
            rng_seed: None,
            question: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Seed from text (a user id, a phrase); see [`seed_from_text`].
    ///
    /// [`seed_from_text`]: crate::tarot_engine::shuffle::seed_from_text
    pub fn with_text_seed(self, text: &str) -> Self {
        self.with_seed(seed_from_text(text))
    }

    pub fn with_reversed_probability(mut self, p: f64) -> Self {
        self.reversed_probability = p;
        self
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }
}

impl From<SpreadKind> for DrawRequest {
    fn from(kind: SpreadKind) -> Self {
        DrawRequest::new(kind.size())
    }
}

/// A catalogue card placed into one spread position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawnCard {
    /// Draw order, identical to the spread position index.
    pub index: usize,
    pub position: PositionLabel,
    pub card: &'static Card,
    pub orientation: Orientation,
}

impl DrawnCard {
    pub fn meaning(&self) -> &'static str {
        self.card.meaning(self.orientation)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub spread: &'static SpreadDefinition,
    pub cards: Vec<DrawnCard>,
    /// Seed the draw was made with; `None` for entropy draws.
    pub seed: Option<u64>,
    pub reversed_probability: f64,
    pub question: Option<String>,
}
