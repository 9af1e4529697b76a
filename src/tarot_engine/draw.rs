use rand::Rng;
use tracing::debug;

use crate::tarot_engine::{
    cards::DECK_SIZE,
    deck::Deck,
    error::{DrawError, DrawResult},
    models::{DrawRequest, DrawnCard, Orientation, Reading, SpreadKind},
    shuffle::draw_rng,
    spreads,
};

/// Validate a reversed probability: finite and within `[0, 1]`.
pub fn check_reversed_probability(p: f64) -> DrawResult<f64> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(DrawError::InvalidParameter {
            name: "reversed_probability",
            message: format!("{p} is outside [0, 1]"),
        })
    }
}

/// One Bernoulli trial: reversed iff `u < p` for `u` uniform in `[0, 1)`.
///
/// `p = 0` can never reverse and `p = 1` always does.
fn sample_orientation<R: Rng + ?Sized>(rng: &mut R, p: f64) -> Orientation {
    let u: f64 = rng.gen();
    if u < p {
        Orientation::Reversed
    } else {
        Orientation::Upright
    }
}

/// Draw a reading.
///
/// Generator consumption is fixed so a seed reproduces the whole reading:
/// first the 77 Fisher–Yates swaps over the full deck, then one `f64` per
/// drawn card in position order for its orientation. Nothing is interleaved.
pub fn draw(request: DrawRequest) -> DrawResult<Reading> {
    let spread = spreads::get_spread(request.spread_size)?;
    let p = check_reversed_probability(request.reversed_probability)?;

    let mut rng = draw_rng(request.rng_seed);

    let mut deck = Deck::new_shuffled(&mut rng);
    let picked = deck
        .deal_n(spread.size)
        .ok_or(DrawError::Lookup { id: DECK_SIZE })?;

    let cards: Vec<DrawnCard> = picked
        .into_iter()
        .zip(spread.positions)
        .enumerate()
        .map(|(index, (card, position))| DrawnCard {
            index,
            position: *position,
            card,
            orientation: sample_orientation(&mut rng, p),
        })
        .collect();

    let question = request
        .question
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty());

    debug!(
        spread = spread.id,
        seed = ?request.rng_seed,
        reversed_probability = p,
        reversed = cards.iter().filter(|c| c.orientation.is_reversed()).count(),
        "drew reading"
    );

    Ok(Reading {
        spread,
        cards,
        seed: request.rng_seed,
        reversed_probability: p,
        question,
    })
}

/// Draw a reading for a named spread.
pub fn draw_spread(kind: SpreadKind, reversed_probability: f64, seed: Option<u64>) -> DrawResult<Reading> {
    let mut request = DrawRequest::from(kind).with_reversed_probability(reversed_probability);
    request.rng_seed = seed;
    draw(request)
}
