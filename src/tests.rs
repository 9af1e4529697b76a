//! Unit tests for the `tarot_draw` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical reading; pinned readings for fixed seeds |
//! | Uniqueness | No card repeats within a reading, for every spread |
//! | Fairness | Unseeded single-card draws spread evenly over all 78 cards |
//! | Orientation | Reversal rate tracks `p`; `p = 0` and `p = 1` are exact |
//! | Positions | Cards bind to spread positions in declaration order |
//! | Schema | Record round-trips through JSON with every field populated |
//! | Rejection | Unsupported sizes and out-of-range probabilities fail cleanly |

use std::collections::HashSet;

use crate::tarot_engine::{
    cards::DECK_SIZE, draw, get_spread, list_spreads, to_record, DrawError, DrawRequest,
    Orientation, ReadingRecord, SpreadKind,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn req(size: usize, p: f64, seed: u64) -> DrawRequest {
    DrawRequest::new(size).with_reversed_probability(p).with_seed(seed)
}

fn ids(record: &ReadingRecord) -> Vec<u8> {
    record.cards.iter().map(|c| c.card_id.0).collect()
}

const SIZES: [usize; 4] = [1, 3, 5, 10];

/// Five seeds that span different generator states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_reading() {
    for size in SIZES {
        for seed in SEEDS {
            let a = draw(req(size, 0.5, seed)).unwrap();
            let b = draw(req(size, 0.5, seed)).unwrap();
            assert_eq!(a, b, "size={size} seed={seed}");
            assert_eq!(to_record(&a), to_record(&b));
        }
    }
}

#[test]
fn seed_42_single_card_is_fixed_and_upright() {
    for _ in 0..20 {
        let again = draw(req(1, 0.0, 42)).unwrap();
        assert_eq!(again.cards.len(), 1);
        assert_eq!(again.cards[0].card.id.0, 70);
        assert_eq!(again.cards[0].card.name, "Seven of Pentacles");
        assert_eq!(again.cards[0].orientation, Orientation::Upright);
        assert_eq!(again.cards[0].position.label, "Focus");
    }
}

// Pinned outputs: these change only if the generator, the shuffle or the
// orientation sampling changes, which would break every stored seed.

#[test]
fn seed_42_celtic_cross_is_pinned() {
    use Orientation::{Reversed as R, Upright as U};

    let record = to_record(&draw(req(10, 0.5, 42)).unwrap());
    assert_eq!(ids(&record), [70, 62, 69, 28, 61, 27, 33, 48, 26, 34]);
    let orientations: Vec<Orientation> = record.cards.iter().map(|c| c.orientation).collect();
    assert_eq!(orientations, [R, U, U, U, U, U, R, R, R, R]);

    let upright = to_record(&draw(req(10, 0.0, 42)).unwrap());
    assert_eq!(ids(&upright), ids(&record));
    assert!(upright.cards.iter().all(|c| c.orientation == U));
}

#[test]
fn seed_7_three_card_is_pinned() {
    use Orientation::{Reversed as R, Upright as U};

    let record = to_record(&draw(req(3, 0.5, 7)).unwrap());
    assert_eq!(ids(&record), [46, 73, 21]);
    let orientations: Vec<Orientation> = record.cards.iter().map(|c| c.orientation).collect();
    assert_eq!(orientations, [R, U, U]);
}

#[test]
fn text_seed_reading_is_pinned() {
    use Orientation::{Reversed as R, Upright as U};

    let request = DrawRequest::new(3).with_text_seed("demo-user-001");
    assert_eq!(request.rng_seed, Some(9_184_445_910_191_296_244));

    let record = to_record(&draw(request).unwrap());
    assert_eq!(record.seed, Some(9_184_445_910_191_296_244));
    assert_eq!(ids(&record), [49, 77, 31]);
    let orientations: Vec<Orientation> = record.cards.iter().map(|c| c.orientation).collect();
    assert_eq!(orientations, [R, U, U]);
}

#[test]
fn probability_does_not_change_which_cards_are_drawn() {
    // Orientation draws come after the shuffle, so p only affects orientation.
    for seed in SEEDS {
        let low = to_record(&draw(req(10, 0.1, seed)).unwrap());
        let high = to_record(&draw(req(10, 0.9, seed)).unwrap());
        assert_eq!(ids(&low), ids(&high), "seed={seed}");
    }
}

#[test]
fn smaller_spread_is_prefix_of_larger_with_same_seed() {
    for seed in SEEDS {
        let three = ids(&to_record(&draw(req(3, 0.5, seed)).unwrap()));
        let ten = ids(&to_record(&draw(req(10, 0.5, seed)).unwrap()));
        assert_eq!(three[..], ten[..3], "seed={seed}");
    }
}

#[test]
fn different_seeds_produce_varied_readings() {
    let pairs = 40u64;
    let mut same_count = 0usize;
    for seed in 0..pairs {
        let a = ids(&to_record(&draw(req(3, 0.5, seed)).unwrap()));
        let b = ids(&to_record(&draw(req(3, 0.5, seed + 500)).unwrap()));
        if a == b {
            same_count += 1;
        }
    }
    assert!(same_count < 2, "Too many identical readings across seeds ({same_count}/{pairs})");
}

#[test]
fn entropy_draw_produces_a_valid_reading() {
    let r = draw(DrawRequest::new(10)).unwrap();
    assert_eq!(r.seed, None);
    assert_eq!(r.cards.len(), 10);
}

// ── uniqueness ───────────────────────────────────────────────────────────────

#[test]
fn no_card_repeats_within_a_reading() {
    for size in SIZES {
        for seed in 0..200u64 {
            let r = draw(req(size, 0.5, seed)).unwrap();
            let unique: HashSet<_> = r.cards.iter().map(|c| c.card.id).collect();
            assert_eq!(unique.len(), size, "duplicate in size={size} seed={seed}");
        }
    }
}

// ── fairness ─────────────────────────────────────────────────────────────────

#[test]
fn single_card_draws_cover_deck_evenly() {
    let per_card = 1_000usize;
    let trials = DECK_SIZE * per_card;
    let mut counts = [0usize; DECK_SIZE];
    for _ in 0..trials {
        let r = draw(DrawRequest::new(1)).unwrap();
        counts[r.cards[0].card.id.0 as usize] += 1;
    }

    // Chi-square with 77 degrees of freedom: mean 77, sd ~12.4.
    let expected = per_card as f64;
    let chi2: f64 = counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum();
    assert!(chi2 < 160.0, "chi-square too large: {chi2:.1}");

    for (id, &c) in counts.iter().enumerate() {
        assert!((700..=1_300).contains(&c), "card {id} drawn {c} times of {trials}");
    }
}

// ── orientation ──────────────────────────────────────────────────────────────

#[test]
fn reversal_rate_tracks_probability() {
    for p in [0.1, 0.3, 0.5, 0.8] {
        let mut reversed = 0usize;
        let mut total = 0usize;
        for seed in 0..3_000u64 {
            let r = draw(req(10, p, seed)).unwrap();
            reversed += r.cards.iter().filter(|c| c.orientation.is_reversed()).count();
            total += r.cards.len();
        }
        let rate = reversed as f64 / total as f64;
        assert!((rate - p).abs() < 0.02, "p={p} observed {rate:.4}");
    }
}

#[test]
fn zero_and_one_probabilities_are_exact() {
    for seed in 0..500u64 {
        let up = draw(req(10, 0.0, seed)).unwrap();
        assert!(up.cards.iter().all(|c| c.orientation == Orientation::Upright));
        let down = draw(req(10, 1.0, seed)).unwrap();
        assert!(down.cards.iter().all(|c| c.orientation == Orientation::Reversed));
    }
}

// ── positions ────────────────────────────────────────────────────────────────

#[test]
fn three_card_binds_past_present_future() {
    let r = draw(req(3, 0.5, 5)).unwrap();
    let labels: Vec<&str> = r.cards.iter().map(|c| c.position.label).collect();
    assert_eq!(labels, ["Past", "Present", "Future"]);
}

#[test]
fn positions_follow_spread_definition_order() {
    for spread in list_spreads() {
        let r = draw(req(spread.size, 0.5, 77)).unwrap();
        assert_eq!(r.spread, spread);
        for (i, (drawn, pos)) in r.cards.iter().zip(spread.positions).enumerate() {
            assert_eq!(drawn.index, i);
            assert_eq!(&drawn.position, pos);
        }
        let record = to_record(&r);
        assert_eq!(record.spread, spread.id);
        for (c, pos) in record.cards.iter().zip(spread.positions) {
            assert_eq!(c.position, pos.label);
        }
    }
}

#[test]
fn celtic_cross_has_ten_named_positions() {
    let def = get_spread(SpreadKind::CelticCross.size()).unwrap();
    assert_eq!(def.positions.first().unwrap().label, "Situation");
    assert_eq!(def.positions.last().unwrap().label, "Outcome");
}

// ── schema ───────────────────────────────────────────────────────────────────

#[test]
fn record_round_trips_through_json() {
    let seeded = to_record(&draw(req(5, 0.4, 1234).with_question("What should I focus on?")).unwrap());
    let back = ReadingRecord::from_json(&seeded.to_json().unwrap()).unwrap();
    assert_eq!(back, seeded);
    assert_eq!(back.seed, Some(1234));
    assert_eq!(back.question, "What should I focus on?");
    assert_eq!(back.cards.len(), 5);

    let unseeded = to_record(&draw(DrawRequest::new(1)).unwrap());
    let json = unseeded.to_json_pretty().unwrap();
    assert!(json.contains("\"seed\": null"));
    assert!(json.contains("\"question\": \"\""));
    let back = ReadingRecord::from_json(&json).unwrap();
    assert_eq!(back.seed, None);
    assert_eq!(back.question(), None);
    assert!(back.cards.iter().all(|c| !c.meaning.is_empty() && !c.name.is_empty()));
}

// ── rejection ────────────────────────────────────────────────────────────────

#[test]
fn unsupported_spread_rejected() {
    let err = draw(DrawRequest::new(4)).unwrap_err();
    assert!(matches!(err, DrawError::UnsupportedSpread { size: 4 }));
    assert!(err.is_user_error());
}

#[test]
fn out_of_range_probability_rejected() {
    let err = draw(DrawRequest::new(3).with_reversed_probability(1.5)).unwrap_err();
    assert!(matches!(err, DrawError::InvalidParameter { name: "reversed_probability", .. }));

    let err = draw(DrawRequest::new(3).with_reversed_probability(-0.1)).unwrap_err();
    assert!(matches!(err, DrawError::InvalidParameter { .. }));
}
