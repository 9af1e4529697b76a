//! Full demo of all four spreads.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `tarot_draw` works end to end:
//!
//! 1. **All spreads** — one reading per spread with fixed seeds, so the
//!    output is deterministic and reproducible.
//!
//! 2. **Record + prompt** — a three-card reading with a question, serialised
//!    to the JSON record and rendered into the interpretation prompt, with a
//!    stand-in interpreter in place of a hosted language model.
//!
//! ## Key concepts demonstrated
//!
//! - `DrawRequest::new(size)` — defaults: p = 0.5, entropy, no question.
//! - `with_seed(u64)` makes cards and orientations fully deterministic.
//! - `to_record` gives the stable schema that downstream layers consume.

use tarot_draw::{
    build_prompt, draw, interpret_reading, list_spreads, to_record, DrawRequest, InterpretError,
    Orientation, Reading,
};

/// Pretty-print one reading: spread, seed, then one line per position.
fn print_reading(reading: &Reading) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  Seed: {:?}  p(reversed): {}",
        reading.spread.name, reading.seed, reading.reversed_probability);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for drawn in &reading.cards {
        let marker = match drawn.orientation {
            Orientation::Upright  => "↑",
            Orientation::Reversed => "↓",
        };
        println!("  {:>2}. {:<16} {} {:<22} {}",
            drawn.index + 1, drawn.position.label, marker, drawn.card.name, drawn.meaning());
    }
    println!();
}

fn main() {
    for (i, spread) in list_spreads().iter().enumerate() {
        let reading = draw(
            DrawRequest::new(spread.size)
                .with_seed(1000 + i as u64)
                .with_reversed_probability(0.4),
        )
        .expect("catalogue spreads are always valid");
        print_reading(&reading);
    }

    let reading = draw(
        DrawRequest::new(3)
            .with_seed(2024)
            .with_question("Should I change my career?"),
    )
    .expect("three-card spread is valid");
    let record = to_record(&reading);

    println!("{}", record.to_json_pretty().expect("record serialises"));
    println!();
    println!("{}", build_prompt(&record));
    println!();

    let offline = |_: &str| -> Result<String, InterpretError> {
        Err(InterpretError::Unavailable("no interpretation service configured".into()))
    };
    let interpretation = interpret_reading(&record, &offline);
    println!("interpretation error: {}", interpretation.error.unwrap_or_default());
}
