use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tarot_draw::{
    build_prompt, draw, get_spread_by_id, list_spreads, logging, to_record, DrawResult,
    EngineConfig,
};

/// Draw a tarot reading and print it as JSON.
#[derive(Parser, Debug)]
#[command(name = "tarot", version, about)]
struct Cli {
    /// Number of cards: 1, 3, 5 or 10
    #[arg(short, long, conflicts_with = "spread_id")]
    spread: Option<usize>,

    /// Spread by id: single, three_card, five_card, celtic_cross
    #[arg(long)]
    spread_id: Option<String>,

    /// Chance in [0, 1] that each card is reversed
    #[arg(short, long)]
    reversed_probability: Option<f64>,

    /// Seed for a reproducible reading
    #[arg(long)]
    seed: Option<u64>,

    /// Text hashed into a seed, e.g. a user id
    #[arg(long, conflicts_with = "seed")]
    text_seed: Option<String>,

    /// Question passed through to the interpretation prompt
    #[arg(short, long)]
    question: Option<String>,

    /// TOML file with engine defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also print the interpretation prompt
    #[arg(long)]
    prompt: bool,

    /// List the available spreads and exit
    #[arg(long)]
    list_spreads: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> DrawResult<()> {
    if cli.list_spreads {
        for spread in list_spreads() {
            let labels: Vec<&str> = spread.positions.iter().map(|p| p.label).collect();
            println!("{:<13} {:>2}  {}", spread.id, spread.size, labels.join(" / "));
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    tracing::debug!(?config, "engine config");

    let mut request = config.request();
    if let Some(id) = &cli.spread_id {
        request.spread_size = get_spread_by_id(id)?.size;
    }
    if let Some(size) = cli.spread {
        request.spread_size = size;
    }
    if let Some(p) = cli.reversed_probability {
        request.reversed_probability = p;
    }
    request.rng_seed = cli.seed;
    if let Some(text) = &cli.text_seed {
        request = request.with_text_seed(text);
    }
    request.question = cli.question;

    let record = to_record(&draw(request)?);
    println!("{}", record.to_json_pretty()?);

    if cli.prompt {
        println!();
        println!("{}", build_prompt(&record));
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, user_error = e.is_user_error(), "draw failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
