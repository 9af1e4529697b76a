//! Hand-off to the external interpretation layer.
//!
//! The engine never talks to a text-generation service itself. This module
//! turns a [`ReadingRecord`] into the prompt text such a service expects,
//! defines the [`Interpreter`] seam a caller plugs its client into, and maps
//! card slugs to image asset paths for presentation layers.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::tarot_engine::record::ReadingRecord;

/// Shown when the service answers with nothing but whitespace.
pub const EMPTY_RESPONSE_FALLBACK: &str = "The reader offered no interpretation for this spread.";

const BASE_PROMPT: &str = "### ROLE
You are a tarot master.

### TASK
Based on the user's question or life concern, and the cards drawn, provide a professional interpretation for each card to guide the user.

### OUTPUT
Give a short explanation for each card, followed by a final section with divination advice. Keep the summary concise and highlight the key points. Respond in the same language the user used.
";

const STYLE_BLOCK: &str = "### STYLE
Be specific and address the user's concern first. Write 2-4 sentences per card. Conclude with 3 actionable suggestions.";

#[derive(Debug, Error)]
pub enum InterpretError {
    /// The service could not be reached or is not configured.
    #[error("interpreter unavailable: {0}")]
    Unavailable(String),

    /// The service answered with an error.
    #[error("interpreter failed: {message}")]
    Service { message: String },
}

/// A text-generation backend that turns a prompt into freeform text.
pub trait Interpreter {
    fn interpret(&self, prompt: &str) -> Result<String, InterpretError>;
}

impl<F> Interpreter for F
where
    F: Fn(&str) -> Result<String, InterpretError>,
{
    fn interpret(&self, prompt: &str) -> Result<String, InterpretError> {
        self(prompt)
    }
}

/// Outcome of one interpretation attempt. Exactly one of `response_text`
/// and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interpretation {
    pub prompt: String,
    pub response_text: Option<String>,
    pub error: Option<String>,
}

/// Build the prompt for a reading: fixed instructions, the question, one
/// line per card in position order, then style guidance.
pub fn build_prompt(record: &ReadingRecord) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(record.cards.len() + 6);
    lines.push("### INPUT".to_string());
    lines.push(format!("User's Question: {}", record.question().unwrap_or("(NONE)")));
    lines.push("Cards drawn (in order):".to_string());
    for c in &record.cards {
        lines.push(format!(
            "- {}. {} ({}) — {} — pos={}",
            c.index, c.name, c.slug, c.orientation, c.position
        ));
    }
    lines.push(String::new());
    lines.push(STYLE_BLOCK.to_string());

    format!("{}\n{}", BASE_PROMPT, lines.join("\n"))
}

/// Run `interpreter` over the reading. Service failures are captured in
/// the result rather than returned, so the reading itself is never lost.
pub fn interpret_reading(record: &ReadingRecord, interpreter: &dyn Interpreter) -> Interpretation {
    let prompt = build_prompt(record);
    match interpreter.interpret(&prompt) {
        Ok(text) => {
            let response_text = if text.trim().is_empty() {
                EMPTY_RESPONSE_FALLBACK.to_string()
            } else {
                text
            };
            Interpretation { prompt, response_text: Some(response_text), error: None }
        }
        Err(e) => {
            warn!(error = %e, "interpretation failed");
            Interpretation { prompt, response_text: None, error: Some(e.to_string()) }
        }
    }
}

/// Image path for a card: `{assets_dir}/{slug}.{ext}`. The file is not
/// checked for existence.
pub fn card_image_path(assets_dir: &Path, slug: &str, ext: &str) -> PathBuf {
    assets_dir.join(format!("{slug}.{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tarot_engine::{draw, models::DrawRequest, record::to_record};

    fn three_card(question: Option<&str>) -> ReadingRecord {
        let mut req = DrawRequest::new(3).with_seed(2024);
        if let Some(q) = question {
            req = req.with_question(q);
        }
        to_record(&draw(req).unwrap())
    }

    #[test]
    fn prompt_lists_every_card_in_order() {
        let record = three_card(Some("Should I change my career?"));
        let prompt = build_prompt(&record);

        assert!(prompt.starts_with("### ROLE"));
        assert!(prompt.contains("User's Question: Should I change my career?"));
        let mut last = 0;
        for c in &record.cards {
            let line = format!("- {}. {} ({}) — {} — pos={}", c.index, c.name, c.slug, c.orientation, c.position);
            let at = prompt.find(&line).unwrap_or_else(|| panic!("missing line: {line}"));
            assert!(at >= last, "cards out of order");
            last = at;
        }
        assert!(prompt.ends_with("3 actionable suggestions."));
    }

    #[test]
    fn prompt_marks_missing_question() {
        let prompt = build_prompt(&three_card(None));
        assert!(prompt.contains("User's Question: (NONE)"));
    }

    #[test]
    fn successful_interpretation() {
        let record = three_card(None);
        let echo = |p: &str| -> Result<String, InterpretError> { Ok(format!("{} chars", p.len())) };
        let out = interpret_reading(&record, &echo);
        assert_eq!(out.prompt, build_prompt(&record));
        assert!(out.response_text.unwrap().ends_with("chars"));
        assert!(out.error.is_none());
    }

    #[test]
    fn blank_response_gets_fallback() {
        let blank = |_: &str| -> Result<String, InterpretError> { Ok("  \n".into()) };
        let out = interpret_reading(&three_card(None), &blank);
        assert_eq!(out.response_text.as_deref(), Some(EMPTY_RESPONSE_FALLBACK));
    }

    #[test]
    fn failure_is_captured_not_returned() {
        let down = |_: &str| -> Result<String, InterpretError> {
            Err(InterpretError::Unavailable("no API token".into()))
        };
        let out = interpret_reading(&three_card(None), &down);
        assert!(out.response_text.is_none());
        assert_eq!(out.error.as_deref(), Some("interpreter unavailable: no API token"));
        assert!(!out.prompt.is_empty());
    }

    #[test]
    fn image_path_uses_slug_and_extension() {
        let p = card_image_path(Path::new("assets/cards"), "major_00_the_fool", "png");
        assert_eq!(p, Path::new("assets/cards/major_00_the_fool.png"));
    }
}
