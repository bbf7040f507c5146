//! Output formatting for CLI recognition results.

use serde::Serialize;

use crate::recognize::RankedDigit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {s}. Use 'text' or 'json'.")),
        }
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    prediction: u8,
    confidence: f32,
    ranking: &'a [RankedDigit],
}

pub fn print_report(ranking: &[RankedDigit], format: OutputFormat) {
    match format {
        OutputFormat::Text => print!("{}", render_text(ranking)),
        OutputFormat::Json => println!("{}", render_json(ranking)),
    }
}

pub fn render_text(ranking: &[RankedDigit]) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "=".repeat(40)));
    out.push_str("RECOGNITION RESULT\n");
    out.push_str(&format!("{}\n\n", "=".repeat(40)));

    for entry in ranking {
        out.push_str(&format!("  {}\n", entry.display_line()));
    }

    if let Some(top) = ranking.first() {
        out.push_str(&format!(
            "\nPREDICTION: {} ({:.2}% confidence)\n",
            top.digit,
            top.probability * 100.0
        ));
    }
    out.push_str(&format!("{}\n", "=".repeat(40)));
    out
}

pub fn render_json(ranking: &[RankedDigit]) -> String {
    let top = ranking.first();
    let report = Report {
        prediction: top.map(|t| t.digit).unwrap_or(0),
        confidence: top.map(|t| t.probability).unwrap_or(0.0),
        ranking,
    };
    serde_json::to_string_pretty(&report).unwrap_or_default()
}
