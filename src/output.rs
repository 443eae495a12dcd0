//! Output formatting for puns.

use serde::{Deserialize, Serialize};

use crate::error::SpookifyResult;
use crate::pun::PunOutcome;

/// How a [`PunOutcome`] is printed.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Just the punned phrase.
    #[default]
    Human,
    /// One JSON object per phrase, with per-token detail.
    Json,
}

/// Render `outcome` as a single line.
pub fn render(outcome: &PunOutcome, format: OutputFormat) -> SpookifyResult<String> {
    match format {
        OutputFormat::Human => Ok(outcome.output.clone()),
        OutputFormat::Json => Ok(serde_json::to_string(outcome)?),
    }
}
