use std::fmt::Write as _;

use camino::Utf8Path;
use clap::ValueEnum;
use color_eyre::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub reference: &'a Utf8Path,
    pub candidate: &'a Utf8Path,
    /// Non-finite scores serialize to `null` in JSON.
    pub ssim: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar: Option<bool>,
}

impl Report<'_> {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => {
                let mut out = format!("Index Value = {:.6}", self.ssim);
                if let Some(similar) = self.similar {
                    let verdict = if similar { "yes" } else { "no" };
                    write!(out, "\nSimilar = {verdict}")?;
                }
                Ok(out)
            }
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}
