use crate::domain::ProgrammerSnapshot;
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Both programmers as they looked right after one step of the demo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepOutcome {
    pub step: usize,
    /// None for the state printed right after cloning.
    pub banner: Option<String>,
    pub original: ProgrammerSnapshot,
    pub clone: ProgrammerSnapshot,
    /// Whether the clone no longer matches what it looked like when it was made.
    pub clone_changed: bool,
}

pub fn render_step<W: Write>(
    out: &mut W,
    format: OutputFormat,
    outcome: &StepOutcome,
) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(out, outcome),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, outcome)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn render_text<W: Write>(out: &mut W, outcome: &StepOutcome) -> Result<()> {
    if let Some(banner) = &outcome.banner {
        writeln!(out, "--------- {} ---------", banner)?;
    }
    writeln!(out, "Original programmer :")?;
    write!(out, "{}", outcome.original)?;
    writeln!(out, "Clone of programmer :")?;
    write!(out, "{}", outcome.clone)?;
    writeln!(out)?;
    Ok(())
}
