//! Variant selection strategies.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::config::{Config, ResolutionPolicy};
use crate::download::m3u8::PlaylistVariant;
use crate::error::{Error, Result};

/// Chooses which variant of a master playlist to download.
pub trait ResolutionSelector {
    /// Return the index into `variants` of the chosen variant.
    fn select(&mut self, variants: &[PlaylistVariant]) -> Result<usize>;
}

/// Picks the smallest or largest width without asking.
#[derive(Debug, Clone, Copy)]
pub struct AutomaticSelector {
    policy: ResolutionPolicy,
}

impl AutomaticSelector {
    pub fn new(policy: ResolutionPolicy) -> Self {
        Self { policy }
    }
}

impl ResolutionSelector for AutomaticSelector {
    fn select(&mut self, variants: &[PlaylistVariant]) -> Result<usize> {
        // Ties go to the variant listed last.
        let chosen = match self.policy {
            ResolutionPolicy::Max => {
                tracing::info!("Selecting highest resolution");
                variants
                    .iter()
                    .enumerate()
                    .max_by_key(|(_, v)| v.resolution_width)
            }
            ResolutionPolicy::Min => {
                tracing::info!("Selecting lowest resolution");
                variants
                    .iter()
                    .enumerate()
                    .rev()
                    .min_by_key(|(_, v)| v.resolution_width)
            }
        };

        chosen
            .map(|(index, _)| index)
            .ok_or_else(|| Error::Selection("no variants to choose from".into()))
    }
}

/// Lists the variants and reads the chosen index from `input`.
pub struct InteractiveSelector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl InteractiveSelector<StdinLock<'static>, Stdout> {
    /// Selector prompting on the terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ResolutionSelector for InteractiveSelector<R, W> {
    fn select(&mut self, variants: &[PlaylistVariant]) -> Result<usize> {
        if variants.is_empty() {
            return Err(Error::Selection("no variants to choose from".into()));
        }

        writeln!(self.output, "---------------------------")?;
        for (index, variant) in variants.iter().enumerate() {
            writeln!(
                self.output,
                "{}) : {}x{} ({} kbit/s)",
                index,
                variant.resolution_width,
                variant.resolution_height,
                variant.bandwidth / 1000
            )?;
        }

        let mut line = String::new();
        loop {
            write!(self.output, "Select resolution: ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::Selection(
                    "input closed before a resolution was chosen".into(),
                ));
            }

            match parse_index(line.trim()) {
                Some(index) if index < variants.len() => return Ok(index),
                _ => {
                    tracing::warn!("Invalid resolution '{}', try again", line.trim());
                    writeln!(self.output, "Invalid resolution, try again.")?;
                }
            }
        }
    }
}

/// Parse a plain run of ASCII digits; signs and other characters are rejected.
fn parse_index(input: &str) -> Option<usize> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

/// Build the selector the configuration asks for.
pub fn selector_for(config: &Config) -> Box<dyn ResolutionSelector> {
    match config.resolution {
        Some(policy) => Box::new(AutomaticSelector::new(policy)),
        None => Box::new(InteractiveSelector::stdio()),
    }
}
