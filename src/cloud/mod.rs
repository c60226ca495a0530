// File: src/cloud/mod.rs
pub mod terminal;

use crate::config::CloudSettings;
use crate::core::types::{word_length, FrequencyTable, WordCount};
use crate::error::{Result, StatsError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

pub use terminal::TerminalRenderer;

/// A 12-bit `#rgb` color, one hex digit per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor(u16);

impl HexColor {
    /// Lowest code with three hex digits. Anything below would print as `#ff`.
    pub const MIN: u16 = 0x100;
    pub const MAX: u16 = 0xfff;

    pub fn new(code: u16) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&code).then_some(Self(code))
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(Self::MIN..=Self::MAX))
    }

    pub fn code(self) -> u16 {
        self.0
    }

    /// Each 4-bit channel widened to 8 bits (`0xa` -> `0xaa`).
    pub fn rgb(self) -> (u8, u8, u8) {
        let channel = |shift: u16| ((self.0 >> shift) & 0xf) as u8 * 17;
        (channel(8), channel(4), channel(0))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:x}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CloudEntry {
    pub word: String,
    pub count: WordCount,
    pub font_size: u32,
    pub color: HexColor,
    pub row: usize,
    pub column: usize,
}

/// Something that can show labels on a grid. `show` may block until the
/// user dismisses the output.
pub trait Renderer {
    fn place(&mut self, word: &str, size: u32, color: HexColor, row: usize, column: usize) -> std::io::Result<()>;
    fn show(&mut self) -> std::io::Result<()>;
}

/// Picks the most frequent words of at least `min_length` characters and
/// assigns each a grid cell, a size relative to the top count and a color.
pub fn layout<R: Rng + ?Sized>(
    table: &FrequencyTable,
    settings: &CloudSettings,
    min_length: usize,
    rng: &mut R,
) -> Result<Vec<CloudEntry>> {
    let mut candidates: Vec<(&str, WordCount)> = table
        .ranking()
        .into_iter()
        .filter(|(word, _)| word_length(word) >= min_length)
        .collect();

    // ranking is sorted, so the first survivor holds the maximum
    let max_count = candidates
        .first()
        .map(|&(_, count)| count)
        .ok_or(StatsError::EmptyInput("no words long enough for the cloud"))?;
    let ratio = f64::from(settings.max_font_size) / max_count as f64;
    let rows = settings.rows.max(1);

    candidates.truncate(settings.max_words);
    let entries: Vec<CloudEntry> = candidates
        .into_iter()
        .enumerate()
        .map(|(index, (word, count))| CloudEntry {
            word: word.to_string(),
            count,
            font_size: (count as f64 * ratio).round() as u32,
            color: HexColor::random(&mut *rng),
            row: index % rows,
            column: index / rows,
        })
        .collect();

    tracing::debug!(
        min_length,
        max_count,
        placed = entries.len(),
        "laid out word cloud"
    );
    Ok(entries)
}

/// Color source for the cloud: reproducible with a seed, fresh otherwise.
pub fn color_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Hands every entry to `renderer`, then shows the result.
pub fn draw<D: Renderer + ?Sized>(entries: &[CloudEntry], renderer: &mut D) -> std::io::Result<()> {
    for entry in entries {
        renderer.place(&entry.word, entry.font_size, entry.color, entry.row, entry.column)?;
    }
    renderer.show()
}
