use crate::cloud::{self, CloudEntry, Renderer};
use crate::config::Settings;
use crate::core::counter::count_words;
use crate::core::report::{longest_words, top_words, Report};
use crate::core::types::{FrequencyTable, WordCount};
use crate::error::{Result, StatsError};
use crate::persistence::save_to_disk;
use rand::Rng;
use std::path::Path;

// A finished frequency table plus the settings every query reads from.
// The table is never modified after construction.
pub struct WordStats {
    table: FrequencyTable,
    settings: Settings,
}

impl WordStats {
    pub fn new(table: FrequencyTable, settings: Settings) -> Self {
        Self { table, settings }
    }

    pub fn from_file(path: &Path, settings: Settings) -> Result<Self> {
        let table = count_words(path)?;
        Ok(Self::new(table, settings))
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn longest_words(&self) -> Result<Vec<&str>> {
        longest_words(&self.table)
    }

    pub fn top_words(&self, n: usize) -> Vec<(&str, WordCount)> {
        top_words(&self.table, n)
    }

    /// The report with `top_n` taken from the settings.
    pub fn report(&self) -> Result<Report> {
        Report::build(&self.table, self.settings.top_n)
    }

    pub fn export(&self, path: &Path) -> Result<()> {
        save_to_disk(&self.table, path)
    }

    pub fn cloud<R: Rng + ?Sized>(&self, min_length: usize, rng: &mut R) -> Result<Vec<CloudEntry>> {
        cloud::layout(&self.table, &self.settings.cloud, min_length, rng)
    }

    /// Lays out the cloud and hands it to `renderer`. Blocks for as long
    /// as the renderer's `show` does.
    pub fn draw_cloud<R, D>(&self, min_length: usize, rng: &mut R, renderer: &mut D) -> Result<()>
    where
        R: Rng + ?Sized,
        D: Renderer + ?Sized,
    {
        let entries = self.cloud(min_length, rng)?;
        cloud::draw(&entries, renderer).map_err(StatsError::Render)
    }
}
