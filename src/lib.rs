// src/lib.rs

pub mod cli;
pub mod cloud;
pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod prompt;

pub use crate::config::Settings;
pub use crate::core::engine::WordStats;
pub use crate::core::types::{FrequencyTable, WordCount};
pub use crate::error::StatsError;
