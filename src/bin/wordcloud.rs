// Counts a file and goes straight to the word cloud.
// Run with: cargo run --bin wordcloud -- <file>
use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use wordstats_core::cli::{finish, init_tracing};
use wordstats_core::cloud::{color_rng, TerminalRenderer};
use wordstats_core::{Settings, WordStats};

#[derive(Debug, Parser)]
#[command(name = "wordcloud", version, about = "Show the most common words of a text file as a cloud")]
struct Args {
    input: PathBuf,

    /// Shortest word allowed in the cloud.
    #[arg(long)]
    min_length: Option<usize>,

    /// Seed for the label colors.
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_tracing();
    finish(run(Args::parse()), &mut io::stderr())
}

fn run(args: Args) -> Result<()> {
    let settings = Settings::load(args.config.as_deref())?;
    let min_length = args.min_length.unwrap_or(settings.cloud.min_length);

    let stats = WordStats::from_file(&args.input, settings)
        .with_context(|| format!("counting words in '{}'", args.input.display()))?;
    let cloud = &stats.settings().cloud;
    let mut renderer = TerminalRenderer::new(&cloud.title, cloud.max_font_size);
    stats.draw_cloud(min_length, &mut color_rng(args.seed), &mut renderer)?;
    Ok(())
}
