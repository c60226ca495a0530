use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use wordstats_core::cli::{finish, init_tracing};
use wordstats_core::cloud::{color_rng, TerminalRenderer};
use wordstats_core::prompt::{ask, ask_existing_path, FILE_PROMPT};
use wordstats_core::{Settings, WordStats};

/// Longest words, most common words and an alphabetical word count of a
/// text file.
#[derive(Debug, Parser)]
#[command(name = "wordstats", version)]
struct Args {
    /// Text file to analyse. Asked for interactively when omitted.
    input: Option<PathBuf>,

    /// Where to write the `word:count` export. Asked for when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of most common words to list.
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Print the report as JSON. Needs `--output` so no prompt mixes
    /// with the JSON on stdout.
    #[arg(long, requires = "output")]
    json: bool,

    /// Show the word cloud after exporting.
    #[arg(long)]
    cloud: bool,

    /// Shortest word allowed in the cloud.
    #[arg(long)]
    min_length: Option<usize>,

    /// Seed for the cloud colors.
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
    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(n) = args.top {
        settings.top_n = n;
    }
    if let Some(min_length) = args.min_length {
        settings.cloud.min_length = min_length;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let source = match args.input {
        Some(path) => path,
        None => ask_existing_path(&mut input, &mut stdout, FILE_PROMPT, settings.retries)?,
    };
    let stats = WordStats::from_file(&source, settings)
        .with_context(|| format!("counting words in '{}'", source.display()))?;

    let report = stats.report()?;
    if args.json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write!(stdout, "{report}")?;
    }

    let destination = match args.output {
        Some(path) => path,
        None => {
            let prompt = format!("Now write data to a file\n{FILE_PROMPT}");
            PathBuf::from(ask(&mut input, &mut stdout, &prompt)?)
        }
    };
    stats.export(&destination)?;

    if args.cloud {
        let cloud = &stats.settings().cloud;
        let mut renderer = TerminalRenderer::new(&cloud.title, cloud.max_font_size);
        stats.draw_cloud(cloud.min_length, &mut color_rng(args.seed), &mut renderer)?;
    }
    Ok(())
}
