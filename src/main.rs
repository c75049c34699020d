//! CLI skipdict
//!
//! Печатает слова текста, которых нет в словаре. Словарь загружается в
//! SkipList с регистронезависимым компаратором.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter},
    num::NonZeroUsize,
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use skipdict::{find_errors, init_logging, FinderOptions, LoadPolicy, LogFormat, Settings};
use tracing::debug;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SKIPDICT_GIT_COMMIT"),
    ", built ",
    env!("SKIPDICT_BUILD_DATE"),
    ")"
);

/// Аргументы командной строки.
///
/// Переменные окружения `SKIPDICT_*` задают значения по умолчанию для
/// опций; явные флаги имеют приоритет.
#[derive(Parser, Debug)]
#[command(name = "skipdict")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Reports the words of a text that are missing from a dictionary", long_about = None)]
struct Cli {
    /// Файл словаря: одно слово на строку
    #[arg(help = "Dictionary file, one word per line")]
    dictionary: PathBuf,
    /// Проверяемый текст
    #[arg(help = "Text file to check")]
    input: PathBuf,
    /// Максимальная высота башни SkipList
    #[arg(help = "Maximum skip list tower height (positive integer)")]
    max_height: NonZeroUsize,
    #[arg(long, help = "Seed for the level generator (default: SKIPDICT_SEED or OS entropy)")]
    seed: Option<u64>,
    #[arg(long, help = "Fail on empty dictionary lines instead of skipping them")]
    strict: bool,
    #[arg(long, help = "Print skip list level statistics to stderr")]
    stats: bool,
    #[arg(short, long, conflicts_with = "quiet", help = "Enable debug logging")]
    verbose: bool,
    #[arg(short, long, help = "Only log errors")]
    quiet: bool,
    #[arg(long, value_enum, help = "Log output format")]
    log_format: Option<LogFormat>,
    #[arg(long, help = "Also write logs to this file")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load().context("Unable to load settings from the environment")?;

    let mut logging = settings.logging_config();
    if cli.verbose {
        logging.level = "debug".into();
    } else if cli.quiet {
        logging.level = "error".into();
    }
    if let Some(format) = cli.log_format {
        logging.format = format;
    }
    if let Some(path) = &cli.log_file {
        logging.file = Some(path.clone());
    }
    let log_handle = init_logging(logging).context("Unable to initialize logging")?;

    let options = FinderOptions {
        max_height: cli.max_height.get(),
        seed: cli.seed.or(settings.seed),
        policy: if cli.strict {
            LoadPolicy::Reject
        } else {
            settings.load_policy()
        },
    };
    debug!(?options, "Starting check");

    let dict = File::open(&cli.dictionary).with_context(|| {
        format!(
            "Unable to open the dictionary file {}",
            cli.dictionary.display()
        )
    })?;
    let input = File::open(&cli.input)
        .with_context(|| format!("Unable to open the input file {}", cli.input.display()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let report = find_errors(
        BufReader::new(dict),
        BufReader::new(input),
        &options,
        &mut out,
    )
    .context("Spell check failed")?;

    if cli.stats {
        eprint!("{}", report.statistics.format_report());
    }

    log_handle.shutdown();

    Ok(())
}
