// src/cli.rs
use std::{env, path::PathBuf, time::Duration};

use crate::config::options::{PipelineOptions, RunMode};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

pub type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub fn run() -> CliResult<()> {
    let Some(opts) = parse_args(env::args().skip(1))? else {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    };

    let mut progress = CliProgress::default();
    let summary = runner::run_online(&opts, Some(&mut progress))?;
    print_summary(&opts, &summary);
    Ok(())
}

/// Parse flags into options. `Ok(None)` means help was requested.
pub fn parse_args<I>(args: I) -> CliResult<Option<PipelineOptions>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = PipelineOptions::default();
    let mut args = args.into_iter();
    let mut input_set = false;

    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => {
                opts.input = PathBuf::from(args.next().ok_or("Missing input path")?);
                input_set = true;
            }
            "-o" | "--out" => opts.output = PathBuf::from(args.next().ok_or("Missing output path")?),
            "--base-url" => opts.base_url = args.next().ok_or("Missing value for --base-url")?,
            "--timeout" => {
                let secs: u64 = args.next().ok_or("Missing value for --timeout")?.parse()?;
                if secs == 0 { return Err("Timeout must be at least 1 second".into()); }
                opts.timeout = Duration::from_secs(secs);
            }
            "--pause-ms" => {
                let ms: u64 = args.next().ok_or("Missing value for --pause-ms")?.parse()?;
                opts.pause = Duration::from_millis(ms);
            }
            "--normalize-only" => opts.mode = pick_mode(opts.mode, RunMode::NormalizeOnly)?,
            "--resolve-only" => opts.mode = pick_mode(opts.mode, RunMode::ResolveOnly)?,
            "-h" | "--help" => return Ok(None),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    // Repair-only runs read the canonical file unless told otherwise.
    if opts.mode == RunMode::ResolveOnly && !input_set {
        opts.input = opts.output.clone();
    }
    Ok(Some(opts))
}

fn pick_mode(current: RunMode, wanted: RunMode) -> CliResult<RunMode> {
    if current != RunMode::Full && current != wanted {
        return Err("--normalize-only and --resolve-only are exclusive".into());
    }
    Ok(wanted)
}

fn print_summary(opts: &PipelineOptions, s: &RunSummary) {
    println!("Final file saved to: {}", s.output.display());
    if opts.mode == RunMode::NormalizeOnly {
        println!("{} cards formatted (packs not corrected).", s.cards);
        return;
    }
    println!("{} cards, {} packs corrected.", s.cards, s.changes.len());
    if s.unresolved.is_empty() {
        println!("All packs were corrected successfully.");
    } else {
        println!("Cards still without a pack (manual adjustment needed):");
        for id in &s.unresolved {
            println!("- {id}");
        }
    }
}

/// Prints progress lines to stderr so stdout stays the summary.
#[derive(Default)]
pub struct CliProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("{total} cards need a pack lookup");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, _card_id: &str) {
        self.done += 1;
    }
    fn item_failed(&mut self, card_id: &str) {
        self.failed += 1;
        eprintln!("Could not resolve {card_id} ({}/{})", self.done + self.failed, self.total);
    }
    fn finish(&mut self) {
        eprintln!("Lookups done: {} resolved, {} failed", self.done, self.failed);
    }
}
