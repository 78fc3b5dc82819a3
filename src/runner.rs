// src/runner.rs
//
// Pipeline driver: normalize → save → repair packs → save again.

use std::path::PathBuf;

use crate::{
    card::Card,
    config::options::{PipelineOptions, RunMode},
    core::net::HttpFetcher,
    error::Result,
    lookup::{CatalogLookup, LimitlessCatalog},
    normalize,
    progress::Progress,
    registry::SetRegistry,
    resolve::{self, PackChange},
    store,
};

/// What a run produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub cards: usize,
    pub changes: Vec<PackChange>,
    pub unresolved: Vec<String>,
    pub output: PathBuf,
}

/// Run against the live catalog.
pub fn run_online(
    opts: &PipelineOptions,
    progress: Option<&mut dyn Progress>,
) -> std::result::Result<RunSummary, Box<dyn std::error::Error + Send + Sync>> {
    let registry = SetRegistry::builtin();
    let fetcher = HttpFetcher::new(opts.timeout)?;
    let catalog = LimitlessCatalog::new(fetcher, &registry, opts.base_url.as_str());
    Ok(run(opts, &registry, &catalog, progress)?)
}

/// Top-level runner. Any load, normalize or save failure aborts the run;
/// lookup failures only leave single cards unresolved.
pub fn run(
    opts: &PipelineOptions,
    registry: &SetRegistry,
    catalog: &dyn CatalogLookup,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let mut say = |msg: &str| {
        logf!("Run: {msg}");
        if let Some(p) = progress.as_deref_mut() { p.log(msg); }
    };

    let mut cards: Vec<Card> = match opts.mode {
        RunMode::ResolveOnly => {
            say(&format!("Reading cards from {}", opts.resolve_source().display()));
            store::load_cards(opts.resolve_source())?
        }
        RunMode::Full | RunMode::NormalizeOnly => {
            say(&format!("Reading raw cards from {}", opts.input.display()));
            let raws = store::load_raw(&opts.input)?;

            say(&format!("Formatting {} cards", raws.len()));
            let cards = normalize::normalize_all(&raws, registry)?;

            say(&format!("Saving formatted cards to {}", opts.output.display()));
            store::save_cards(&opts.output, &cards)?;
            cards
        }
    };

    let mut summary = RunSummary {
        cards: cards.len(),
        output: opts.output.clone(),
        ..RunSummary::default()
    };

    if opts.mode == RunMode::NormalizeOnly {
        return Ok(summary);
    }

    say("Correcting placeholder packs from the catalog");
    let report = resolve::resolve_ambiguous(&mut cards, catalog, opts.pause, progress.as_mut().map(|p| &mut **p as &mut dyn Progress));

    store::save_cards(&opts.output, &cards)?;
    logf!(
        "Run: saved {} → {} changed, {} unresolved",
        opts.output.display(),
        report.resolved_count(),
        report.unresolved.len()
    );

    summary.changes = report.changes;
    summary.unresolved = report.unresolved;
    Ok(summary)
}
