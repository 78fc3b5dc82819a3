// src/gui/actions.rs
//
// Long-running work started from the action bar. The pipeline runs on one
// background thread (it stays sequential inside); the UI polls the handle.

use std::{thread, time::Duration};

use eframe::egui;

use crate::{gui::app::App, gui::progress::GuiProgress, runner};

pub fn start_pipeline(app: &mut App) {
    if app.running() {
        return;
    }
    let opts = app.state.pipeline.clone();
    let status = app.status.clone();

    logf!("Pipeline: Begin input={} output={}", opts.input.display(), opts.output.display());
    app.status("Running pipeline…");

    app.job = Some(thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        runner::run_online(&opts, Some(&mut prog)).map_err(|e| e.to_string())
    }));
}

pub fn poll_pipeline(app: &mut App, ctx: &egui::Context) {
    let finished = app.job.as_ref().is_some_and(|h| h.is_finished());
    if !finished {
        if app.running() {
            ctx.request_repaint_after(Duration::from_millis(200));
        }
        return;
    }
    let Some(handle) = app.job.take() else { return };

    match handle.join() {
        Ok(Ok(summary)) => {
            logf!(
                "Pipeline: OK cards={} changed={} unresolved={}",
                summary.cards, summary.changes.len(), summary.unresolved.len()
            );
            // Browse what was just written.
            app.state.browser.data = summary.output.clone();
            app.reload();
            app.status(if summary.unresolved.is_empty() {
                format!("Done: {} cards, {} packs corrected", summary.cards, summary.changes.len())
            } else {
                format!(
                    "Done: {} packs corrected, {} need manual fix: {}",
                    summary.changes.len(),
                    summary.unresolved.len(),
                    summary.unresolved.join(", ")
                )
            });
        }
        Ok(Err(e)) => {
            loge!("Pipeline: Error: {e}");
            app.status(format!("Error: {e}"));
        }
        Err(_) => {
            loge!("Pipeline: worker panicked");
            app.status("Error: pipeline thread panicked");
        }
    }
}
