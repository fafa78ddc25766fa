// src/runner.rs
//
// One watch run: fetch -> normalize -> diff -> notify -> persist.

use std::path::Path;

use crate::catalog::{CatalogSource, RawCard};
use crate::categories::{self, CategoryContext};
use crate::config::consts::MAIL_SUBJECT;
use crate::detect::detect_changes;
use crate::digest::format_digest;
use crate::error::Result;
use crate::mail::Notifier;
use crate::progress::Progress;
use crate::snapshot::Snapshot;
use crate::store;

/// What a completed run amounted to, for the one-line summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// First run against this state file; snapshot saved, nothing compared.
    BaselineSaved { items: usize },
    NoChanges,
    AlertsSent(usize),
}

impl RunOutcome {
    pub fn summary(&self) -> String {
        match self {
            RunOutcome::BaselineSaved { items } => {
                format!("Saved initial snapshot ({items} items). No alerts sent on the first run.")
            }
            RunOutcome::NoChanges => s!("No changes detected."),
            RunOutcome::AlertsSent(n) => format!("Sent {n} alert(s)."),
        }
    }
}

/// Fetch every watched category once, sequentially. The shop imposes
/// unspecified rate limits, so there is no parallel fan-out. A category
/// that fails to fetch or parse contributes zero cards and never aborts
/// the run.
pub fn collect_cards(
    source: &dyn CatalogSource,
    category_ids: &[u32],
    progress: &mut dyn Progress,
) -> Vec<(RawCard, CategoryContext)> {
    progress.begin(category_ids.len());
    let mut out = Vec::new();
    for &id in category_ids {
        let ctx = categories::context_for(id);
        match source.product_cards(id) {
            Ok(cards) => {
                progress.category_done(id, cards.len());
                for card in cards {
                    out.push((card, ctx.clone()));
                }
            }
            Err(e) => {
                loge!("category {id}: {e}");
                progress.log(&format!("Failed to fetch category {id}: {e}"));
                progress.category_done(id, 0);
            }
        }
    }
    out
}

/// Run the whole pipeline once.
///
/// The fresh snapshot is persisted on every path, including a failed mail
/// dispatch, so one transition never alerts twice. A dispatch failure is
/// returned after persistence.
pub fn run(
    source: &dyn CatalogSource,
    notifier: &dyn Notifier,
    state_path: &Path,
    category_ids: &[u32],
    progress: &mut dyn Progress,
) -> Result<RunOutcome> {
    let cards = collect_cards(source, category_ids, progress);
    let current = Snapshot::from_cards(cards.iter().map(|(card, ctx)| (card, ctx)));
    let previous = store::load_snapshot(state_path)?;

    if previous.is_empty() {
        store::save_snapshot(state_path, &current)?;
        logf!("baseline saved: {} items", current.len());
        return Ok(RunOutcome::BaselineSaved { items: current.len() });
    }

    let changes = detect_changes(&previous, &current);
    if changes.is_empty() {
        store::save_snapshot(state_path, &current)?;
        return Ok(RunOutcome::NoChanges);
    }

    let body = format_digest(&changes);
    let sent = notifier.send(MAIL_SUBJECT, &body);

    // Persist before reporting a dispatch failure; the new snapshot must
    // become the next baseline either way.
    store::save_snapshot(state_path, &current)?;

    match sent {
        Ok(()) => {
            logf!("sent {} alert(s)", changes.len());
            Ok(RunOutcome::AlertsSent(changes.len()))
        }
        Err(e) => {
            loge!("mail dispatch failed: {e}");
            Err(e)
        }
    }
}
