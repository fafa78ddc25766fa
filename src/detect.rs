// src/detect.rs
//
// Change detection between two snapshots: restocks and price drops.

use crate::config::consts::SOLD_OUT;
use crate::snapshot::{Snapshot, SnapshotEntry};

/// One item that restocked or got cheaper since the previous run.
/// A single record covers both transitions when they coincide.
#[derive(Clone, Debug, PartialEq)]
pub struct ChangeRecord {
    pub key: String,
    pub previous: SnapshotEntry,
    pub current: SnapshotEntry,
}

/// Diff two snapshots under the restock / price-drop policy.
///
/// Walks `current` in insertion order with one `previous` lookup per key,
/// so the output order follows `current` and the result is a pure function
/// of the two inputs. Keys only in `previous` (delisted items) and keys
/// only in `current` (first sightings) are both silent: the first sighting
/// becomes baseline, it is not an event.
pub fn detect_changes(previous: &Snapshot, current: &Snapshot) -> Vec<ChangeRecord> {
    let mut changes = Vec::new();
    for (key, curr) in current.iter() {
        let Some(prev) = previous.get(key) else { continue };

        // An unknown current status counts as "no longer sold out".
        let restocked = prev.status.as_deref() == Some(SOLD_OUT)
            && curr.status.as_deref() != Some(SOLD_OUT);

        // Strict decrease with both sides known; absent is unknown, not zero.
        let price_drop = match (prev.price, curr.price) {
            (Some(before), Some(now)) => now < before,
            _ => false,
        };

        if restocked || price_drop {
            changes.push(ChangeRecord {
                key: s!(key),
                previous: prev.clone(),
                current: curr.clone(),
            });
        }
    }
    changes
}
