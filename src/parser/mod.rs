pub mod blocks;
pub mod defs;

use std::collections::BTreeMap;

use indicatif::ProgressBar;
use scraper::Html;
use tracing::{debug, info};

use crate::input::RawEntry;
use defs::extract_defs;

/// Lower-cased headword → definitional text. Keys iterate in sorted order
/// and no value is ever an empty list.
pub type CleanDictionary = BTreeMap<String, Vec<String>>;

/// Counts from one transform pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransformStats {
    pub entries: usize,
    pub kept: usize,
    pub skipped: usize,
    pub collisions: usize,
}

/// Parse one entry's markup. The HTML5 algorithm never rejects input: stray
/// end tags are dropped and open elements are closed at the end.
pub fn parse_fragment(fragment: &str) -> Html {
    Html::parse_document(fragment)
}

/// Two-pass pipeline per entry: markup → tree → defs, keeping only entries
/// that produced at least one string.
pub fn transform(entries: &[RawEntry]) -> CleanDictionary {
    transform_with_progress(entries, &ProgressBar::hidden()).0
}

pub fn transform_with_progress(
    entries: &[RawEntry],
    pb: &ProgressBar,
) -> (CleanDictionary, TransformStats) {
    let mut clean = CleanDictionary::new();
    let mut stats = TransformStats {
        entries: entries.len(),
        ..TransformStats::default()
    };

    for entry in entries {
        let document = parse_fragment(&entry.html);
        let defs = extract_defs(&document);
        pb.inc(1);

        if defs.is_empty() {
            debug!(headword = %entry.headword, "no definitional blocks, skipping");
            stats.skipped += 1;
            continue;
        }

        let key = entry.headword.to_lowercase();
        if clean.insert(key, defs).is_some() {
            debug!(headword = %entry.headword, "replaces an earlier entry with the same lower-cased key");
            stats.collisions += 1;
        }
        stats.kept += 1;
    }

    info!(
        entries = stats.entries,
        kept = stats.kept,
        skipped = stats.skipped,
        collisions = stats.collisions,
        "transform finished"
    );

    (clean, stats)
}
