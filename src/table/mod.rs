//! The built-in replacement table.
//!
//! Pages live under `<lang>/<page>.html` relative to the project root. Only
//! the landing, about, and principles pages are listed; contact and legal
//! pages are left alone.

mod about;
mod index;
mod principles;

use serde::Serialize;
use std::collections::HashSet;
use tracing::warn;

use crate::error::{SiteCopyError, SiteCopyResult};
use crate::file::search_replace::{duplicate_labels, find_overlaps, FileTarget, ReplacementRule};

fn rule(old: &str, new: &str, label: &str) -> ReplacementRule {
    ReplacementRule::new(old, new, label)
}

/// Ordered list of target pages with their rules. Built once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplacementTable {
    pub targets: Vec<FileTarget>,
}

impl ReplacementTable {
    pub fn new(targets: Vec<FileTarget>) -> Self {
        Self { targets }
    }

    /// The site's current copy update
    pub fn builtin() -> Self {
        let mut targets = index::targets();
        targets.extend(about::targets());
        targets.extend(principles::targets());
        Self { targets }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn rule_count(&self) -> usize {
        self.targets.iter().map(|t| t.rules.len()).sum()
    }

    /// Target paths, each followed by its rule labels indented four spaces
    pub fn listing_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.len() + self.rule_count());
        for target in &self.targets {
            lines.push(target.path().display().to_string());
            lines.extend(target.labels().map(|label| format!("    {}", label)));
        }
        lines
    }

    /// Rejects duplicate target paths, duplicate labels within a target,
    /// and rules with an empty search text.
    pub fn validate(&self) -> SiteCopyResult<()> {
        let mut paths = HashSet::new();

        for target in &self.targets {
            if !paths.insert(target.path()) {
                return Err(SiteCopyError::invalid_table(format!(
                    "{} is listed more than once",
                    target.path().display()
                )));
            }

            if let Some(label) = duplicate_labels(&target.rules).first() {
                return Err(SiteCopyError::invalid_table(format!(
                    "label {} is used more than once in {}",
                    label,
                    target.path().display()
                )));
            }

            if let Some(empty) = target.rules.iter().find(|r| r.old.is_empty()) {
                return Err(SiteCopyError::invalid_table(format!(
                    "rule {} in {} has empty search text",
                    empty.label,
                    target.path().display()
                )));
            }
        }

        Ok(())
    }

    /// Logs a warning for every rule whose replacement contains another
    /// rule's search text. Returns how many were found.
    pub fn warn_overlaps(&self) -> usize {
        let mut count = 0;
        for target in &self.targets {
            for overlap in find_overlaps(&target.rules) {
                warn!(
                    path = %target.path().display(),
                    producer = %overlap.producer,
                    consumer = %overlap.consumer,
                    same_pass = overlap.same_pass(&target.rules),
                    "Replacement text contains another rule's search text"
                );
                count += 1;
            }
        }
        count
    }
}
