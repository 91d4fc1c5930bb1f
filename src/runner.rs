use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::{RunConfig, RunMode};
use crate::diff::unified_page_diff;
use crate::error::SiteCopyResult;
use crate::file::operations::{read_page, write_page, LineEndings};
use crate::file::search_replace::{apply_replacements, FileTarget};
use crate::table::ReplacementTable;

/// Printed once when no page needed an edit
pub const NO_CHANGES_SUMMARY: &str = "No changes applied.";

/// What happened to one target page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileStatus {
    /// At least one rule matched
    Edited { labels: Vec<String> },
    /// Page exists but no rule matched
    Unchanged,
    /// Page does not exist under the root
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    /// Path as listed in the table, relative to the root
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

impl FileOutcome {
    pub fn is_edited(&self) -> bool {
        matches!(self.status, FileStatus::Edited { .. })
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        match &self.status {
            FileStatus::Edited { labels } => write!(f, "[EDIT] {} -> {}", path, labels.join(", ")),
            FileStatus::Unchanged => write!(f, "[OK]   {} (no changes)", path),
            FileStatus::Missing => write!(f, "[WARN] Missing: {}", path),
        }
    }
}

/// Result of one pass over the whole table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub mode: RunMode,
    pub files: Vec<FileOutcome>,
}

impl RunReport {
    pub fn any_changed(&self) -> bool {
        self.files.iter().any(FileOutcome::is_edited)
    }

    pub fn edited_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_edited()).count()
    }

    pub fn missing_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.status == FileStatus::Missing)
            .count()
    }

    /// Closing line after the per-file lines, if any
    pub fn summary(&self) -> Option<&'static str> {
        if self.any_changed() {
            None
        } else {
            Some(NO_CHANGES_SUMMARY)
        }
    }

    /// Every line the console report consists of, in order. Identical for
    /// check and apply runs over the same content.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.files.iter().map(|f| f.to_string()).collect();
        lines.extend(self.summary().map(str::to_string));
        lines
    }

    /// Process exit code. Only a check run asked to gate on pending edits
    /// can fail; missing pages never do.
    pub fn exit_code(&self, fail_on_changes: bool) -> u8 {
        if fail_on_changes && self.mode == RunMode::Check && self.any_changed() {
            1
        } else {
            0
        }
    }
}

/// Runs every target in table order, handing each outcome to `on_file` as
/// soon as it is known.
///
/// Missing pages and pages with no matching rule are reported and skipped.
/// Any read or write failure ends the run with an error; pages already
/// written stay written.
pub fn run(
    config: &RunConfig,
    table: &ReplacementTable,
    mut on_file: impl FnMut(&FileOutcome),
) -> SiteCopyResult<RunReport> {
    table.validate()?;
    table.warn_overlaps();

    info!(
        "Processing {} pages ({} rules) under {} in {:?} mode",
        table.len(),
        table.rule_count(),
        config.root.display(),
        config.mode
    );

    let mut files = Vec::with_capacity(table.len());
    for target in &table.targets {
        let outcome = process_target(config, target)?;
        on_file(&outcome);
        files.push(outcome);
    }

    let report = RunReport {
        mode: config.mode,
        files,
    };
    info!(
        "Done: {} edited, {} missing",
        report.edited_count(),
        report.missing_count()
    );
    Ok(report)
}

/// Reads, rewrites, and (in apply mode) persists a single page
pub fn process_target(config: &RunConfig, target: &FileTarget) -> SiteCopyResult<FileOutcome> {
    let full_path = config.resolve(target.path());

    if !full_path.exists() {
        debug!("Target page missing: {}", full_path.display());
        return Ok(FileOutcome {
            path: target.path.clone(),
            status: FileStatus::Missing,
            diff: None,
        });
    }

    let raw = read_page(&full_path)?;
    let endings = LineEndings::detect(&raw);
    let original = endings.normalize(&raw);
    let result = apply_replacements(&original, &target.rules);

    if !result.changed() {
        debug!("No rule matched in {}", full_path.display());
        return Ok(FileOutcome {
            path: target.path.clone(),
            status: FileStatus::Unchanged,
            diff: None,
        });
    }

    let diff = config
        .show_diff
        .then(|| unified_page_diff(target.path(), &original, &result.updated_text));

    if config.mode.writes() {
        write_page(&full_path, &endings.restore(&result.updated_text))?;
        debug!(
            "Wrote {} ({} rules applied)",
            full_path.display(),
            result.applied_labels.len()
        );
    } else {
        debug!("Check mode, leaving {} untouched", full_path.display());
    }

    Ok(FileOutcome {
        path: target.path.clone(),
        status: FileStatus::Edited {
            labels: result.applied_labels,
        },
        diff,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteCopyError;
    use crate::file::search_replace::ReplacementRule;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn sample_table() -> ReplacementTable {
        ReplacementTable::new(vec![
            FileTarget::new(
                "en/index.html",
                vec![
                    ReplacementRule::new("Hello world", "Goodbye world", "en:index:lead"),
                    ReplacementRule::new("No hype.", "Used with care.", "en:index:tagline"),
                    ReplacementRule::new("Not present", "...", "en:index:absent"),
                ],
            ),
            FileTarget::new(
                "de/index.html",
                vec![ReplacementRule::new("Hallo Welt", "Tschüss Welt", "de:index:lead")],
            ),
            FileTarget::new(
                "fr/index.html",
                vec![ReplacementRule::new("Bonjour", "Au revoir", "fr:index:lead")],
            ),
        ])
    }

    fn write_site(root: &Path) {
        fs::create_dir_all(root.join("en")).unwrap();
        fs::create_dir_all(root.join("de")).unwrap();
        fs::write(
            root.join("en/index.html"),
            "<p>Hello world</p>\n<p>No hype.</p>\n",
        )
        .unwrap();
        fs::write(root.join("de/index.html"), "<p>Schon aktualisiert</p>\n").unwrap();
    }

    #[test]
    fn test_apply_mode_writes_and_reports() {
        let dir = tempdir().unwrap();
        write_site(dir.path());
        let config = RunConfig::new(dir.path(), RunMode::Apply);

        let mut seen = Vec::new();
        let report = run(&config, &sample_table(), |f| seen.push(f.to_string())).unwrap();

        assert_eq!(
            report.lines(),
            vec![
                "[EDIT] en/index.html -> en:index:lead, en:index:tagline".to_string(),
                "[OK]   de/index.html (no changes)".to_string(),
                "[WARN] Missing: fr/index.html".to_string(),
            ]
        );
        assert_eq!(seen, report.lines());
        assert_eq!(
            fs::read_to_string(dir.path().join("en/index.html")).unwrap(),
            "<p>Goodbye world</p>\n<p>Used with care.</p>\n"
        );
        assert_eq!(report.edited_count(), 1);
        assert_eq!(report.missing_count(), 1);
        assert_eq!(report.exit_code(false), 0);
    }

    #[test]
    fn test_check_mode_matches_apply_report_without_writing() {
        let check_dir = tempdir().unwrap();
        let apply_dir = tempdir().unwrap();
        write_site(check_dir.path());
        write_site(apply_dir.path());
        let table = sample_table();

        let check = run(&RunConfig::new(check_dir.path(), RunMode::Check), &table, |_| {}).unwrap();
        let apply = run(&RunConfig::new(apply_dir.path(), RunMode::Apply), &table, |_| {}).unwrap();

        assert_eq!(check.lines(), apply.lines());
        assert_eq!(check.files, apply.files);
        assert_eq!(
            fs::read_to_string(check_dir.path().join("en/index.html")).unwrap(),
            "<p>Hello world</p>\n<p>No hype.</p>\n"
        );
        assert_ne!(
            fs::read_to_string(apply_dir.path().join("en/index.html")).unwrap(),
            "<p>Hello world</p>\n<p>No hype.</p>\n"
        );
    }

    #[test]
    fn test_second_apply_run_reports_no_changes() {
        let dir = tempdir().unwrap();
        write_site(dir.path());
        let config = RunConfig::new(dir.path(), RunMode::Apply);
        let table = sample_table();

        run(&config, &table, |_| {}).unwrap();
        let before = fs::read_to_string(dir.path().join("en/index.html")).unwrap();
        let second = run(&config, &table, |_| {}).unwrap();

        assert!(!second.any_changed());
        assert_eq!(second.summary(), Some(NO_CHANGES_SUMMARY));
        assert_eq!(second.lines().last().unwrap(), NO_CHANGES_SUMMARY);
        assert_eq!(
            fs::read_to_string(dir.path().join("en/index.html")).unwrap(),
            before
        );
    }

    #[test]
    fn test_all_missing_is_not_an_error() {
        let dir = tempdir().unwrap();
        let config = RunConfig::new(dir.path(), RunMode::Apply);

        let report = run(&config, &sample_table(), |_| {}).unwrap();

        assert_eq!(report.missing_count(), 3);
        assert_eq!(report.exit_code(true), 0);
    }

    #[test]
    fn test_fail_on_changes_only_gates_check_runs() {
        let dir = tempdir().unwrap();
        write_site(dir.path());
        let table = sample_table();

        let check = run(&RunConfig::new(dir.path(), RunMode::Check), &table, |_| {}).unwrap();
        assert_eq!(check.exit_code(true), 1);
        assert_eq!(check.exit_code(false), 0);

        let apply = run(&RunConfig::new(dir.path(), RunMode::Apply), &table, |_| {}).unwrap();
        assert_eq!(apply.exit_code(true), 0);

        let recheck = run(&RunConfig::new(dir.path(), RunMode::Check), &table, |_| {}).unwrap();
        assert_eq!(recheck.exit_code(true), 0);
    }

    #[test]
    fn test_unreadable_page_aborts_run() {
        let dir = tempdir().unwrap();
        write_site(dir.path());
        fs::write(dir.path().join("en/index.html"), [0xc3, 0x28]).unwrap();
        let config = RunConfig::new(dir.path(), RunMode::Apply);

        let err = run(&config, &sample_table(), |_| {}).unwrap_err();
        assert_eq!(err.path(), Some(&dir.path().join("en/index.html")));
    }

    #[test]
    fn test_invalid_table_rejected_before_any_io() {
        let dir = tempdir().unwrap();
        write_site(dir.path());
        let table = ReplacementTable::new(vec![FileTarget::new(
            "en/index.html",
            vec![
                ReplacementRule::new("Hello world", "Hi", "dup"),
                ReplacementRule::new("No hype.", "Calm.", "dup"),
            ],
        )]);
        let config = RunConfig::new(dir.path(), RunMode::Apply);

        let err = run(&config, &table, |_| {}).unwrap_err();
        assert!(matches!(err, SiteCopyError::InvalidTable { .. }));
        assert_eq!(
            fs::read_to_string(dir.path().join("en/index.html")).unwrap(),
            "<p>Hello world</p>\n<p>No hype.</p>\n"
        );
    }

    #[test]
    fn test_diff_attached_when_requested() {
        let dir = tempdir().unwrap();
        write_site(dir.path());
        let mut config = RunConfig::new(dir.path(), RunMode::Check);
        config.show_diff = true;

        let report = run(&config, &sample_table(), |_| {}).unwrap();
        let diff = report.files[0].diff.as_deref().unwrap();

        assert!(diff.contains("-<p>Hello world</p>"));
        assert!(diff.contains("+<p>Goodbye world</p>"));
        assert!(report.files[1].diff.is_none());
    }

    #[test]
    fn test_crlf_page_matches_multiline_rule() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("en")).unwrap();
        let page = dir.path().join("en/principles.html");
        fs::write(
            &page,
            "<div>\r\n    <h3>No subscriptions</h3>\r\n    <p>Old.</p>\r\n</div>\r\n",
        )
        .unwrap();
        let target = FileTarget::new(
            "en/principles.html",
            vec![ReplacementRule::new(
                "    <h3>No subscriptions</h3>\n    <p>Old.</p>",
                "    <h3>Fairly priced</h3>\n    <p>New.</p>",
                "en:principles:pricing",
            )],
        );

        let check = process_target(&RunConfig::new(dir.path(), RunMode::Check), &target).unwrap();
        assert_eq!(
            check.to_string(),
            "[EDIT] en/principles.html -> en:principles:pricing"
        );

        let apply = process_target(&RunConfig::new(dir.path(), RunMode::Apply), &target).unwrap();
        assert_eq!(apply, check);
        assert_eq!(
            fs::read_to_string(&page).unwrap(),
            "<div>\r\n    <h3>Fairly priced</h3>\r\n    <p>New.</p>\r\n</div>\r\n"
        );
    }

    #[test]
    fn test_missing_page_not_logged_at_default_level() {
        use std::sync::{Arc, Mutex};

        let captured = Arc::new(Mutex::new(Vec::<u8>::new()));
        let sink = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || SharedBuffer(sink.clone()))
            .finish();

        let dir = tempdir().unwrap();
        let report = tracing::subscriber::with_default(subscriber, || {
            run(&RunConfig::new(dir.path(), RunMode::Check), &sample_table(), |_| {}).unwrap()
        });

        assert_eq!(report.missing_count(), 3);
        assert!(captured.lock().unwrap().is_empty());
    }

    struct SharedBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_report_json_shape() {
        let report = RunReport {
            mode: RunMode::Check,
            files: vec![
                FileOutcome {
                    path: PathBuf::from("en/index.html"),
                    status: FileStatus::Edited {
                        labels: vec!["en:index:lead".to_string()],
                    },
                    diff: None,
                },
                FileOutcome {
                    path: PathBuf::from("fr/index.html"),
                    status: FileStatus::Missing,
                    diff: None,
                },
            ],
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "mode": "check",
                "files": [
                    {"path": "en/index.html", "status": "edited", "labels": ["en:index:lead"]},
                    {"path": "fr/index.html", "status": "missing"}
                ]
            })
        );
    }
}
