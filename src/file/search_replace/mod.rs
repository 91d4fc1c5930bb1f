use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A single exact-match substitution with a label used for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplacementRule {
    /// Literal text to look for. Never interpreted as a pattern.
    pub old: String,

    /// Text every occurrence of `old` is replaced with
    pub new: String,

    /// Identifies the rule within its file, e.g. `en:index:lead`
    pub label: String,
}

impl ReplacementRule {
    pub fn new(old: impl Into<String>, new: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
            label: label.into(),
        }
    }
}

/// A page and the ordered rules to try against it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTarget {
    /// Path relative to the project root
    pub path: PathBuf,
    pub rules: Vec<ReplacementRule>,
}

impl FileTarget {
    pub fn new(path: impl Into<PathBuf>, rules: Vec<ReplacementRule>) -> Self {
        Self {
            path: path.into(),
            rules,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.label.as_str())
    }
}

/// Output of one pass of the rules over a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub updated_text: String,
    /// Labels of the rules that matched, in rule order
    pub applied_labels: Vec<String>,
}

impl ApplyResult {
    pub fn changed(&self) -> bool {
        !self.applied_labels.is_empty()
    }
}

/// Applies `rules` in order to `text`.
///
/// Each rule sees the text as left by the rules before it. A rule whose `old`
/// text is present replaces every occurrence and has its label recorded; a
/// rule whose `old` text is absent is skipped. Pages that were already
/// updated, or translations that lack a paragraph, simply produce fewer
/// labels.
pub fn apply_replacements(text: &str, rules: &[ReplacementRule]) -> ApplyResult {
    let mut content = text.to_string();
    let mut applied_labels = Vec::new();

    for rule in rules {
        if rule.old.is_empty() || !content.contains(rule.old.as_str()) {
            continue;
        }
        content = content.replace(rule.old.as_str(), &rule.new);
        applied_labels.push(rule.label.clone());
    }

    ApplyResult {
        updated_text: content,
        applied_labels,
    }
}

/// A rule whose replacement text contains another rule's search text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlap {
    /// Label of the rule whose `new` text contains the match
    pub producer: String,
    /// Label of the rule whose `old` text is found there
    pub consumer: String,
}

impl Overlap {
    /// True when the consumer runs after the producer within a single pass,
    /// so the pass itself rewrites freshly inserted text.
    pub fn same_pass(&self, rules: &[ReplacementRule]) -> bool {
        let position = |label: &str| rules.iter().position(|r| r.label == label);
        matches!(
            (position(&self.producer), position(&self.consumer)),
            (Some(p), Some(c)) if c > p
        )
    }
}

/// Lists every pair of rules where one rule's `new` text contains another
/// (or the same) rule's `old` text. Such pairs break idempotence and, when
/// the consumer comes later, make a single pass match text it inserted itself.
pub fn find_overlaps(rules: &[ReplacementRule]) -> Vec<Overlap> {
    let mut overlaps = Vec::new();

    for producer in rules {
        for consumer in rules {
            if consumer.old.is_empty() {
                continue;
            }
            if producer.new.contains(consumer.old.as_str()) {
                overlaps.push(Overlap {
                    producer: producer.label.clone(),
                    consumer: consumer.label.clone(),
                });
            }
        }
    }

    overlaps
}

/// Returns labels that occur more than once, in first-repeat order
pub fn duplicate_labels(rules: &[ReplacementRule]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for rule in rules {
        if !seen.insert(rule.label.as_str()) && !duplicates.contains(&rule.label) {
            duplicates.push(rule.label.clone());
        }
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(old: &str, new: &str, label: &str) -> ReplacementRule {
        ReplacementRule::new(old, new, label)
    }

    #[test]
    fn test_matching_rule_is_applied() {
        let rules = vec![rule("Hello world", "Goodbye world", "x:y:z")];
        let result = apply_replacements("<p>Hello world</p>", &rules);

        assert_eq!(result.updated_text, "<p>Goodbye world</p>");
        assert_eq!(result.applied_labels, vec!["x:y:z"]);
        assert!(result.changed());
    }

    #[test]
    fn test_missing_rule_is_skipped() {
        let rules = vec![rule("Not present", "...", "a")];
        let result = apply_replacements("<p>Hello world</p>", &rules);

        assert_eq!(result.updated_text, "<p>Hello world</p>");
        assert!(result.applied_labels.is_empty());
        assert!(!result.changed());
    }

    #[test]
    fn test_every_occurrence_is_replaced() {
        let rules = vec![rule("No hype.", "Calm.", "lead")];
        let result = apply_replacements("No hype. Really, No hype. Ever: No hype.", &rules);

        assert_eq!(result.updated_text, "Calm. Really, Calm. Ever: Calm.");
        // one label per rule, not per occurrence
        assert_eq!(result.applied_labels, vec!["lead"]);
    }

    #[test]
    fn test_labels_follow_rule_order() {
        let text = "<h3>A</h3>\n<h3>B</h3>\n<h3>C</h3>";
        let rules = vec![
            rule("<h3>C</h3>", "<h3>c</h3>", "third"),
            rule("<h3>missing</h3>", "", "skipped"),
            rule("<h3>A</h3>", "<h3>a</h3>", "first"),
        ];
        let result = apply_replacements(text, &rules);

        assert_eq!(result.updated_text, "<h3>a</h3>\n<h3>B</h3>\n<h3>c</h3>");
        assert_eq!(result.applied_labels, vec!["third", "first"]);
    }

    #[test]
    fn test_later_rule_sees_earlier_output() {
        let rules = vec![rule("alpha", "beta", "one"), rule("beta", "gamma", "two")];
        let result = apply_replacements("alpha", &rules);

        assert_eq!(result.updated_text, "gamma");
        assert_eq!(result.applied_labels, vec!["one", "two"]);
    }

    #[test]
    fn test_multiline_old_text() {
        let text = "<div>\n    <h3>No subscriptions</h3>\n    <p>Old.</p>\n</div>";
        let rules = vec![rule(
            "    <h3>No subscriptions</h3>\n    <p>Old.</p>",
            "    <h3>Fairly priced</h3>\n    <p>New.</p>",
            "en:principles:pricing",
        )];
        let result = apply_replacements(text, &rules);

        assert_eq!(
            result.updated_text,
            "<div>\n    <h3>Fairly priced</h3>\n    <p>New.</p>\n</div>"
        );
    }

    #[test]
    fn test_pattern_characters_are_literal() {
        let rules = vec![rule("a.c", "X", "dot")];
        let result = apply_replacements("abc a.c", &rules);

        assert_eq!(result.updated_text, "abc X");
    }

    #[test]
    fn test_empty_old_text_never_matches() {
        let rules = vec![rule("", "inserted", "empty")];
        let result = apply_replacements("unchanged", &rules);

        assert_eq!(result.updated_text, "unchanged");
        assert!(result.applied_labels.is_empty());
    }

    #[test]
    fn test_second_pass_is_a_no_op() {
        let text = "<p>We don't offer consulting.</p><p>No hype.</p>";
        let rules = vec![
            rule("We don't offer consulting.", "We ship our own tools.", "a"),
            rule("No hype.", "Helpful, used with care.", "b"),
        ];
        assert!(find_overlaps(&rules).is_empty());

        let once = apply_replacements(text, &rules);
        let twice = apply_replacements(&once.updated_text, &rules);

        assert_eq!(twice.updated_text, once.updated_text);
        assert!(twice.applied_labels.is_empty());
    }

    #[test]
    fn test_find_overlaps_reports_chained_rules() {
        let rules = vec![rule("alpha", "beta", "one"), rule("beta", "gamma", "two")];
        let overlaps = find_overlaps(&rules);

        assert_eq!(
            overlaps,
            vec![Overlap {
                producer: "one".to_string(),
                consumer: "two".to_string(),
            }]
        );
        assert!(overlaps[0].same_pass(&rules));
    }

    #[test]
    fn test_find_overlaps_reports_self_reintroduction() {
        let rules = vec![rule("care", "great care", "grow")];
        let overlaps = find_overlaps(&rules);

        assert_eq!(overlaps.len(), 1);
        assert_eq!(overlaps[0].producer, "grow");
        assert_eq!(overlaps[0].consumer, "grow");
        assert!(!overlaps[0].same_pass(&rules));
    }

    #[test]
    fn test_duplicate_labels() {
        let rules = vec![
            rule("a", "b", "x"),
            rule("c", "d", "y"),
            rule("e", "f", "x"),
            rule("g", "h", "x"),
        ];
        assert_eq!(duplicate_labels(&rules), vec!["x"]);
    }
}
