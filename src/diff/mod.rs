use similar::TextDiff;
use std::path::Path;

/// Unified diff of a page before and after its rules ran
pub fn unified_page_diff(path: &Path, old: &str, new: &str) -> String {
    let name = path.to_string_lossy().replace('\\', "/");
    let diff = TextDiff::from_lines(old, new);
    let mut unified = diff.unified_diff();
    unified
        .context_radius(1)
        .header(&format!("a/{}", name), &format!("b/{}", name));
    unified.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_shows_changed_line_only() {
        let old = "<h1>Title</h1>\n<p>No hype.</p>\n<footer/>\n<br/>\n<br/>\n";
        let new = "<h1>Title</h1>\n<p>Used with care.</p>\n<footer/>\n<br/>\n<br/>\n";
        let diff = unified_page_diff(Path::new("en/index.html"), old, new);

        assert!(diff.starts_with("--- a/en/index.html\n+++ b/en/index.html\n"));
        assert!(diff.contains("-<p>No hype.</p>\n"));
        assert!(diff.contains("+<p>Used with care.</p>\n"));
        assert!(!diff.contains("<br/>"));
    }

    #[test]
    fn test_identical_text_has_no_hunks() {
        let diff = unified_page_diff(Path::new("en/index.html"), "same\n", "same\n");
        assert!(!diff.contains("@@"));
    }
}
