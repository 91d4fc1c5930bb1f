use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{SiteCopyError, SiteCopyResult};
use crate::error_handling::{fs_operation, with_file_context};

/// Read a page as UTF-8 text
pub fn read_page(path: &Path) -> SiteCopyResult<String> {
    debug!("Reading page: {}", path.display());
    fs_operation(|| fs::read_to_string(path), path, "Read")
}

/// Replace a page's content in one step.
///
/// The content goes to a temporary file next to the page which is then
/// renamed over it, so readers see either the old or the new page.
/// Existing permissions are carried over.
pub fn write_page(path: &Path, content: &str) -> SiteCopyResult<()> {
    debug!("Writing page: {}", path.display());

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = fs_operation(|| NamedTempFile::new_in(dir), dir, "Create temp file")?;
    let temp_path = temp.path().to_path_buf();
    fs_operation(|| temp.write_all(content.as_bytes()), &temp_path, "Write")?;
    fs_operation(|| temp.as_file().sync_all(), path, "Sync")?;

    if let Ok(metadata) = fs::metadata(path) {
        fs_operation(
            || fs::set_permissions(temp.path(), metadata.permissions()),
            path,
            "Copy permissions",
        )?;
    }

    with_file_context(|| temp.persist(path).map_err(|e| e.error), path)?;
    Ok(())
}

/// Line ending convention of a page as read from disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEndings {
    Lf,
    CrLf,
}

impl LineEndings {
    /// A page containing any `\r\n` is treated as CRLF
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    /// Text with every `\r\n` turned into `\n`; rules are written with `\n`
    pub fn normalize(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::CrLf => text.replace("\r\n", "\n"),
        }
    }

    /// Inverse of `normalize` for text about to be written back
    pub fn restore(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::CrLf => text.replace('\n', "\r\n"),
        }
    }
}

/// Ensure the project root exists and is a directory
pub fn check_root(root: &Path) -> SiteCopyResult<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(SiteCopyError::invalid_argument(format!(
            "project root is not a directory: {}",
            root.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read_page() {
        let dir = tempdir().unwrap();
        let page = dir.path().join("index.html");
        fs::write(&page, "<p>old</p>").unwrap();

        write_page(&page, "<p>new</p>").unwrap();

        assert_eq!(read_page(&page).unwrap(), "<p>new</p>");
        // no stray temp files left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_read_missing_page_keeps_path() {
        let dir = tempdir().unwrap();
        let page = dir.path().join("missing.html");

        let err = read_page(&page).unwrap_err();
        assert_eq!(err.path(), Some(&page));
    }

    #[test]
    fn test_read_invalid_utf8_fails() {
        let dir = tempdir().unwrap();
        let page = dir.path().join("broken.html");
        fs::write(&page, [0xff, 0xfe, 0x00]).unwrap();

        assert!(read_page(&page).is_err());
    }

    #[test]
    fn test_line_endings_round_trip_crlf() {
        let raw = "<div>\r\n    <p>Old.</p>\r\n</div>\r\n";
        let endings = LineEndings::detect(raw);

        assert_eq!(endings, LineEndings::CrLf);
        let normalized = endings.normalize(raw);
        assert_eq!(normalized, "<div>\n    <p>Old.</p>\n</div>\n");
        assert_eq!(endings.restore(&normalized), raw);
    }

    #[test]
    fn test_line_endings_leave_lf_alone() {
        let raw = "<div>\n</div>\n";
        let endings = LineEndings::detect(raw);

        assert_eq!(endings, LineEndings::Lf);
        assert_eq!(endings.normalize(raw), raw);
        assert_eq!(endings.restore(raw), raw);
    }

    #[test]
    fn test_check_root() {
        let dir = tempdir().unwrap();
        assert!(check_root(dir.path()).is_ok());

        let file = dir.path().join("file.txt");
        fs::write(&file, "").unwrap();
        assert!(matches!(
            check_root(&file),
            Err(SiteCopyError::InvalidArgument { .. })
        ));
    }
}
