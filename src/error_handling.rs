use crate::error::{SiteCopyError, SiteCopyResult};
use std::path::Path;

/// Handles file operation errors with file path context
pub fn with_file_context<T, F>(operation: F, path: impl AsRef<Path>) -> SiteCopyResult<T>
where
    F: FnOnce() -> std::io::Result<T>,
{
    let path_ref = path.as_ref();
    operation().map_err(|e| {
        tracing::error!("File operation failed on {}: {}", path_ref.display(), e);
        SiteCopyError::file_error(e.to_string(), path_ref)
    })
}

/// Like `with_file_context`, keeping the original `io::Error` as the source
pub fn fs_operation<T, F>(operation: F, path: impl AsRef<Path>, operation_name: &str) -> SiteCopyResult<T>
where
    F: FnOnce() -> std::io::Result<T>,
{
    let path_ref = path.as_ref();
    operation().map_err(|e| {
        tracing::error!(
            "{} failed on {}: {} (at {}:{})",
            operation_name,
            path_ref.display(),
            e,
            file!(),
            line!()
        );
        SiteCopyError::io_error(e, Some(path_ref))
    })
}
