//! Local filesystem store for uploaded images.

use std::path::{Path, PathBuf};

use cinedex_core::error::CoreError;

/// Writes uploaded file bytes under a configured asset root and hands back
/// the relative path that gets persisted on the record.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Persist `bytes` as `<root>/<subpath>/<sanitized filename>`.
    ///
    /// Returns the relative `subpath/filename` string for storage in the
    /// database. The client-supplied filename is reduced to its lowercased
    /// base name, so path components in the upload cannot escape the root.
    pub async fn save(
        &self,
        subpath: &str,
        filename: &str,
        bytes: &[u8],
    ) -> Result<String, CoreError> {
        let name = sanitize_filename(filename)?;
        let dir = self.root.join(subpath);

        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| CoreError::Storage(format!("create {}: {e}", dir.display())))?;

        let dest = dir.join(&name);
        tokio::fs::write(&dest, bytes)
            .await
            .map_err(|e| CoreError::Storage(format!("write {}: {e}", dest.display())))?;

        Ok(format!("{subpath}/{name}"))
    }

    /// Best-effort removal of a previously saved file.
    ///
    /// Used to compensate when the database insert after an upload fails;
    /// failure to remove is logged, not surfaced.
    pub async fn remove(&self, relative_path: &str) {
        let path = self.root.join(relative_path);
        if let Err(err) = tokio::fs::remove_file(&path).await {
            tracing::warn!(path = %path.display(), error = %err, "Failed to remove stored image");
        }
    }
}

/// Lowercased base name of a client-supplied filename.
fn sanitize_filename(filename: &str) -> Result<String, CoreError> {
    let base = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_lowercase())
        .unwrap_or_default();

    if base.is_empty() || base == "." || base == ".." {
        return Err(CoreError::Validation(format!(
            "Invalid image filename '{filename}'"
        )));
    }
    Ok(base)
}
