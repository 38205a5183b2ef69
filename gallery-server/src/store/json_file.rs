use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::{AppError, AppResult};

use super::DocumentStore;

/// JSON document stored in a single file
///
/// Saves are pretty-printed and atomic (`<file>.tmp` then rename). A file
/// that fails to parse is copied to `<file>.corrupt` and treated as empty.
#[derive(Debug)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    _doc: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _doc: PhantomData,
        }
    }

    /// 获取路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(suffix);
        PathBuf::from(name)
    }

    async fn preserve_corrupt(&self) {
        let backup = self.sibling(".corrupt");
        if let Err(e) = tokio::fs::copy(&self.path, &backup).await {
            tracing::warn!(path = %backup.display(), error = %e, "Failed to preserve corrupt document");
        }
    }
}

#[async_trait]
impl<T> DocumentStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Default + Send + Sync + 'static,
{
    async fn load(&self) -> T {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return T::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read document, using empty default");
                self.preserve_corrupt().await;
                return T::default();
            }
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return T::default();
        }

        match serde_json::from_slice(&raw) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Corrupt document, using empty default");
                self.preserve_corrupt().await;
                T::default()
            }
        }
    }

    async fn save(&self, doc: &T) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(doc)?;

        // Atomic write: tmp file + rename
        let tmp_path = self.sibling(".tmp");
        tokio::fs::write(&tmp_path, json).await?;
        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(AppError::storage(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            )));
        }

        Ok(())
    }
}
