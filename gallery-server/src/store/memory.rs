use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use shared::error::AppResult;
use tokio::sync::RwLock;

use super::DocumentStore;

/// In-process document store
#[derive(Debug, Default)]
pub struct MemoryStore<T> {
    doc: RwLock<T>,
    saves: AtomicUsize,
}

impl<T> MemoryStore<T> {
    pub fn new(doc: T) -> Self {
        Self {
            doc: RwLock::new(doc),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl<T> DocumentStore<T> for MemoryStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn load(&self) -> T {
        self.doc.read().await.clone()
    }

    async fn save(&self, doc: &T) -> AppResult<()> {
        *self.doc.write().await = doc.clone();
        self.saves.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
