use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::notes::note::Note;

#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn create(&self, content: &str) -> anyhow::Result<Note>;

    /// All notes, newest first.
    async fn list(&self) -> anyhow::Result<Vec<Note>>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Note>>;

    // content: None => keep; summary: None => keep, Some(text) => overwrite
    async fn update(
        &self,
        id: Uuid,
        content: Option<String>,
        summary: Option<String>,
    ) -> anyhow::Result<Option<Note>>;

    /// Overwrites only the summary column. Returns None if the id is unknown.
    async fn set_summary(&self, id: Uuid, summary: &str) -> anyhow::Result<Option<Note>>;

    // Returns true if a row was deleted.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}
