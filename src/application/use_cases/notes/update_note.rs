use uuid::Uuid;

use crate::application::ports::note_repository::NoteRepository;
use crate::domain::notes::note::Note;

pub struct UpdateNote<'a, R: NoteRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: NoteRepository + ?Sized> UpdateNote<'a, R> {
    // Fields left as None keep their stored values.
    pub async fn execute(
        &self,
        id: Uuid,
        content: Option<String>,
        summary: Option<String>,
    ) -> anyhow::Result<Option<Note>> {
        self.repo.update(id, content, summary).await
    }
}
