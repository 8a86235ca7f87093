use crate::application::ports::note_repository::NoteRepository;
use crate::domain::notes::note::Note;

pub struct CreateNote<'a, R: NoteRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: NoteRepository + ?Sized> CreateNote<'a, R> {
    pub async fn execute(&self, content: &str) -> anyhow::Result<Note> {
        self.repo.create(content).await
    }
}
