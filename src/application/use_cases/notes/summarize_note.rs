use uuid::Uuid;

use crate::application::ports::note_repository::NoteRepository;
use crate::application::ports::summarizer::Summarizer;
use crate::domain::notes::note::Note;

pub struct SummarizeNote<'a, R, S>
where
    R: NoteRepository + ?Sized,
    S: Summarizer + ?Sized,
{
    pub repo: &'a R,
    pub summarizer: &'a S,
}

impl<'a, R, S> SummarizeNote<'a, R, S>
where
    R: NoteRepository + ?Sized,
    S: Summarizer + ?Sized,
{
    // The summary column is written only after the provider call succeeds,
    // so a provider failure leaves the note untouched.
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<Option<Note>> {
        let Some(note) = self.repo.get_by_id(id).await? else {
            return Ok(None);
        };
        let summary = self.summarizer.summarize(&note.content).await?;
        self.repo.set_summary(id, &summary).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::application::ports::summarizer::SummarizeError;

    struct FakeRepo {
        notes: Mutex<Vec<Note>>,
    }

    impl FakeRepo {
        fn with_note(note: Note) -> Self {
            Self {
                notes: Mutex::new(vec![note]),
            }
        }
    }

    #[async_trait]
    impl NoteRepository for FakeRepo {
        async fn create(&self, content: &str) -> anyhow::Result<Note> {
            let note = sample_note(content);
            self.notes.lock().unwrap().push(note.clone());
            Ok(note)
        }

        async fn list(&self) -> anyhow::Result<Vec<Note>> {
            Ok(self.notes.lock().unwrap().clone())
        }

        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Note>> {
            Ok(self
                .notes
                .lock()
                .unwrap()
                .iter()
                .find(|n| n.id == id)
                .cloned())
        }

        async fn update(
            &self,
            id: Uuid,
            content: Option<String>,
            summary: Option<String>,
        ) -> anyhow::Result<Option<Note>> {
            let mut notes = self.notes.lock().unwrap();
            let Some(note) = notes.iter_mut().find(|n| n.id == id) else {
                return Ok(None);
            };
            if let Some(c) = content {
                note.content = c;
            }
            if let Some(s) = summary {
                note.summary = Some(s);
            }
            Ok(Some(note.clone()))
        }

        async fn set_summary(&self, id: Uuid, summary: &str) -> anyhow::Result<Option<Note>> {
            let mut notes = self.notes.lock().unwrap();
            let Some(note) = notes.iter_mut().find(|n| n.id == id) else {
                return Ok(None);
            };
            note.summary = Some(summary.to_string());
            Ok(Some(note.clone()))
        }

        async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
            let mut notes = self.notes.lock().unwrap();
            let before = notes.len();
            notes.retain(|n| n.id != id);
            Ok(notes.len() != before)
        }
    }

    struct StubSummarizer {
        reply: Result<String, ()>,
    }

    #[async_trait]
    impl Summarizer for StubSummarizer {
        async fn summarize(&self, _text: &str) -> Result<String, SummarizeError> {
            match &self.reply {
                Ok(s) => Ok(s.clone()),
                Err(()) => Err(SummarizeError::EmptyResponse),
            }
        }
    }

    fn sample_note(content: &str) -> Note {
        let now = chrono::Utc::now();
        Note {
            id: Uuid::new_v4(),
            content: content.to_string(),
            summary: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn stores_summary_on_success() {
        let note = sample_note("long rambling text");
        let id = note.id;
        let repo = FakeRepo::with_note(note);
        let summarizer = StubSummarizer {
            reply: Ok("short version".into()),
        };

        let uc = SummarizeNote {
            repo: &repo,
            summarizer: &summarizer,
        };
        let updated = uc.execute(id).await.unwrap().unwrap();
        assert_eq!(updated.summary.as_deref(), Some("short version"));
        assert_eq!(
            repo.get_by_id(id).await.unwrap().unwrap().summary.as_deref(),
            Some("short version")
        );
    }

    #[tokio::test]
    async fn unknown_id_is_none_and_provider_not_called() {
        let repo = FakeRepo::with_note(sample_note("text"));
        let summarizer = StubSummarizer { reply: Err(()) };
        let uc = SummarizeNote {
            repo: &repo,
            summarizer: &summarizer,
        };
        // A failing summarizer would turn this into Err if it were invoked.
        let out = uc.execute(Uuid::nil()).await.unwrap();
        assert!(out.is_none());
    }

    #[tokio::test]
    async fn provider_failure_leaves_note_untouched() {
        let mut note = sample_note("text");
        note.summary = Some("earlier summary".into());
        let id = note.id;
        let repo = FakeRepo::with_note(note);
        let summarizer = StubSummarizer { reply: Err(()) };

        let uc = SummarizeNote {
            repo: &repo,
            summarizer: &summarizer,
        };
        assert!(uc.execute(id).await.is_err());

        let stored = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.summary.as_deref(), Some("earlier summary"));
    }
}
