use std::sync::Arc;

use crate::application::ports::note_repository::NoteRepository;
use crate::application::ports::summarizer::Summarizer;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

pub struct AppServices {
    note_repo: Arc<dyn NoteRepository>,
    summarizer: Arc<dyn Summarizer>,
}

impl AppServices {
    pub fn new(note_repo: Arc<dyn NoteRepository>, summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            note_repo,
            summarizer,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn note_repo(&self) -> Arc<dyn NoteRepository> {
        self.services.note_repo.clone()
    }

    pub fn summarizer(&self) -> Arc<dyn Summarizer> {
        self.services.summarizer.clone()
    }
}
