pub mod note_repository;
pub mod summarizer;
