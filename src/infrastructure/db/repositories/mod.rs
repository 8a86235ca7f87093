pub mod note_repository_sqlx;
