use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::application::ports::note_repository::NoteRepository;
use crate::domain::notes::note::Note;
use crate::infrastructure::db::PgPool;

pub struct SqlxNoteRepository {
    pub pool: PgPool,
}

impl SqlxNoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_note(r: sqlx::postgres::PgRow) -> Note {
    Note {
        id: r.get("id"),
        content: r.get("content"),
        summary: r.get("summary"),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    }
}

#[async_trait]
impl NoteRepository for SqlxNoteRepository {
    async fn create(&self, content: &str) -> anyhow::Result<Note> {
        let row = sqlx::query(
            r#"INSERT INTO notes (content)
               VALUES ($1)
               RETURNING id, content, summary, created_at, updated_at"#,
        )
        .bind(content)
        .fetch_one(&self.pool)
        .await?;
        Ok(row_to_note(row))
    }

    async fn list(&self) -> anyhow::Result<Vec<Note>> {
        let rows = sqlx::query(
            r#"SELECT id, content, summary, created_at, updated_at
               FROM notes
               ORDER BY created_at DESC, id DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(row_to_note).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Note>> {
        let row = sqlx::query(
            r#"SELECT id, content, summary, created_at, updated_at
               FROM notes WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(row_to_note))
    }

    async fn update(
        &self,
        id: Uuid,
        content: Option<String>,
        summary: Option<String>,
    ) -> anyhow::Result<Option<Note>> {
        let row = sqlx::query(
            r#"UPDATE notes
               SET content = COALESCE($2, content),
                   summary = COALESCE($3, summary),
                   updated_at = now()
               WHERE id = $1
               RETURNING id, content, summary, created_at, updated_at"#,
        )
        .bind(id)
        .bind(content)
        .bind(summary)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(row_to_note))
    }

    async fn set_summary(&self, id: Uuid, summary: &str) -> anyhow::Result<Option<Note>> {
        let row = sqlx::query(
            r#"UPDATE notes
               SET summary = $2, updated_at = now()
               WHERE id = $1
               RETURNING id, content, summary, created_at, updated_at"#,
        )
        .bind(id)
        .bind(summary)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(row_to_note))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
