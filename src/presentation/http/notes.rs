use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::notes::create_note::CreateNote;
use crate::application::use_cases::notes::delete_note::DeleteNote;
use crate::application::use_cases::notes::get_note::GetNote;
use crate::application::use_cases::notes::list_notes::ListNotes;
use crate::application::use_cases::notes::summarize_note::SummarizeNote;
use crate::application::use_cases::notes::update_note::UpdateNote;
use crate::bootstrap::app_context::AppContext;
use crate::domain::notes::note as domain;
use crate::presentation::http::error::ApiError;

#[derive(Debug, Serialize, ToSchema)]
pub struct Note {
    pub id: Uuid,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<domain::Note> for Note {
    fn from(n: domain::Note) -> Self {
        Self {
            id: n.id,
            content: n.content,
            summary: n.summary,
            created_at: n.created_at,
            updated_at: n.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    pub content: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    pub content: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteNoteResponse {
    pub message: String,
}

#[utoipa::path(post, path = "/api/notes", tag = "Notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, body = Note),
        (status = 400, description = "Missing or blank content")
    ))]
pub async fn create_note(
    State(ctx): State<AppContext>,
    Json(req): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let content = req
        .content
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::Validation("Content is required".into()))?;

    let repo = ctx.note_repo();
    let uc = CreateNote {
        repo: repo.as_ref(),
    };
    let note = uc
        .execute(content)
        .await
        .map_err(|e| ApiError::internal("creating note", e))?;

    Ok((StatusCode::CREATED, Json(note.into())))
}

#[utoipa::path(get, path = "/api/notes", tag = "Notes",
    responses((status = 200, body = [Note], description = "All notes, newest first")))]
pub async fn list_notes(State(ctx): State<AppContext>) -> Result<Json<Vec<Note>>, ApiError> {
    let repo = ctx.note_repo();
    let uc = ListNotes {
        repo: repo.as_ref(),
    };
    let notes = uc
        .execute()
        .await
        .map_err(|e| ApiError::internal("fetching notes", e))?;
    Ok(Json(notes.into_iter().map(Note::from).collect()))
}

#[utoipa::path(get, path = "/api/notes/{id}", tag = "Notes",
    params(("id" = Uuid, Path, description = "Note ID")),
    responses((status = 200, body = Note), (status = 404, description = "Note not found")))]
pub async fn get_note(
    State(ctx): State<AppContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<Note>, ApiError> {
    let repo = ctx.note_repo();
    let uc = GetNote {
        repo: repo.as_ref(),
    };
    let note = uc
        .execute(id)
        .await
        .map_err(|e| ApiError::internal("fetching note", e))?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(note.into()))
}

#[utoipa::path(put, path = "/api/notes/{id}", tag = "Notes",
    request_body = UpdateNoteRequest,
    params(("id" = Uuid, Path, description = "Note ID")),
    responses(
        (status = 200, body = Note),
        (status = 400, description = "Blank content"),
        (status = 404, description = "Note not found")
    ))]
pub async fn update_note(
    State(ctx): State<AppContext>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<Json<Note>, ApiError> {
    // content stays required: a provided-but-blank value is rejected rather
    // than stored, matching the create-side validation.
    let content = match req.content {
        Some(c) => {
            let trimmed = c.trim();
            if trimmed.is_empty() {
                return Err(ApiError::Validation("Content is required".into()));
            }
            Some(trimmed.to_string())
        }
        None => None,
    };

    let repo = ctx.note_repo();
    let uc = UpdateNote {
        repo: repo.as_ref(),
    };
    let note = uc
        .execute(id, content, req.summary)
        .await
        .map_err(|e| ApiError::internal("updating note", e))?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(note.into()))
}

#[utoipa::path(delete, path = "/api/notes/{id}", tag = "Notes",
    params(("id" = Uuid, Path, description = "Note ID")),
    responses((status = 200, body = DeleteNoteResponse), (status = 404, description = "Note not found")))]
pub async fn delete_note(
    State(ctx): State<AppContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteNoteResponse>, ApiError> {
    let repo = ctx.note_repo();
    let uc = DeleteNote {
        repo: repo.as_ref(),
    };
    let deleted = uc
        .execute(id)
        .await
        .map_err(|e| ApiError::internal("deleting note", e))?;
    if !deleted {
        return Err(ApiError::NotFound);
    }
    Ok(Json(DeleteNoteResponse {
        message: "Note removed successfully".into(),
    }))
}

#[utoipa::path(post, path = "/api/notes/{id}/summarize", tag = "Notes",
    params(("id" = Uuid, Path, description = "Note ID")),
    responses(
        (status = 200, body = Note, description = "Note with freshly generated summary"),
        (status = 404, description = "Note not found")
    ))]
pub async fn summarize_note(
    State(ctx): State<AppContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<Note>, ApiError> {
    let repo = ctx.note_repo();
    let summarizer = ctx.summarizer();
    let uc = SummarizeNote {
        repo: repo.as_ref(),
        summarizer: summarizer.as_ref(),
    };
    let note = uc
        .execute(id)
        .await
        .map_err(|e| {
            tracing::error!(note_id = %id, error = ?e, "summarization failed");
            ApiError::Internal {
                message: "Server error while generating summary".into(),
            }
        })?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(note.into()))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/:id",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route("/notes/:id/summarize", post(summarize_note))
        .with_state(ctx)
}
