use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;

use crate::error::WebError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(upload_files))
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub files: Vec<String>,
}

/// Characters outside `[a-zA-Z0-9.-]` are replaced before the name
/// touches the filesystem.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '.' || ch == '-' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

async fn upload_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, WebError> {
    let upload_dir = &state.config.upload_dir;
    tokio::fs::create_dir_all(upload_dir).await?;

    let mut saved = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("files") {
            continue;
        }

        let file_name = field
            .file_name()
            .map_or_else(|| "document.pdf".to_string(), sanitize_file_name);

        let data = field.bytes().await?;
        let path = upload_dir.join(&file_name);
        tokio::fs::write(&path, &data).await?;

        tracing::info!(file = %file_name, size = data.len(), "saved upload");
        saved.push(file_name);
    }

    if saved.is_empty() {
        return Err(WebError::EmptyUpload);
    }

    Ok(Json(UploadResponse {
        message: "Fichiers téléchargés avec succès".to_string(),
        files: saved,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_unsafe_characters() {
        assert_eq!(
            sanitize_file_name("PV-Procès_verbal AG 13.12.2022.pdf"),
            "PV-Proc_s_verbal_AG_13.12.2022.pdf"
        );
    }

    #[test]
    fn test_sanitize_keeps_safe_names_unchanged() {
        assert_eq!(sanitize_file_name("PV_AG_24.pdf"), "PV_AG_24.pdf");
    }
}
