use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use greffier_core::SummaryError;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Aucun fichier à analyser")]
    NoDocument,

    #[error("Aucun fichier n'a été fourni")]
    EmptyUpload,

    #[error("Erreur lors du téléchargement des fichiers: {0}")]
    Upload(#[from] MultipartError),

    #[error("Erreur lors de l'extraction du texte: {0}")]
    Extraction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Summary error: {0}")]
    Summary(#[from] SummaryError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NoDocument => StatusCode::NOT_FOUND,
            Self::EmptyUpload | Self::Upload(_) => StatusCode::BAD_REQUEST,
            Self::Extraction(_) | Self::Io(_) | Self::Summary(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
