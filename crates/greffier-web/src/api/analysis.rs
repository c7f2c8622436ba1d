use std::path::{Path, PathBuf};

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};

use greffier_core::survey;

use crate::error::WebError;
use crate::extract::extract_pdf_text;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(analyze_latest))
}

/// Analyzes the most recent upload and returns the budget report.
///
/// Older uploads are swept on every analysis; only the newest file is
/// kept.
async fn analyze_latest(State(state): State<AppState>) -> Result<impl IntoResponse, WebError> {
    let newest = newest_upload(&state.config.upload_dir).await?;

    let bytes = tokio::fs::read(&newest).await?;
    let text = extract_pdf_text(bytes).await?;

    let relevance = survey(&text, state.pipeline.config());
    for entry in &relevance.relevant {
        tracing::debug!(
            resolution = entry.number,
            title = %entry.title,
            amounts = ?entry.amounts,
            "budget-relevant resolution"
        );
    }

    let output = state.pipeline.analyze_text(&text).await?;
    tracing::info!(
        records = output.stats.record_count,
        relevant = output.stats.relevant_count,
        duration_ms = output.stats.duration_ms,
        "document analyzed"
    );

    Ok(Json(output.summary.to_report()))
}

async fn newest_upload(dir: &Path) -> Result<PathBuf, WebError> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(WebError::NoDocument),
        Err(e) => return Err(e.into()),
    };

    let mut files: Vec<(PathBuf, std::time::SystemTime)> = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() {
            let modified = entry.metadata().await?.modified()?;
            files.push((path, modified));
        }
    }

    let Some((newest, modified)) = files.iter().max_by_key(|(_, time)| *time).cloned() else {
        return Err(WebError::NoDocument);
    };

    for (path, _) in files {
        if path != newest {
            if let Err(e) = tokio::fs::remove_file(&path).await {
                tracing::warn!(path = %path.display(), error = %e, "failed to remove stale upload");
            }
        }
    }

    tracing::info!(
        file = %newest.display(),
        modified = %DateTime::<Utc>::from(modified).to_rfc3339(),
        "analyzing upload"
    );

    Ok(newest)
}
