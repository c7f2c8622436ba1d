use crate::error::WebError;

/// Extracts the full text of a PDF document.
///
/// The engine treats extraction as a black box returning UTF-8 text,
/// possibly with word-boundary artifacts; pdf-extract is CPU-bound, so
/// it runs on a blocking thread.
pub async fn extract_pdf_text(bytes: Vec<u8>) -> Result<String, WebError> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| WebError::Extraction(e.to_string()))?
        .map_err(|e| WebError::Extraction(e.to_string()))
}
