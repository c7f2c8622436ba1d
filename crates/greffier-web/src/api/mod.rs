mod analysis;
mod upload;

use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/analysis", analysis::router())
        .nest("/upload", upload::router())
}
