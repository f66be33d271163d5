use axum::{body::Bytes, extract::State, Json};

use crate::{
    app::AppState,
    error::AppResult,
    model::{IngredientsPayload, Report},
    service,
};

/// The body is parsed as JSON whatever the declared content type.
pub async fn recommend(State(state): State<AppState>, body: Bytes) -> AppResult<Json<Report>> {
    let payload: IngredientsPayload = serde_json::from_slice(&body)?;
    let report = service::recipes::recommend(state.ranker.as_ref(), &payload.ingredients)?;
    Ok(Json(report))
}
