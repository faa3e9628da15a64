use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::{
    application::generate_map::dto::GenerateMapRequest,
    presentation::{
        html::render_map_page,
        http::{errors::AppError, state::AppState},
    },
};

pub async fn get_map(
    State(state): State<AppState>,
    Query(params): Query<GenerateMapRequest>,
) -> Result<Html<String>, AppError> {
    let config = &state.config;
    let query = params.into_query(
        &config.default_query,
        &config.default_city,
        &config.default_language,
    )?;

    let map = state.generate_map_use_case().execute(&query).await?;
    let page = render_map_page(&map, &query.language)?;

    tracing::info!(
        markers = map.records.len(),
        bytes = page.len(),
        "Map page rendered"
    );
    Ok(Html(page))
}
