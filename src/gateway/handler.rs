use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, header::HeaderValue},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::catalog::ArticleStore;
use crate::constants::{STATUS_HEADER, STATUS_HEALTHY};
use crate::features::UserProfile;
use crate::gateway::error::GatewayError;
use crate::gateway::state::HandlerState;
use crate::ranking::candidate_query;

/// Query parameters accepted by the articles endpoint.
///
/// All optional; a missing or empty parameter means "no constraint".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArticleQueryParams {
    pub trimester: String,
    pub age_range: String,
    pub concern: String,
}

impl ArticleQueryParams {
    /// The scoring profile these parameters describe. `age_range` is the wire
    /// name of the profile's age group; the concern is lowercased on the way in.
    pub fn into_profile(self) -> UserProfile {
        UserProfile::new(self.age_range, self.trimester, self.concern)
    }
}

/// Query parameters accepted by the story endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoryQueryParams {
    pub character_id: String,
}

#[derive(serde::Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
}

/// Headers attached to every successful gateway response.
fn healthy_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(STATUS_HEADER, HeaderValue::from_static(STATUS_HEALTHY));
    headers
}

#[instrument]
pub async fn hello_handler() -> Response {
    (
        healthy_headers(),
        Json(HelloResponse {
            message: "Hello from nestrank!",
        }),
    )
        .into_response()
}

/// Ranked-articles endpoint: filter the catalog by the profile, score the
/// survivors, return them highest score first.
#[instrument(
    skip(state, params),
    fields(
        trimester = %params.trimester,
        age_range = %params.age_range,
        concern = %params.concern,
    )
)]
pub async fn articles_handler<S>(
    State(state): State<HandlerState<S>>,
    Query(params): Query<ArticleQueryParams>,
) -> Result<Response, GatewayError>
where
    S: ArticleStore + 'static,
{
    let profile = params.into_profile();
    let candidates = state.store.filter(&candidate_query(&profile)).await?;
    debug!(candidates = candidates.len(), "Ranking article candidates");

    let ranked = state.ranker.rank(&profile, &candidates);
    Ok((healthy_headers(), Json(ranked)).into_response())
}

/// Interactive-story endpoint: the scenes for one character.
#[instrument(skip(state, params), fields(character_id = %params.character_id))]
pub async fn story_data_handler<S>(
    State(state): State<HandlerState<S>>,
    Query(params): Query<StoryQueryParams>,
) -> Result<Response, GatewayError>
where
    S: ArticleStore + 'static,
{
    if params.character_id.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(
            "character_id is required".to_string(),
        ));
    }

    let character_id: i64 = params.character_id.trim().parse().map_err(|_| {
        GatewayError::InvalidRequest(format!(
            "character_id must be an integer, got '{}'",
            params.character_id
        ))
    })?;

    state
        .stories
        .story_for(character_id)
        .map(|story| (healthy_headers(), Json(story)).into_response())
        .ok_or(GatewayError::UnknownCharacter(character_id))
}
