use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use playshelf_core::entry::{DEFAULT_TAG, FALLBACK_DESCRIPTION, GameDraft, GameEntry};
use playshelf_core::query::{self, QueryState, SortOrder};
use playshelf_core::time::now_millis;
use playshelf_core::{flair, thumbs};

use crate::error::AppError;
use crate::state::AppState;

/// Query parameters for listing games.
#[derive(Debug, Default, Deserialize)]
pub struct ListGamesParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sort: Option<SortOrder>,
}

impl ListGamesParams {
    fn into_query_state(self) -> QueryState {
        let mut query = QueryState::default();
        if let Some(search) = self.search {
            query.search(search);
        }
        if let Some(category) = self.category {
            query.filter_by_category(category);
        }
        if let Some(sort) = self.sort {
            query.set_sort_order(sort);
        }
        query
    }
}

/// Card-shaped view of an entry: stored fields plus per-render derivations.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCard {
    #[serde(flatten)]
    pub entry: GameEntry,
    pub is_new: bool,
    pub viewers: u32,
    pub shares: u32,
    pub preview_url: String,
    pub fallback_thumbnail_url: String,
}

impl GameCard {
    fn from_entry(entry: &GameEntry, now_ms: i64) -> Self {
        Self {
            is_new: query::is_new(entry, now_ms),
            viewers: flair::viewer_count(&entry.id),
            shares: flair::share_count(&entry.id),
            preview_url: thumbs::preview_url(entry),
            fallback_thumbnail_url: thumbs::fallback_thumbnail_url(&entry.id),
            entry: entry.clone(),
        }
    }
}

/// Response for the game listing.
#[derive(Debug, Serialize)]
pub struct GamesResponse {
    pub total: usize,
    pub games: Vec<GameCard>,
}

/// GET /api/v1/games — the displayed list for the given view parameters.
pub async fn list_games(
    State(state): State<AppState>,
    Query(params): Query<ListGamesParams>,
) -> Json<GamesResponse> {
    let query = params.into_query_state();
    let now = now_millis();
    let store = state.catalog.read().await;
    let games: Vec<GameCard> = query::apply(store.games(), &query)
        .into_iter()
        .map(|entry| GameCard::from_entry(entry, now))
        .collect();
    Json(GamesResponse {
        total: games.len(),
        games,
    })
}

/// GET /api/v1/games/{id} — a single card.
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GameCard>, AppError> {
    let store = state.catalog.read().await;
    let entry = store
        .games()
        .iter()
        .find(|g| g.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Game {id} not found")))?;
    Ok(Json(GameCard::from_entry(entry, now_millis())))
}

/// Response for the derived category universe.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// GET /api/v1/categories — "All" plus the distinct tag set of the catalog.
pub async fn list_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    let store = state.catalog.read().await;
    Json(CategoriesResponse {
        categories: query::categories(store.games()),
    })
}

/// POST /api/v1/games — create an entry, consulting enrichment at most once.
pub async fn add_game(
    State(state): State<AppState>,
    Json(draft): Json<GameDraft>,
) -> Result<(StatusCode, Json<GameEntry>), AppError> {
    if draft.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must be non-empty".to_string()));
    }
    if draft.url.trim().is_empty() {
        return Err(AppError::BadRequest("url must be non-empty".to_string()));
    }

    // Description and tags are resolved before construction. The enrichment
    // call is the only suspension point and runs outside the catalog lock.
    let provided = draft
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());
    let (description, tags) = match provided {
        Some(description) => (description.to_string(), vec![DEFAULT_TAG.to_string()]),
        None => match state.enricher.generate(&draft.title, &draft.url).await {
            Some(meta) => (meta.description, meta.tags),
            None => (
                FALLBACK_DESCRIPTION.to_string(),
                vec![DEFAULT_TAG.to_string()],
            ),
        },
    };

    let entry = GameEntry::build(draft, description, tags, now_millis());

    let mut store = state.catalog.write().await;
    store
        .add(entry.clone())
        .map_err(|e| AppError::Internal(format!("Failed to persist catalog: {e}")))?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Response for a delete request.
#[derive(Debug, Serialize)]
pub struct DeleteGameResponse {
    pub deleted: bool,
    pub id: String,
}

/// DELETE /api/v1/games/{id} — removing an absent id is a no-op, not an error.
pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteGameResponse>, AppError> {
    let mut store = state.catalog.write().await;
    let deleted = store
        .remove(&id)
        .map_err(|e| AppError::Internal(format!("Failed to persist catalog: {e}")))?;
    Ok(Json(DeleteGameResponse { deleted, id }))
}
