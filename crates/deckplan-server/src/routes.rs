//! Router, handlers, and error mapping
//!
//! Handlers are generic over the service's collaborators so tests can run
//! the full router against a stub generator and an in-memory store.

use crate::wire::{CreateOutlineRequest, EditOutlineRequest, ErrorBody};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use deckplan_core::{OutlineEdit, OutlineError, OutlineService};
use deckplan_gen::ContentGenerator;
use deckplan_model::{EditPath, Outline, OutlineId};
use deckplan_store::OutlineStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Errors a handler can answer with
#[derive(Debug)]
enum ApiError {
    /// Service-level failure, mapped by kind
    Service(OutlineError),
    /// The path id cannot name any outline
    UnknownId,
    /// The wire edit path did not populate exactly one id field
    MalformedEditPath,
}

impl From<OutlineError> for ApiError {
    fn from(err: OutlineError) -> Self {
        Self::Service(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Service(err) => match err {
                OutlineError::EmptyTitle | OutlineError::InvalidEditPath => {
                    (StatusCode::BAD_REQUEST, err.to_string())
                }
                OutlineError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
                OutlineError::Generation(_) | OutlineError::Storage(_) => {
                    tracing::error!(error = %err, "request failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "internal server error".to_string(),
                    )
                }
            },
            ApiError::UnknownId => (StatusCode::NOT_FOUND, "outline not found".to_string()),
            ApiError::MalformedEditPath => (
                StatusCode::BAD_REQUEST,
                "edit path must reference exactly one node".to_string(),
            ),
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

/// Parse an outline id from the URL path
///
/// An id that does not parse cannot name an existing document, so the
/// honest answer is not-found rather than bad-request.
fn parse_id(raw: &str) -> Result<OutlineId, ApiError> {
    raw.parse().map_err(|_| ApiError::UnknownId)
}

/// Liveness probe
async fn health() -> &'static str {
    "deckplan backend is running"
}

/// `POST /outlines` - create-and-generate
async fn create_outline<G, S>(
    State(service): State<Arc<OutlineService<G, S>>>,
    Json(body): Json<CreateOutlineRequest>,
) -> Result<(StatusCode, Json<Outline>), ApiError>
where
    G: ContentGenerator,
    S: OutlineStore,
{
    let outline = service.create_and_generate(&body.title).await?;
    Ok((StatusCode::CREATED, Json(outline)))
}

/// `POST /outlines/empty` - create without generation
async fn create_empty_outline<G, S>(
    State(service): State<Arc<OutlineService<G, S>>>,
    Json(body): Json<CreateOutlineRequest>,
) -> Result<(StatusCode, Json<Outline>), ApiError>
where
    G: ContentGenerator,
    S: OutlineStore,
{
    let outline = service.create_empty(&body.title).await?;
    Ok((StatusCode::CREATED, Json(outline)))
}

/// `GET /outlines/:id` - fetch
async fn get_outline<G, S>(
    State(service): State<Arc<OutlineService<G, S>>>,
    Path(id): Path<String>,
) -> Result<Json<Outline>, ApiError>
where
    G: ContentGenerator,
    S: OutlineStore,
{
    let id = parse_id(&id)?;
    Ok(Json(service.fetch(id).await?))
}

/// `PUT /outlines/:id` - targeted edit
async fn edit_outline<G, S>(
    State(service): State<Arc<OutlineService<G, S>>>,
    Path(id): Path<String>,
    Json(body): Json<EditOutlineRequest>,
) -> Result<Json<Outline>, ApiError>
where
    G: ContentGenerator,
    S: OutlineStore,
{
    let id = parse_id(&id)?;
    let path = EditPath::try_from(body.edit_path).map_err(|_| ApiError::MalformedEditPath)?;

    let edit = OutlineEdit {
        path,
        new_title: body.new_title,
        regenerate: body.regenerate,
    };
    Ok(Json(service.edit(id, edit).await?))
}

/// Build the application router around a shared service handle
#[must_use]
pub fn router<G, S>(service: Arc<OutlineService<G, S>>) -> Router
where
    G: ContentGenerator + 'static,
    S: OutlineStore + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health))
        .route("/outlines", post(create_outline::<G, S>))
        .route("/outlines/empty", post(create_empty_outline::<G, S>))
        .route(
            "/outlines/:id",
            get(get_outline::<G, S>).put(edit_outline::<G, S>),
        )
        .layer(cors)
        .with_state(service)
}

/// Bind and serve until the process is stopped
///
/// # Errors
/// Returns the bind or accept-loop error.
pub async fn serve<G, S>(
    service: Arc<OutlineService<G, S>>,
    addr: SocketAddr,
) -> std::io::Result<()>
where
    G: ContentGenerator + 'static,
    S: OutlineStore + 'static,
{
    let app = router(service);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "deckplan server listening");
    axum::serve(listener, app).await
}
