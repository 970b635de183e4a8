use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::contact::{repo::seaorm::SeaOrmContactRepository, ContactService};

use crate::openapi::ApiDoc;

pub mod contacts;

pub type Contacts = ContactService<SeaOrmContactRepository>;

#[derive(Clone)]
pub struct ServerState {
    pub contacts: Arc<Contacts>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmContactRepository::new(db));
        Self { contacts: Arc::new(ContactService::new(repo)) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, API document and contact routes.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    // the static `pesquisar` segment takes priority over `:id`
    let api = Router::new()
        .route("/api/contatos", get(contacts::list).post(contacts::create))
        .route("/api/contatos/pesquisar", get(contacts::search))
        .route("/api/contatos/nome/:nome", get(contacts::get_by_name))
        .route(
            "/api/contatos/:id",
            get(contacts::get).put(contacts::update).delete(contacts::delete),
        );

    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
