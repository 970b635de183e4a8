use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use models::contact::Model as Contact;
use serde::Deserialize;
use service::{contact::domain::ContactInput, errors::ServiceError};
use tracing::{debug, info};

use crate::{errors::JsonApiError, routes::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Name to look up, case-insensitive
    pub nome: Option<String>,
}

#[utoipa::path(
    get, path = "/api/contatos", tag = "contatos",
    responses((status = 200, description = "All contacts", body = [crate::openapi::ContactDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Contact>>, JsonApiError> {
    let all = state.contacts.list().await?;
    debug!(count = all.len(), "list contacts");
    Ok(Json(all))
}

#[utoipa::path(
    get, path = "/api/contatos/{id}", tag = "contatos",
    params(("id" = i64, Path, description = "Contact id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ContactDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<Contact>, JsonApiError> {
    match state.contacts.get(id).await? {
        Some(c) => Ok(Json(c)),
        None => Err(JsonApiError::not_found(format!("no contact with id {id}"))),
    }
}

#[utoipa::path(
    get, path = "/api/contatos/pesquisar", tag = "contatos",
    params(SearchQuery),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ContactDoc),
        (status = 400, description = "Missing 'nome'", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn search(State(state): State<ServerState>, Query(q): Query<SearchQuery>) -> Result<Json<Contact>, JsonApiError> {
    find_by_name(&state, q.nome.as_deref()).await
}

#[utoipa::path(
    get, path = "/api/contatos/nome/{nome}", tag = "contatos",
    params(("nome" = String, Path, description = "Name to look up, case-insensitive")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ContactDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_by_name(State(state): State<ServerState>, Path(nome): Path<String>) -> Result<Json<Contact>, JsonApiError> {
    find_by_name(&state, Some(nome.as_str())).await
}

async fn find_by_name(state: &ServerState, nome: Option<&str>) -> Result<Json<Contact>, JsonApiError> {
    match state.contacts.find_by_name(nome).await? {
        Some(c) => Ok(Json(c)),
        None => Err(JsonApiError::not_found(format!(
            "no contact named '{}'",
            nome.unwrap_or_default()
        ))),
    }
}

#[utoipa::path(
    post, path = "/api/contatos", tag = "contatos",
    request_body = crate::openapi::ContactInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ContactDoc),
        (status = 409, description = "Id or name already exists; an id conflict returns the existing contact")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(input): Json<ContactInput>,
) -> Result<Response, JsonApiError> {
    match state.contacts.create(input).await {
        Ok(created) => {
            let location = contact_location(&headers, created.id);
            info!(id = created.id, %location, "created contact");
            Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)).into_response())
        }
        Err(ServiceError::DuplicateId(existing)) => {
            info!(id = existing.id, "create rejected: id exists");
            Ok((StatusCode::CONFLICT, Json(existing)).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Absolute URL of a contact, from the request's `Host` (and `X-Forwarded-Proto`
/// behind a proxy). Without a `Host` only the path is returned.
fn contact_location(headers: &HeaderMap, id: i64) -> String {
    let path = format!("/api/contatos/{id}");
    let Some(host) = headers.get(header::HOST).and_then(|v| v.to_str().ok()) else {
        return path;
    };
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    format!("{scheme}://{host}{path}")
}

#[utoipa::path(
    put, path = "/api/contatos/{id}", tag = "contatos",
    params(("id" = i64, Path, description = "Contact id")),
    request_body = crate::openapi::ContactInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ContactDoc),
        (status = 400, description = "Path id and body id differ", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Name taken by another contact", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<ContactInput>,
) -> Result<Json<Contact>, JsonApiError> {
    let updated = state.contacts.update(id, input).await?;
    info!(id, "updated contact");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/contatos/{id}", tag = "contatos",
    params(("id" = i64, Path, description = "Contact id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.contacts.delete(id).await?;
    info!(id, "deleted contact");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn location_uses_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("agenda.local:8081"));
        assert_eq!(contact_location(&headers, 7), "http://agenda.local:8081/api/contatos/7");

        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        assert_eq!(contact_location(&headers, 7), "https://agenda.local:8081/api/contatos/7");
    }

    #[test]
    fn location_without_host_is_a_path() {
        assert_eq!(contact_location(&HeaderMap::new(), 2147483648), "/api/contatos/2147483648");
    }
}
