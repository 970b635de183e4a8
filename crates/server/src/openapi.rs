use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ContactDoc {
    pub id: i64,
    pub nome: String,
    pub telefone: String,
}

/// `id` may be omitted on create; on update it must equal the path id.
#[derive(ToSchema)]
pub struct ContactInputDoc {
    pub id: Option<i64>,
    pub nome: String,
    pub telefone: String,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub message: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::contacts::list,
        crate::routes::contacts::get,
        crate::routes::contacts::search,
        crate::routes::contacts::get_by_name,
        crate::routes::contacts::create,
        crate::routes::contacts::update,
        crate::routes::contacts::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ContactDoc,
            ContactInputDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "contatos")
    )
)]
pub struct ApiDoc;
