use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Items API",
        version = "1.0",
        description = "CRUD API for items"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/items", api = domain_items::ApiDoc)
    )
)]
pub struct ApiDoc;
