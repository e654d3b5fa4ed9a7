//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, livros};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteca API",
        version = "0.1.0",
        description = "Library Catalog Management REST API",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Livros
        livros::cadastrar_livro,
        livros::listar_livros,
        livros::buscar_livro,
        livros::buscar_por_autor,
        livros::buscar_por_titulo,
        livros::buscar_por_ano,
        livros::listar_disponiveis,
        livros::estatisticas,
        livros::atualizar_livro,
        livros::emprestar_livro,
        livros::devolver_livro,
        livros::deletar_livro,
    ),
    components(
        schemas(
            // Livros
            crate::models::livro::Livro,
            crate::models::livro::LivroRequest,
            crate::models::livro::LivroResponse,
            crate::services::catalog::CatalogStats,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
            crate::error::ValidationErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "livros", description = "Library catalog management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
