//! Livro API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::livro::{LivroRequest, LivroResponse},
    services::catalog::CatalogStats,
};

use super::ValidatedJson;

/// Register a new livro
#[utoipa::path(
    post,
    path = "/livros",
    tag = "livros",
    request_body = LivroRequest,
    responses(
        (status = 201, description = "Livro registered", body = LivroResponse),
        (status = 400, description = "Invalid input", body = crate::error::ValidationErrorResponse)
    )
)]
pub async fn cadastrar_livro(
    State(state): State<crate::AppState>,
    ValidatedJson(request): ValidatedJson<LivroRequest>,
) -> AppResult<(StatusCode, Json<LivroResponse>)> {
    let livro = state.services.catalog.cadastrar(&request).await?;
    Ok((StatusCode::CREATED, Json(livro)))
}

/// List all livros
#[utoipa::path(
    get,
    path = "/livros",
    tag = "livros",
    responses(
        (status = 200, description = "Full catalog list", body = Vec<LivroResponse>)
    )
)]
pub async fn listar_livros(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<LivroResponse>>> {
    let livros = state.services.catalog.listar_todos().await?;
    Ok(Json(livros))
}

/// Get a livro by ID
#[utoipa::path(
    get,
    path = "/livros/{id}",
    tag = "livros",
    params(("id" = i64, Path, description = "Livro ID")),
    responses(
        (status = 200, description = "Livro details", body = LivroResponse),
        (status = 404, description = "Livro not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn buscar_livro(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<LivroResponse>> {
    let livro = state.services.catalog.buscar_por_id(id).await?;
    Ok(Json(livro))
}

/// List livros by exact author match
#[utoipa::path(
    get,
    path = "/livros/autor/{autor}",
    tag = "livros",
    params(("autor" = String, Path, description = "Author name")),
    responses(
        (status = 200, description = "Livros by the author", body = Vec<LivroResponse>)
    )
)]
pub async fn buscar_por_autor(
    State(state): State<crate::AppState>,
    Path(autor): Path<String>,
) -> AppResult<Json<Vec<LivroResponse>>> {
    let livros = state.services.catalog.buscar_por_autor(&autor).await?;
    Ok(Json(livros))
}

/// Search livros by title fragment, case-insensitive
#[utoipa::path(
    get,
    path = "/livros/titulo/{titulo}",
    tag = "livros",
    params(("titulo" = String, Path, description = "Title fragment")),
    responses(
        (status = 200, description = "Livros matching the fragment", body = Vec<LivroResponse>)
    )
)]
pub async fn buscar_por_titulo(
    State(state): State<crate::AppState>,
    Path(titulo): Path<String>,
) -> AppResult<Json<Vec<LivroResponse>>> {
    let livros = state.services.catalog.buscar_por_titulo(&titulo).await?;
    Ok(Json(livros))
}

/// List livros published in a given year
#[utoipa::path(
    get,
    path = "/livros/ano/{ano}",
    tag = "livros",
    params(("ano" = i32, Path, description = "Publication year")),
    responses(
        (status = 200, description = "Livros published that year", body = Vec<LivroResponse>)
    )
)]
pub async fn buscar_por_ano(
    State(state): State<crate::AppState>,
    Path(ano): Path<i32>,
) -> AppResult<Json<Vec<LivroResponse>>> {
    let livros = state.services.catalog.buscar_por_ano(ano).await?;
    Ok(Json(livros))
}

/// List livros available for loan
#[utoipa::path(
    get,
    path = "/livros/disponiveis",
    tag = "livros",
    responses(
        (status = 200, description = "Available livros", body = Vec<LivroResponse>)
    )
)]
pub async fn listar_disponiveis(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<LivroResponse>>> {
    let livros = state.services.catalog.listar_disponiveis().await?;
    Ok(Json(livros))
}

/// Catalog statistics
#[utoipa::path(
    get,
    path = "/livros/estatisticas",
    tag = "livros",
    responses(
        (status = 200, description = "Catalog counts", body = CatalogStats)
    )
)]
pub async fn estatisticas(
    State(state): State<crate::AppState>,
) -> AppResult<Json<CatalogStats>> {
    let stats = state.services.catalog.estatisticas().await?;
    Ok(Json(stats))
}

/// Update all fields of a livro
#[utoipa::path(
    put,
    path = "/livros/{id}",
    tag = "livros",
    params(("id" = i64, Path, description = "Livro ID")),
    request_body = LivroRequest,
    responses(
        (status = 200, description = "Livro updated", body = LivroResponse),
        (status = 400, description = "Invalid input", body = crate::error::ValidationErrorResponse),
        (status = 404, description = "Livro not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn atualizar_livro(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<LivroRequest>,
) -> AppResult<Json<LivroResponse>> {
    let livro = state.services.catalog.atualizar(id, &request).await?;
    Ok(Json(livro))
}

/// Mark a livro as on loan
#[utoipa::path(
    patch,
    path = "/livros/{id}/emprestar",
    tag = "livros",
    params(("id" = i64, Path, description = "Livro ID")),
    responses(
        (status = 200, description = "Livro loaned", body = LivroResponse),
        (status = 404, description = "Livro not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn emprestar_livro(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<LivroResponse>> {
    let livro = state.services.catalog.emprestar(id).await?;
    Ok(Json(livro))
}

/// Mark a livro as returned
#[utoipa::path(
    patch,
    path = "/livros/{id}/devolver",
    tag = "livros",
    params(("id" = i64, Path, description = "Livro ID")),
    responses(
        (status = 200, description = "Livro returned", body = LivroResponse),
        (status = 404, description = "Livro not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn devolver_livro(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<LivroResponse>> {
    let livro = state.services.catalog.devolver(id).await?;
    Ok(Json(livro))
}

/// Delete a livro
#[utoipa::path(
    delete,
    path = "/livros/{id}",
    tag = "livros",
    params(("id" = i64, Path, description = "Livro ID")),
    responses(
        (status = 204, description = "Livro deleted"),
        (status = 404, description = "Livro not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn deletar_livro(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.catalog.deletar(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
