//! Catalog management service

use crate::{
    error::AppResult,
    models::livro::{LivroRequest, LivroResponse},
    repository::Repository,
};

/// Catalog statistics
#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub struct CatalogStats {
    pub total: i64,
    pub disponiveis: i64,
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new livro. The repository assigns the id and the
    /// creation timestamp; availability defaults to true when absent.
    pub async fn cadastrar(&self, request: &LivroRequest) -> AppResult<LivroResponse> {
        let livro = self
            .repository
            .livros_insert(
                request.titulo(),
                request.autor(),
                request.ano(),
                request.editora.as_deref(),
                request.disponivel_ou_padrao(),
            )
            .await?;
        Ok(livro.into())
    }

    /// List all livros in insertion order
    pub async fn listar_todos(&self) -> AppResult<Vec<LivroResponse>> {
        let livros = self.repository.livros_list().await?;
        Ok(livros.into_iter().map(Into::into).collect())
    }

    /// Get a livro by ID
    pub async fn buscar_por_id(&self, id: i64) -> AppResult<LivroResponse> {
        let livro = self.repository.livros_get_by_id(id).await?;
        Ok(livro.into())
    }

    /// List livros by exact author match
    pub async fn buscar_por_autor(&self, autor: &str) -> AppResult<Vec<LivroResponse>> {
        let livros = self.repository.livros_find_by_autor(autor).await?;
        Ok(livros.into_iter().map(Into::into).collect())
    }

    /// List livros whose title contains the fragment, case-insensitive
    pub async fn buscar_por_titulo(&self, titulo: &str) -> AppResult<Vec<LivroResponse>> {
        let livros = self.repository.livros_find_by_titulo(titulo).await?;
        Ok(livros.into_iter().map(Into::into).collect())
    }

    /// List livros published in the given year
    pub async fn buscar_por_ano(&self, ano: i32) -> AppResult<Vec<LivroResponse>> {
        let livros = self.repository.livros_find_by_ano(ano).await?;
        Ok(livros.into_iter().map(Into::into).collect())
    }

    /// List livros currently available for loan
    pub async fn listar_disponiveis(&self) -> AppResult<Vec<LivroResponse>> {
        let livros = self.repository.livros_find_disponiveis().await?;
        Ok(livros.into_iter().map(Into::into).collect())
    }

    /// Overwrite all mutable fields of a livro. The id and creation
    /// timestamp are never touched; availability defaults to true when
    /// absent from the request.
    pub async fn atualizar(&self, id: i64, request: &LivroRequest) -> AppResult<LivroResponse> {
        let livro = self
            .repository
            .livros_update(
                id,
                request.titulo(),
                request.autor(),
                request.ano(),
                request.editora.as_deref(),
                request.disponivel_ou_padrao(),
            )
            .await?;
        Ok(livro.into())
    }

    /// Mark a livro as on loan. Idempotent: loaning an already
    /// unavailable livro succeeds and leaves it unavailable.
    pub async fn emprestar(&self, id: i64) -> AppResult<LivroResponse> {
        let livro = self.repository.livros_set_disponivel(id, false).await?;
        Ok(livro.into())
    }

    /// Mark a livro as returned. Idempotent likewise.
    pub async fn devolver(&self, id: i64) -> AppResult<LivroResponse> {
        let livro = self.repository.livros_set_disponivel(id, true).await?;
        Ok(livro.into())
    }

    /// Delete a livro, failing with NotFound if it does not exist
    pub async fn deletar(&self, id: i64) -> AppResult<()> {
        self.repository.livros_delete(id).await
    }

    /// Catalog counts for the statistics endpoint
    pub async fn estatisticas(&self) -> AppResult<CatalogStats> {
        let total = self.repository.livros_count().await?;
        let disponiveis = self.repository.livros_count_disponiveis().await?;
        Ok(CatalogStats { total, disponiveis })
    }
}
