//! Livro model and transfer types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Livro record, one row of the `livros` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Livro {
    pub id: i64,
    pub titulo: String,
    pub autor: String,
    /// Publication year
    pub ano: i32,
    /// Publisher (optional)
    pub editora: Option<String>,
    /// Whether the book can currently be loaned
    pub disponivel: bool,
    /// Set once by the database at insert time, never updated
    pub data_cadastro: DateTime<Utc>,
}

/// Create/update request body for a livro.
///
/// Required fields are `Option` so that a body omitting them still
/// deserializes and fails validation with a per-field message instead
/// of a serde error.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LivroRequest {
    #[validate(
        required(message = "O título é obrigatório"),
        length(min = 3, max = 200, message = "O título deve ter entre 3 e 200 caracteres")
    )]
    pub titulo: Option<String>,
    #[validate(
        required(message = "O autor é obrigatório"),
        length(min = 3, max = 150, message = "O autor deve ter entre 3 e 150 caracteres")
    )]
    pub autor: Option<String>,
    #[validate(
        required(message = "O ano é obrigatório"),
        range(min = 1000, max = 2100, message = "O ano deve estar entre 1000 e 2100")
    )]
    pub ano: Option<i32>,
    #[validate(length(max = 100, message = "A editora deve ter no máximo 100 caracteres"))]
    pub editora: Option<String>,
    /// Optional, resolves to true when absent
    pub disponivel: Option<bool>,
}

impl LivroRequest {
    /// Title of a validated request
    pub fn titulo(&self) -> &str {
        self.titulo.as_deref().unwrap_or_default()
    }

    /// Author of a validated request
    pub fn autor(&self) -> &str {
        self.autor.as_deref().unwrap_or_default()
    }

    /// Publication year of a validated request
    pub fn ano(&self) -> i32 {
        self.ano.unwrap_or_default()
    }

    /// Availability requested by the client, defaulting to available
    pub fn disponivel_ou_padrao(&self) -> bool {
        self.disponivel.unwrap_or(true)
    }
}

/// Response body for a livro
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LivroResponse {
    pub id: i64,
    pub titulo: String,
    pub autor: String,
    pub ano: i32,
    pub editora: Option<String>,
    pub disponivel: bool,
    #[serde(rename = "dataCadastro")]
    pub data_cadastro: DateTime<Utc>,
}

impl From<Livro> for LivroResponse {
    fn from(livro: Livro) -> Self {
        Self {
            id: livro.id,
            titulo: livro.titulo,
            autor: livro.autor,
            ano: livro.ano,
            editora: livro.editora,
            disponivel: livro.disponivel,
            data_cadastro: livro.data_cadastro,
        }
    }
}
