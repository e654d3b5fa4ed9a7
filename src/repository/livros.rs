//! Livro domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::livro::Livro,
};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Livro não encontrado com id: {}", id))
}

/// Escape LIKE wildcards so a search fragment matches literally
fn escape_like(fragment: &str) -> String {
    fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

impl Repository {
    /// List all livros in insertion order
    pub async fn livros_list(&self) -> AppResult<Vec<Livro>> {
        let rows = sqlx::query_as::<_, Livro>("SELECT * FROM livros ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a livro by ID
    pub async fn livros_get_by_id(&self, id: i64) -> AppResult<Livro> {
        sqlx::query_as::<_, Livro>("SELECT * FROM livros WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List livros by exact author match
    pub async fn livros_find_by_autor(&self, autor: &str) -> AppResult<Vec<Livro>> {
        let rows = sqlx::query_as::<_, Livro>(
            "SELECT * FROM livros WHERE autor = $1 ORDER BY id",
        )
        .bind(autor)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List livros whose title contains the fragment, case-insensitive
    pub async fn livros_find_by_titulo(&self, titulo: &str) -> AppResult<Vec<Livro>> {
        let rows = sqlx::query_as::<_, Livro>(
            "SELECT * FROM livros WHERE titulo ILIKE ('%' || $1 || '%') ESCAPE '\\' ORDER BY id",
        )
        .bind(escape_like(titulo))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List livros by publication year
    pub async fn livros_find_by_ano(&self, ano: i32) -> AppResult<Vec<Livro>> {
        let rows = sqlx::query_as::<_, Livro>(
            "SELECT * FROM livros WHERE ano = $1 ORDER BY id",
        )
        .bind(ano)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List livros currently available for loan
    pub async fn livros_find_disponiveis(&self) -> AppResult<Vec<Livro>> {
        let rows = sqlx::query_as::<_, Livro>(
            "SELECT * FROM livros WHERE disponivel = TRUE ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a new livro. The database assigns the id and stamps
    /// data_cadastro with its own clock.
    pub async fn livros_insert(
        &self,
        titulo: &str,
        autor: &str,
        ano: i32,
        editora: Option<&str>,
        disponivel: bool,
    ) -> AppResult<Livro> {
        let row = sqlx::query_as::<_, Livro>(
            r#"
            INSERT INTO livros (titulo, autor, ano, editora, disponivel)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(titulo)
        .bind(autor)
        .bind(ano)
        .bind(editora)
        .bind(disponivel)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Overwrite the mutable fields of a livro. The id and data_cadastro
    /// columns are never part of the SET list.
    pub async fn livros_update(
        &self,
        id: i64,
        titulo: &str,
        autor: &str,
        ano: i32,
        editora: Option<&str>,
        disponivel: bool,
    ) -> AppResult<Livro> {
        sqlx::query_as::<_, Livro>(
            r#"
            UPDATE livros
            SET titulo = $1, autor = $2, ano = $3, editora = $4, disponivel = $5
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(titulo)
        .bind(autor)
        .bind(ano)
        .bind(editora)
        .bind(disponivel)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    /// Set only the availability flag of a livro
    pub async fn livros_set_disponivel(&self, id: i64, disponivel: bool) -> AppResult<Livro> {
        sqlx::query_as::<_, Livro>(
            "UPDATE livros SET disponivel = $1 WHERE id = $2 RETURNING *",
        )
        .bind(disponivel)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    /// Delete a livro by ID
    pub async fn livros_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM livros WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    /// Check whether a livro with the exact title exists.
    /// Kept for duplicate prevention; the service does not call it yet.
    pub async fn livros_exists_by_titulo(&self, titulo: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM livros WHERE titulo = $1)")
                .bind(titulo)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Count all livros
    pub async fn livros_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM livros")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count livros currently available for loan
    pub async fn livros_count_disponiveis(&self) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM livros WHERE disponivel = TRUE")
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
