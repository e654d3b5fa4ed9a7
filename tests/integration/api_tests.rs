//! API integration tests
//!
//! These tests run against a live server with a clean database:
//! cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api";

/// Helper to register a livro and return its parsed response body
async fn create_livro(client: &Client, body: Value) -> Value {
    let response = client
        .post(format!("{}/livros", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse create response")
}

/// Helper to delete a livro, ignoring the outcome (test cleanup)
async fn delete_livro(client: &Client, id: i64) {
    let _ = client
        .delete(format!("{}/livros/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_create_defaults_and_full_lifecycle() {
    let client = Client::new();

    // POST without disponivel: assigned id, disponivel defaults to true
    let body = create_livro(
        &client,
        json!({
            "titulo": "O Cortiço",
            "autor": "Aluísio Azevedo",
            "ano": 1890
        }),
    )
    .await;

    let id = body["id"].as_i64().expect("No livro ID");
    assert_eq!(body["disponivel"], true);
    assert_eq!(body["titulo"], "O Cortiço");
    assert!(body["dataCadastro"].is_string());

    // PATCH emprestar: disponivel flips to false
    let response = client
        .patch(format!("{}/livros/{}/emprestar", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["disponivel"], false);

    // GET: still false
    let response = client
        .get(format!("{}/livros/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["disponivel"], false);

    // DELETE: 204
    let response = client
        .delete(format!("{}/livros/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    // GET after delete: 404 with error body
    let response = client
        .get(format!("{}/livros/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], 404);
    assert!(body["message"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_validation_error_has_field_map() {
    let client = Client::new();

    // titulo with 2 chars violates the 3-200 constraint
    let response = client
        .post(format!("{}/livros", BASE_URL))
        .json(&json!({
            "titulo": "Eu",
            "autor": "Augusto dos Anjos",
            "ano": 1912
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], 400);
    assert!(body["errors"]["titulo"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_missing_required_field_has_field_map() {
    let client = Client::new();

    // Omitting titulo must produce the per-field error shape, not a
    // deserialization message
    let response = client
        .post(format!("{}/livros", BASE_URL))
        .json(&json!({
            "autor": "Aluísio Azevedo",
            "ano": 1890
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], 400);
    assert_eq!(body["errors"]["titulo"], "O título é obrigatório");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_title_search_treats_wildcards_literally() {
    let client = Client::new();

    let com_simbolo = create_livro(
        &client,
        json!({
            "titulo": "Cem por Cento 100%",
            "autor": "Autor de Teste",
            "ano": 2020
        }),
    )
    .await;
    let sem_simbolo = create_livro(
        &client,
        json!({
            "titulo": "Livro Sem Porcentagem",
            "autor": "Autor de Teste",
            "ano": 2020
        }),
    )
    .await;
    let id_com = com_simbolo["id"].as_i64().expect("No livro ID");
    let id_sem = sem_simbolo["id"].as_i64().expect("No livro ID");

    // "%25" is the URL encoding of a literal percent sign
    let response = client
        .get(format!("{}/livros/titulo/100%25", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    let matches = body.as_array().expect("Expected an array");
    assert!(matches.iter().any(|livro| livro["id"].as_i64() == Some(id_com)));
    assert!(!matches.iter().any(|livro| livro["id"].as_i64() == Some(id_sem)));

    delete_livro(&client, id_com).await;
    delete_livro(&client, id_sem).await;
}

#[tokio::test]
#[ignore]
async fn test_double_loan_is_idempotent() {
    let client = Client::new();

    let body = create_livro(
        &client,
        json!({
            "titulo": "Memórias Póstumas de Brás Cubas",
            "autor": "Machado de Assis",
            "ano": 1881
        }),
    )
    .await;
    let id = body["id"].as_i64().expect("No livro ID");

    for _ in 0..2 {
        let response = client
            .patch(format!("{}/livros/{}/emprestar", BASE_URL, id))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["disponivel"], false);
    }

    // Return makes it available again
    let response = client
        .patch(format!("{}/livros/{}/devolver", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["disponivel"], true);

    delete_livro(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_title_search_is_case_insensitive() {
    let client = Client::new();

    let body = create_livro(
        &client,
        json!({
            "titulo": "Dom Casmurro",
            "autor": "Machado de Assis",
            "ano": 1899
        }),
    )
    .await;
    let id = body["id"].as_i64().expect("No livro ID");

    for fragment in ["dom", "DOM"] {
        let response = client
            .get(format!("{}/livros/titulo/{}", BASE_URL, fragment))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 200);

        let body: Value = response.json().await.expect("Failed to parse response");
        let found = body
            .as_array()
            .expect("Expected an array")
            .iter()
            .any(|livro| livro["id"].as_i64() == Some(id));
        assert!(found, "fragment {:?} did not match", fragment);
    }

    delete_livro(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_list_disponiveis_returns_available_subset() {
    let client = Client::new();

    let mut ids = Vec::new();
    for titulo in ["Iracema", "Senhora", "Lucíola"] {
        let body = create_livro(
            &client,
            json!({
                "titulo": titulo,
                "autor": "José de Alencar",
                "ano": 1865
            }),
        )
        .await;
        ids.push(body["id"].as_i64().expect("No livro ID"));
    }

    // Loan one of the three
    let response = client
        .patch(format!("{}/livros/{}/emprestar", BASE_URL, ids[0]))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .get(format!("{}/livros/disponiveis", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    let disponiveis = body.as_array().expect("Expected an array");
    assert!(disponiveis.iter().all(|livro| livro["disponivel"] == true));
    assert!(!disponiveis.iter().any(|livro| livro["id"].as_i64() == Some(ids[0])));
    assert!(disponiveis.iter().any(|livro| livro["id"].as_i64() == Some(ids[1])));
    assert!(disponiveis.iter().any(|livro| livro["id"].as_i64() == Some(ids[2])));

    for id in ids {
        delete_livro(&client, id).await;
    }
}

#[tokio::test]
#[ignore]
async fn test_search_by_autor_is_exact_match() {
    let client = Client::new();

    let body = create_livro(
        &client,
        json!({
            "titulo": "Grande Sertão: Veredas",
            "autor": "João Guimarães Rosa",
            "ano": 1956
        }),
    )
    .await;
    let id = body["id"].as_i64().expect("No livro ID");

    let response = client
        .get(format!("{}/livros/autor/João Guimarães Rosa", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body
        .as_array()
        .expect("Expected an array")
        .iter()
        .any(|livro| livro["id"].as_i64() == Some(id)));

    // Partial author name does not match
    let response = client
        .get(format!("{}/livros/autor/Guimarães", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(!body
        .as_array()
        .expect("Expected an array")
        .iter()
        .any(|livro| livro["id"].as_i64() == Some(id)));

    delete_livro(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_update_preserves_creation_timestamp() {
    let client = Client::new();

    let body = create_livro(
        &client,
        json!({
            "titulo": "Vidas Secas",
            "autor": "Graciliano Ramos",
            "ano": 1938
        }),
    )
    .await;
    let id = body["id"].as_i64().expect("No livro ID");
    let data_cadastro = body["dataCadastro"].clone();

    let response = client
        .put(format!("{}/livros/{}", BASE_URL, id))
        .json(&json!({
            "titulo": "Vidas Secas (edição revista)",
            "autor": "Graciliano Ramos",
            "ano": 1938,
            "editora": "Record"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["titulo"], "Vidas Secas (edição revista)");
    assert_eq!(body["editora"], "Record");
    // Omitting disponivel in the update resolves to true
    assert_eq!(body["disponivel"], true);
    // The creation timestamp is immutable across updates
    assert_eq!(body["dataCadastro"], data_cadastro);

    delete_livro(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_update_nonexistent_returns_404_and_creates_nothing() {
    let client = Client::new();

    let response = client
        .put(format!("{}/livros/999999999", BASE_URL))
        .json(&json!({
            "titulo": "Livro Fantasma",
            "autor": "Autor Nenhum",
            "ano": 2000
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let response = client
        .get(format!("{}/livros/999999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_delete_nonexistent_returns_404() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/livros/999999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_estatisticas() {
    let client = Client::new();

    let response = client
        .get(format!("{}/livros/estatisticas", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["total"].is_number());
    assert!(body["disponiveis"].is_number());
}
