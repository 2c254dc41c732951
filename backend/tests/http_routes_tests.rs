#![cfg(feature = "http-server")]

//! End-to-end tests for the REST API against an in-memory repository.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use colegio_backend::db::LocalRepository;
use colegio_backend::http::{create_router, AppState};
use colegio_backend::routes::distribution::{DistributionReport, DistributionRow, RESIDUAL_HEADER};

fn test_server() -> (TestServer, LocalRepository) {
    let repo = LocalRepository::new();
    let state = AppState::new(Arc::new(repo.clone()));
    let server = TestServer::new(create_router(state)).unwrap();
    (server, repo)
}

/// School 1 with "Primero" (rooms A=10, B=5) and "Segundo" (room C=5).
async fn seed_school(server: &TestServer) {
    server
        .post("/api/Colegio")
        .json(&json!({"name": "San Martín", "address": "Calle 1", "phone": "555", "password": "secreto"}))
        .await
        .assert_status(StatusCode::CREATED);
    for name in ["Primero", "Segundo"] {
        server
            .post("/api/Cursos")
            .json(&json!({"name": name, "description": "", "colegioId": 1}))
            .await
            .assert_status(StatusCode::CREATED);
    }
    for (name, curso, amount) in [("A", 1, 10), ("B", 1, 5), ("C", 2, 5)] {
        server
            .post("/api/Salones")
            .json(&json!({"name": name, "cursoId": curso, "amount": amount}))
            .await
            .assert_status(StatusCode::CREATED);
    }
}

#[tokio::test]
async fn test_health() {
    let (server, _) = test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_health_reports_disconnected_repository() {
    let (server, repo) = test_server();
    repo.set_healthy(false);
    let body: Value = server.get("/health").await.json();
    assert_eq!(body["database"], "disconnected");
}

#[tokio::test]
async fn test_create_and_list_colegio_hides_secret() {
    let (server, _) = test_server();
    let response = server
        .post("/api/Colegio")
        .json(&json!({"name": "  San Martín ", "address": "Calle 1", "phone": "555", "password": "secreto"}))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "San Martín");
    assert!(created.get("password").is_none());
    assert!(created.get("secretHash").is_none());

    let list: Vec<Value> = server.get("/api/Colegio").await.json();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["phone"], "555");
}

#[tokio::test]
async fn test_create_colegio_validation() {
    let (server, repo) = test_server();
    let response = server
        .post("/api/Colegio")
        .json(&json!({"name": "A", "password": "123"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "Password must be at least 6 characters");

    server
        .post("/api/Colegio")
        .json(&json!({"name": " ", "password": "secreto"}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(repo.school_count(), 0);
}

#[tokio::test]
async fn test_create_curso_requires_existing_school() {
    let (server, _) = test_server();
    server
        .post("/api/Cursos")
        .json(&json!({"name": "Primero", "colegioId": 7}))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let response = server
        .post("/api/Cursos")
        .json(&json!({"name": "Primero"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "A school must be selected");
}

#[tokio::test]
async fn test_create_salon_validation() {
    let (server, _) = test_server();
    seed_school(&server).await;

    server
        .post("/api/Salones")
        .json(&json!({"name": "D", "cursoId": 1, "amount": -3}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .post("/api/Salones")
        .json(&json!({"name": "D", "cursoId": 1}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .post("/api/Salones")
        .json(&json!({"name": "D", "cursoId": 99, "amount": 3}))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let rooms: Vec<Value> = server.get("/api/Salones").await.json();
    assert_eq!(rooms.len(), 3);
    assert_eq!(rooms[2]["cursoId"], 2);
}

#[tokio::test]
async fn test_list_cursos() {
    let (server, _) = test_server();
    seed_school(&server).await;
    let courses: Vec<Value> = server.get("/api/Cursos").await.json();
    let names: Vec<&str> = courses.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Primero", "Segundo"]);
    assert!(courses.iter().all(|c| c["colegioId"] == 1));
}

#[tokio::test]
async fn test_distribute_rows_and_residual_header() {
    let (server, _) = test_server();
    seed_school(&server).await;

    let response = server.get("/api/Distribucion/1/distribuir/15").await;
    response.assert_status_ok();
    assert_eq!(response.header(RESIDUAL_HEADER), "0");

    let rows: Vec<DistributionRow> = response.json();
    let view: Vec<(&str, &str, u64)> = rows
        .iter()
        .map(|r| (r.curso_name.as_str(), r.salon_name.as_str(), r.cantidad_asignada))
        .collect();
    assert_eq!(
        view,
        vec![("Primero", "A", 8), ("Primero", "B", 4), ("Segundo", "C", 3)]
    );
}

#[tokio::test]
async fn test_distribute_over_capacity() {
    let (server, _) = test_server();
    seed_school(&server).await;

    let response = server.get("/api/Distribucion/1/distribuir/25").await;
    response.assert_status_ok();
    assert_eq!(response.header(RESIDUAL_HEADER), "5");
    let rows: Vec<Value> = response.json();
    let counts: Vec<u64> = rows
        .iter()
        .map(|r| r["cantidadAsignada"].as_u64().unwrap())
        .collect();
    assert_eq!(counts, vec![10, 5, 5]);
}

#[tokio::test]
async fn test_distribution_summary() {
    let (server, _) = test_server();
    seed_school(&server).await;

    let report: DistributionReport = server.get("/api/Distribucion/1/resumen/25").await.json();
    assert_eq!(report.cantidad_solicitada, 25);
    assert_eq!(report.cantidad_asignada, 20);
    assert_eq!(report.residual, 5);
    assert!(!report.completa);
    assert_eq!(report.asignaciones.len(), 3);
}

#[tokio::test]
async fn test_distribute_invalid_quantity() {
    let (server, _) = test_server();
    seed_school(&server).await;

    for path in ["/api/Distribucion/1/distribuir/0", "/api/Distribucion/1/distribuir/-4"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_QUANTITY");
        assert!(body["message"].as_str().unwrap().contains("greater than zero"));
    }
}

#[tokio::test]
async fn test_distribute_unknown_school() {
    let (server, _) = test_server();
    let response = server.get("/api/Distribucion/42/distribuir/10").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], "SCHOOL_NOT_FOUND");
}

#[tokio::test]
async fn test_distribute_school_without_rooms_is_empty() {
    let (server, _) = test_server();
    server
        .post("/api/Colegio")
        .json(&json!({"name": "Vacío", "password": "secreto"}))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/api/Cursos")
        .json(&json!({"name": "Primero", "colegioId": 1}))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/api/Distribucion/1/distribuir/6").await;
    response.assert_status_ok();
    assert_eq!(response.header(RESIDUAL_HEADER), "6");
    let rows: Vec<Value> = response.json();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_non_integer_quantity_rejected_with_json_message() {
    let (server, _) = test_server();
    seed_school(&server).await;

    for path in [
        "/api/Distribucion/1/distribuir/diez",
        "/api/Distribucion/1/distribuir/2.5",
        "/api/Distribucion/1/resumen/2.5",
    ] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], "BAD_REQUEST");
        let message = body["message"].as_str().unwrap();
        assert!(message.contains("whole number"), "{path}: {message}");
    }
}

#[tokio::test]
async fn test_non_integer_school_id_rejected_with_json_message() {
    let (server, _) = test_server();
    let response = server.get("/api/Distribucion/uno/distribuir/3").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("school id"));
}

#[tokio::test]
async fn test_create_salon_accepts_amount_as_text() {
    let (server, _) = test_server();
    seed_school(&server).await;

    let response = server
        .post("/api/Salones")
        .json(&json!({"name": "D", "cursoId": 2, "amount": "30"}))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert_eq!(created["amount"], 30);

    let report: DistributionReport = server.get("/api/Distribucion/1/resumen/50").await.json();
    assert_eq!(report.cantidad_asignada, 50);
}

#[tokio::test]
async fn test_create_salon_rejects_non_numeric_amount_text() {
    let (server, repo) = test_server();
    seed_school(&server).await;

    for amount in [json!("treinta"), json!("2.5"), json!(2.5)] {
        let response = server
            .post("/api/Salones")
            .json(&json!({"name": "D", "cursoId": 1, "amount": amount}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["message"].as_str().unwrap().contains("whole number"));
    }
    assert_eq!(repo.room_count(), 3);
}

#[tokio::test]
async fn test_undecodable_bodies_get_json_errors() {
    let (server, repo) = test_server();

    let response = server.post("/api/Colegio").json(&json!({"name": "Y"})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["message"].as_str().unwrap().contains("password"));

    let response = server
        .post("/api/Cursos")
        .json(&json!({"name": "Primero", "colegioId": "uno"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["message"].is_string());

    let response = server.post("/api/Salones").text("not json").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["message"].is_string());

    assert_eq!(repo.school_count(), 0);
}

#[tokio::test]
async fn test_repository_outage_maps_to_service_unavailable() {
    let (server, repo) = test_server();
    seed_school(&server).await;
    repo.set_healthy(false);

    server
        .get("/api/Colegio")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let response = server.get("/api/Distribucion/1/distribuir/5").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.header("retry-after"), "1");
}
