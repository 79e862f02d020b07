//! HTTP Route Tests
//!
//! Drives the full router in-process and checks status codes, bodies and the
//! data file after each request.

use std::fs;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use pokedex::catalog::PokemonCatalog;
use pokedex::http_server::{HttpServer, HttpServerConfig};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

const SEED: &str = "#,Name,Type 1,Type 2,Total,HP,Attack,Defense,Sp. Atk,Sp. Def,Speed,Generation,Legendary
1,Bulbasaur,Grass,Poison,318,45,49,49,65,65,45,1,False
122,Mr. Mime,Psychic,Fairy,460,40,45,65,100,120,90,1,False
4,Charmander,Fire,,309,39,52,43,60,50,65,1,False";

fn setup() -> (TempDir, Router) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("pokemon.csv");
    fs::write(&path, SEED).unwrap();

    let catalog = PokemonCatalog::load(&path).unwrap();
    let router = HttpServer::new(HttpServerConfig::default(), catalog).router();
    (tmp, router)
}

fn data_file(tmp: &TempDir) -> String {
    fs::read_to_string(tmp.path().join("pokemon.csv")).unwrap()
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn squirtle() -> Value {
    json!({
        "#": 7, "Name": "Squirtle", "Type 1": "Water",
        "Total": 314, "HP": 44, "Attack": 48, "Defense": 65,
        "Sp. Atk": 50, "Sp. Def": 64, "Speed": 43, "Generation": 1,
        "Legendary": false
    })
}

// =============================================================================
// Read Tests
// =============================================================================

#[tokio::test]
async fn test_health() {
    let (_tmp, router) = setup();
    let (status, body) = send(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"ok\""));
}

#[tokio::test]
async fn test_get_pokemon() {
    let (_tmp, router) = setup();

    let (status, body) = send(&router, Method::GET, "/getPokemon/Charmander", None).await;
    assert_eq!(status, StatusCode::OK);
    let record: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(record["#"], 4);
    assert_eq!(record["Type 2"], Value::Null);
    assert_eq!(record["Legendary"], false);

    let (status, _) = send(&router, Method::GET, "/getPokemon/Mr.%20Mime", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_get_missing_pokemon() {
    let (_tmp, router) = setup();
    let (status, body) = send(&router, Method::GET, "/getPokemon/Mew", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Pokemon not found.");
}

#[tokio::test]
async fn test_catalog_pages() {
    let (_tmp, router) = setup();

    let (status, body) = send(&router, Method::GET, "/getPokemonCatalog/0", None).await;
    assert_eq!(status, StatusCode::OK);
    let page: Vec<Value> = serde_json::from_str(&body).unwrap();
    let names: Vec<_> = page.iter().map(|r| r["Name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Bulbasaur", "Charmander", "Mr. Mime"]);

    let (status, body) = send(&router, Method::GET, "/getPokemonCatalog/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_catalog_bad_page() {
    let (_tmp, router) = setup();
    for page in ["abc", "-1"] {
        let (status, body) = send(&router, Method::GET, &format!("/getPokemonCatalog/{}", page), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "page {}", page);
        assert_eq!(
            body,
            "A page number is required in the request URI. The page number must be a positive integer."
        );
    }
}

#[tokio::test]
async fn test_catalog_huge_page_is_empty() {
    let (_tmp, router) = setup();
    let (status, body) = send(&router, Method::GET, "/getPokemonCatalog/99999999999999999999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

// =============================================================================
// Create Tests
// =============================================================================

#[tokio::test]
async fn test_create_pokemon() {
    let (tmp, router) = setup();

    let (status, body) = send(&router, Method::POST, "/createPokemon", Some(squirtle())).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    assert!(data_file(&tmp).ends_with("\n7,Squirtle,Water,,314,44,48,65,50,64,43,1,false"));

    let (status, body) = send(&router, Method::GET, "/getPokemon/Squirtle", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["Speed"], 43);
}

#[tokio::test]
async fn test_create_conflict() {
    let (tmp, router) = setup();
    let mut body = squirtle();
    body["Name"] = json!("Bulbasaur");

    let (status, message) = send(&router, Method::POST, "/createPokemon", Some(body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(message, "A pokemon with that name already exists.");
    assert_eq!(data_file(&tmp), SEED);
}

#[tokio::test]
async fn test_create_validation_messages() {
    let (_tmp, router) = setup();
    let mut body = squirtle();
    body.as_object_mut().unwrap().remove("#");
    body["Legendary"] = json!("yes");

    let (status, message) = send(&router, Method::POST, "/createPokemon", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        message,
        "Attribute '#' must be an integer, greater than 1 and must not be null.\n\
         Attribute 'Legendary' must be a boolean and must not be null."
    );
}

#[tokio::test]
async fn test_create_rejects_delimiter_in_text() {
    let (tmp, router) = setup();
    let mut body = squirtle();
    body["Name"] = json!("Squirt,le");

    let (status, message) = send(&router, Method::POST, "/createPokemon", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message, "Attribute 'Name' must not contain commas or line breaks.");
    assert_eq!(data_file(&tmp), SEED);
}

#[tokio::test]
async fn test_create_malformed_json() {
    let (_tmp, router) = setup();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/createPokemon")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Update Tests
// =============================================================================

#[tokio::test]
async fn test_update_pokemon() {
    let (tmp, router) = setup();

    let body = json!({"Type 2": "Dragon", "Attack": 60});
    let (status, _) = send(&router, Method::PUT, "/updatePokemon/Charmander", Some(body)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(data_file(&tmp).contains("\n4,Charmander,Fire,Dragon,309,39,60,43,60,50,65,1,false"));
}

#[tokio::test]
async fn test_update_rename() {
    let (_tmp, router) = setup();

    let body = json!({"Name": "Charmeleon", "#": 5});
    let (status, _) = send(&router, Method::PUT, "/updatePokemon/Charmander", Some(body)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&router, Method::GET, "/getPokemon/Charmander", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, body) = send(&router, Method::GET, "/getPokemon/Charmeleon", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["#"], 5);
}

#[tokio::test]
async fn test_update_errors() {
    let (tmp, router) = setup();

    let (status, _) = send(&router, Method::PUT, "/updatePokemon/Mew", Some(json!({"HP": 1}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, message) =
        send(&router, Method::PUT, "/updatePokemon/Bulbasaur", Some(json!({"hp": 1}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message.starts_with("updatePokemon request body must contain at least 1 of the following fields: '#'"));

    let (status, message) =
        send(&router, Method::PUT, "/updatePokemon/Bulbasaur", Some(json!({"Name": "Charmander"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(message, "A pokemon with the new entered name already exists.");

    assert_eq!(data_file(&tmp), SEED);
}

// =============================================================================
// Delete Tests
// =============================================================================

#[tokio::test]
async fn test_delete_pokemon() {
    let (tmp, router) = setup();

    let (status, _) = send(&router, Method::DELETE, "/deletePokemon/Bulbasaur", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(!data_file(&tmp).contains("Bulbasaur"));

    let (status, body) = send(&router, Method::DELETE, "/deletePokemon/Bulbasaur", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Pokemon not found.");
}
