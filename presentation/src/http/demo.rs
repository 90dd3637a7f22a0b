//! Demo routes. Stateless; they share nothing with the fan-out service.

use axum::{
    Json, Router,
    extract::Query,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

#[derive(Debug, Deserialize)]
pub struct GreetParams {
    pub name: String,
    pub age: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct GreetResponse {
    pub message: String,
    pub age: Option<i64>,
}

pub fn demo_routes<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new()
        .route("/", get(home))
        .route("/greet", get(greet))
        .route("/create-user", post(create_user))
}

async fn home() -> Json<Value> {
    Json(json!({ "message": "Server is running" }))
}

async fn greet(Query(params): Query<GreetParams>) -> Json<GreetResponse> {
    Json(GreetResponse {
        message: format!("Hello {}", params.name),
        age: params.age,
    })
}

async fn create_user(Json(user): Json<Map<String, Value>>) -> Json<Value> {
    Json(json!({ "message": "User created", "user": user }))
}
