use axum::Json;
use serde_json::json;
use serde_json::Value;

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello, I am your assistant!" }))
}
