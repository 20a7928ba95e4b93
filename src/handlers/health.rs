use axum::Json;
use serde_json::{json, Value};

// GET /
pub async fn home() -> Json<Value> {
    Json(json!({ "message": "SMS Render Server is running" }))
}
