use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness/info payload with service version.
pub async fn info_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "fiche-api",
        "version": env!("CARGO_PKG_VERSION"),
        "message": "Fiche de poste generation API is running"
    }))
}
