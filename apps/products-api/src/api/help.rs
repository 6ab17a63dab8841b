//! Service overview served at `GET /`

use axum::{extract::State, routing::get, Json, Router};
use core_config::AppInfo;
use serde_json::{json, Value};

async fn help(State(app): State<AppInfo>) -> Json<Value> {
    Json(json!({
        "message": "Product API is running!",
        "version": app.version,
        "endpoints": {
            "GET /products": "Get all products (with pagination)",
            "GET /products/{id}": "Get product by ID",
            "POST /products": "Create new product",
            "PUT /products/{id}": "Update product",
            "DELETE /products/{id}": "Delete product",
            "GET /products/search?q=query": "Search products",
        },
        "examples": {
            "Get all products": "GET /products",
            "Get products with pagination": "GET /products?page=1&limit=5",
            "Search products": "GET /products/search?q=laptop",
            "Get product by ID": "GET /products/1",
            "Create product": r#"POST /products with body: {"name": "New Product", "price": 99.99, "description": "Product description"}"#,
            "Update product": r#"PUT /products/1 with body: {"name": "Updated Product", "price": 149.99, "description": "Updated description"}"#,
            "Delete product": "DELETE /products/1",
        },
        "docs": "/swagger-ui",
    }))
}

pub fn router(app: AppInfo) -> Router {
    Router::new().route("/", get(help)).with_state(app)
}
