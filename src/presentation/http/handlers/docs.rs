use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Locality Map API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/map": {
                "get": {
                    "summary": "Render an interactive map of prime and non-prime locations for an area",
                    "parameters": [
                        { "name": "query", "in": "query", "required": false, "description": "Area to search (default from DEFAULT_QUERY)" },
                        { "name": "language", "in": "query", "required": false, "description": "Language of the detail text (default from DEFAULT_LANGUAGE)" }
                    ],
                    "responses": {
                        "200": { "description": "Map page (text/html)" },
                        "400": { "description": "Invalid query parameters" },
                        "422": { "description": "Model reply held no usable location data" },
                        "502": { "description": "Model request failed" },
                        "504": { "description": "Model did not answer in time" }
                    }
                }
            },
            "/health": { "get": { "summary": "Health check" } },
            "/api/v1/docs": { "get": { "summary": "OpenAPI spec" } }
        }
    }))
}
