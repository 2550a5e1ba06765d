pub const API_VERSION: &str = "Dogshouseservice.Version1.0.1";

/// GET /ping
pub async fn ping() -> &'static str {
    API_VERSION
}
