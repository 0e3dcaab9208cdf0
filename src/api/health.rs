pub const STATUS_MESSAGE: &str = "API is running! Use POST /search or GET /results";

/// GET / - Plain-text liveness message
pub async fn root() -> &'static str {
    STATUS_MESSAGE
}
