/// Welcome message
///
/// GET /
pub async fn root_handler() -> &'static str {
    "Welcome to the rest API!"
}
