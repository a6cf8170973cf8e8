pub async fn welcome() -> &'static str {
    "Welcome to my movie API!"
}
