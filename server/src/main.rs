mod gate;
mod proxy;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Backend origin for the /api proxy (non-fatal: API calls answer 503 if
    // unset, the UI itself still renders).
    let api_origin = match std::env::var("API_ORIGIN") {
        Ok(origin) => {
            tracing::info!(%origin, "api proxy enabled");
            Some(origin)
        }
        Err(_) => {
            tracing::warn!("API_ORIGIN not set — /api proxy disabled");
            None
        }
    };

    let state = state::AppState::new(api_origin);

    let app = routes::app(state).expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "reeldeck edge listening");
    axum::serve(listener, app).await.expect("server failed");
}
