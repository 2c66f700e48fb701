mod db;
mod routes;
mod services;
mod state;

use crate::services::email_auth::EmailConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    // Email delivery is optional: without it, login codes only reach
    // users through the EMAIL_CODE_ECHO dev flag.
    let email = EmailConfig::from_env();
    if email.is_none() {
        tracing::warn!("RESEND_API_KEY/RESEND_FROM not set — email delivery disabled");
    }

    let state = state::AppState::new(pool, email);

    let app = routes::leptos_app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "daybreak listening");
    axum::serve(listener, app).await.expect("server failed");
}
