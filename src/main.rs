mod models;
mod handlers;
mod logger;

use axum::{routing::{get, Router}};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

// build the app router with the cors layer attached
// tower-http rejects allow-credentials next to wildcard origins,
// so the wide-open policy here leaves the credentials header off
pub fn app() -> Router {

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .layer(cors)

}

#[tokio::main]
async fn main() {

    dotenvy::dotenv().ok();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse()
        .expect("PORT must be a valid port number");

    let app = app();

    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    let listener = TcpListener::bind(addr).await
        .expect("Failed to bind to port");
    println!("listening on {}", listener.local_addr()
        .expect("Failed to get local address"));
    axum::serve(listener, app).await
        .expect("Server failed");

}
