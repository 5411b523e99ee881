mod health;
pub mod market;

use std::{path::PathBuf, sync::Arc};

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{config::Config, main_lib::AppState};

pub use health::healthz;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    // Every method reaches the market handler; it answers 405 in JSON itself
    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/market", any(market::market_handler))
        .with_state(state);

    let mut router = Router::new().nest("/api", api);

    if let Some(dir) = &config.static_dir {
        let static_dir = PathBuf::from(dir);
        let index_file = static_dir.join("index.html");
        router = router
            .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index_file)));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
