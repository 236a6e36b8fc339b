use super::handler;
use crate::types::Context;
use axum::routing::{get, MethodRouter, Router};
use std::sync::Arc;

fn banks() -> MethodRouter<Arc<Context>> {
    get(handler::handler).fallback(handler::unsupported_method)
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", banks())
        .route("/*path", banks())
}
