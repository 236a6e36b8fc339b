use super::{
    service::service,
    types::{request, response},
};
use crate::types::Context;
use axum::{extract::State, http::Method};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    filters: request::Filters,
) -> response::Response {
    service(ctx, request::Payload { filters }).await
}

pub async fn unsupported_method(method: Method) -> response::Error {
    tracing::debug!("Rejected {} request", method);
    response::Error::UnsupportedMethod
}
