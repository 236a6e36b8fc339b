use super::types::{request, response};
use crate::{modules::bank::service as bank_service, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    tracing::debug!(
        "Listing banks with normal={} mfo={}",
        payload.filters.normal,
        payload.filters.mfo
    );

    bank_service::render_banks(&ctx.data.input, payload.filters)
        .await
        .map(response::Success::Banks)
        .map_err(response::Error::FailedToListBanks)
}
