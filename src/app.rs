use crate::{
    modules,
    types::{Context, StartupError},
};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace;

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = Router::new()
            .merge(modules::get_router())
            .with_state(ctx.clone())
            .layer(trace::TraceLayer::new_for_http());

        Self { ctx, router }
    }

    pub async fn serve(self) -> Result<(), StartupError> {
        let address = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| StartupError::Bind {
                address: address.clone(),
                source,
            })?;

        let url = &self.ctx.app.url;
        tracing::info!("Server is running on {}", url);
        tracing::info!("Data file: {}", self.ctx.data.input.display());
        tracing::info!("All banks: {}/", url);
        tracing::info!("Normal banks only: {}/?normal=true", url);
        tracing::info!("With MFO codes: {}/?mfo=true", url);
        tracing::info!("Everything: {}/?mfo=true&normal=true", url);

        axum::serve(listener, self.router)
            .await
            .map_err(StartupError::Serve)
    }
}
