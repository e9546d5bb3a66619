use std::sync::Arc;

use serenity::all::{Cache, Context, Http};

/// Handle on the gateway connection passed to command handlers and event listeners.
#[derive(Clone)]
pub struct GatewayClient {
    pub http: Arc<Http>,
    pub cache: Arc<Cache>,
}

impl GatewayClient {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }

    pub fn from_context(ctx: &Context) -> Self {
        Self::new(ctx.http.clone(), ctx.cache.clone())
    }

    /// Client with an empty cache and an HTTP client that was never authenticated.
    #[cfg(test)]
    pub fn offline() -> Self {
        Self::new(Arc::new(Http::new("")), Arc::new(Cache::new()))
    }
}
