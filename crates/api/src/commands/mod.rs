//! HTTP routes for the dashboard backend

pub mod error;
pub mod health;
pub mod proxy;
pub mod shifts;
pub mod store;

use std::sync::Arc;

use axum::Router;

pub use error::{CommandError, ErrorResponse};

use crate::context::AppContext;

/// All routes, bound to the application context.
pub fn router(context: Arc<AppContext>) -> Router {
    Router::new()
        .merge(health::router())
        .merge(proxy::router())
        .merge(store::router())
        .merge(shifts::router())
        .with_state(context)
}
