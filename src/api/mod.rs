pub mod calculate;
pub mod form;
pub mod health;
pub mod html;

use crate::config::Config;
use crate::engine::{CalcError, PricingEngine};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub engine: PricingEngine,
}

impl AppState {
    pub fn new(engine: PricingEngine) -> Self {
        Self { engine }
    }

    /// Build the engine from the configured portfolio divisor.
    pub fn from_config(config: &Config) -> Result<Self, CalcError> {
        Ok(Self::new(PricingEngine::new(config.portfolio_divisor)?))
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(form::both_funds_page))
        .route("/single", get(form::single_fund_page))
        .route("/calculate", post(form::submit_single_fund))
        .route("/calculate/both", post(form::submit_both_funds))
        .route("/v1/calculate", post(calculate::post_calculate))
        .layer(cors)
        .with_state(state)
}
