pub mod dto;
pub mod routes;

use crate::domain::ports::{LedgerHandle, StatementHandle};
use crate::infrastructure::registry::AccountRegistry;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

/// Handles the gateway reaches the core through.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<AccountRegistry>,
    pub ledger: LedgerHandle,
    pub statements: StatementHandle,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(routes::healthz))
        .route("/clientes/:id/extrato", get(routes::get_statement))
        .route("/clientes/:id/transacoes", post(routes::post_transaction))
        .with_state(state)
}
