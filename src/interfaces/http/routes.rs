use super::AppState;
use super::dto::{ExtratoResponse, TransacaoBody, TransacaoResponse};
use crate::domain::transaction::TransactionRequest;
use crate::error::LedgerError;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn get_statement(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    if state.registry.limit_of(id).is_none() {
        return error_response(LedgerError::UnknownAccount(id));
    }

    match state.statements.read(id).await {
        Ok(statement) => (StatusCode::OK, Json(ExtratoResponse::from(statement))).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn post_transaction(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Response {
    // The account is resolved before the payload is touched, so an
    // unprovisioned id is a 404 no matter what the body contains.
    if state.registry.limit_of(id).is_none() {
        return error_response(LedgerError::UnknownAccount(id));
    }

    let body: TransacaoBody = match serde_json::from_slice(&body) {
        Ok(body) => body,
        Err(err) => {
            tracing::debug!(account = id, %err, "unreadable transaction payload");
            return (StatusCode::BAD_REQUEST, "invalid payload").into_response();
        }
    };

    let draft = match TransactionRequest::from(body).validate() {
        Ok(draft) => draft,
        Err(err) => return error_response(err),
    };

    match state.ledger.apply(id, draft).await {
        Ok(receipt) => (
            StatusCode::OK,
            Json(TransacaoResponse {
                id,
                limite: receipt.limit,
                saldo: receipt.balance,
            }),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// Maps the error taxonomy onto the fixed status codes of the API.
fn error_response(err: LedgerError) -> Response {
    let status = match &err {
        LedgerError::UnknownAccount(_) => StatusCode::NOT_FOUND,
        LedgerError::Validation(_) | LedgerError::LimitExceeded { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        LedgerError::Contended(_) => StatusCode::SERVICE_UNAVAILABLE,
        LedgerError::Internal(_) => {
            tracing::error!(%err, "request failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    (status, err.to_string()).into_response()
}
