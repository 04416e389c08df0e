use crate::domain::account::Statement;
use crate::domain::transaction::{LedgerEntry, TransactionKind, TransactionRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /clientes/{id}/transacoes`.
#[derive(Debug, Deserialize)]
pub struct TransacaoBody {
    pub valor: i64,
    pub tipo: String,
    pub descricao: Option<String>,
}

impl From<TransacaoBody> for TransactionRequest {
    fn from(body: TransacaoBody) -> Self {
        Self {
            value: body.valor,
            kind: body.tipo,
            description: body.descricao,
        }
    }
}

/// Success response of `POST /clientes/{id}/transacoes`.
#[derive(Debug, Serialize)]
pub struct TransacaoResponse {
    pub id: i64,
    pub limite: i64,
    pub saldo: i64,
}

/// Response of `GET /clientes/{id}/extrato`.
#[derive(Debug, Serialize)]
pub struct ExtratoResponse {
    pub saldo: SaldoDto,
    pub ultimas_transacoes: Vec<TransacaoDto>,
}

#[derive(Debug, Serialize)]
pub struct SaldoDto {
    pub total: i64,
    pub limite: i64,
    pub data_extrato: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct TransacaoDto {
    pub valor: i64,
    pub tipo: TransactionKind,
    pub descricao: String,
}

impl From<&LedgerEntry> for TransacaoDto {
    fn from(entry: &LedgerEntry) -> Self {
        Self {
            valor: entry.amount.value(),
            tipo: entry.kind,
            descricao: entry.description.as_str().to_string(),
        }
    }
}

impl From<Statement> for ExtratoResponse {
    fn from(statement: Statement) -> Self {
        Self {
            saldo: SaldoDto {
                total: statement.balance,
                limite: statement.limit,
                data_extrato: statement.as_of,
            },
            ultimas_transacoes: statement.entries.iter().map(TransacaoDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transacao_body_uses_wire_names() {
        let body: TransacaoBody =
            serde_json::from_str(r#"{"valor":1000,"tipo":"c","descricao":"salario"}"#).unwrap();
        assert_eq!(body.valor, 1000);
        assert_eq!(body.tipo, "c");
        assert_eq!(body.descricao.as_deref(), Some("salario"));
    }

    #[test]
    fn test_extrato_serializes_kind_as_single_letter() {
        let statement = Statement {
            balance: -90,
            limit: 1000,
            as_of: Utc::now(),
            entries: vec![LedgerEntry {
                amount: crate::domain::transaction::Amount::new(90).unwrap(),
                kind: TransactionKind::Debit,
                description: crate::domain::transaction::Description::new("luz").unwrap(),
                occurred_at: Utc::now(),
            }],
        };

        let json = serde_json::to_value(ExtratoResponse::from(statement)).unwrap();
        assert_eq!(json["saldo"]["total"], -90);
        assert_eq!(json["saldo"]["limite"], 1000);
        assert_eq!(json["ultimas_transacoes"][0]["tipo"], "d");
        assert_eq!(json["ultimas_transacoes"][0]["valor"], 90);
        assert_eq!(json["ultimas_transacoes"][0]["descricao"], "luz");
    }
}
