use crate::error::{LedgerError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest description a transaction may carry, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "c")]
    Credit,
    #[serde(rename = "d")]
    Debit,
}

impl TransactionKind {
    fn parse(raw: &str) -> Result<Self> {
        match raw {
            "c" => Ok(Self::Credit),
            "d" => Ok(Self::Debit),
            other => Err(LedgerError::Validation(format!(
                "kind must be \"c\" or \"d\", got {other:?}"
            ))),
        }
    }
}

/// A positive amount in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(i64);

impl Amount {
    pub fn new(value: i64) -> Result<Self> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(LedgerError::Validation(
                "amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Amount {
    type Error = LedgerError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

/// A non-empty description of at most [`MAX_DESCRIPTION_CHARS`] characters.
///
/// The bound counts characters rather than bytes, so a ten-character
/// accented description is accepted regardless of its UTF-8 length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let chars = raw.chars().count();
        if chars == 0 {
            return Err(LedgerError::Validation(
                "description must not be empty".to_string(),
            ));
        }
        if chars > MAX_DESCRIPTION_CHARS {
            return Err(LedgerError::Validation(format!(
                "description must be at most {MAX_DESCRIPTION_CHARS} characters"
            )));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A transaction as received from a client, before any checking.
#[derive(Debug, Clone)]
pub struct TransactionRequest {
    pub value: i64,
    pub kind: String,
    pub description: Option<String>,
}

impl TransactionRequest {
    /// Checks the request syntactically. Pure; touches no account state.
    pub fn validate(self) -> Result<TransactionDraft> {
        let kind = TransactionKind::parse(&self.kind)?;
        let description = Description::new(self.description.unwrap_or_default())?;
        let amount = Amount::new(self.value)?;
        Ok(TransactionDraft {
            amount,
            kind,
            description,
        })
    }
}

/// A syntactically valid transaction waiting to be applied to an account.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub amount: Amount,
    pub kind: TransactionKind,
    pub description: Description,
}

/// A committed transaction as it appears in an account's history.
///
/// `occurred_at` is stamped by the engine at commit time, never supplied by
/// the client, so history order equals commit order.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub amount: Amount,
    pub kind: TransactionKind,
    pub description: Description,
    pub occurred_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(value: i64, kind: &str, description: &str) -> TransactionRequest {
        TransactionRequest {
            value,
            kind: kind.to_string(),
            description: Some(description.to_string()),
        }
    }

    #[test]
    fn test_amount_validation() {
        assert!(Amount::new(1).is_ok());
        assert!(matches!(Amount::new(0), Err(LedgerError::Validation(_))));
        assert!(matches!(Amount::new(-10), Err(LedgerError::Validation(_))));
    }

    #[test]
    fn test_kind_parsing() {
        assert!(request(10, "c", "pix").validate().is_ok());
        assert!(request(10, "d", "pix").validate().is_ok());
        assert!(matches!(
            request(10, "x", "pix").validate(),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            request(10, "credit", "pix").validate(),
            Err(LedgerError::Validation(_))
        ));
    }

    #[test]
    fn test_description_bounds() {
        assert!(Description::new("a").is_ok());
        assert!(Description::new("abcdefghij").is_ok());
        assert!(matches!(
            Description::new(""),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            Description::new("abcdefghijk"),
            Err(LedgerError::Validation(_))
        ));
    }

    #[test]
    fn test_description_counts_characters_not_bytes() {
        // 10 characters, 20 bytes
        assert!(Description::new("áéíóúáéíóú").is_ok());
        assert!(matches!(
            Description::new("áéíóúáéíóúá"),
            Err(LedgerError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_description_is_rejected() {
        let raw = TransactionRequest {
            value: 10,
            kind: "c".to_string(),
            description: None,
        };
        assert!(matches!(raw.validate(), Err(LedgerError::Validation(_))));
    }

    #[test]
    fn test_validated_draft_carries_fields_through() {
        let draft = request(1000, "d", "mercado").validate().unwrap();
        assert_eq!(draft.amount.value(), 1000);
        assert_eq!(draft.kind, TransactionKind::Debit);
        assert_eq!(draft.description.as_str(), "mercado");
    }
}
