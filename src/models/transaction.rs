use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "Deposit"),
            TransactionKind::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// One accepted balance movement on a single account.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    id: Uuid,
    created_at: DateTime<Utc>,
    kind: TransactionKind,
    value: Decimal,
}

impl Transaction {
    pub fn new(id: Uuid, created_at: DateTime<Utc>, kind: TransactionKind, value: Decimal) -> Self {
        Transaction { id, created_at, kind, value }
    }

    /// Stamps a fresh id and the current time.
    pub fn record(kind: TransactionKind, value: Decimal) -> Self {
        Self::new(Uuid::new_v4(), Utc::now(), kind, value)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Effect of this transaction on the balance.
    pub fn signed_value(&self) -> Decimal {
        match self.kind {
            TransactionKind::Deposit => self.value,
            TransactionKind::Withdrawal => -self.value,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2} ({})",
            self.created_at.format("%Y-%m-%d %H:%M:%S"),
            self.kind,
            self.value,
            self.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_record_stamps_unique_ids() {
        let first = Transaction::record(TransactionKind::Deposit, dec!(10));
        let second = Transaction::record(TransactionKind::Deposit, dec!(10));

        assert_ne!(first.id(), second.id());
        assert!(first.created_at() <= second.created_at());
    }

    #[test]
    fn test_signed_value() {
        let deposit = Transaction::record(TransactionKind::Deposit, dec!(250.50));
        let withdrawal = Transaction::record(TransactionKind::Withdrawal, dec!(100));

        assert_eq!(deposit.signed_value(), dec!(250.50));
        assert_eq!(withdrawal.signed_value(), dec!(-100));
    }

    #[test]
    fn test_display() {
        let created_at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let transaction =
            Transaction::new(Uuid::nil(), created_at, TransactionKind::Withdrawal, dec!(2000));

        assert_eq!(
            transaction.to_string(),
            "2024-03-01 09:30:00 Withdrawal 2000.00 (00000000-0000-0000-0000-000000000000)"
        );
    }
}
