use rust_decimal::Decimal;
use thiserror::Error;

/// Why an account refused a deposit or withdrawal. The balance is untouched
/// whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Deposit amount must be positive.")]
    InvalidDeposit(Decimal),

    #[error("Withdrawal failed. Amount must be positive.")]
    InvalidWithdrawal(Decimal),

    #[error("Withdrawal failed. Insufficient funds.")]
    InsufficientFunds { requested: Decimal, available: Decimal },

    #[error("Withdrawal failed. Overdraft limit exceeded.")]
    OverdraftLimitExceeded { requested: Decimal, available: Decimal },

    #[error("Transaction failed. Amount out of range.")]
    AmountOutOfRange { requested: Decimal, balance: Decimal },
}

impl Rejection {
    /// The amount the caller asked to move.
    pub fn requested(&self) -> Decimal {
        match self {
            Rejection::InvalidDeposit(value) | Rejection::InvalidWithdrawal(value) => *value,
            Rejection::InsufficientFunds { requested, .. }
            | Rejection::OverdraftLimitExceeded { requested, .. }
            | Rejection::AmountOutOfRange { requested, .. } => *requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_notice_text() {
        assert_eq!(
            Rejection::InvalidDeposit(dec!(-5)).to_string(),
            "Deposit amount must be positive."
        );
        assert_eq!(
            Rejection::InsufficientFunds { requested: dec!(9000), available: dec!(8000) }.to_string(),
            "Withdrawal failed. Insufficient funds."
        );
        assert_eq!(
            Rejection::OverdraftLimitExceeded { requested: dec!(5000), available: dec!(2000) }
                .to_string(),
            "Withdrawal failed. Overdraft limit exceeded."
        );
        assert_eq!(
            Rejection::AmountOutOfRange { requested: dec!(1), balance: Decimal::MAX }.to_string(),
            "Transaction failed. Amount out of range."
        );
    }

    #[test]
    fn test_requested() {
        assert_eq!(Rejection::InvalidWithdrawal(dec!(0)).requested(), dec!(0));
        let rejection = Rejection::OverdraftLimitExceeded {
            requested: dec!(5000),
            available: dec!(2000),
        };
        assert_eq!(rejection.requested(), dec!(5000));
    }
}
