use crate::core::transact::verify_deposit;
use crate::error::Rejection;
use crate::models::transaction::{Transaction, TransactionKind};
use rust_decimal::Decimal;
use std::fmt;
use std::io::{self, Write};
use tracing::debug;

/// Identity, balance and history shared by every account variant.
#[derive(Debug, Clone)]
pub struct AccountRecord {
    holder_name: String,
    account_number: String,
    balance: Decimal,
    transactions: Vec<Transaction>,
}

impl AccountRecord {
    pub fn new(holder_name: impl Into<String>, account_number: impl Into<String>) -> Self {
        AccountRecord {
            holder_name: holder_name.into(),
            account_number: account_number.into(),
            balance: Decimal::ZERO,
            transactions: Vec::new(),
        }
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Applies an already verified movement and records it. A balance that
    /// would leave the `Decimal` range is refused and left as it was.
    pub(crate) fn post(
        &mut self,
        kind: TransactionKind,
        value: Decimal,
    ) -> Result<Receipt, Rejection> {
        let transaction = Transaction::record(kind, value);
        let Some(balance) = self.balance.checked_add(transaction.signed_value()) else {
            return Err(self.refuse(Rejection::AmountOutOfRange {
                requested: value,
                balance: self.balance,
            }));
        };
        self.balance = balance;

        debug!(
            account = %self.account_number,
            transaction = %transaction,
            balance = %self.balance,
            "transaction posted"
        );
        self.transactions.push(transaction.clone());

        Ok(Receipt {
            transaction,
            balance: self.balance,
        })
    }

    pub(crate) fn refuse(&self, rejection: Rejection) -> Rejection {
        debug!(
            account = %self.account_number,
            value = %rejection.requested(),
            balance = %self.balance,
            reason = %rejection,
            "transaction rejected"
        );
        rejection
    }
}

/// Result of an accepted deposit or withdrawal.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    transaction: Transaction,
    balance: Decimal,
}

impl Receipt {
    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    /// Balance right after the operation.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn overdrawn(&self) -> bool {
        self.balance < Decimal::ZERO
    }
}

/// The contract every account variant fulfils. Deposits and balance queries
/// are uniform; each variant brings its own withdrawal rule and detail block.
pub trait BankAccount: fmt::Display {
    fn record(&self) -> &AccountRecord;

    fn record_mut(&mut self) -> &mut AccountRecord;

    fn withdraw(&mut self, value: Decimal) -> Result<Receipt, Rejection>;

    fn deposit(&mut self, value: Decimal) -> Result<Receipt, Rejection> {
        let record = self.record_mut();
        match verify_deposit(record.balance(), value) {
            Ok(()) => record.post(TransactionKind::Deposit, value),
            Err(rejection) => Err(record.refuse(rejection)),
        }
    }

    fn balance(&self) -> Decimal {
        self.record().balance()
    }

    fn holder_name(&self) -> &str {
        self.record().holder_name()
    }

    fn account_number(&self) -> &str {
        self.record().account_number()
    }

    fn transactions(&self) -> &[Transaction] {
        self.record().transactions()
    }

    fn display_details(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_record_starts_empty() {
        let record = AccountRecord::new("Ada Lovelace", "ACC001");

        assert_eq!(record.holder_name(), "Ada Lovelace");
        assert_eq!(record.account_number(), "ACC001");
        assert_eq!(record.balance(), Decimal::ZERO);
        assert!(record.transactions().is_empty());
    }

    #[test]
    fn test_post_moves_balance_and_records() {
        let mut record = AccountRecord::new("Ada Lovelace", "ACC001");

        let receipt = record.post(TransactionKind::Deposit, dec!(100)).unwrap();
        assert_eq!(receipt.balance(), dec!(100));
        assert!(!receipt.overdrawn());

        let receipt = record.post(TransactionKind::Withdrawal, dec!(150)).unwrap();
        assert_eq!(receipt.balance(), dec!(-50));
        assert!(receipt.overdrawn());

        assert_eq!(record.balance(), dec!(-50));
        assert_eq!(record.transactions().len(), 2);
        assert_eq!(record.transactions()[1], *receipt.transaction());
    }

    #[test]
    fn test_post_out_of_range_keeps_balance() {
        let mut record = AccountRecord::new("Ada Lovelace", "ACC001");
        record.post(TransactionKind::Deposit, Decimal::MAX).unwrap();

        let res = record.post(TransactionKind::Deposit, dec!(1));

        assert_eq!(
            res.unwrap_err(),
            Rejection::AmountOutOfRange {
                requested: dec!(1),
                balance: Decimal::MAX
            }
        );
        assert_eq!(record.balance(), Decimal::MAX);
        assert_eq!(record.transactions().len(), 1);
    }
}
