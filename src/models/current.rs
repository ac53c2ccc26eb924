use crate::core::transact::verify_current_withdrawal;
use crate::error::Rejection;
use crate::models::account::{AccountRecord, BankAccount, Receipt};
use crate::models::transaction::TransactionKind;
use rust_decimal::Decimal;
use std::fmt;

/// An account allowed to run down to `-overdraft_limit`.
#[derive(Debug, Clone)]
pub struct CurrentAccount {
    record: AccountRecord,
    overdraft_limit: Decimal,
}

impl CurrentAccount {
    pub fn new(
        holder_name: impl Into<String>,
        account_number: impl Into<String>,
        overdraft_limit: Decimal,
    ) -> Self {
        CurrentAccount {
            record: AccountRecord::new(holder_name, account_number),
            overdraft_limit,
        }
    }

    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }
}

impl BankAccount for CurrentAccount {
    fn record(&self) -> &AccountRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut AccountRecord {
        &mut self.record
    }

    fn withdraw(&mut self, value: Decimal) -> Result<Receipt, Rejection> {
        match verify_current_withdrawal(self.record.balance(), self.overdraft_limit, value) {
            Ok(()) => self.record.post(TransactionKind::Withdrawal, value),
            Err(rejection) => Err(self.record.refuse(rejection)),
        }
    }
}

impl fmt::Display for CurrentAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Current Account ---")?;
        writeln!(f, "Account Holder: {}", self.record.holder_name())?;
        writeln!(f, "Account Number: {}", self.record.account_number())?;
        writeln!(f, "Overdraft Limit: {:.2}", self.overdraft_limit)?;
        write!(f, "Balance: {:.2}", self.record.balance())
    }
}
