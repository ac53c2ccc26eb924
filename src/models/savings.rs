use crate::core::transact::verify_savings_withdrawal;
use crate::error::Rejection;
use crate::models::account::{AccountRecord, BankAccount, Receipt};
use crate::models::transaction::TransactionKind;
use rust_decimal::Decimal;
use std::fmt;

/// An account that never goes into overdraft.
#[derive(Debug, Clone)]
pub struct SavingsAccount {
    record: AccountRecord,
    /// Annual rate in percent. Informational, never applied to the balance.
    interest_rate: Decimal,
}

impl SavingsAccount {
    pub fn new(
        holder_name: impl Into<String>,
        account_number: impl Into<String>,
        interest_rate: Decimal,
    ) -> Self {
        SavingsAccount {
            record: AccountRecord::new(holder_name, account_number),
            interest_rate,
        }
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }
}

impl BankAccount for SavingsAccount {
    fn record(&self) -> &AccountRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut AccountRecord {
        &mut self.record
    }

    fn withdraw(&mut self, value: Decimal) -> Result<Receipt, Rejection> {
        match verify_savings_withdrawal(self.record.balance(), value) {
            Ok(()) => self.record.post(TransactionKind::Withdrawal, value),
            Err(rejection) => Err(self.record.refuse(rejection)),
        }
    }
}

impl fmt::Display for SavingsAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Savings Account ---")?;
        writeln!(f, "Account Holder: {}", self.record.holder_name())?;
        writeln!(f, "Account Number: {}", self.record.account_number())?;
        writeln!(f, "Interest Rate: {}%", self.interest_rate)?;
        write!(f, "Balance: {:.2}", self.record.balance())
    }
}
