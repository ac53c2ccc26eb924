use crate::config::ScenarioConfig;
use crate::error::Rejection;
use crate::models::account::{BankAccount, Receipt};
use crate::models::current::CurrentAccount;
use crate::models::savings::SavingsAccount;
use crate::models::transaction::TransactionKind;
use rust_decimal_macros::dec;
use std::io::{self, Write};
use tracing::debug;

/// Walks one savings and one current account through a fixed sequence of
/// operations, writing a notice for every outcome.
pub fn run<W: Write>(out: &mut W, config: &ScenarioConfig) -> io::Result<()> {
    debug!(?config, "starting account scenario");

    let mut savings: Box<dyn BankAccount> = Box::new(SavingsAccount::new(
        config.savings_holder.as_str(),
        config.savings_number.as_str(),
        config.interest_rate,
    ));

    report(out, savings.deposit(dec!(10000)))?;
    report(out, savings.withdraw(dec!(2000)))?;
    savings.display_details(out)?;
    report(out, savings.withdraw(dec!(9000)))?;

    writeln!(out, "\n")?;

    let mut current: Box<dyn BankAccount> = Box::new(CurrentAccount::new(
        config.current_holder.as_str(),
        config.current_number.as_str(),
        config.overdraft_limit,
    ));

    report(out, current.deposit(dec!(20000)))?;
    report(out, current.withdraw(dec!(23000)))?;
    current.display_details(out)?;
    report(out, current.withdraw(dec!(5000)))?;
    current.display_details(out)?;
    report(out, current.withdraw(dec!(1)))?;

    debug!(
        savings = %savings.balance(),
        current = %current.balance(),
        "account scenario finished"
    );
    Ok(())
}

/// Prints the notice for one deposit or withdrawal. Rejections are reported
/// and never stop the script.
pub fn report<W: Write>(out: &mut W, outcome: Result<Receipt, Rejection>) -> io::Result<()> {
    match outcome {
        Ok(receipt) => {
            let transaction = receipt.transaction();
            match transaction.kind() {
                TransactionKind::Deposit => {
                    writeln!(out, "Deposited: {:.2}", transaction.value())?;
                }
                TransactionKind::Withdrawal => {
                    writeln!(out, "Withdrawn: {:.2}", transaction.value())?;
                    if receipt.overdrawn() {
                        writeln!(out, "NOTE: You are using overdraft.")?;
                    }
                }
            }
        }
        Err(rejection) => writeln!(out, "{rejection}")?,
    }
    Ok(())
}
