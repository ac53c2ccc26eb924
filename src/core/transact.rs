use crate::error::Rejection;
use rust_decimal::Decimal;

pub fn verify_deposit(balance: Decimal, value: Decimal) -> Result<(), Rejection> {
    if value <= Decimal::ZERO {
        return Err(Rejection::InvalidDeposit(value));
    }

    if balance.checked_add(value).is_none() {
        return Err(Rejection::AmountOutOfRange {
            requested: value,
            balance,
        });
    }

    Ok(())
}

/// A savings account can never go below zero.
pub fn verify_savings_withdrawal(balance: Decimal, value: Decimal) -> Result<(), Rejection> {
    if value <= Decimal::ZERO {
        return Err(Rejection::InvalidWithdrawal(value));
    }

    if balance < value {
        return Err(Rejection::InsufficientFunds {
            requested: value,
            available: balance,
        });
    }

    Ok(())
}

/// A current account may go down to `-overdraft_limit`, inclusive.
pub fn verify_current_withdrawal(
    balance: Decimal,
    overdraft_limit: Decimal,
    value: Decimal,
) -> Result<(), Rejection> {
    if value <= Decimal::ZERO {
        return Err(Rejection::InvalidWithdrawal(value));
    }

    match balance.checked_add(overdraft_limit) {
        Some(available) if available < value => Err(Rejection::OverdraftLimitExceeded {
            requested: value,
            available,
        }),
        Some(_) => Ok(()),
        // balance and limit together exceed Decimal::MAX, any amount fits
        None if overdraft_limit > Decimal::ZERO => Ok(()),
        None => Err(Rejection::AmountOutOfRange {
            requested: value,
            balance,
        }),
    }
}
