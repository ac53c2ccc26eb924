pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;

pub use config::ScenarioConfig;
pub use error::Rejection;
pub use models::account::{AccountRecord, BankAccount, Receipt};
pub use models::current::CurrentAccount;
pub use models::savings::SavingsAccount;
pub use models::transaction::{Transaction, TransactionKind};
