pub mod account;
pub mod current;
pub mod savings;
pub mod transaction;
