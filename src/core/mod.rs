pub mod scenario;
pub mod transact;
