use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixed parameters of the account walkthrough.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub savings_holder: String,
    pub savings_number: String,
    pub interest_rate: Decimal,
    pub current_holder: String,
    pub current_number: String,
    pub overdraft_limit: Decimal,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        ScenarioConfig {
            savings_holder: "Yash Bhagyawant".to_string(),
            savings_number: "SAV12345".to_string(),
            interest_rate: dec!(4.5),
            current_holder: "Rahul Pawar".to_string(),
            current_number: "CUR67890".to_string(),
            overdraft_limit: dec!(5000),
        }
    }
}
