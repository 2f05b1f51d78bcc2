pub mod health;
pub mod rules;

pub use health::health_check;
pub use rules::list_rules;
