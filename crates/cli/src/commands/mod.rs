pub mod check;
pub mod rules;
pub mod serve;
pub mod status;

pub use check::run_check;
pub use rules::run_rules;
pub use serve::run_serve;
pub use status::run_set_status;
