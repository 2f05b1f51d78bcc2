pub mod toml_rule_repository;

pub use toml_rule_repository::TomlRuleRepository;
