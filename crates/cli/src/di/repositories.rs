use hostcache_domain::Config;
use hostcache_infrastructure::cache_control::{RuleStore, ShieldAccessControl};
use hostcache_infrastructure::repositories::TomlRuleRepository;
use std::sync::Arc;

pub struct Repositories {
    pub rules: Arc<TomlRuleRepository>,
    pub store: Arc<RuleStore>,
    pub access_control: Arc<ShieldAccessControl>,
}

impl Repositories {
    pub fn new(config: &Config) -> Self {
        Self {
            rules: Arc::new(TomlRuleRepository::new(&config.rules.path)),
            store: Arc::new(RuleStore::new()),
            access_control: Arc::new(ShieldAccessControl::from_config(&config.access_control)),
        }
    }
}
