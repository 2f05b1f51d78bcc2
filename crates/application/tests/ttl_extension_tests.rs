use hostcache_application::ports::{FnTtlExtension, TtlExtension};
use hostcache_application::services::TtlExtensionRegistry;
use hostcache_domain::{BypassSignal, CacheRule, CacheSettings, ResolvedDecision};
use std::sync::Arc;

struct CapSharedTtl(u32);

impl TtlExtension for CapSharedTtl {
    fn name(&self) -> &str {
        "cap_shared_ttl"
    }

    fn alter<'a>(&self, mut decision: ResolvedDecision<'a>) -> ResolvedDecision<'a> {
        decision.shared_max_age = decision.shared_max_age.min(self.0);
        decision
    }
}

fn rule() -> CacheRule {
    CacheRule::new("r1", 0, "example", CacheSettings::default())
}

#[test]
fn test_empty_registry_returns_decision_unchanged() {
    let rule = rule();
    let decision = ResolvedDecision::decide(Some(&rule), 200, 600, BypassSignal::inactive());

    let result = TtlExtensionRegistry::new().apply(decision.clone());

    assert_eq!(result, decision);
}

#[test]
fn test_registry_preserves_registration_order() {
    let mut registry = TtlExtensionRegistry::new();
    registry.register(Arc::new(CapSharedTtl(120)));
    registry.register(Arc::new(FnTtlExtension::new("plus_one", |mut d| {
        d.shared_max_age += 1;
        d
    })));

    assert_eq!(registry.names(), vec!["cap_shared_ttl", "plus_one"]);
    assert_eq!(registry.len(), 2);

    let rule = rule();
    let decision = ResolvedDecision::decide(Some(&rule), 200, 600, BypassSignal::inactive());
    assert_eq!(registry.apply(decision).shared_max_age, 121);
}

#[test]
fn test_reversed_order_changes_result() {
    let registry = TtlExtensionRegistry::new()
        .with(Arc::new(FnTtlExtension::new("plus_one", |mut d| {
            d.shared_max_age += 1;
            d
        })))
        .with(Arc::new(CapSharedTtl(120)));

    let rule = rule();
    let decision = ResolvedDecision::decide(Some(&rule), 200, 600, BypassSignal::inactive());
    assert_eq!(registry.apply(decision).shared_max_age, 120);
}
