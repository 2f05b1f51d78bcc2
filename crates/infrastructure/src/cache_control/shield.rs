use hostcache_application::ports::AccessControlPort;
use hostcache_domain::config::AccessControlConfig;
use hostcache_domain::BypassSignal;
use tracing::info;

/// Bypass signal derived from the shield (basic-auth) settings.
///
/// `bypass_active` is the shield master switch; `authenticated` is true when
/// the selected credential provider yields a non-empty username, meaning the
/// site sits behind credentials and its traffic must not be shared-cached.
/// The signal is resolved once when the configuration is loaded.
pub struct ShieldAccessControl {
    signal: BypassSignal,
}

impl ShieldAccessControl {
    pub fn from_config(config: &AccessControlConfig) -> Self {
        let signal = BypassSignal::new(config.enabled, config.resolve_user().is_some());
        info!(
            bypass_active = signal.bypass_active,
            authenticated = signal.authenticated,
            "Access control signal resolved"
        );
        Self { signal }
    }

    pub fn disabled() -> Self {
        Self {
            signal: BypassSignal::inactive(),
        }
    }
}

impl AccessControlPort for ShieldAccessControl {
    fn bypass_signal(&self) -> BypassSignal {
        self.signal
    }
}
