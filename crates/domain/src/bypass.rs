/// Access-control signal consumed by the bypass gate.
///
/// Both flags come from the access-control collaborator; nothing here checks
/// credentials. The default signal never bypasses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BypassSignal {
    pub bypass_active: bool,
    pub authenticated: bool,
}

impl BypassSignal {
    pub fn new(bypass_active: bool, authenticated: bool) -> Self {
        Self {
            bypass_active,
            authenticated,
        }
    }

    pub fn inactive() -> Self {
        Self::default()
    }

    pub fn forces_zero(&self) -> bool {
        self.bypass_active && self.authenticated
    }

    /// Returns 0 when the bypass applies, otherwise `shared_max_age` unchanged.
    pub fn gate(&self, shared_max_age: u32) -> u32 {
        if self.forces_zero() {
            0
        } else {
            shared_max_age
        }
    }
}
