use mc_config::AccessConfig;

/// Single allow/deny predicate over the caller's role ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessPolicy {
    allowed_role_id: Option<String>,
}

impl AccessPolicy {
    pub fn new(allowed_role_id: Option<String>) -> Self {
        Self {
            allowed_role_id: allowed_role_id.filter(|r| !r.is_empty()),
        }
    }

    pub fn from_config(config: &AccessConfig) -> Self {
        Self::new(config.allowed_role_id.clone())
    }

    /// With no role configured everyone is allowed.
    pub fn is_allowed<S: AsRef<str>>(&self, roles: &[S]) -> bool {
        match &self.allowed_role_id {
            None => true,
            Some(required) => roles.iter().any(|r| r.as_ref() == required),
        }
    }
}
