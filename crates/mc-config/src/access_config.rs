use serde::Deserialize;

/// Who may drive the controller.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Tenant (guild) the controller serves; also the default registry key
    pub guild_id: Option<u64>,
    /// Role required to run commands. None = everyone allowed
    pub allowed_role_id: Option<String>,
}
