//! Application Configuration

/// Customer application configuration
#[derive(Debug, Clone)]
pub struct CustomerConfig {
    /// Upper bound for the `limit` of a "recently modified" search
    pub max_recent_limit: u32,
}

impl Default for CustomerConfig {
    fn default() -> Self {
        Self {
            max_recent_limit: 100,
        }
    }
}
