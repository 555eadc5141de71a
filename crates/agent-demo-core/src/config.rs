use std::time::Duration;

/// Build-time settings for the narrated demo.
///
/// There is no file or environment input; the binary always runs with
/// [`DemoConfig::default`]. Tests build their own values, usually to shorten
/// `operation_delay`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub product_name: String,
    pub version: String,
    /// Simulated processing time of each live operation.
    pub operation_delay: Duration,
    pub contact_email: String,
}

impl DemoConfig {
    /// "GitHub Agent v2.0"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.product_name, self.version)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            product_name: "GitHub Agent".to_string(),
            version: "v2.0".to_string(),
            operation_delay: Duration::from_millis(100),
            contact_email: "agent-access@github-mastery.com".to_string(),
        }
    }
}
