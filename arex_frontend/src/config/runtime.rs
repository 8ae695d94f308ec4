// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerPreferences {
    /// Whether to attach source spans to diagnostics (user preference)
    pub include_position_in_errors: bool,

    /// Whether to collect per-scan token metrics
    pub collect_detailed_metrics: bool,
}

impl Default for ScannerPreferences {
    fn default() -> Self {
        Self {
            include_position_in_errors: env::var("AREX_LEXICAL_INCLUDE_POSITIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            collect_detailed_metrics: env::var("AREX_LEXICAL_DETAILED_METRICS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_construct() {
        let prefs = ScannerPreferences {
            include_position_in_errors: false,
            collect_detailed_metrics: true,
        };
        assert!(!prefs.include_position_in_errors);
        assert!(prefs.collect_detailed_metrics);
    }
}
