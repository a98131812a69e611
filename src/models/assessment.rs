//! Health assessment model

/// Verdict on a meal's totals
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HealthAssessment {
    pub is_healthy: bool,
    /// Substitution suggestions, empty when healthy
    pub suggestions: Vec<String>,
}

impl HealthAssessment {
    pub fn healthy() -> Self {
        Self {
            is_healthy: true,
            suggestions: Vec::new(),
        }
    }

    pub fn unhealthy(suggestions: Vec<String>) -> Self {
        Self {
            is_healthy: false,
            suggestions,
        }
    }
}
