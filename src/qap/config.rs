//! QAP Tabu Search configuration.

use super::error::{QapError, Result};
use super::tabu_list::DEFAULT_TABU_TENURE;

/// Configuration parameters for the QAP Tabu Search.
///
/// # Examples
///
/// ```
/// use u_qap::qap::QapConfig;
///
/// let config = QapConfig::default()
///     .with_max_iterations(500)
///     .with_allowed_percent_error(0.05);
/// assert_eq!(config.max_iterations, 500);
/// assert_eq!(config.tabu_tenure, 12);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QapConfig {
    /// Committed moves after which the search stops.
    pub max_iterations: usize,
    /// How many moves a swap stays in the tabu list.
    pub tabu_tenure: u32,
    /// Accepted relative gap to the known optimum, in `[0, 1]`.
    ///
    /// The search stops once the current cost is at or below
    /// `(1 + allowed_percent_error) * optimal_cost`.
    pub allowed_percent_error: f64,
    /// Admit a tabu swap when it would beat the best cost found so far.
    ///
    /// Off by default.
    pub aspiration: bool,
}

impl Default for QapConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            tabu_tenure: DEFAULT_TABU_TENURE,
            allowed_percent_error: 0.0,
            aspiration: false,
        }
    }
}

impl QapConfig {
    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu tenure.
    pub fn with_tabu_tenure(mut self, tenure: u32) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Sets the allowed relative gap to the optimum.
    pub fn with_allowed_percent_error(mut self, error: f64) -> Self {
        self.allowed_percent_error = error;
        self
    }

    /// Enables or disables the aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.allowed_percent_error) {
            return Err(QapError::InvalidErrorBound(self.allowed_percent_error));
        }
        if self.tabu_tenure == 0 {
            return Err(QapError::InvalidConfig(
                "tabu_tenure must be positive".into(),
            ));
        }
        Ok(())
    }
}
