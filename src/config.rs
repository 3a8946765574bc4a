/// How the bound of a solo allocation is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoloRule {
    /// b[i] = min(limits[i], limits[i - 1]) / a[i][i], wrapping around at i = 0.
    ///
    /// This is the default rule.
    AdjacentLimits,
    /// b[i] = min over r with a[r][i] > 0 of limits[r] / a[r][i].
    TightestConstraint,
}

impl Default for SoloRule {
    fn default() -> Self {
        SoloRule::AdjacentLimits
    }
}

/// Configuration for the allocation decider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub solo_rule: SoloRule,
    /// Pivots smaller than `pivot_tol * max_j |a[i][j]|` of their own row mark the matrix singular.
    pub pivot_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            solo_rule: SoloRule::default(),
            pivot_tol: 1e-12,
        }
    }
}

impl Config {
    /// Validates that the pivot tolerance is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if `pivot_tol` is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.pivot_tol.is_finite() || self.pivot_tol < 0.0 {
            return Err("pivot_tol must be finite and non-negative");
        }
        Ok(())
    }
}
