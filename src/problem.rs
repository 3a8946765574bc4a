use crate::Error;

/// Input of an allocation decision.
///
/// maximize   sum_{j} c[j] * x[j]
/// where      a[i][j] is the amount of resource i consumed by one unit of x[j]
///            b[i] is the amount of resource i available
///
/// The constraint matrix is square: one resource per variable.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemSpec {
    c: Vec<f64>,
    a: Vec<Vec<f64>>,
    b: Vec<f64>,
}

impl ProblemSpec {
    /// Builds a problem with `variable_count` variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `objective`, `constraints` or
    /// `limits` does not have `variable_count` entries (or `variable_count`
    /// is zero), and [`Error::RaggedRow`] if a constraint row does not have
    /// `variable_count` coefficients.
    pub fn new(
        variable_count: usize,
        objective: Vec<f64>,
        constraints: Vec<Vec<f64>>,
        limits: Vec<f64>,
    ) -> Result<Self, Error> {
        if variable_count == 0
            || objective.len() != variable_count
            || constraints.len() != variable_count
            || limits.len() != variable_count
        {
            return Err(Error::ShapeMismatch {
                expected: variable_count,
                objective: objective.len(),
                constraints: constraints.len(),
                limits: limits.len(),
            });
        }
        for (row, ai) in constraints.iter().enumerate() {
            if ai.len() != variable_count {
                return Err(Error::RaggedRow {
                    row,
                    len: ai.len(),
                    expected: variable_count,
                });
            }
        }

        Ok(ProblemSpec {
            c: objective,
            a: constraints,
            b: limits,
        })
    }

    pub fn variable_count(&self) -> usize {
        self.c.len()
    }

    /// Profit per unit of each variable.
    pub fn objective(&self) -> &[f64] {
        &self.c
    }

    pub fn constraints(&self) -> &[Vec<f64>] {
        &self.a
    }

    pub fn limits(&self) -> &[f64] {
        &self.b
    }

    /// Objective value of `allocation`.
    pub fn profit(&self, allocation: &[f64]) -> f64 {
        self.c.iter().zip(allocation).map(|(cj, xj)| cj * xj).sum()
    }

    /// Resource usage of `allocation`, one entry per resource.
    #[cfg(test)]
    pub(crate) fn usage(&self, allocation: &[f64]) -> Vec<f64> {
        self.a
            .iter()
            .map(|ai| ai.iter().zip(allocation).map(|(aij, xj)| aij * xj).sum())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new() {
        let spec = ProblemSpec::new(
            2,
            vec![50.0, 40.0],
            vec![vec![2.0, 3.0], vec![2.0, 1.0]],
            vec![1500.0, 1000.0],
        )
        .unwrap();
        assert_eq!(spec.variable_count(), 2);
        assert_eq!(spec.constraints()[0], [2.0, 3.0]);
        assert_relative_eq!(spec.profit(&[375.0, 250.0]), 28750.0);
        assert_relative_eq!(spec.usage(&[375.0, 250.0])[..], [1500.0, 1000.0][..]);
    }

    #[test]
    fn test_shape_mismatch() {
        let err = ProblemSpec::new(
            2,
            vec![50.0, 40.0, 10.0],
            vec![vec![2.0, 3.0], vec![2.0, 1.0]],
            vec![1500.0, 1000.0],
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                expected: 2,
                objective: 3,
                constraints: 2,
                limits: 2
            }
        );

        let err = ProblemSpec::new(
            2,
            vec![50.0, 40.0],
            vec![vec![2.0, 3.0]],
            vec![1500.0, 1000.0],
        )
        .unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { expected: 2, .. }));

        let err = ProblemSpec::new(0, vec![], vec![], vec![]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { expected: 0, .. }));
    }

    #[test]
    fn test_ragged_row() {
        let err = ProblemSpec::new(
            2,
            vec![50.0, 40.0],
            vec![vec![2.0, 3.0], vec![2.0]],
            vec![1500.0, 1000.0],
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::RaggedRow {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }
}
