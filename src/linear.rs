use crate::Error;

/// Solves the square system `a * x = b` by Gaussian elimination with scaled partial pivoting.
///
/// Each row is measured against its own largest coefficient `s[i] = max_j |a[i][j]|`.
/// A pivot whose magnitude is at most `tol * s[p]` for its row `p` marks `a` as singular.
pub fn solve(a: &[Vec<f64>], b: &[f64], tol: f64) -> Result<Vec<f64>, Error> {
    let n = b.len();
    debug_assert_eq!(a.len(), n);

    let mut s: Vec<f64> = a
        .iter()
        .map(|ai| ai.iter().fold(0.0_f64, |acc, &aij| acc.max(aij.abs())))
        .collect();
    if s.iter().any(|&si| !(si > 0.0) || !si.is_finite()) {
        return Err(Error::SingularMatrix);
    }

    // augmented matrix [a | b]
    let mut m: Vec<Vec<f64>> = a
        .iter()
        .zip(b)
        .map(|(ai, &bi)| {
            let mut row = ai.clone();
            row.push(bi);
            row
        })
        .collect();

    for k in 0..n {
        // row with the largest |m[i][k]| / s[i], first one on ties
        let mut p = k;
        for i in (k + 1)..n {
            if m[i][k].abs() / s[i] > m[p][k].abs() / s[p] {
                p = i;
            }
        }
        if !(m[p][k].abs() > tol * s[p]) {
            return Err(Error::SingularMatrix);
        }
        if p != k {
            log::trace!("swap rows {} and {}", k, p);
            m.swap(p, k);
            s.swap(p, k);
        }

        for i in (k + 1)..n {
            let factor = m[i][k] / m[k][k];
            if factor == 0.0 {
                continue;
            }
            for j in k..=n {
                m[i][j] -= factor * m[k][j];
            }
        }
    }

    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut acc = m[i][n];
        for j in (i + 1)..n {
            acc -= m[i][j] * x[j];
        }
        x[i] = acc / m[i][i];
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_solve() {
        let a = vec![vec![2.0, 3.0], vec![2.0, 1.0]];
        let b = vec![1500.0, 1000.0];
        let x = solve(&a, &b, TOL).unwrap();
        assert_relative_eq!(x[..], [375.0, 250.0][..]);

        let a = vec![
            vec![0.0, 2.0, 1.0],
            vec![1.0, -2.0, -3.0],
            vec![-1.0, 1.0, 2.0],
        ];
        let b = vec![-8.0, 0.0, 3.0];
        let x = solve(&a, &b, TOL).unwrap();
        assert_relative_eq!(x[..], [-4.0, -5.0, 2.0][..], epsilon = 1e-10);
    }

    #[test]
    fn test_solve_needs_pivoting() {
        // zero in the leading position
        let a = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let b = vec![3.0, 7.0];
        let x = solve(&a, &b, TOL).unwrap();
        assert_relative_eq!(x[..], [7.0, 3.0][..]);
    }

    #[test]
    fn test_solve_residual() {
        let a = vec![
            vec![4.0, -2.0, 1.0, 3.0],
            vec![3.0, 6.0, -4.0, 2.0],
            vec![2.0, 1.0, 8.0, -5.0],
            vec![1.0, 3.0, -2.0, 7.0],
        ];
        let b = vec![20.0, -15.0, 33.0, 4.0];
        let x = solve(&a, &b, TOL).unwrap();
        for (ai, &bi) in a.iter().zip(&b) {
            let lhs: f64 = ai.iter().zip(&x).map(|(aij, xj)| aij * xj).sum();
            assert_relative_eq!(lhs, bi, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_solve_badly_scaled() {
        // rows in very different units
        let a = vec![vec![1e6, 0.0], vec![0.0, 1e-7]];
        let b = vec![1.0, 1.0];
        let x = solve(&a, &b, TOL).unwrap();
        assert_relative_eq!(x[..], [1e-6, 1e7][..], max_relative = 1e-12);

        let a = vec![vec![1e6, 2e6], vec![3e-7, 1e-7]];
        let b = vec![5e6, 5e-7];
        let x = solve(&a, &b, TOL).unwrap();
        assert_relative_eq!(x[..], [1.0, 2.0][..], max_relative = 1e-9);
    }

    #[test]
    fn test_singular() {
        let a = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
        let b = vec![3.0, 6.0];
        assert_eq!(solve(&a, &b, TOL), Err(Error::SingularMatrix));

        let a = vec![vec![0.0, 0.0], vec![0.0, 0.0]];
        assert_eq!(solve(&a, &b, TOL), Err(Error::SingularMatrix));

        // singular at a small scale is still singular
        let a = vec![vec![1e-7, 2e-7], vec![2e-7, 4e-7]];
        assert_eq!(solve(&a, &b, TOL), Err(Error::SingularMatrix));
    }
}
