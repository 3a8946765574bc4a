use crate::linear;
use crate::{Config, Error, ProblemSpec, SoloRule};

/// Which production strategy won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// All resources committed to the variable at this index.
    Solo(usize),
    /// Resources split so that every constraint binds exactly.
    Balanced,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub strategy: Strategy,
    pub allocation: Vec<f64>,
    pub profit: f64,
}

/// Every candidate considered by [`evaluate`], together with the resulting decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// `solo_options[i]` is zero everywhere except at index `i`.
    pub solo_options: Vec<Vec<f64>>,
    pub solo_profits: Vec<f64>,
    /// Solution of `a * x = b`.
    pub balanced_option: Vec<f64>,
    pub balanced_profit: f64,
    pub decision: Decision,
}

/// Index of the largest value, the first one on ties.
fn first_max(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &value) in values.iter().enumerate().skip(1) {
        if value > values[best] {
            best = i;
        }
    }
    best
}

/// Decides between the solo and balanced strategies with the default [`Config`].
///
/// # Errors
///
/// See [`evaluate`].
pub fn decide(spec: &ProblemSpec) -> Result<Decision, Error> {
    decide_with(spec, &Config::default())
}

/// Decides between the solo and balanced strategies.
///
/// # Errors
///
/// See [`evaluate`].
pub fn decide_with(spec: &ProblemSpec, config: &Config) -> Result<Decision, Error> {
    evaluate(spec, config).map(|evaluation| evaluation.decision)
}

/// Scores every solo option and the balanced option, and picks the best.
///
/// A solo option wins only if its profit is strictly greater than the
/// balanced profit.
///
/// # Errors
///
/// Returns an error if the config is invalid, a solo bound cannot be
/// computed, or the constraint matrix is singular.
pub fn evaluate(spec: &ProblemSpec, config: &Config) -> Result<Evaluation, Error> {
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let n = spec.variable_count();
    let c = spec.objective();

    let mut solo_options = Vec::with_capacity(n);
    for i in 0..n {
        let mut solo_option = vec![0.0; n];
        solo_option[i] = solo_bound(spec, i, config.solo_rule)?;
        solo_options.push(solo_option);
    }

    let balanced_option = linear::solve(spec.constraints(), spec.limits(), config.pivot_tol)?;

    let solo_profits: Vec<f64> = solo_options
        .iter()
        .enumerate()
        .map(|(i, solo_option)| solo_option[i] * c[i])
        .collect();
    for (i, profit) in solo_profits.iter().enumerate() {
        log::debug!("solo option {}: {:?} profit = {}", i, solo_options[i], profit);
    }

    let balanced_profit = spec.profit(&balanced_option);
    log::debug!(
        "balanced option: {:?} profit = {}",
        balanced_option,
        balanced_profit
    );

    let best = first_max(&solo_profits);
    let decision = if solo_profits[best] > balanced_profit {
        Decision {
            strategy: Strategy::Solo(best),
            allocation: solo_options[best].clone(),
            profit: solo_profits[best],
        }
    } else {
        Decision {
            strategy: Strategy::Balanced,
            allocation: balanced_option.clone(),
            profit: balanced_profit,
        }
    };
    log::debug!("decision: {:?} profit = {}", decision.strategy, decision.profit);

    Ok(Evaluation {
        solo_options,
        solo_profits,
        balanced_option,
        balanced_profit,
        decision,
    })
}

fn solo_bound(spec: &ProblemSpec, i: usize, rule: SoloRule) -> Result<f64, Error> {
    let a = spec.constraints();
    let b = spec.limits();

    match rule {
        SoloRule::AdjacentLimits => {
            let n = b.len();
            let prev = (i + n - 1) % n;
            if a[i][i] == 0.0 {
                return Err(Error::DivisionByZero { index: i });
            }
            Ok(b[i].min(b[prev]) / a[i][i])
        }
        SoloRule::TightestConstraint => {
            let mut delta = f64::INFINITY;
            for (ar, &br) in a.iter().zip(b).filter(|(ar, _)| ar[i] > 0.0) {
                let dr = br / ar[i];
                if dr < delta {
                    delta = dr;
                }
            }
            if delta == f64::INFINITY {
                return Err(Error::UnboundedSolo { index: i });
            }
            Ok(delta)
        }
    }
}
