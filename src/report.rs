use std::fmt;

use crate::{Evaluation, ProblemSpec, Strategy};

/// Human-readable summary of an [`Evaluation`].
pub struct Report<'a> {
    spec: &'a ProblemSpec,
    evaluation: &'a Evaluation,
}

impl<'a> Report<'a> {
    pub fn new(spec: &'a ProblemSpec, evaluation: &'a Evaluation) -> Self {
        Report { spec, evaluation }
    }
}

struct Row<'a>(&'a [f64]);

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (j, x) in self.0.iter().enumerate() {
            if j > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = self.spec;
        let evaluation = self.evaluation;

        writeln!(f, "Objective coefficients f(x): {}", Row(spec.objective()))?;
        writeln!(f, "Constraint matrix is:")?;
        for ai in spec.constraints() {
            writeln!(f, "{}", Row(ai))?;
        }
        writeln!(f, "The constraint limits are: {}", Row(spec.limits()))?;

        writeln!(f)?;
        writeln!(f, "Solo option profit:")?;
        for (i, profit) in evaluation.solo_profits.iter().enumerate() {
            writeln!(f, "Solo option {}: profit = ${:.2}", i + 1, profit)?;
        }

        writeln!(f)?;
        writeln!(f, "Balanced option profit:")?;
        writeln!(
            f,
            "Balanced option: profit = ${:.2}, {} balanced option= {}",
            evaluation.balanced_profit,
            Row(spec.objective()),
            Row(&evaluation.balanced_option)
        )?;

        writeln!(f)?;
        writeln!(f, "Solution:")?;
        let decision = &evaluation.decision;
        match decision.strategy {
            Strategy::Solo(i) => writeln!(
                f,
                "The best option is Solo Option {} with a profit of ${:.2}",
                i + 1,
                decision.profit
            ),
            Strategy::Balanced => writeln!(
                f,
                "The best option is the Balanced Option with a profit of ${:.2}",
                decision.profit
            ),
        }
    }
}
