//! Plain text rendering of pipeline results
use std::fmt;

use perfindex::categorize::PerformanceLevel;

use crate::report::{
    BatchEntry, Contribution, CorrelationReport, Evaluation, PredictionReport,
};

/// Width of the longest bar in contribution charts
const BAR_WIDTH: usize = 40;

/// Advice shown next to a performance level
pub fn narrative(level: PerformanceLevel) -> &'static str {
    match level {
        PerformanceLevel::High => {
            "Your academic performance is high. Keep up the motivation and continue to develop your skills!"
        }
        PerformanceLevel::Medium => {
            "Your academic performance is at a medium level. A little more focus and better time management for studying would help."
        }
        PerformanceLevel::Low => {
            "Your academic performance is low. Consider reviewing your study habits and look for academic support if needed."
        }
    }
}

impl fmt::Display for PredictionReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let q1 = self.thresholds.q1();
        let q3 = self.thresholds.q3();

        writeln!(f, "Predicted performance index: {:.2}", self.prediction)?;
        writeln!(f, "Performance level:           {}", self.level)?;
        writeln!(f)?;
        writeln!(f, "  High:   > {:.0}", q3)?;
        writeln!(f, "  Medium: {:.0} - {:.0}", q1, q3)?;
        writeln!(f, "  Low:    < {:.0}", q1)?;
        writeln!(f)?;
        writeln!(f, "{}", narrative(self.level))?;
        writeln!(f)?;
        write!(f, "{}", self.evaluation)?;
        writeln!(f)?;
        writeln!(f, "Contribution of each factor (intercept {:.3}):", self.intercept)?;
        write!(f, "{}", ContributionChart(&self.contributions))
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Model evaluation ({} training / {} evaluation samples):",
            self.train_size, self.test_size
        )?;
        writeln!(f, "  Mean squared error: {:.4}", self.mean_squared_error)?;
        writeln!(f, "  R-squared:          {:.4}", self.r2)
    }
}

/// Horizontal bars scaled to the largest absolute contribution, negative ones drawn with `-`
pub struct ContributionChart<'a>(pub &'a [Contribution]);

impl fmt::Display for ContributionChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let max = self
            .0
            .iter()
            .map(|c| c.contribution.abs())
            .fold(0.0, f64::max);
        let label_width = self.0.iter().map(|c| c.label.len()).max().unwrap_or(0);

        for c in self.0 {
            let len = if max > 0.0 {
                (c.contribution.abs() / max * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            let symbol = if c.contribution < 0.0 { "-" } else { "#" };

            writeln!(
                f,
                "  {:<width$} | {:<bar$} {:>8.3}",
                c.label,
                symbol.repeat(len),
                c.contribution,
                width = label_width,
                bar = BAR_WIDTH
            )?;
        }

        Ok(())
    }
}

/// One line per batch row, failed rows show their error
pub struct BatchTable<'a>(pub &'a [BatchEntry]);

impl fmt::Display for BatchTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:>5}  {:>10}  {:<8}  {:>8}  {:>6}", "row", "prediction", "level", "mse", "r2")?;
        for entry in self.0 {
            match (&entry.report, &entry.error) {
                (Some(report), _) => writeln!(
                    f,
                    "{:>5}  {:>10.2}  {:<8}  {:>8.4}  {:>6.4}",
                    entry.row,
                    report.prediction,
                    report.level,
                    report.evaluation.mean_squared_error,
                    report.evaluation.r2
                )?,
                (None, error) => writeln!(
                    f,
                    "{:>5}  error: {}",
                    entry.row,
                    error.as_deref().unwrap_or("unknown")
                )?,
            }
        }

        Ok(())
    }
}

impl fmt::Display for CorrelationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Correlation with the performance index and regression coefficients ({} students):",
            self.nsamples
        )?;
        writeln!(f, "  {:<28} {:>11} {:>12}", "Factor", "Correlation", "Coefficient")?;
        for row in &self.rows {
            writeln!(
                f,
                "  {:<28} {:>11.3} {:>12.3}",
                row.label, row.correlation, row.coefficient
            )?;
        }
        writeln!(f, "  {:<28} {:>11} {:>12.3}", "Intercept", "", self.intercept)
    }
}
