//! Aggregate metrics over a population.
//!
//! [`Metrics::compute`] is a pure projection; an empty population yields zero
//! for every rate rather than an error.

use std::fmt;

use rt_agent::Employee;
use rt_core::{RoleCounts, Tick};

// ── Metrics ───────────────────────────────────────────────────────────────────

/// All aggregate metrics computed in one pass.
///
/// `retention_rate` is `1 - (tenure-0 agents / total)`; `average_satisfaction`
/// is the mean satisfaction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    pub retention_rate:       f64,
    pub average_satisfaction: f64,
    pub headcount:            RoleCounts,
}

impl Metrics {
    pub fn compute<'a, I>(employees: I) -> Self
    where
        I: IntoIterator<Item = &'a Employee>,
    {
        let mut headcount = RoleCounts::default();
        let mut fresh = 0usize;
        let mut satisfaction_sum = 0.0f64;

        for e in employees {
            headcount.increment(e.role());
            if e.tenure() == 0 {
                fresh += 1;
            }
            satisfaction_sum += e.satisfaction();
        }

        let total = headcount.total();
        if total == 0 {
            return Self::default();
        }

        Self {
            retention_rate:       1.0 - fresh as f64 / total as f64,
            average_satisfaction: satisfaction_sum / total as f64,
            headcount,
        }
    }

    /// Total number of agents counted.
    #[inline]
    pub fn total(&self) -> usize {
        self.headcount.total()
    }
}

// ── ModelInfo ─────────────────────────────────────────────────────────────────

/// The one-glance status text shown next to the charts.
///
/// Rates come from the latest collected row; before the first row exists
/// they render as `N/A`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelInfo {
    pub step:            Tick,
    pub total_employees: usize,
    /// `(retention_rate, average_satisfaction)` of the latest collected row.
    pub latest:          Option<(f64, f64)>,
}

impl fmt::Display for ModelInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Step: {}", self.step.0)?;
        writeln!(f, "Total Employees: {}", self.total_employees)?;
        match self.latest {
            Some((retention, satisfaction)) if self.step > Tick::ZERO => {
                writeln!(f, "Retention Rate: {retention:.2}")?;
                write!(f, "Avg Satisfaction: {satisfaction:.2}")
            }
            _ => {
                writeln!(f, "Retention Rate: N/A")?;
                write!(f, "Avg Satisfaction: N/A")
            }
        }
    }
}
