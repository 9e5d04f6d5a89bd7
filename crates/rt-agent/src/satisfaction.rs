//! Satisfaction scoring: the pluggable part of the agent model.

use rt_core::SimRng;

use crate::Employee;

/// Computes an employee's satisfaction for the current step.
///
/// Called once per agent per step, before the attrition roll, and once at
/// hire time when no initial satisfaction is supplied.  Implementations must
/// return a value in `[0, 1]`; the leave probability is `1 - satisfaction`.
///
/// # Example
///
/// ```rust
/// use rt_agent::{Employee, SatisfactionModel};
/// use rt_core::SimRng;
///
/// /// Everyone is content as long as they are paid.
/// struct PaidIsHappy;
///
/// impl SatisfactionModel for PaidIsHappy {
///     fn score(&self, employee: &Employee, _rng: &mut SimRng) -> f64 {
///         if employee.salary() > 0.0 { 1.0 } else { 0.0 }
///     }
/// }
/// ```
pub trait SatisfactionModel: Send + Sync + 'static {
    fn score(&self, employee: &Employee, rng: &mut SimRng) -> f64;
}

// ── WeightedSatisfaction ──────────────────────────────────────────────────────

const SALARY_WEIGHT:    f64 = 0.25;
const GROWTH_WEIGHT:    f64 = 0.30;
const MANAGER_WEIGHT:   f64 = 0.25;
const WORKLIFE_WEIGHT:  f64 = 0.20;
const NOISE_STD_DEV:    f64 = 0.05;

/// The calibrated model: a fixed weighted sum of salary (relative to the
/// role's cap), growth opportunity, manager relationship and work-life
/// balance, plus `Normal(0, 0.05)` noise, clamped to `[0, 1]`.
///
/// The weights sum to 1.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedSatisfaction;

impl WeightedSatisfaction {
    /// The weighted sum before noise and clamping.
    pub fn base_score(employee: &Employee) -> f64 {
        let cap = employee.role().profile().salary_cap;
        let salary_component = (employee.salary() / cap).min(1.0);

        SALARY_WEIGHT * salary_component
            + GROWTH_WEIGHT * employee.growth_opportunity()
            + MANAGER_WEIGHT * employee.manager_relationship()
            + WORKLIFE_WEIGHT * employee.worklife_balance()
    }
}

impl SatisfactionModel for WeightedSatisfaction {
    fn score(&self, employee: &Employee, rng: &mut SimRng) -> f64 {
        let noisy = Self::base_score(employee) + rng.normal(0.0, NOISE_STD_DEV);
        noisy.clamp(0.0, 1.0)
    }
}

// ── FixedSatisfaction ─────────────────────────────────────────────────────────

/// Always returns the same satisfaction, clamped to `[0, 1]`.
///
/// `FixedSatisfaction(1.0)` disables attrition; `FixedSatisfaction(0.0)`
/// makes every agent leave on every step.  Draws nothing from the RNG.
#[derive(Debug, Clone, Copy)]
pub struct FixedSatisfaction(pub f64);

impl SatisfactionModel for FixedSatisfaction {
    fn score(&self, _employee: &Employee, _rng: &mut SimRng) -> f64 {
        self.0.clamp(0.0, 1.0)
    }
}
