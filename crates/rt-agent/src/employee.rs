//! The `Employee` agent.
//!
//! # Lifecycle
//!
//! An employee is created by [`Employee::hire`], either while the model seeds
//! its initial population or as a same-role replacement for someone who just
//! left.  Each step the model calls [`Employee::step`]:
//!
//! 1. satisfaction is recomputed by the model's [`SatisfactionModel`];
//! 2. the employee leaves with probability `1 - satisfaction`;
//! 3. otherwise tenure advances and, on every positive even tenure, salary
//!    rises 5% and growth opportunity rises 0.1 (capped at 1.0).
//!
//! Fields are crate-private so that the role stays fixed and salary never
//! decreases; read them through the accessors or [`Employee::snapshot`].

use rt_core::{AgentId, Role, SimRng};
use tracing::trace;

use crate::{AgentSnapshot, SatisfactionModel, StepOutcome};

/// Multiplier applied to salary on each raise.
pub const RAISE_FACTOR: f64 = 1.05;

/// Added to growth opportunity on each raise.
pub const GROWTH_BUMP: f64 = 0.1;

/// Raises are granted when tenure is a positive multiple of this.
pub const RAISE_INTERVAL: u32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub(crate) id:                   AgentId,
    pub(crate) role:                 Role,
    pub(crate) tenure:               u32,
    pub(crate) salary:               f64,
    pub(crate) growth_opportunity:   f64,
    pub(crate) manager_relationship: f64,
    pub(crate) worklife_balance:     f64,
    pub(crate) satisfaction:         f64,
}

impl Employee {
    /// Create a new employee of `role` with freshly drawn attributes.
    ///
    /// Draw order: salary, growth opportunity, manager relationship,
    /// work-life balance, then (if `initial_satisfaction` is `None`) the
    /// satisfaction noise.  A supplied `initial_satisfaction` is stored as
    /// given, without clamping.
    ///
    /// Salary has no floor; an extreme draw may be negative.
    pub fn hire<S: SatisfactionModel + ?Sized>(
        id:                   AgentId,
        role:                 Role,
        model:                &S,
        rng:                  &mut SimRng,
        initial_satisfaction: Option<f64>,
    ) -> Self {
        let profile = role.profile();
        let salary = rng.normal(profile.salary_mean, profile.salary_sd);
        let (g_lo, g_hi) = profile.growth_opportunity;
        let (m_lo, m_hi) = profile.manager_relationship;
        let (w_lo, w_hi) = profile.worklife_balance;

        let mut employee = Self {
            id,
            role,
            tenure:               0,
            salary,
            growth_opportunity:   rng.uniform(g_lo, g_hi),
            manager_relationship: rng.uniform(m_lo, m_hi),
            worklife_balance:     rng.uniform(w_lo, w_hi),
            satisfaction:         0.0,
        };

        employee.satisfaction = match initial_satisfaction {
            Some(value) => value,
            None        => model.score(&employee, rng),
        };
        employee
    }

    // ── Per-step contract ─────────────────────────────────────────────────

    /// Run one step for this employee.
    ///
    /// On [`StepOutcome::Departed`] nothing but satisfaction has changed; the
    /// caller is responsible for removing the agent and hiring a replacement.
    pub fn step<S: SatisfactionModel + ?Sized>(
        &mut self,
        model: &S,
        rng:   &mut SimRng,
    ) -> StepOutcome {
        self.update_satisfaction(model, rng);

        if self.will_leave(rng) {
            return StepOutcome::Departed;
        }

        self.tenure += 1;
        let raised = self.consider_raise();
        StepOutcome::Stayed { raised }
    }

    /// Recompute satisfaction from the current attributes.
    pub fn update_satisfaction<S: SatisfactionModel + ?Sized>(&mut self, model: &S, rng: &mut SimRng) {
        self.satisfaction = model.score(self, rng);
        trace!(agent = %self.id, satisfaction = self.satisfaction, "satisfaction updated");
    }

    /// Roll for attrition: `true` with probability `1 - satisfaction`.
    ///
    /// Always draws exactly one uniform value.
    pub fn will_leave(&self, rng: &mut SimRng) -> bool {
        rng.unit() < 1.0 - self.satisfaction
    }

    /// Apply the biennial raise if the current tenure earns one.
    ///
    /// Returns `true` if a raise was applied.
    pub fn consider_raise(&mut self) -> bool {
        if self.tenure == 0 || !self.tenure.is_multiple_of(RAISE_INTERVAL) {
            return false;
        }
        // A negative salary would shrink when multiplied; keep it unchanged.
        self.salary = (self.salary * RAISE_FACTOR).max(self.salary);
        self.growth_opportunity = (self.growth_opportunity + GROWTH_BUMP).min(1.0);
        true
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn tenure(&self) -> u32 {
        self.tenure
    }

    #[inline]
    pub fn salary(&self) -> f64 {
        self.salary
    }

    #[inline]
    pub fn growth_opportunity(&self) -> f64 {
        self.growth_opportunity
    }

    #[inline]
    pub fn manager_relationship(&self) -> f64 {
        self.manager_relationship
    }

    #[inline]
    pub fn worklife_balance(&self) -> f64 {
        self.worklife_balance
    }

    #[inline]
    pub fn satisfaction(&self) -> f64 {
        self.satisfaction
    }

    /// Value copy of the reporting fields.
    pub fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot {
            id:           self.id,
            role:         self.role,
            satisfaction: self.satisfaction,
            salary:       self.salary,
            tenure:       self.tenure,
        }
    }
}
