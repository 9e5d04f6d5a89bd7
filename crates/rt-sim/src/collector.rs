//! In-memory data collection.
//!
//! The model calls [`DataCollector::collect`] at the start of every step,
//! before any agent acts, so row `n` describes the population that entered
//! step `n`.  With a freshly seeded population every agent has tenure 0, so
//! the first retention rate is always 0.

use rt_agent::{AgentSnapshot, Employee};
use rt_core::{AgentId, Role, RoleCounts, Tick};

use crate::Metrics;

/// Model-level row: one per step.  Field order is the column order of
/// `model_vars.csv`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModelRecord {
    pub step:                 Tick,
    pub retention_rate:       f64,
    pub average_satisfaction: f64,
    pub manager_count:        usize,
    pub senior_count:         usize,
    pub junior_count:         usize,
}

impl ModelRecord {
    pub fn new(step: Tick, metrics: &Metrics) -> Self {
        Self {
            step,
            retention_rate:       metrics.retention_rate,
            average_satisfaction: metrics.average_satisfaction,
            manager_count:        metrics.headcount.managers,
            senior_count:         metrics.headcount.senior,
            junior_count:         metrics.headcount.junior,
        }
    }

    pub fn headcount(&self) -> RoleCounts {
        RoleCounts::new(self.manager_count, self.senior_count, self.junior_count)
    }
}

/// Agent-level row: one per agent per step.  Field order is the column order
/// of `agent_vars.csv`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AgentRecord {
    pub step:         Tick,
    pub agent_id:     AgentId,
    pub role:         Role,
    pub satisfaction: f64,
    pub salary:       f64,
    pub tenure:       u32,
}

impl AgentRecord {
    pub fn new(step: Tick, agent: &AgentSnapshot) -> Self {
        Self {
            step,
            agent_id:     agent.id,
            role:         agent.role,
            satisfaction: agent.satisfaction,
            salary:       agent.salary,
            tenure:       agent.tenure,
        }
    }
}

/// History of model and agent rows.
///
/// Grows by one model row and one agent row per employee on every collect,
/// unless created with [`latest_only`][Self::latest_only].
#[derive(Debug, Default)]
pub struct DataCollector {
    model_rows: Vec<ModelRecord>,
    agent_rows: Vec<AgentRecord>,
    /// Index into `agent_rows` where the latest step's rows begin.
    latest_agents_start: usize,
    latest_only: bool,
}

impl DataCollector {
    /// A collector that keeps every row.
    pub fn new() -> Self {
        Self::default()
    }

    /// A collector that drops older rows on each collect.
    pub fn latest_only() -> Self {
        Self {
            latest_only: true,
            ..Self::default()
        }
    }

    /// Record one model row and one agent row per employee for `step`.
    ///
    /// Agent rows are appended in the iteration order of `employees`.
    pub fn collect<'a, I>(&mut self, step: Tick, employees: I) -> &ModelRecord
    where
        I: IntoIterator<Item = &'a Employee>,
        I::IntoIter: Clone,
    {
        let employees = employees.into_iter();
        let metrics = Metrics::compute(employees.clone());

        if self.latest_only {
            self.model_rows.clear();
            self.agent_rows.clear();
        }

        self.latest_agents_start = self.agent_rows.len();
        self.agent_rows.extend(employees.map(|e| AgentRecord::new(step, &e.snapshot())));

        self.model_rows.push(ModelRecord::new(step, &metrics));
        &self.model_rows[self.model_rows.len() - 1]
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Every model row, oldest first.
    pub fn model_rows(&self) -> &[ModelRecord] {
        &self.model_rows
    }

    /// Every agent row, oldest first.
    pub fn agent_rows(&self) -> &[AgentRecord] {
        &self.agent_rows
    }

    /// The most recent model row, if any step has been collected.
    pub fn latest(&self) -> Option<&ModelRecord> {
        self.model_rows.last()
    }

    /// Agent rows of the most recent collection.
    pub fn latest_agent_rows(&self) -> &[AgentRecord] {
        &self.agent_rows[self.latest_agents_start..]
    }

    /// Agent rows recorded for `step`.
    pub fn agent_rows_at(&self, step: Tick) -> impl Iterator<Item = &AgentRecord> + '_ {
        self.agent_rows.iter().filter(move |r| r.step == step)
    }
}
