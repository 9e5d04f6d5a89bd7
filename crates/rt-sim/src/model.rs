//! The `OrganizationModel` struct and its step loop.

use std::collections::BTreeMap;

use rt_agent::{AgentSnapshot, Employee, SatisfactionModel, WeightedSatisfaction};
use rt_core::{AgentId, OrgConfig, Role, RoleCounts, SimRng, Tick};
use tracing::{debug, info};

use crate::{DataCollector, Metrics, ModelBuilder, ModelInfo, NoopObserver, SimError, SimObserver, SimResult};

/// The organization: a population of employees and the loop that steps it.
///
/// The population is keyed by [`AgentId`] in a `BTreeMap`, so the id list
/// that gets shuffled each step is built in a stable order and a seed fully
/// determines a run.  The model is the only owner of the population; agents
/// report departures through their [`StepOutcome`][rt_agent::StepOutcome].
///
/// Create via [`ModelBuilder`] or [`OrganizationModel::new`].
pub struct OrganizationModel<S: SatisfactionModel = WeightedSatisfaction> {
    /// Run configuration (seeding headcounts, seed, step budget, …).
    pub config: OrgConfig,

    steps:        Tick,
    population:   BTreeMap<AgentId, Employee>,
    rng:          SimRng,
    satisfaction: S,
    collector:    DataCollector,
}

impl OrganizationModel<WeightedSatisfaction> {
    /// Seed an organization with the given headcounts and default settings.
    pub fn new(num_managers: usize, num_senior: usize, num_junior: usize) -> Self {
        let config = OrgConfig {
            num_managers,
            num_senior,
            num_junior,
            ..OrgConfig::default()
        };
        ModelBuilder::new(config).build()
    }
}

impl<S: SatisfactionModel> OrganizationModel<S> {
    /// Build an unseeded model.  Used by [`ModelBuilder`].
    pub(crate) fn from_parts(
        config:       OrgConfig,
        rng:          SimRng,
        satisfaction: S,
        collector:    DataCollector,
    ) -> Self {
        Self {
            config,
            steps:      Tick::ZERO,
            population: BTreeMap::new(),
            rng,
            satisfaction,
            collector,
        }
    }

    /// Create the configured number of agents per role.  Ids start at 0 and
    /// run managers, then seniors, then juniors.
    pub(crate) fn seed_population(&mut self) {
        let targets = self.config.headcount();
        let mut next = AgentId(0);
        for role in Role::ALL {
            for _ in 0..targets.get(role) {
                let employee = Employee::hire(next, role, &self.satisfaction, &mut self.rng, None);
                self.population.insert(next, employee);
                next = next.next();
            }
        }
        info!(
            managers = targets.managers,
            senior   = targets.senior,
            junior   = targets.junior,
            "seeded population"
        );
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance the simulation by one step.
    ///
    /// Every step collects one model row and one agent row per employee into
    /// the in-memory [`DataCollector`].  By default the full history is kept,
    /// so a long run holds `steps * population` agent rows; build with
    /// [`ModelBuilder::keep_history`]`(false)` to retain only the latest step.
    pub fn step(&mut self) -> SimResult<()> {
        self.process_step(&mut NoopObserver, false).map(|_| ())
    }

    /// Run from the current step to `config.end_tick()`.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.steps < self.config.end_tick() {
            self.observed_step(observer)?;
        }
        observer.on_run_end(self.steps);
        self.log_summary();
        Ok(())
    }

    /// Run exactly `n` steps from the current position (ignores `end_tick`).
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_step(observer)?;
        }
        Ok(())
    }

    /// Hire a new agent of `role` with id `max(existing ids) + 1`.
    ///
    /// Returns [`SimError::EmptyPopulation`] when there is no existing id to
    /// build on.
    pub fn hire_replacement(&mut self, role: Role) -> SimResult<AgentId> {
        let newest = self
            .population
            .last_key_value()
            .map(|(&id, _)| id)
            .ok_or(SimError::EmptyPopulation)?;
        let id = newest.next();

        let employee = Employee::hire(id, role, &self.satisfaction, &mut self.rng, None);
        self.population.insert(id, employee);
        debug!(agent = %id, %role, "hired replacement");
        Ok(id)
    }

    // ── Read accessors ────────────────────────────────────────────────────

    /// Number of completed steps.
    #[inline]
    pub fn steps(&self) -> Tick {
        self.steps
    }

    /// Current population size.
    #[inline]
    pub fn agent_count(&self) -> usize {
        self.population.len()
    }

    pub fn retention_rate(&self) -> f64 {
        self.metrics().retention_rate
    }

    pub fn average_satisfaction(&self) -> f64 {
        self.metrics().average_satisfaction
    }

    /// Current headcount per role.
    pub fn role_counts(&self) -> RoleCounts {
        RoleCounts::tally(self.population.values().map(Employee::role))
    }

    /// Retention, satisfaction and headcounts of the current population.
    pub fn metrics(&self) -> Metrics {
        Metrics::compute(self.population.values())
    }

    /// Look up a single agent.
    pub fn agent(&self, id: AgentId) -> Option<&Employee> {
        self.population.get(&id)
    }

    /// All agents in ascending id order.
    pub fn agents(&self) -> impl Iterator<Item = &Employee> + '_ {
        self.population.values()
    }

    /// Ids of all agents in ascending order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.population.keys().copied()
    }

    /// Reporting view of every agent, ascending id order.
    pub fn agent_snapshots(&self) -> Vec<AgentSnapshot> {
        self.population.values().map(Employee::snapshot).collect()
    }

    /// History of pre-step rows collected so far.
    pub fn collector(&self) -> &DataCollector {
        &self.collector
    }

    /// Status summary for display.
    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            step:            self.steps,
            total_employees: self.population.len(),
            latest:          self
                .collector
                .latest()
                .map(|r| (r.retention_rate, r.average_satisfaction)),
        }
    }

    // ── Core step processing ──────────────────────────────────────────────

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.steps;
        let interval = self.config.output_interval_steps;
        let report = interval > 0 && now.0.is_multiple_of(interval);

        observer.on_step_start(now);
        let departures = self.process_step(observer, report)?;
        observer.on_step_end(now, departures);
        Ok(())
    }

    /// Collect, shuffle, activate, advance.  Returns the departure count.
    fn process_step<O: SimObserver>(&mut self, observer: &mut O, report: bool) -> SimResult<usize> {
        let now = self.steps;

        // ── Phase 1: collect pre-step rows ────────────────────────────────
        self.collector.collect(now, self.population.values());
        if report {
            if let Some(record) = self.collector.latest() {
                observer.on_collect(record, self.collector.latest_agent_rows());
            }
        }

        // ── Phase 2: fix the activation order ─────────────────────────────
        //
        // Only agents present now are activated.  Replacements hired below
        // are absent from `order` and wait until the next step.
        let mut order: Vec<AgentId> = self.population.keys().copied().collect();
        self.rng.shuffle(&mut order);

        // ── Phase 3: activate ─────────────────────────────────────────────
        let mut departures = 0usize;
        for id in order {
            let Some(employee) = self.population.get_mut(&id) else {
                continue;
            };
            let outcome = employee.step(&self.satisfaction, &mut self.rng);
            if !outcome.is_departure() {
                continue;
            }

            let role = employee.role();
            let tenure = employee.tenure();
            // Hire before removing so the id allocation always has a
            // non-empty population to build on.
            let replacement = self.hire_replacement(role)?;
            self.population.remove(&id);
            debug!(agent = %id, %role, tenure, %replacement, "employee departed");
            departures += 1;
        }

        // ── Phase 4: advance ──────────────────────────────────────────────
        self.steps = self.steps.next();
        debug!(step = %now, departures, population = self.population.len(), "step complete");
        Ok(departures)
    }

    fn log_summary(&self) {
        let m = self.metrics();
        info!(
            steps                = self.steps.0,
            population           = m.total(),
            retention_rate       = m.retention_rate,
            average_satisfaction = m.average_satisfaction,
            "run complete"
        );
    }
}
