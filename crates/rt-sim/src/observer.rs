//! Simulation observer trait for progress reporting and data export.

use rt_core::Tick;

use crate::{AgentRecord, ModelRecord};

/// Callbacks invoked by [`OrganizationModel::run`][crate::OrganizationModel::run]
/// at key points in the step loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: departure counter
///
/// ```rust,ignore
/// struct Turnover { total: usize }
///
/// impl SimObserver for Turnover {
///     fn on_step_end(&mut self, _tick: Tick, departures: usize) {
///         self.total += departures;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before collection.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called right after the pre-step rows were collected, before any agent
    /// acts, every `config.output_interval_steps` steps.
    fn on_collect(&mut self, _record: &ModelRecord, _agents: &[AgentRecord]) {}

    /// Called at the end of each step.
    ///
    /// `departures` is the number of agents that left (and were replaced)
    /// during this step.
    fn on_step_end(&mut self, _tick: Tick, _departures: usize) {}

    /// Called once after the final step of [`run`][crate::OrganizationModel::run].
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
