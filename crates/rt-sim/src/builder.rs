//! Fluent builder for constructing an [`OrganizationModel`].

use rt_agent::{SatisfactionModel, WeightedSatisfaction};
use rt_core::{OrgConfig, SimRng};

use crate::{DataCollector, OrganizationModel};

/// Fluent builder for [`OrganizationModel<S>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default                          |
/// |----------------------------|----------------------------------|
/// | `.satisfaction_model(m)`   | [`WeightedSatisfaction`]         |
/// | `.rng(r)`                  | `SimRng::new(config.seed)`       |
/// | `.keep_history(b)`         | `true` (keep every row)          |
///
/// # Example
///
/// ```rust
/// use rt_agent::FixedSatisfaction;
/// use rt_core::{OrgConfig, SimRng};
/// use rt_sim::ModelBuilder;
///
/// let config = OrgConfig { num_managers: 1, num_senior: 0, num_junior: 0, ..OrgConfig::default() };
/// let model = ModelBuilder::new(config)
///     .satisfaction_model(FixedSatisfaction(1.0))
///     .rng(SimRng::new(7))
///     .build();
/// assert_eq!(model.agent_count(), 1);
/// ```
pub struct ModelBuilder<S: SatisfactionModel = WeightedSatisfaction> {
    config:       OrgConfig,
    rng:          Option<SimRng>,
    satisfaction: S,
    keep_history: bool,
}

impl ModelBuilder<WeightedSatisfaction> {
    pub fn new(config: OrgConfig) -> Self {
        Self {
            config,
            rng:          None,
            satisfaction: WeightedSatisfaction,
            keep_history: true,
        }
    }
}

impl<S: SatisfactionModel> ModelBuilder<S> {
    /// Replace the satisfaction model.
    pub fn satisfaction_model<T: SatisfactionModel>(self, satisfaction: T) -> ModelBuilder<T> {
        ModelBuilder {
            config:       self.config,
            rng:          self.rng,
            satisfaction,
            keep_history: self.keep_history,
        }
    }

    /// Inject a random source instead of seeding one from `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Keep every collected row (`true`) or only the latest step's (`false`).
    pub fn keep_history(mut self, keep: bool) -> Self {
        self.keep_history = keep;
        self
    }

    /// Seed the population and return a ready-to-step model.
    ///
    /// Zero headcounts are accepted and yield an empty organization.
    pub fn build(self) -> OrganizationModel<S> {
        let rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.seed));
        let collector = if self.keep_history {
            DataCollector::new()
        } else {
            DataCollector::latest_only()
        };
        let mut model = OrganizationModel::from_parts(self.config, rng, self.satisfaction, collector);
        model.seed_population();
        model
    }
}
