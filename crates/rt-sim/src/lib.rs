//! `rt-sim`: the organization model and its step loop.
//!
//! # Step loop
//!
//! ```text
//! for step in 0..config.total_steps:
//!   ① Collect  - record retention, satisfaction, headcounts and one row per
//!                agent from the population as it stands *before* anyone acts.
//!   ② Shuffle  - snapshot the current agent ids and shuffle them.
//!   ③ Activate - for each id in that order, call Employee::step:
//!                  Stayed   → nothing else to do
//!                  Departed → hire a same-role replacement, then remove the
//!                             departed agent
//!                Replacements are not in the snapshot, so they first act on
//!                the following step.
//!   ④ Advance  - bump the step counter.
//! ```
//!
//! # Feature flags
//!
//! | Feature | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | `Serialize` on `ModelRecord` and `AgentRecord` (CSV columns)  |
//!
//! # Quick-start
//!
//! ```rust
//! use rt_core::OrgConfig;
//! use rt_sim::{ModelBuilder, NoopObserver};
//!
//! let config = OrgConfig { total_steps: 10, ..OrgConfig::default() };
//! let mut model = ModelBuilder::new(config).build();
//! model.run(&mut NoopObserver).unwrap();
//! assert_eq!(model.agent_count(), 75);
//! ```

pub mod builder;
pub mod collector;
pub mod error;
pub mod metrics;
pub mod model;
pub mod observer;

#[cfg(test)]
mod tests;

pub use builder::ModelBuilder;
pub use collector::{AgentRecord, DataCollector, ModelRecord};
pub use error::{SimError, SimResult};
pub use metrics::{Metrics, ModelInfo};
pub use model::OrganizationModel;
pub use observer::{NoopObserver, SimObserver};
