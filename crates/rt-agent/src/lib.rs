//! `rt-agent`: the employee agent.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`employee`]     | `Employee` state, hiring, and the per-step contract        |
//! | [`satisfaction`] | `SatisfactionModel` trait, `WeightedSatisfaction`, `FixedSatisfaction` |
//! | [`outcome`]      | `StepOutcome` (stayed / departed)                          |
//! | [`snapshot`]     | `AgentSnapshot`, the read-only view handed to reporting    |
//!
//! # Design notes
//!
//! Agents never touch the population.  [`Employee::step`] returns a
//! [`StepOutcome`]; the organization model in `rt-sim` reacts to
//! `StepOutcome::Departed` by hiring a same-role replacement and removing the
//! departed agent.  All randomness comes from the `SimRng` passed in by the
//! model.

pub mod employee;
pub mod outcome;
pub mod satisfaction;
pub mod snapshot;


pub use employee::Employee;
pub use outcome::StepOutcome;
pub use satisfaction::{FixedSatisfaction, SatisfactionModel, WeightedSatisfaction};
pub use snapshot::AgentSnapshot;
