//! Strongly typed employee identifier.
//!
//! `AgentId` is `Copy + Ord + Hash` so it can key the population map and be
//! sorted without ceremony.  Ids are allocated by the organization model and
//! only ever grow; a departed employee's id is never handed out again.

use std::fmt;

/// Unique identity of one employee for the lifetime of a simulation run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u64);

impl AgentId {
    /// The id immediately after `self`.
    #[inline]
    pub fn next(self) -> AgentId {
        AgentId(self.0 + 1)
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}
