//! Plain value view of one employee for the reporting side.

use rt_core::{AgentId, Role};

/// The fields reporting collaborators read from each agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshot {
    pub id:           AgentId,
    pub role:         Role,
    pub satisfaction: f64,
    pub salary:       f64,
    /// Steps survived since hire.
    pub tenure:       u32,
}
