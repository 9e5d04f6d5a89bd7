//! `rt-core`: foundational types for the retention simulation.
//!
//! This crate is a dependency of every other `rt-*` crate.  It has no `rt-*`
//! dependencies and keeps external ones small (`rand`, `rand_distr`,
//! `thiserror`).
//!
//! # Feature flags
//!
//! | Feature | Effect                                                          |
//! |---------|-----------------------------------------------------------------|
//! | `serde` | serde derives on ids, ticks, roles and `OrgConfig`; TOML loading |
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`role`]        | `Role`, `RoleProfile`, `RoleCounts`                   |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng` (the model-owned random source)              |
//! | [`config`]      | `OrgConfig` and its TOML loader                       |
//! | [`error`]       | `RtError`, `RtResult`                                 |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod role;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::OrgConfig;
pub use error::{RtError, RtResult};
pub use ids::AgentId;
pub use rng::SimRng;
pub use role::{Role, RoleCounts, RoleProfile};
pub use time::Tick;
