//! Run configuration.
//!
//! Typically loaded from a TOML file by the driver and handed to the model
//! builder (TOML loading needs the `serde` feature).  Every field has a
//! default, so a TOML file only needs the keys it overrides:
//!
//! ```toml
//! num_managers = 3
//! num_junior   = 80
//! seed         = 7
//! ```

#[cfg(feature = "serde")]
use std::{fs, path::Path};

use crate::{RoleCounts, Tick};
#[cfg(feature = "serde")]
use crate::{RtError, RtResult};

/// Top-level simulation configuration.
///
/// Headcounts are only used at seeding.  They are not bounded: the reference
/// dashboard offered managers 1–10, seniors 5–50 and juniors 10–100, but any
/// value (including zero) is accepted here.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OrgConfig {
    pub num_managers: usize,
    pub num_senior:   usize,
    pub num_junior:   usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Steps executed by `OrganizationModel::run`.
    pub total_steps: u64,

    /// Report collected rows to observers every N steps.  1 = every step;
    /// 0 disables observer reporting (in-memory collection still happens).
    pub output_interval_steps: u64,
}

impl Default for OrgConfig {
    fn default() -> Self {
        Self {
            num_managers:          5,
            num_senior:            20,
            num_junior:            50,
            seed:                  42,
            total_steps:           100,
            output_interval_steps: 1,
        }
    }
}

impl OrgConfig {
    /// Parse a TOML document.  Missing keys fall back to [`Default`].
    #[cfg(feature = "serde")]
    pub fn from_toml_str(text: &str) -> RtResult<Self> {
        toml::from_str(text).map_err(|e| RtError::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<Path>) -> RtResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Target headcount per role.
    pub fn headcount(&self) -> RoleCounts {
        RoleCounts::new(self.num_managers, self.num_senior, self.num_junior)
    }

    /// The tick at which `run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_steps)
    }
}
