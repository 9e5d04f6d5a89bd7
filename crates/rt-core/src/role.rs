//! Employee roles and the per-role tuning that drives agent initialization.
//!
//! The numbers in [`RoleProfile`] are the domain calibration of the model:
//! salary baselines, attribute ranges, and the salary cap used when scoring
//! satisfaction.  They are fixed constants, not configuration.

/// An employee's role.  Fixed at hire time and never changes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    Manager,
    Senior,
    Junior,
}

impl Role {
    /// Every role, in seeding order.
    pub const ALL: [Role; 3] = [Role::Manager, Role::Senior, Role::Junior];

    /// Lowercase label, used for CSV column values and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Senior  => "senior",
            Role::Junior  => "junior",
        }
    }

    /// Initialization and scoring parameters for this role.
    pub fn profile(self) -> &'static RoleProfile {
        match self {
            Role::Manager => &MANAGER,
            Role::Senior  => &SENIOR,
            Role::Junior  => &JUNIOR,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RoleProfile ───────────────────────────────────────────────────────────────

/// Role-dependent constants.  Ranges are inclusive `(low, high)` pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleProfile {
    /// Mean of the Gaussian salary draw.
    pub salary_mean:          f64,
    /// Standard deviation of the Gaussian salary draw.
    pub salary_sd:            f64,
    pub growth_opportunity:   (f64, f64),
    pub manager_relationship: (f64, f64),
    pub worklife_balance:     (f64, f64),
    /// Salary at which the salary component of satisfaction saturates at 1.0.
    pub salary_cap:           f64,
}

const MANAGER: RoleProfile = RoleProfile {
    salary_mean:          120_000.0,
    salary_sd:            12_000.0,
    growth_opportunity:   (0.1, 0.5),
    manager_relationship: (0.6, 0.9),
    worklife_balance:     (0.3, 0.5),
    salary_cap:           180_000.0,
};

const SENIOR: RoleProfile = RoleProfile {
    salary_mean:          85_000.0,
    salary_sd:            8_500.0,
    growth_opportunity:   (0.3, 0.6),
    manager_relationship: (0.4, 0.8),
    worklife_balance:     (0.5, 0.7),
    salary_cap:           180_000.0,
};

const JUNIOR: RoleProfile = RoleProfile {
    salary_mean:          60_000.0,
    salary_sd:            6_000.0,
    growth_opportunity:   (0.6, 0.9),
    manager_relationship: (0.4, 0.7),
    worklife_balance:     (0.6, 0.9),
    salary_cap:           120_000.0,
};

// ── RoleCounts ────────────────────────────────────────────────────────────────

/// One count per role.  Used both for target headcounts at seeding and for
/// the per-role headcount metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleCounts {
    pub managers: usize,
    pub senior:   usize,
    pub junior:   usize,
}

impl RoleCounts {
    pub fn new(managers: usize, senior: usize, junior: usize) -> Self {
        Self { managers, senior, junior }
    }

    /// Count for a single role.
    #[inline]
    pub fn get(&self, role: Role) -> usize {
        match role {
            Role::Manager => self.managers,
            Role::Senior  => self.senior,
            Role::Junior  => self.junior,
        }
    }

    /// Add one to the count for `role`.
    #[inline]
    pub fn increment(&mut self, role: Role) {
        match role {
            Role::Manager => self.managers += 1,
            Role::Senior  => self.senior += 1,
            Role::Junior  => self.junior += 1,
        }
    }

    /// Sum across all roles.
    pub fn total(&self) -> usize {
        self.managers + self.senior + self.junior
    }

    /// Tally roles from an iterator.
    pub fn tally<I: IntoIterator<Item = Role>>(roles: I) -> Self {
        let mut counts = Self::default();
        for role in roles {
            counts.increment(role);
        }
        counts
    }
}
