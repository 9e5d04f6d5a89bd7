//! What happened to an employee during one step.

/// Result of [`Employee::step`][crate::Employee::step].
///
/// Consumed by the organization model, which owns the population and is the
/// only party allowed to remove or insert agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The employee stayed; tenure advanced and a raise may have been applied.
    Stayed {
        /// `true` if the biennial raise was applied this step.
        raised: bool,
    },

    /// The employee decided to leave.  No other state changed this step.
    Departed,
}

impl StepOutcome {
    #[inline]
    pub fn is_departure(self) -> bool {
        matches!(self, StepOutcome::Departed)
    }
}
