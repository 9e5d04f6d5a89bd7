use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Replacement ids are `max(existing) + 1`, which has no value for an
    /// empty population.
    #[error("cannot hire a replacement: population is empty")]
    EmptyPopulation,
}

pub type SimResult<T> = Result<T, SimError>;
