//! The `OutputWriter` trait implemented by all backend writers.

use rt_sim::{AgentRecord, ModelRecord};

use crate::OutputResult;

/// Trait implemented by output backends.
///
/// Errors surface through [`CollectorObserver::take_error`][crate::CollectorObserver::take_error]
/// when the writer is driven by the observer.
pub trait OutputWriter {
    /// Write one model-level row.
    fn write_model_record(&mut self, row: &ModelRecord) -> OutputResult<()>;

    /// Write a batch of agent-level rows.
    fn write_agent_records(&mut self, rows: &[AgentRecord]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
