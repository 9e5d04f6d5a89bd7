//! `CollectorObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use rt_core::Tick;
use rt_sim::{AgentRecord, ModelRecord, SimObserver};
use tracing::warn;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams every collected model and agent row to an
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `model.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct CollectorObserver<W: OutputWriter> {
    writer:      W,
    model_rows:  usize,
    agent_rows:  usize,
    last_error:  Option<OutputError>,
}

impl<W: OutputWriter> CollectorObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            model_rows: 0,
            agent_rows: 0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `model.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Model rows handed to the writer so far.
    pub fn model_rows_written(&self) -> usize {
        self.model_rows
    }

    /// Agent rows handed to the writer so far.
    pub fn agent_rows_written(&self) -> usize {
        self.agent_rows
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for CollectorObserver<W> {
    fn on_collect(&mut self, record: &ModelRecord, agents: &[AgentRecord]) {
        let result = self.writer.write_model_record(record);
        self.model_rows += 1;
        self.store_err(result);

        if !agents.is_empty() {
            let result = self.writer.write_agent_records(agents);
            self.agent_rows += agents.len();
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
