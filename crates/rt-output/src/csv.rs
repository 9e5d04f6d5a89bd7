//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `model_vars.csv`
//! - `agent_vars.csv`
//!
//! Rows are written through serde, so the column order is the field order of
//! `ModelRecord` and `AgentRecord`.  Headers are written up front so that a
//! run with no collected rows still leaves valid files.

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};
use rt_sim::{AgentRecord, ModelRecord};

use crate::OutputResult;
use crate::writer::OutputWriter;

pub const MODEL_VARS_FILE: &str = "model_vars.csv";
pub const AGENT_VARS_FILE: &str = "agent_vars.csv";

pub const MODEL_VARS_HEADER: [&str; 6] = [
    "step",
    "retention_rate",
    "average_satisfaction",
    "manager_count",
    "senior_count",
    "junior_count",
];

pub const AGENT_VARS_HEADER: [&str; 6] = ["step", "agent_id", "role", "satisfaction", "salary", "tenure"];

/// Writes collected rows to two CSV files.
pub struct CsvWriter {
    model_vars: Writer<File>,
    agent_vars: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut model_vars = open(&dir.join(MODEL_VARS_FILE))?;
        model_vars.write_record(MODEL_VARS_HEADER)?;

        let mut agent_vars = open(&dir.join(AGENT_VARS_FILE))?;
        agent_vars.write_record(AGENT_VARS_HEADER)?;

        Ok(Self {
            model_vars,
            agent_vars,
            finished: false,
        })
    }
}

/// Header rows are written explicitly, so serde must not add its own.
fn open(path: &Path) -> OutputResult<Writer<File>> {
    Ok(WriterBuilder::new().has_headers(false).from_path(path)?)
}

impl OutputWriter for CsvWriter {
    fn write_model_record(&mut self, row: &ModelRecord) -> OutputResult<()> {
        self.model_vars.serialize(row)?;
        Ok(())
    }

    fn write_agent_records(&mut self, rows: &[AgentRecord]) -> OutputResult<()> {
        for row in rows {
            self.agent_vars.serialize(row)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.model_vars.flush()?;
        self.agent_vars.flush()?;
        Ok(())
    }
}
