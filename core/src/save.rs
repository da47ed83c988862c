//! Where a saved contract goes.
//!
//! Nothing is persisted. A save hands the full record to a [`SaveSink`]
//! and the caller shows the returned [`SaveAck`] to the user.

use crate::record::ContractRecord;

/// Tracing target used for save events so they can be filtered on their own.
pub const SAVE_LOG_TARGET: &str = "contract_editor::save";

/// Observer that receives the full record on every save.
pub trait SaveSink {
    fn contract_saved(&self, record: &ContractRecord);
}

/// Default sink: writes the record as JSON to the tracing stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSaveSink;

impl SaveSink for TracingSaveSink {
    fn contract_saved(&self, record: &ContractRecord) {
        match serde_json::to_string(record) {
            Ok(json) => tracing::info!(
                target: SAVE_LOG_TARGET,
                contract_id = %record.contract_identifier,
                record = %json,
                "Saving contract data"
            ),
            Err(e) => tracing::error!(
                target: SAVE_LOG_TARGET,
                contract_id = %record.contract_identifier,
                "failed to serialize contract for save log: {e}"
            ),
        }
    }
}

/// User-visible acknowledgment of a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveAck {
    pub title: &'static str,
    pub description: &'static str,
}

impl SaveAck {
    pub const SAVED: SaveAck = SaveAck {
        title: "Contract Saved",
        description: "All changes have been saved successfully.",
    };
}
