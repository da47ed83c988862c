//! State owned by one editor session.
//!
//! [`EditorState`] holds the record and the active section pointer. All
//! mutation goes through [`EditorState::update_field`] and
//! [`EditorState::select_section`]; saving only reads.

use crate::field::Field;
use crate::record::ContractRecord;
use crate::save::SaveAck;
use crate::save::SaveSink;
use crate::schema::SectionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    record: ContractRecord,
    active: SectionId,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// A fresh session over the seed record, showing the parties section.
    pub fn new() -> Self {
        Self::with_record(ContractRecord::seed())
    }

    pub fn with_record(record: ContractRecord) -> Self {
        Self {
            record,
            active: SectionId::default(),
        }
    }

    pub fn record(&self) -> &ContractRecord {
        &self.record
    }

    pub fn active_section(&self) -> SectionId {
        self.active
    }

    pub fn value(&self, field: Field) -> &str {
        self.record.value(field)
    }

    /// Replace one leaf of the record. Siblings and other sections are
    /// left untouched; the value is stored exactly as given.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!(field = %field.path(), len = value.len(), "update field");
        *self.record.slot_mut(field) = value;
    }

    pub fn select_section(&mut self, id: SectionId) {
        if self.active != id {
            tracing::debug!(from = %self.active, to = %id, "select section");
        }
        self.active = id;
    }

    /// Hand the current record to `sink` and return the acknowledgment to
    /// show. Never fails and never changes the record.
    pub fn save(&self, sink: &dyn SaveSink) -> SaveAck {
        sink.contract_saved(&self.record);
        SaveAck::SAVED
    }
}
