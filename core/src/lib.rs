//! Root of the `contract-core` library.
//!
//! The contract record, its section/field schema, and the state of one
//! editor session. Nothing here knows about terminals.

// Library code reports through tracing, never directly to stdout/stderr.
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod config;
pub mod editor;
pub mod field;
pub mod record;
pub mod save;
pub mod schema;

pub use editor::EditorState;
pub use field::Field;
pub use field::FieldLookupError;
pub use field::InputKind;
pub use field::RecordSection;
pub use record::ContractRecord;
pub use save::SaveAck;
pub use save::SaveSink;
pub use save::TracingSaveSink;
pub use schema::BoundField;
pub use schema::FieldGroup;
pub use schema::SectionId;
