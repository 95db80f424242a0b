//! JSON event export.
//!
//! Serializes one event — particles, vertices, weights — to a writer as
//! JSON. Read-only: the graph is passed through unmodified. This is the
//! debugging/interchange path; the native record format lives behind an
//! external [`crate::source::EventSink`].

use std::io::Write;

use crate::event::EventGraph;
use crate::Result;

/// Write one event as pretty-printed JSON.
pub fn export_json(event: &EventGraph, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, event)?;
    writeln!(writer)?;
    Ok(())
}

/// Render one event as a JSON string.
pub fn to_json_string(event: &EventGraph) -> Result<String> {
    Ok(serde_json::to_string(event)?)
}
