//! # Collaborator Contracts
//!
//! Trait seams between the query engine and the external world: a
//! generator or record reader implements [`EventSource`], a record
//! writer implements [`EventSink`]. Events flow as a strictly
//! sequential pull-based stream — one `next_event` call performs one
//! unit of external work and yields one graph; the engine holds no
//! cross-event state.
//!
//! Format-specific decoding (ASCII record parsing and the like) lives
//! entirely behind these traits, outside this crate.

use tracing::trace;

use crate::event::EventGraph;
use crate::Result;

/// Produces event graphs one at a time.
///
/// Implementors uphold the referential invariants before handing a graph
/// over — in practice by constructing through
/// [`crate::event::EventBuilder`], which validates. Upstream failures
/// surface as [`crate::Error::Source`].
pub trait EventSource {
    /// Pull the next event. `Ok(None)` when the stream is exhausted.
    fn next_event(&mut self) -> Result<Option<EventGraph>>;

    /// Adapt into an iterator of events.
    fn stream(self) -> EventStream<Self>
    where
        Self: Sized,
    {
        EventStream { source: self, done: false }
    }
}

/// Accepts events for write-through serialization. The graph is passed
/// unmodified; this engine never mutates a graph it is given.
pub trait EventSink {
    fn write_event(&mut self, event: &EventGraph) -> Result<()>;
}

/// Iterator adapter over an [`EventSource`].
///
/// Fuses after the first `Ok(None)` or error.
pub struct EventStream<S: EventSource> {
    source: S,
    done: bool,
}

impl<S: EventSource> Iterator for EventStream<S> {
    type Item = Result<EventGraph>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.source.next_event() {
            Ok(Some(event)) => {
                trace!(particles = event.particle_count(), "event pulled");
                Some(Ok(event))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Source adapter that writes each event to a sink before yielding it,
/// so a caller can serialize and query in one pass.
pub struct WriteThrough<S: EventSource, W: EventSink> {
    source: S,
    sink: W,
}

impl<S: EventSource, W: EventSink> WriteThrough<S, W> {
    pub fn new(source: S, sink: W) -> Self {
        Self { source, sink }
    }

    /// Recover the sink, e.g. to flush or close it.
    pub fn into_sink(self) -> W {
        self.sink
    }
}

impl<S: EventSource, W: EventSink> EventSource for WriteThrough<S, W> {
    fn next_event(&mut self) -> Result<Option<EventGraph>> {
        match self.source.next_event()? {
            Some(event) => {
                self.sink.write_event(&event)?;
                Ok(Some(event))
            }
            None => Ok(None),
        }
    }
}

/// In-memory source over pre-built events, for tests and embedding.
pub struct VecSource {
    events: std::vec::IntoIter<EventGraph>,
}

impl VecSource {
    pub fn new(events: Vec<EventGraph>) -> Self {
        Self { events: events.into_iter() }
    }
}

impl EventSource for VecSource {
    fn next_event(&mut self) -> Result<Option<EventGraph>> {
        Ok(self.events.next())
    }
}
