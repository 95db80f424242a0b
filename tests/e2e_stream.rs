//! End-to-end test for the event stream pipeline:
//! pull events from a source, write each through a sink, query as they
//! go, then replay the written events and check the query results agree.
//! This is the generate-while-writing loop of the original binding.

use hepquery::{
    export, Attr, EventBuilder, EventGraph, EventSink, EventSource, Op, Particle, ParticleId,
    Predicate, Scope, VecSource, Vertex, VertexId, WriteThrough,
};
use pretty_assertions::assert_eq;

fn pid(n: u64) -> ParticleId {
    ParticleId(n)
}
fn vid(n: u64) -> VertexId {
    VertexId(n)
}

/// Z -> l+ l- with the lepton flavour varied per event.
fn dilepton_event(lepton_pdg: i32) -> EventGraph {
    EventBuilder::new()
        .particle(
            Particle::new(pid(1), 23, 22)
                .with_momentum(0.0, 0.0, 20.0, 93.0)
                .with_end_vertex(vid(1)),
        )
        .particle(
            Particle::new(pid(2), lepton_pdg, 1)
                .with_momentum(30.0, 0.0, 10.0, 45.0)
                .with_production_vertex(vid(1)),
        )
        .particle(
            Particle::new(pid(3), -lepton_pdg, 1)
                .with_momentum(-30.0, 0.0, 10.0, 48.0)
                .with_production_vertex(vid(1)),
        )
        .vertex(Vertex::new(vid(1)).with_incoming([pid(1)]).with_outgoing([pid(2), pid(3)]))
        .weight(1.0)
        .build()
        .unwrap()
}

/// Sink that keeps a clone of everything written, standing in for an
/// external record writer.
#[derive(Default)]
struct CapturingSink {
    written: Vec<EventGraph>,
}

impl EventSink for CapturingSink {
    fn write_event(&mut self, event: &EventGraph) -> hepquery::Result<()> {
        self.written.push(event.clone());
        Ok(())
    }
}

#[test]
fn test_write_through_then_replay_gives_identical_results() {
    let events = vec![dilepton_event(11), dilepton_event(13)];
    let selection = Predicate::compare(Attr::Status, Op::Eq, 1)
        .unwrap()
        .and(Predicate::is_false(Attr::HasEndVertex).unwrap());

    // Pass 1: pull, write through, query.
    let mut wt = WriteThrough::new(VecSource::new(events), CapturingSink::default());
    let mut first_pass = Vec::new();
    while let Some(event) = wt.next_event().unwrap() {
        first_pass.push(event.select(&selection, Scope::All).unwrap());
    }
    let sink = wt.into_sink();
    assert_eq!(sink.written.len(), 2);

    // Pass 2: replay what was written and run the same selection.
    let second_pass: Vec<_> = VecSource::new(sink.written)
        .stream()
        .map(|e| e.unwrap().select(&selection, Scope::All).unwrap())
        .collect();

    assert_eq!(first_pass, second_pass);
    assert_eq!(first_pass[0].iter().map(|r| r.pdg_id).collect::<Vec<_>>(), vec![11, -11]);
    assert_eq!(first_pass[1].iter().map(|r| r.pdg_id).collect::<Vec<_>>(), vec![13, -13]);
}

#[test]
fn test_events_are_queried_one_at_a_time() {
    let mut source = VecSource::new(vec![dilepton_event(11), dilepton_event(13), dilepton_event(15)]);

    let mut count = 0;
    while let Some(event) = source.next_event().unwrap() {
        // One graph alive per iteration; queries run and the graph drops.
        let z = event.first(&Predicate::compare(Attr::PdgId, Op::Eq, 23).unwrap()).unwrap();
        assert_eq!(z.children(&Predicate::ALWAYS_TRUE).len(), 2);
        count += 1;
    }
    assert_eq!(count, 3);
}

#[test]
fn test_json_export_round_trips_the_event_shape() {
    let event = dilepton_event(11);
    let text = export::to_json_string(&event).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["particles"].as_array().unwrap().len(), 3);
    assert_eq!(parsed["vertices"].as_array().unwrap().len(), 1);
    assert_eq!(parsed["weight"], 1.0);
}
