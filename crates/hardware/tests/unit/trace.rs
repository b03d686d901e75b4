//! # Trace Sink Tests
//!
//! Output format of the console sink and bookkeeping of the recording sink.

use cavo_core::common::{Addr, Word};
use cavo_core::trace::{ConsoleSink, LogSink, NullSink, RecordingSink, TraceEvent, TraceSink};

#[test]
fn test_console_sink_format() {
    let mut sink = ConsoleSink::new(Vec::new());
    sink.on_fetch(Addr::new(0));
    sink.on_fetch(Addr::new(12));
    sink.on_store(Addr::new(100), Word::new(4095));
    sink.on_fetch(Addr::new(13));
    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(text, "[0] [12] mem[100] ← 4095\n[13] ");
}

#[test]
fn test_recording_sink_splits_events() {
    let mut sink = RecordingSink::new();
    sink.on_fetch(Addr::new(1));
    sink.on_store(Addr::new(2), Word::new(3));
    sink.on_fetch(Addr::new(4));
    assert_eq!(sink.events().len(), 3);
    assert_eq!(sink.fetches(), vec![Addr::new(1), Addr::new(4)]);
    assert_eq!(sink.stores(), vec![(Addr::new(2), Word::new(3))]);
    assert_eq!(
        sink.events()[1],
        TraceEvent::Store {
            addr: Addr::new(2),
            value: Word::new(3)
        }
    );
    sink.clear();
    assert!(sink.events().is_empty());
}

fn feed<S: TraceSink>(mut sink: S) {
    sink.on_fetch(Addr::new(7));
    sink.on_store(Addr::new(1), Word::new(1));
}

#[test]
fn test_boxed_and_borrowed_sinks_forward() {
    let mut inner = RecordingSink::new();
    feed(&mut inner);
    feed(Box::new(&mut inner));
    assert_eq!(inner.events().len(), 4);
    assert_eq!(inner.fetches(), vec![Addr::new(7), Addr::new(7)]);
}

#[test]
fn test_null_and_log_sinks_accept_events() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let mut null = NullSink;
    null.on_fetch(Addr::new(0));
    null.on_store(Addr::new(0), Word::ZERO);
    let mut log = LogSink;
    log.on_fetch(Addr::new(0));
    log.on_store(Addr::new(0), Word::ZERO);
}
