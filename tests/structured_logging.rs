//! Key-value pairs of log records are only emitted with the `structured_logging` feature. This
//! test installs its own logger, so it lives in a separate test binary.
#![cfg(feature = "structured_logging")]

use std::sync::Mutex;

use log::{
    Level, LevelFilter, Log, Metadata, Record,
    kv::{Key, Source},
};
use parameter_metadata::UniformParameters;

/// Level, message and the `parameter_count` and `type_name` pairs of a captured record.
type Captured = (Level, String, Option<u64>, Option<String>);

static RECORDS: Mutex<Vec<Captured>> = Mutex::new(Vec::new());

struct KeyValueCapture;

impl Log for KeyValueCapture {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let key_values = record.key_values();
        let parameter_count = key_values
            .get(Key::from("parameter_count"))
            .and_then(|value| value.to_u64());
        let type_name = key_values
            .get(Key::from("type_name"))
            .map(|value| value.to_string());
        RECORDS.lock().unwrap().push((
            record.level(),
            record.args().to_string(),
            parameter_count,
            type_name,
        ));
    }

    fn flush(&self) {}
}

static LOGGER: KeyValueCapture = KeyValueCapture;

#[test]
fn parameter_count_is_attached_as_key_value_pair() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    // When creating parameter metadata for a statement with three parameters
    let _metadata = UniformParameters::new(3);

    // Then the count travels as structured field, not as part of the message
    let records = RECORDS.lock().unwrap();
    assert_eq!(records.len(), 1);
    let (level, message, parameter_count, type_name) = &records[0];
    assert_eq!(*level, Level::Debug);
    assert_eq!(message, "Parameter metadata created.");
    assert_eq!(*parameter_count, Some(3));
    assert_eq!(type_name.as_deref(), Some("VARCHAR"));
}
