//! Test for logging is isolated in its own module to avoid messing with the global settings of
//! other, non-logging related tests. Structured records are covered by `structured_logging.rs`.
#![cfg(not(feature = "structured_logging"))]

use log::Level;
use parameter_metadata::UniformParameters;

#[test]
fn emit_debug_record_on_construction() {
    testing_logger::setup();

    // When creating parameter metadata for a statement with three parameters
    let _metadata = UniformParameters::new(3);

    // Then exactly one debug record mentions the number of parameters
    testing_logger::validate(|captured_logs| {
        assert_eq!(captured_logs.len(), 1);
        assert_eq!(captured_logs[0].level, Level::Debug);
        assert!(captured_logs[0].body.contains("3 parameters"));
        assert!(captured_logs[0].body.contains("VARCHAR"));
    });
}
