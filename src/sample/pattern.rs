use crate::sample::parser::Sample;

/// A short rise-and-fall sweep over both gauges, usable without a live producer.
pub const TEST_PATTERN: [Sample; 10] = [
    Sample::new(0.05, 0),
    Sample::new(0.1, 120),
    Sample::new(0.2, 150),
    Sample::new(0.3, 200),
    Sample::new(0.4, 250),
    Sample::new(0.3, 200),
    Sample::new(0.2, 150),
    Sample::new(0.1, 120),
    Sample::new(0.05, 0),
    Sample::new(0.0, 0),
];

/// Payload sent after a stream ends so the loudness gauge drops back to empty.
pub const SILENCE_PAYLOAD: &str = "0.0";
