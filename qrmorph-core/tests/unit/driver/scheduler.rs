use std::sync::Mutex;

use super::*;
use crate::{QrCodeEncoder, foundation::core::Coord};

/// Encodes payloads to a 3x3 grid whose black module count equals the text length,
/// and refuses payloads listed in `reject`.
struct FakeEncoder {
    reject: Vec<String>,
    seen: Mutex<Vec<String>>,
}

impl FakeEncoder {
    fn new(reject: &[&str]) -> Self {
        Self {
            reject: reject.iter().map(|s| s.to_string()).collect(),
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl QrEncoder for FakeEncoder {
    fn encode(&self, text: &str) -> Option<PixelGrid> {
        self.seen.lock().unwrap().push(text.to_string());
        if self.reject.iter().any(|r| r == text) {
            return None;
        }
        let rows = (0..3)
            .map(|y| (0..3).map(|x| y * 3 + x < text.len()).collect())
            .collect();
        PixelGrid::from_rows(rows).ok()
    }
}

fn cfg() -> MorphConfig {
    MorphConfig {
        initial_text: "a".to_string(),
        text_template: "{counter}x".to_string(),
        ..MorphConfig::default()
    }
}

#[test]
fn unencodable_initial_text_is_a_validation_error() {
    let err = MorphDriver::new(cfg(), FakeEncoder::new(&["a"])).err().unwrap();
    assert!(matches!(err, QrMorphError::Validation(_)));
}

#[test]
fn tick_replaces_the_grid_wholesale() {
    let mut driver = MorphDriver::new(cfg(), FakeEncoder::new(&[])).unwrap();
    let before = driver.current();
    assert_eq!(before.black_count(), 1);

    let out = driver.tick().unwrap();
    assert_eq!(out.counter, 1);
    assert_eq!(out.text, "1x");
    assert!(Arc::ptr_eq(&out.from, &before));
    assert!(Arc::ptr_eq(&out.to, &driver.current()));
    assert_eq!(out.to.black_count(), 2);

    // the old snapshot is untouched
    assert_eq!(before.black_count(), 1);
    assert!(before.is_black_at(Coord::new(0, 0)).unwrap());
}

#[test]
fn failed_encode_skips_the_tick_and_keeps_the_grid() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let mut driver = MorphDriver::new(cfg(), FakeEncoder::new(&["2x"])).unwrap();
    driver.tick().unwrap();
    let kept = driver.current();

    assert!(driver.tick().is_none());
    assert_eq!(driver.counter(), 2);
    assert!(Arc::ptr_eq(&kept, &driver.current()));

    let out = driver.tick().unwrap();
    assert_eq!(out.counter, 3);
    assert!(Arc::ptr_eq(&out.from, &kept));
}

#[test]
fn counter_feeds_the_template() {
    let encoder = FakeEncoder::new(&[]);
    let mut driver = MorphDriver::new(cfg(), encoder).unwrap();
    driver.tick();
    driver.tick();
    let seen = driver.encoder.seen.lock().unwrap().clone();
    assert_eq!(seen, vec!["a", "1x", "2x"]);
}

#[test]
fn real_encoder_drives_default_config() {
    let mut driver = MorphDriver::new(MorphConfig::default(), QrCodeEncoder::default()).unwrap();
    let out = driver.tick().unwrap();
    assert_eq!(out.text, "hello! 1");
    assert_ne!(*out.from, *out.to);
}
