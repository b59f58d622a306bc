use super::*;
use crate::foundation::core::Coord;

#[test]
fn ascii_payload_produces_version_sized_grid() {
    let grid = QrCodeEncoder::default().encode("hello!").unwrap();
    let size = grid.size();
    assert!(size >= 21);
    assert_eq!((size - 17) % 4, 0);
}

#[test]
fn finder_pattern_corner_is_black() {
    let grid = QrCodeEncoder::default().encode("hello! 1").unwrap();
    // finder patterns sit at the top-left, top-right and bottom-left corners
    let last = grid.size() - 1;
    assert!(grid.is_black_at(Coord::new(0, 0)).unwrap());
    assert!(grid.is_black_at(Coord::new(last, 0)).unwrap());
    assert!(grid.is_black_at(Coord::new(0, last)).unwrap());
    assert!(!grid.is_black_at(Coord::new(1, 1)).unwrap());
}

#[test]
fn non_ascii_payload_is_absent() {
    assert!(QrCodeEncoder::default().encode("héllo").is_none());
}

#[test]
fn oversized_payload_is_absent() {
    let text = "x".repeat(8000);
    assert!(QrCodeEncoder::new(ErrorCorrection::H).encode(&text).is_none());
}

#[test]
fn encoding_is_deterministic() {
    let enc = QrCodeEncoder::default();
    assert_eq!(enc.encode("hello! 7"), enc.encode("hello! 7"));
}

#[test]
fn rasterize_uses_one_pixel_per_module() {
    let enc = QrCodeEncoder::default();
    let img = enc.rasterize("abc").unwrap();
    let grid = enc.encode("abc").unwrap();
    assert_eq!(img.width() as usize, grid.size());
    assert!(img.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
}
