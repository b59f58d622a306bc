use super::*;

fn checker(size: usize) -> PixelGrid {
    let rows = (0..size)
        .map(|y| (0..size).map(|x| (x + y) % 2 == 0).collect())
        .collect();
    PixelGrid::from_rows(rows).unwrap()
}

#[test]
fn from_rows_rejects_empty_and_ragged_input() {
    assert!(matches!(
        PixelGrid::from_rows(vec![]),
        Err(QrMorphError::Validation(_))
    ));
    let ragged = vec![vec![true, false], vec![true]];
    assert!(matches!(
        PixelGrid::from_rows(ragged),
        Err(QrMorphError::Validation(_))
    ));
}

#[test]
fn is_black_at_reads_row_major() {
    let grid = PixelGrid::from_rows(vec![vec![true, false], vec![false, false]]).unwrap();
    assert_eq!(grid.size(), 2);
    assert!(grid.is_black_at(Coord::new(0, 0)).unwrap());
    assert!(!grid.is_black_at(Coord::new(1, 0)).unwrap());
    assert!(grid.is_white_at(Coord::new(0, 1)).unwrap());
}

#[test]
fn out_of_bounds_query_is_an_error_not_a_clamp() {
    let grid = checker(21);
    for coord in [Coord::new(21, 0), Coord::new(0, 21), Coord::new(100, 100)] {
        match grid.is_black_at(coord) {
            Err(QrMorphError::OutOfBounds { x, y, size }) => {
                assert_eq!((x, y, size), (coord.x, coord.y, 21));
            }
            other => panic!("expected OutOfBounds, got {other:?}"),
        }
    }
}

#[test]
fn from_luma_treats_only_zero_brightness_as_black() {
    let img = GrayImage::from_raw(2, 2, vec![0, 1, 255, 0]).unwrap();
    let grid = PixelGrid::from_luma(&img).unwrap();
    assert!(grid.is_black_at(Coord::new(0, 0)).unwrap());
    assert!(!grid.is_black_at(Coord::new(1, 0)).unwrap());
    assert!(!grid.is_black_at(Coord::new(0, 1)).unwrap());
    assert!(grid.is_black_at(Coord::new(1, 1)).unwrap());
}

#[test]
fn from_luma_rejects_non_square_images() {
    let img = GrayImage::new(3, 2);
    assert!(matches!(
        PixelGrid::from_luma(&img),
        Err(QrMorphError::Validation(_))
    ));
}

#[test]
fn black_coords_enumerates_row_major() {
    let grid = checker(3);
    let coords: Vec<_> = grid.black_coords().collect();
    assert_eq!(
        coords,
        vec![
            Coord::new(0, 0),
            Coord::new(2, 0),
            Coord::new(1, 1),
            Coord::new(0, 2),
            Coord::new(2, 2),
        ]
    );
    assert_eq!(grid.black_count(), 5);
}
