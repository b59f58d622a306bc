use super::*;
use crate::foundation::core::Zone;

fn el(zx: usize, zy: usize, rank: usize, x: usize, y: usize) -> LayoutElement {
    LayoutElement {
        key: AnimatableIdentity::new(Zone::new(zx, zy), rank),
        coord: Coord::new(x, y),
    }
}

#[test]
fn diff_classifies_moved_entered_and_exited() {
    let from = [el(0, 0, 0, 0, 0), el(0, 0, 1, 1, 0)];
    let to = [el(0, 0, 0, 2, 2), el(1, 0, 0, 3, 0)];
    let tr = Transition::between(&from, &to);
    assert_eq!(tr.len(), 3);
    let keys: Vec<_> = tr.tracks().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![from[0].key, from[1].key, to[1].key]);
    assert_eq!(
        tr.track(&from[0].key),
        Some(&Track::Moved {
            from: Coord::new(0, 0),
            to: Coord::new(2, 2)
        })
    );
    assert_eq!(
        tr.track(&from[1].key),
        Some(&Track::Exited {
            at: Coord::new(1, 0)
        })
    );
    assert_eq!(
        tr.track(&to[1].key),
        Some(&Track::Entered {
            at: Coord::new(3, 0)
        })
    );
}

#[test]
fn sample_interpolates_moved_positions() {
    let tr = Transition::between(&[el(0, 0, 0, 0, 0)], &[el(0, 0, 0, 2, 4)]);
    let mid = tr.sample(0.5, Ease::Linear);
    assert_eq!(mid.len(), 1);
    assert_eq!(mid[0].pos, Point::new(1.0, 2.0));
    assert_eq!(mid[0].opacity, 1.0);

    let end = tr.sample(1.0, Ease::InOutCubic);
    assert_eq!(end[0].pos, Point::new(2.0, 4.0));
}

#[test]
fn entering_and_exiting_elements_fade() {
    let tr = Transition::between(&[el(0, 0, 0, 0, 0)], &[el(1, 1, 0, 4, 4)]);

    let start = tr.sample(0.0, Ease::Linear);
    assert_eq!(start.len(), 1);
    assert_eq!(start[0].pos, Point::new(0.0, 0.0));

    let quarter = tr.sample(0.25, Ease::Linear);
    assert_eq!(quarter.len(), 2);
    let entered = quarter.iter().find(|e| e.pos == Point::new(4.0, 4.0)).unwrap();
    let exited = quarter.iter().find(|e| e.pos == Point::new(0.0, 0.0)).unwrap();
    assert!((entered.opacity - 0.25).abs() < 1e-12);
    assert!((exited.opacity - 0.75).abs() < 1e-12);

    let end = tr.sample(1.0, Ease::Linear);
    assert_eq!(end.len(), 1);
    assert_eq!(end[0].pos, Point::new(4.0, 4.0));
}

#[test]
fn still_transition_never_moves() {
    let layout = [el(0, 0, 0, 1, 1), el(2, 0, 0, 7, 0)];
    let tr = Transition::still(&layout);
    for p in [0.0, 0.3, 1.0] {
        let frame = tr.sample(p, Ease::InOutQuad);
        assert_eq!(frame.len(), 2);
        assert!(frame.iter().all(|e| e.opacity == 1.0));
    }
}

#[test]
fn empty_layouts_give_empty_transition() {
    let tr = Transition::between(&[], &[]);
    assert!(tr.is_empty());
    assert!(tr.sample(0.5, Ease::Linear).is_empty());
}
