use kurbo::Point;

use super::*;
use crate::foundation::core::{AnimatableIdentity, Zone};

fn elem(x: f64, y: f64, opacity: f64) -> SampledElement {
    SampledElement {
        key: AnimatableIdentity::new(Zone::new(0, 0), 0),
        pos: Point::new(x, y),
        opacity,
    }
}

fn gray(panel: &Panel, x: u32, y: u32) -> u8 {
    let mut data = vec![0u8; (panel.side() * panel.side() * 4) as usize];
    panel.blit(&mut data, panel.side(), 0);
    data[((y * panel.side() + x) * 4) as usize]
}

#[test]
fn whole_cell_is_solid_black() {
    let mut panel = Panel::new(40);
    panel.draw(&[elem(1.0, 2.0, 1.0)], 4);
    // cell size 10px: module (1, 2) covers x 10..20, y 20..30
    assert_eq!(gray(&panel, 10, 20), 0);
    assert_eq!(gray(&panel, 19, 29), 0);
    assert_eq!(gray(&panel, 9, 20), 255);
    assert_eq!(gray(&panel, 20, 20), 255);
}

#[test]
fn fractional_edges_are_partially_covered() {
    let mut panel = Panel::new(4);
    panel.draw(&[elem(0.5, 0.0, 1.0)], 4);
    assert_eq!(gray(&panel, 0, 0), 128);
    assert_eq!(gray(&panel, 1, 0), 128);
    assert_eq!(gray(&panel, 2, 0), 255);
}

#[test]
fn opacity_scales_darkness() {
    let mut panel = Panel::new(4);
    panel.draw(&[elem(0.0, 0.0, 0.5)], 4);
    assert_eq!(gray(&panel, 0, 0), 128);
}

#[test]
fn stacked_elements_composite_over() {
    let mut panel = Panel::new(4);
    panel.draw(&[elem(0.0, 0.0, 0.5), elem(0.0, 0.0, 0.5)], 4);
    assert_eq!(gray(&panel, 0, 0), 64);
}

#[test]
fn elements_off_the_panel_are_clipped() {
    let mut panel = Panel::new(4);
    panel.draw(&[elem(-2.0, 0.0, 1.0), elem(3.5, 3.5, 1.0)], 4);
    assert_eq!(gray(&panel, 0, 0), 255);
    assert_eq!(gray(&panel, 3, 3), 191);
}

#[test]
fn blit_writes_into_the_requested_rows() {
    let mut panel = Panel::new(2);
    panel.draw(&[elem(0.0, 0.0, 1.0)], 2);
    let mut data = vec![7u8; 2 * 4 * 4];
    panel.blit(&mut data, 2, 2);
    assert_eq!(&data[..4], &[7, 7, 7, 7]);
    assert_eq!(&data[16..20], &[0, 0, 0, 255]);
    assert_eq!(&data[20..24], &[255, 255, 255, 255]);
}
