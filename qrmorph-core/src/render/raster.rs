use crate::animation::transition::SampledElement;

/// Grayscale coverage buffer for one square layout panel; starts white.
#[derive(Clone, Debug)]
pub struct Panel {
    side: u32,
    // 1.0 = white, 0.0 = black
    light: Vec<f32>,
}

impl Panel {
    /// A white `side x side` panel.
    pub fn new(side: u32) -> Self {
        Self {
            side,
            light: vec![1.0; side as usize * side as usize],
        }
    }

    /// Panel side in pixels.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Draw every element as a black module square over a grid of `grid_size` modules.
    ///
    /// Fractional edges are anti-aliased by area coverage. Overlapping elements
    /// composite with "over".
    pub fn draw(&mut self, elements: &[SampledElement], grid_size: usize) {
        if grid_size == 0 {
            return;
        }
        let cell = f64::from(self.side) / grid_size as f64;
        for e in elements {
            let x0 = e.pos.x * cell;
            let y0 = e.pos.y * cell;
            self.fill_rect(x0, y0, x0 + cell, y0 + cell, e.opacity);
        }
    }

    fn fill_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, alpha: f64) {
        let side = f64::from(self.side);
        let (px0, px1) = (x0.max(0.0).floor(), x1.min(side).ceil());
        let (py0, py1) = (y0.max(0.0).floor(), y1.min(side).ceil());
        if px0 >= px1 || py0 >= py1 {
            return;
        }
        for py in py0 as usize..py1 as usize {
            let cov_y = overlap(py as f64, y0, y1);
            for px in px0 as usize..px1 as usize {
                let cov = cov_y * overlap(px as f64, x0, x1) * alpha;
                if cov <= 0.0 {
                    continue;
                }
                let idx = py * self.side as usize + px;
                self.light[idx] *= (1.0 - cov.min(1.0)) as f32;
            }
        }
    }

    /// Copy the panel into rows `top..top + side` of an RGBA8 buffer `width` pixels wide.
    pub fn blit(&self, data: &mut [u8], width: u32, top: u32) {
        let side = self.side as usize;
        for y in 0..side {
            let row = (top as usize + y) * width as usize;
            for x in 0..side.min(width as usize) {
                let v = (self.light[y * side + x].clamp(0.0, 1.0) * 255.0).round() as u8;
                let i = (row + x) * 4;
                data[i..i + 4].copy_from_slice(&[v, v, v, 255]);
            }
        }
    }
}

fn overlap(pixel: f64, lo: f64, hi: f64) -> f64 {
    (hi.min(pixel + 1.0) - lo.max(pixel)).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
