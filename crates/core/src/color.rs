//! Color model - RGB channels with HSB construction and gradient math
//!
//! Colors are three f64 channels in [0,1]. The grid derives every tile
//! color from four corner colors via bilinear interpolation, so this
//! module is the leaf of the whole generation pipeline.

use huesort_types::COLOR_SIMILARITY_THRESHOLD;

/// A color as three floating-point channels in [0,1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Component-wise similarity under the fixed visual threshold.
    pub fn is_similar(&self, other: &Rgb) -> bool {
        (self.r - other.r).abs() < COLOR_SIMILARITY_THRESHOLD
            && (self.g - other.g).abs() < COLOR_SIMILARITY_THRESHOLD
            && (self.b - other.b).abs() < COLOR_SIMILARITY_THRESHOLD
    }

    /// Euclidean distance in RGB space.
    pub fn distance(&self, other: &Rgb) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Construct from hue/saturation/brightness, all in [0,1].
    ///
    /// Standard six-sector HSV conversion; hue wraps.
    pub fn from_hsb(h: f64, s: f64, b: f64) -> Self {
        if s <= 0.0 {
            return Self::new(b, b, b);
        }

        let h = h.rem_euclid(1.0) * 6.0;
        let i = h.floor() as i32;
        let f = h - i as f64;
        let p = b * (1.0 - s);
        let q = b * (1.0 - s * f);
        let t = b * (1.0 - s * (1.0 - f));

        match i {
            0 => Self::new(b, t, p),
            1 => Self::new(q, b, p),
            2 => Self::new(p, b, t),
            3 => Self::new(p, q, b),
            4 => Self::new(t, p, b),
            _ => Self::new(b, p, q),
        }
    }

    /// Bilinear interpolation of the four corner colors at grid cell
    /// (x, y) of a `width` x `height` grid.
    ///
    /// Edges are interpolated horizontally first, then vertically. The
    /// denominator clamps to 1 so a 1-wide or 1-tall grid is well
    /// defined.
    pub fn interpolated(x: usize, y: usize, width: usize, height: usize, corners: &Corners) -> Self {
        let u = x as f64 / width.saturating_sub(1).max(1) as f64;
        let v = y as f64 / height.saturating_sub(1).max(1) as f64;

        let top = Rgb::new(
            lerp(corners.tl.r, corners.tr.r, u),
            lerp(corners.tl.g, corners.tr.g, u),
            lerp(corners.tl.b, corners.tr.b, u),
        );
        let bottom = Rgb::new(
            lerp(corners.bl.r, corners.br.r, u),
            lerp(corners.bl.g, corners.br.g, u),
            lerp(corners.bl.b, corners.br.b, u),
        );

        Rgb::new(
            lerp(top.r, bottom.r, v),
            lerp(top.g, bottom.g, v),
            lerp(top.b, bottom.b, v),
        )
    }
}

/// The four corner colors a level's entire gradient derives from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    pub tl: Rgb,
    pub tr: Rgb,
    pub bl: Rgb,
    pub br: Rgb,
}

#[inline]
fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}
