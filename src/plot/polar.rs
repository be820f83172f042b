// Copyright @yucwang 2026

use crate::math::bitmap::Bitmap;
use crate::math::constants::{ deg_to_rad, Float, Vector3f, HALF_PI, PI, TWO_PI };

use std::fmt;

#[derive(Debug)]
pub enum PlotError {
    DimensionMismatch { angles: usize, red: usize, green: usize, blue: usize },
    Image(image::ImageError),
}

impl From<image::ImageError> for PlotError {
    fn from(err: image::ImageError) -> Self {
        PlotError::Image(err)
    }
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::DimensionMismatch { angles, red, green, blue } => write!(
                f, "plot inputs differ in length: {} angles, {} red, {} green, {} blue",
                angles, red, green, blue),
            PlotError::Image(err) => write!(f, "image error: {}", err),
        }
    }
}

impl std::error::Error for PlotError {}

/// Wrap an angle into `(-pi, pi]`.
fn wrap_angle(a: Float) -> Float {
    let mut a = a % TWO_PI;
    if a > PI {
        a -= TWO_PI;
    } else if a <= -PI {
        a += TWO_PI;
    }
    a
}

/// Half-plane polar plot: angular range [-90 deg, 90 deg], zero pointing up,
/// angles growing counter-clockwise.
#[derive(Clone, Debug)]
pub struct PolarPlot {
    pub width: usize,
    pub height: usize,
    pub margin: usize,
    pub rings: usize,
    pub spoke_step_deg: Float,
    pub background: Vector3f,
    pub grid_color: Vector3f,
    pub channel_colors: [Vector3f; 3],
}

impl Default for PolarPlot {
    fn default() -> Self {
        Self {
            width: 800,
            height: 440,
            margin: 20,
            rings: 4,
            spoke_step_deg: 30.0,
            background: Vector3f::new(1.0, 1.0, 1.0),
            grid_color: Vector3f::new(0.8, 0.8, 0.8),
            channel_colors: [
                Vector3f::new(0.85, 0.1, 0.1),
                Vector3f::new(0.1, 0.65, 0.1),
                Vector3f::new(0.1, 0.2, 0.85),
            ],
        }
    }
}

impl PolarPlot {
    fn center(&self) -> (Float, Float) {
        (self.width as Float * 0.5, self.height.saturating_sub(self.margin) as Float)
    }

    fn radius(&self) -> Float {
        let half_width = self.width as Float * 0.5 - self.margin as Float;
        let height = self.height as Float - 2.0 * self.margin as Float;
        half_width.min(height).max(1.0)
    }

    /// Pixel position of a point at plot angle `a` (radians) and normalized
    /// radius `r`, or `None` outside the half-plane.
    pub fn project(&self, a: Float, r: Float) -> Option<(Float, Float)> {
        let a = wrap_angle(a);
        if a < -HALF_PI - 1e-4 || a > HALF_PI + 1e-4 {
            return None;
        }

        let (cx, cy) = self.center();
        let radius = self.radius() * r;
        Some((cx - radius * a.sin(), cy - radius * a.cos()))
    }

    fn draw_axes(&self, bitmap: &mut Bitmap) {
        let segments = 90;
        for ring in 1..=self.rings {
            let r = ring as Float / self.rings as Float;
            let mut last = self.project(-HALF_PI, r);
            for s in 1..=segments {
                let a = -HALF_PI + PI * (s as Float / segments as Float);
                let next = self.project(a, r);
                if let (Some(p0), Some(p1)) = (last, next) {
                    bitmap.draw_line(p0, p1, self.grid_color);
                }
                last = next;
            }
        }

        let step = self.spoke_step_deg.max(1.0);
        let mut deg = -90.0;
        while deg <= 90.0 + 1e-3 {
            if let (Some(p0), Some(p1)) = (self.project(deg_to_rad(deg), 0.0), self.project(deg_to_rad(deg), 1.0)) {
                bitmap.draw_line(p0, p1, self.grid_color);
            }
            deg += step;
        }
    }

    fn draw_curve(&self, bitmap: &mut Bitmap, angles: &[Float], values: &[Float], scale: Float, color: Vector3f) {
        let mut last: Option<(Float, Float)> = None;
        for (a, v) in angles.iter().zip(values.iter()) {
            let next = if v.is_finite() {
                self.project(*a, v.max(0.0) / scale)
            } else {
                None
            };
            match (last, next) {
                (Some(p0), Some(p1)) => bitmap.draw_line(p0, p1, color),
                (None, Some(p1)) => bitmap.draw_line(p1, p1, color),
                _ => {}
            }
            last = next;
        }
    }

    /// Draw one curve per colour channel against `angles`. All four inputs
    /// must have the same length.
    pub fn render(&self, angles: &[Float], red: &[Float], green: &[Float], blue: &[Float]) -> Result<Bitmap, PlotError> {
        let n = angles.len();
        if red.len() != n || green.len() != n || blue.len() != n {
            return Err(PlotError::DimensionMismatch {
                angles: n, red: red.len(), green: green.len(), blue: blue.len()
            });
        }

        let max_value = red.iter()
            .chain(green.iter())
            .chain(blue.iter())
            .filter(|v| v.is_finite())
            .fold(0.0 as Float, |acc, v| acc.max(*v));
        let scale = if max_value > 0.0 { max_value } else { 1.0 };
        log::debug!("Polar plot of {} samples, radial scale {}.", n, scale);

        let mut bitmap = Bitmap::filled(self.width, self.height, self.background);
        self.draw_axes(&mut bitmap);
        for (values, color) in [red, green, blue].iter().zip(self.channel_colors.iter()) {
            self.draw_curve(&mut bitmap, angles, values, scale, *color);
        }

        Ok(bitmap)
    }
}
