//! Chart Geometry
//!
//! Pure layout math shared by the SVG chart components.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Plot frame inside the SVG viewbox
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            left: 56.0,
            right: 16.0,
            top: 16.0,
            bottom: 32.0,
        }
    }
}

impl Frame {
    pub fn plot_width(&self) -> f64 {
        self.width - self.left - self.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.top - self.bottom
    }

    /// Y coordinate of the x axis
    pub fn baseline(&self) -> f64 {
        self.height - self.bottom
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Maps a numeric domain onto a pixel range
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return self.range.0;
        }
        let t = (value - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

/// Round `max` up to 1, 2, 5 or 10 times a power of ten
pub fn nice_max(max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let fraction = max / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Evenly spaced tick values from 0 to `max` inclusive
pub fn ticks(max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return vec![0.0];
    }
    (0..=count).map(|i| max * i as f64 / count as f64).collect()
}

/// Short tick label: 120000 -> "120k", 1500000 -> "1.5M"
pub fn tick_label(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        trim_decimal(value / 1_000_000.0) + "M"
    } else if abs >= 1_000.0 {
        trim_decimal(value / 1_000.0) + "k"
    } else {
        trim_decimal(value)
    }
}

fn trim_decimal(value: f64) -> String {
    let s = format!("{:.1}", value);
    s.strip_suffix(".0").map(str::to_string).unwrap_or(s)
}

/// Horizontal band for category `index` of `count`
///
/// Returns `(x, width)` of the bar group, leaving `padding` (0..1) of the band empty.
pub fn band(frame: &Frame, index: usize, count: usize, padding: f64) -> (f64, f64) {
    if count == 0 {
        return (frame.left, 0.0);
    }
    let step = frame.plot_width() / count as f64;
    let inner = step * (1.0 - padding);
    (frame.left + step * index as f64 + (step - inner) / 2.0, inner)
}

/// Center x of category `index` of `count`
pub fn band_center(frame: &Frame, index: usize, count: usize) -> f64 {
    let (x, w) = band(frame, index, count, 0.0);
    x + w / 2.0
}

/// SVG path through points; `None` breaks the line
pub fn line_path(points: &[Option<(f64, f64)>]) -> String {
    let mut path = String::new();
    let mut pen_down = false;
    for point in points {
        match point {
            Some((x, y)) => {
                let cmd = if pen_down { 'L' } else { 'M' };
                if !path.is_empty() {
                    path.push(' ');
                }
                path.push_str(&format!("{}{:.1},{:.1}", cmd, x, y));
                pen_down = true;
            }
            None => pen_down = false,
        }
    }
    path
}

/// Angular extent of one pie slice, radians clockwise from 12 o'clock
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceAngles {
    pub start: f64,
    pub end: f64,
    /// Share of the total in 0..=1
    pub fraction: f64,
}

impl SliceAngles {
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

pub fn pie_slices(values: &[f64]) -> Vec<SliceAngles> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let mut cursor = 0.0;
    values
        .iter()
        .map(|v| {
            let fraction = if total > 0.0 { v.max(0.0) / total } else { 0.0 };
            let start = cursor;
            cursor += fraction * TAU;
            SliceAngles { start, end: cursor, fraction }
        })
        .collect()
}

/// Point on a circle; angle 0 is 12 o'clock, increasing clockwise
pub fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    let theta = angle - FRAC_PI_2;
    (cx + r * theta.cos(), cy + r * theta.sin())
}

/// Closed wedge path for a pie slice
pub fn arc_path(cx: f64, cy: f64, r: f64, slice: &SliceAngles) -> String {
    // A full circle cannot be drawn with a single arc command
    if slice.fraction >= 0.9999 {
        return format!(
            "M{cx:.1},{top:.1} A{r:.1},{r:.1} 0 1 1 {cx:.1},{bottom:.1} A{r:.1},{r:.1} 0 1 1 {cx:.1},{top:.1} Z",
            top = cy - r,
            bottom = cy + r,
        );
    }
    let (x1, y1) = polar(cx, cy, r, slice.start);
    let (x2, y2) = polar(cx, cy, r, slice.end);
    let large = if slice.end - slice.start > std::f64::consts::PI { 1 } else { 0 };
    format!("M{cx:.1},{cy:.1} L{x1:.1},{y1:.1} A{r:.1},{r:.1} 0 {large} 1 {x2:.1},{y2:.1} Z")
}

/// Pie label text: "name 42%"
pub fn percent_label(name: &str, fraction: f64) -> String {
    format!("{} {:.0}%", name, fraction * 100.0)
}

/// Clamp a progress value into 0..=100
pub fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(45.0), 50.0);
        assert_eq!(nice_max(171.0), 200.0);
        assert_eq!(nice_max(150_000.0), 200_000.0);
        assert_eq!(nice_max(100.0), 100.0);
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(f64::NAN), 1.0);
    }

    #[test]
    fn test_ticks() {
        assert_eq!(ticks(200.0, 4), vec![0.0, 50.0, 100.0, 150.0, 200.0]);
        assert_eq!(ticks(10.0, 0), vec![0.0]);
    }

    #[test]
    fn test_tick_label() {
        assert_eq!(tick_label(50.0), "50");
        assert_eq!(tick_label(2.5), "2.5");
        assert_eq!(tick_label(120_000.0), "120k");
        assert_eq!(tick_label(1_500_000.0), "1.5M");
    }

    #[test]
    fn test_linear_scale_inverts_y() {
        let scale = LinearScale::new((0.0, 100.0), (268.0, 16.0));
        assert!(close(scale.map(0.0), 268.0));
        assert!(close(scale.map(100.0), 16.0));
        assert!(close(scale.map(50.0), 142.0));
    }

    #[test]
    fn test_linear_scale_empty_domain() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 10.0));
        assert_eq!(scale.map(5.0), 0.0);
    }

    #[test]
    fn test_bands_cover_plot_width() {
        let frame = Frame::default();
        let (x0, w0) = band(&frame, 0, 5, 0.0);
        let (x4, w4) = band(&frame, 4, 5, 0.0);
        assert!(close(x0, frame.left));
        assert!(close(x4 + w4, frame.left + frame.plot_width()));
        assert!(close(w0, w4));

        let (_, padded) = band(&frame, 0, 5, 0.2);
        assert!(close(padded, w0 * 0.8));
    }

    #[test]
    fn test_line_path_breaks_on_missing_points() {
        let path = line_path(&[Some((0.0, 1.0)), Some((2.0, 3.0)), None, Some((4.0, 5.0))]);
        assert_eq!(path, "M0.0,1.0 L2.0,3.0 M4.0,5.0");
        assert_eq!(line_path(&[None, None]), "");
    }

    #[test]
    fn test_pie_slices_fill_circle() {
        let slices = pie_slices(&[2500.0, 3800.0, 2900.0, 3347.0]);
        assert_eq!(slices.len(), 4);
        assert!(close(slices[0].start, 0.0));
        assert!(close(slices[3].end, TAU));
        let total: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!(close(total, 1.0));
        for pair in slices.windows(2) {
            assert!(close(pair[0].end, pair[1].start));
        }
    }

    #[test]
    fn test_pie_slices_all_zero() {
        let slices = pie_slices(&[0.0, 0.0]);
        assert!(slices.iter().all(|s| s.fraction == 0.0));
    }

    #[test]
    fn test_percent_label_rounds() {
        assert_eq!(percent_label("0-1 Years", 2500.0 / 12547.0), "0-1 Years 20%");
        assert_eq!(percent_label("Critical", 12.0 / 380.0), "Critical 3%");
    }

    #[test]
    fn test_polar_twelve_oclock() {
        let (x, y) = polar(100.0, 100.0, 50.0, 0.0);
        assert!(close(x, 100.0));
        assert!(close(y, 50.0));
    }

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(-3.0), 0.0);
        assert_eq!(clamp_percent(78.0), 78.0);
        assert_eq!(clamp_percent(140.0), 100.0);
    }
}
