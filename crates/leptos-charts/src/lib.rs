//! Leptos Charts
//!
//! Small SVG chart components for dashboards: bar (grouped or stacked),
//! line, pie, scatter and progress bars. Data is passed in as plain values;
//! charts re-render only when their parent does.

pub mod geometry;

use leptos::prelude::*;

use geometry::{Frame, LinearScale};

/// Number of horizontal grid intervals
const GRID_STEPS: usize = 4;

/// A named data series drawn in one color
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: String,
    /// One value per category; `None` leaves a gap
    pub values: Vec<Option<f64>>,
    pub dashed: bool,
}

impl Series {
    pub fn new(name: impl Into<String>, color: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            values: values.into_iter().map(Some).collect(),
            dashed: false,
        }
    }

    pub fn with_gaps(name: impl Into<String>, color: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            values,
            dashed: false,
        }
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    fn max(&self) -> f64 {
        self.values.iter().flatten().copied().fold(0.0, f64::max)
    }
}

/// One pie wedge
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl Slice {
    pub fn new(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self { label: label.into(), value, color: color.into() }
    }
}

/// One scatter marker; `label` becomes the hover tooltip
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

fn px(value: f64) -> String {
    format!("{:.1}", value)
}

/// Largest stacked total across categories
fn stacked_max(series: &[Series], categories: usize) -> f64 {
    (0..categories)
        .map(|i| {
            series
                .iter()
                .filter_map(|s| s.values.get(i).copied().flatten())
                .sum::<f64>()
        })
        .fold(0.0, f64::max)
}

/// Grid lines, y tick labels and x category labels
#[component]
fn Axes(frame: Frame, max: f64, categories: Vec<String>) -> impl IntoView {
    let y = LinearScale::new((0.0, max), (frame.baseline(), frame.top));
    let count = categories.len();

    view! {
        <g class="chart-axes">
            {geometry::ticks(max, GRID_STEPS).into_iter().map(|tick| {
                let ty = y.map(tick);
                view! {
                    <line
                        class="chart-grid"
                        x1=px(frame.left)
                        x2=px(frame.width - frame.right)
                        y1=px(ty)
                        y2=px(ty)
                        stroke-dasharray="3 3"
                    />
                    <text class="chart-tick" x=px(frame.left - 8.0) y=px(ty + 4.0) text-anchor="end">
                        {geometry::tick_label(tick)}
                    </text>
                }
            }).collect_view()}
            {categories.into_iter().enumerate().map(|(i, label)| {
                let cx = geometry::band_center(&frame, i, count);
                view! {
                    <text class="chart-tick" x=px(cx) y=px(frame.baseline() + 20.0) text-anchor="middle">
                        {label}
                    </text>
                }
            }).collect_view()}
        </g>
    }
}

/// Color key listing each series name
#[component]
pub fn Legend(entries: Vec<(String, String)>) -> impl IntoView {
    view! {
        <div class="chart-legend">
            {entries.into_iter().map(|(name, color)| view! {
                <span class="chart-legend-item">
                    <span class="chart-legend-swatch" style=format!("background-color: {};", color)></span>
                    {name}
                </span>
            }).collect_view()}
        </div>
    }
}

fn legend_entries(series: &[Series]) -> Vec<(String, String)> {
    series.iter().map(|s| (s.name.clone(), s.color.clone())).collect()
}

/// Vertical bar chart; series are grouped side by side, or stacked when `stacked` is set
#[component]
pub fn BarChart(
    categories: Vec<String>,
    series: Vec<Series>,
    #[prop(optional)] stacked: bool,
) -> impl IntoView {
    let frame = Frame::default();
    let count = categories.len();
    let max = geometry::nice_max(if stacked {
        stacked_max(&series, count)
    } else {
        series.iter().map(Series::max).fold(0.0, f64::max)
    });
    let y = LinearScale::new((0.0, max), (frame.baseline(), frame.top));
    let show_legend = series.len() > 1;
    let legend = legend_entries(&series);
    let corner = if stacked { "0" } else { "4" };

    let bars = (0..count)
        .map(|i| {
            let (x, width) = geometry::band(&frame, i, count, 0.3);
            let mut offset = 0.0;
            let group = series.len().max(1) as f64;
            series
                .iter()
                .enumerate()
                .filter_map(|(s_idx, s)| {
                    let value = s.values.get(i).copied().flatten()?;
                    let (bx, bw, bottom) = if stacked {
                        let bottom = offset;
                        offset += value;
                        (x, width, bottom)
                    } else {
                        let bw = width / group;
                        (x + bw * s_idx as f64, bw, 0.0)
                    };
                    let top_px = y.map(bottom + value);
                    let height = y.map(bottom) - top_px;
                    Some(view! {
                        <rect
                            class="chart-bar"
                            x=px(bx)
                            y=px(top_px)
                            width=px(bw)
                            height=px(height.max(0.0))
                            fill=s.color.clone()
                            rx=corner
                        >
                            <title>{format!("{}: {}", s.name, value)}</title>
                        </rect>
                    })
                })
                .collect_view()
        })
        .collect_view();

    view! {
        <div class="chart bar-chart">
            <svg viewBox=frame.view_box() width="100%" preserveAspectRatio="xMidYMid meet">
                <Axes frame=frame max=max categories=categories />
                <g class="chart-bars">{bars}</g>
            </svg>
            {show_legend.then(|| view! { <Legend entries=legend /> })}
        </div>
    }
}

/// Multi-series line chart with point markers
#[component]
pub fn LineChart(categories: Vec<String>, series: Vec<Series>) -> impl IntoView {
    let frame = Frame::default();
    let count = categories.len();
    let max = geometry::nice_max(series.iter().map(Series::max).fold(0.0, f64::max));
    let y = LinearScale::new((0.0, max), (frame.baseline(), frame.top));
    let legend = legend_entries(&series);

    let lines = series
        .into_iter()
        .map(|s| {
            let points: Vec<Option<(f64, f64)>> = s
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| v.map(|v| (geometry::band_center(&frame, i, count), y.map(v))))
                .collect();
            let path = geometry::line_path(&points);
            let dash = if s.dashed { "5 5" } else { "none" };
            let color = s.color.clone();
            view! {
                <g class="chart-line">
                    <path d=path fill="none" stroke=s.color.clone() stroke-width="3" stroke-dasharray=dash />
                    {points.into_iter().zip(s.values.clone()).filter_map(|(p, v)| {
                        let (cx, cy) = p?;
                        let value = v?;
                        Some(view! {
                            <circle cx=px(cx) cy=px(cy) r="4" fill=color.clone()>
                                <title>{format!("{}: {}", s.name, value)}</title>
                            </circle>
                        })
                    }).collect_view()}
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="chart line-chart">
            <svg viewBox=frame.view_box() width="100%" preserveAspectRatio="xMidYMid meet">
                <Axes frame=frame max=max categories=categories />
                {lines}
            </svg>
            <Legend entries=legend />
        </div>
    }
}

/// Pie chart with "name NN%" labels outside each wedge
#[component]
pub fn PieChart(slices: Vec<Slice>) -> impl IntoView {
    let frame = Frame::default();
    let (cx, cy) = (frame.width / 2.0, frame.height / 2.0);
    let radius = 80.0;
    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let angles = geometry::pie_slices(&values);
    let legend: Vec<(String, String)> = slices.iter().map(|s| (s.label.clone(), s.color.clone())).collect();

    let wedges = slices
        .into_iter()
        .zip(angles)
        .filter(|(_, a)| a.fraction > 0.0)
        .map(|(slice, angles)| {
            let (lx, ly) = geometry::polar(cx, cy, radius + 28.0, angles.mid());
            let anchor = if lx < cx - 1.0 { "end" } else if lx > cx + 1.0 { "start" } else { "middle" };
            view! {
                <g class="chart-wedge">
                    <path d=geometry::arc_path(cx, cy, radius, &angles) fill=slice.color.clone() stroke="#ffffff" stroke-width="1">
                        <title>{format!("{}: {}", slice.label, slice.value)}</title>
                    </path>
                    <text class="chart-wedge-label" x=px(lx) y=px(ly) text-anchor=anchor>
                        {geometry::percent_label(&slice.label, angles.fraction)}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="chart pie-chart">
            <svg viewBox=frame.view_box() width="100%" preserveAspectRatio="xMidYMid meet">
                {wedges}
            </svg>
            <Legend entries=legend />
        </div>
    }
}

/// Scatter plot of x/y pairs, both axes scaled from zero
#[component]
pub fn ScatterChart(
    points: Vec<ScatterPoint>,
    #[prop(into)] x_label: String,
    #[prop(into)] y_label: String,
    #[prop(into, default = "#8884d8".to_string())] color: String,
) -> impl IntoView {
    let frame = Frame::default();
    let x_max = geometry::nice_max(points.iter().map(|p| p.x).fold(0.0, f64::max));
    let y_max = geometry::nice_max(points.iter().map(|p| p.y).fold(0.0, f64::max));
    let x = LinearScale::new((0.0, x_max), (frame.left, frame.width - frame.right));
    let y = LinearScale::new((0.0, y_max), (frame.baseline(), frame.top));

    let grid = geometry::ticks(y_max, GRID_STEPS)
        .into_iter()
        .map(|tick| {
            let ty = y.map(tick);
            view! {
                <line class="chart-grid" x1=px(frame.left) x2=px(frame.width - frame.right) y1=px(ty) y2=px(ty) stroke-dasharray="3 3" />
                <text class="chart-tick" x=px(frame.left - 8.0) y=px(ty + 4.0) text-anchor="end">{geometry::tick_label(tick)}</text>
            }
        })
        .collect_view();

    let x_ticks = geometry::ticks(x_max, GRID_STEPS)
        .into_iter()
        .map(|tick| view! {
            <text class="chart-tick" x=px(x.map(tick)) y=px(frame.baseline() + 20.0) text-anchor="middle">{geometry::tick_label(tick)}</text>
        })
        .collect_view();

    let markers = points
        .into_iter()
        .map(|p| view! {
            <circle class="chart-point" cx=px(x.map(p.x)) cy=px(y.map(p.y)) r="8" fill=color.clone() fill-opacity="0.6">
                <title>{p.label}</title>
            </circle>
        })
        .collect_view();

    view! {
        <div class="chart scatter-chart">
            <svg viewBox=frame.view_box() width="100%" preserveAspectRatio="xMidYMid meet">
                <g class="chart-axes">{grid}{x_ticks}</g>
                {markers}
            </svg>
            <div class="chart-axis-labels">
                <span>{format!("x: {}", x_label)}</span>
                <span>{format!("y: {}", y_label)}</span>
            </div>
        </div>
    }
}

/// Horizontal progress bar for a 0..=100 value
#[component]
pub fn ProgressBar(
    value: f64,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let width = format!("width: {}%;", geometry::clamp_percent(value));
    view! {
        <div class=format!("progress {}", class)>
            <div class="progress-fill" style=width></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_max_skips_gaps() {
        let s = Series::with_gaps("Actual", "#ef4444", vec![Some(11.0), Some(17.0), None]);
        assert_eq!(s.max(), 17.0);
        assert!(!s.dashed);
        assert!(Series::new("P", "#000", [1.0]).dashed().dashed);
    }

    #[test]
    fn test_stacked_max_sums_per_category() {
        let series = vec![
            Series::new("preventive", "#22c55e", [45.0, 61.0]),
            Series::new("corrective", "#f59e0b", [12.0, 10.0]),
            Series::new("emergency", "#ef4444", [3.0, 7.0]),
        ];
        assert_eq!(stacked_max(&series, 2), 78.0);
        assert_eq!(stacked_max(&series, 0), 0.0);
    }
}
