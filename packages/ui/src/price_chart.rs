//! Inline SVG line chart for price history.

use api::PricePoint;
use dioxus::prelude::*;

const VIEW_WIDTH: f64 = 640.0;
const VIEW_HEIGHT: f64 = 280.0;
const PADDING: f64 = 16.0;

/// Map history points onto SVG polyline coordinates, left to right in the
/// order given. Y is inverted (SVG origin is top-left); a flat series sits
/// on the vertical middle via the 1.0 span floor.
pub fn polyline_points(history: &[PricePoint], width: f64, height: f64) -> String {
    if history.is_empty() {
        return String::new();
    }
    let min = history.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
    let max = history.iter().map(|p| p.price).fold(f64::NEG_INFINITY, f64::max);
    let span = if (max - min).abs() < f64::EPSILON { 1.0 } else { max - min };
    let step = if history.len() > 1 {
        width / (history.len() - 1) as f64
    } else {
        0.0
    };

    history
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = PADDING + step * i as f64;
            let y = PADDING + (height - (point.price - min) / span * height);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Date label without the time-of-day part.
fn short_date(date: &str) -> &str {
    date.get(..10).unwrap_or(date)
}

/// Price history plotted date-ascending. Sorting is defensive: the chart
/// must never reorder what the same-dated backend response contains, only
/// normalize an out-of-order payload.
#[component]
pub fn PriceChart(history: Vec<PricePoint>, currency: String) -> Element {
    let mut points = history.clone();
    points.sort_by(|a, b| a.date.cmp(&b.date));

    let line = polyline_points(&points, VIEW_WIDTH, VIEW_HEIGHT);
    let view_box = format!(
        "0 0 {} {}",
        VIEW_WIDTH + 2.0 * PADDING,
        VIEW_HEIGHT + 2.0 * PADDING
    );
    let min = points.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.price).fold(f64::NEG_INFINITY, f64::max);
    let first_date = points.first().map(|p| short_date(&p.date).to_string()).unwrap_or_default();
    let last_date = points.last().map(|p| short_date(&p.date).to_string()).unwrap_or_default();

    rsx! {
        div { class: "price-chart",
            svg {
                view_box: "{view_box}",
                preserve_aspect_ratio: "none",
                polyline {
                    points: "{line}",
                    fill: "none",
                    stroke: "#0094FF",
                    stroke_width: "3",
                }
            }
            div { class: "price-chart-x-labels",
                span { "{first_date}" }
                span { "{last_date}" }
            }
            div { class: "price-chart-y-labels",
                span { "{max:.1} {currency}" }
                span { "{min:.1} {currency}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, price: f64) -> PricePoint {
        PricePoint { date: date.to_string(), price }
    }

    #[test]
    fn empty_history_yields_no_points() {
        assert_eq!(polyline_points(&[], 640.0, 280.0), "");
    }

    #[test]
    fn renders_one_coordinate_pair_per_point() {
        let history = vec![
            point("2025-08-01", 10.0),
            point("2025-08-02", 12.0),
            point("2025-08-03", 11.0),
        ];
        let line = polyline_points(&history, 640.0, 280.0);
        assert_eq!(line.split(' ').count(), 3);
    }

    #[test]
    fn x_advances_left_to_right_and_extremes_hit_the_edges() {
        let history = vec![point("2025-08-01", 10.0), point("2025-08-02", 20.0)];
        let line = polyline_points(&history, 100.0, 100.0);
        // min sits at the bottom edge, max at the top, offset by padding
        assert_eq!(line, "16.0,116.0 116.0,16.0");
    }

    #[test]
    fn flat_series_does_not_divide_by_zero() {
        let history = vec![point("2025-08-01", 5.0), point("2025-08-02", 5.0)];
        let line = polyline_points(&history, 100.0, 100.0);
        assert!(!line.contains("NaN"));
        assert!(!line.contains("inf"));
    }

    #[test]
    fn short_date_strips_time() {
        assert_eq!(short_date("2025-08-01T12:30:00"), "2025-08-01");
        assert_eq!(short_date("2025"), "2025");
    }
}
