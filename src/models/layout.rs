use crate::config::ChartConfig;

use super::gdp::{Dataset, date_to_ms};
use super::scale::{LinearScale, TimeScale};

/// Outer tick length used for the axis domain line.
const OUTER_TICK: f64 = 6.0;
/// Inner tick length.
const INNER_TICK: f64 = 6.0;
/// Gap between a tick line and its label.
const TICK_PADDING: f64 = 3.0;

/// Position and payload of a single bar, relative to the translated chart origin.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Raw date string, kept for the tooltip and `data-date`
    pub date: String,
    pub gdp: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

/// A labelled reference mark; `offset` runs along the axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    pub id: &'static str,
    pub orientation: AxisOrientation,
    pub translate: (f64, f64),
    pub domain_path: String,
    pub ticks: Vec<Tick>,
}

impl AxisLayout {
    pub fn transform(&self) -> String {
        format!("translate({}, {})", self.translate.0, self.translate.1)
    }

    /// SVG transform for one tick group.
    pub fn tick_transform(&self, tick: &Tick) -> String {
        match self.orientation {
            AxisOrientation::Bottom => format!("translate({},0)", tick.offset + 0.5),
            AxisOrientation::Left => format!("translate(0,{})", tick.offset + 0.5),
        }
    }

    /// Tick line end point and label anchor as `(line_x2, line_y2, text_x, text_y)`.
    pub fn tick_geometry(&self) -> (f64, f64, f64, f64) {
        let spacing = INNER_TICK + TICK_PADDING;
        match self.orientation {
            AxisOrientation::Bottom => (0.0, INNER_TICK, 0.0, spacing),
            AxisOrientation::Left => (-INNER_TICK, 0.0, -spacing, 0.0),
        }
    }
}

/// Everything needed to draw the chart once.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub outer_width: f64,
    pub outer_height: f64,
    pub bar_transform: String,
    pub bar_width: f64,
    pub bars: Vec<BarGeometry>,
    pub x_axis: AxisLayout,
    pub y_axis: AxisLayout,
}

impl ChartLayout {
    /// Computes bar and axis geometry. Returns `None` for an empty dataset.
    pub fn compute(dataset: &Dataset, config: &ChartConfig) -> Option<Self> {
        if dataset.is_empty() {
            return None;
        }

        let (min_date, max_date) = dataset.date_extent().unwrap_or((f64::NAN, f64::NAN));
        let max_value = dataset.max_value().unwrap_or(f64::NAN);

        let x_scale = TimeScale::new((min_date, max_date), (0.0, config.width));
        let height_scale = LinearScale::new((0.0, max_value), (0.0, config.height));
        let y_scale = LinearScale::new((0.0, max_value), (config.height, 0.0));

        let bar_width = config.bar_width_for(dataset.len());

        let bars = dataset
            .points()
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let height = height_scale.apply(point.gdp);
                BarGeometry {
                    index,
                    x: x_scale.apply_ms(point.timestamp_ms()),
                    y: config.height - height,
                    width: bar_width,
                    height,
                    date: point.date.clone(),
                    gdp: point.gdp,
                }
            })
            .collect();

        Some(Self {
            outer_width: config.outer_width(),
            outer_height: config.outer_height(),
            bar_transform: format!("translate({}, 0)", config.axis_offset),
            bar_width,
            bars,
            x_axis: bottom_axis(&x_scale, config),
            y_axis: left_axis(&y_scale, config),
        })
    }
}

fn bottom_axis(scale: &TimeScale, config: &ChartConfig) -> AxisLayout {
    let ticks = scale
        .ticks(config.tick_count)
        .into_iter()
        .map(|date| Tick {
            offset: scale.apply_ms(date_to_ms(date)),
            label: scale.format_tick(date),
        })
        .collect();

    let (r0, r1) = scale.range();
    AxisLayout {
        id: "x-axis",
        orientation: AxisOrientation::Bottom,
        translate: (config.axis_offset, config.height),
        domain_path: format!(
            "M{},{}V0.5H{}V{}",
            r0 + 0.5,
            OUTER_TICK,
            r1 + 0.5,
            OUTER_TICK
        ),
        ticks,
    }
}

fn left_axis(scale: &LinearScale, config: &ChartConfig) -> AxisLayout {
    let count = config.tick_count;
    let ticks = scale
        .ticks(count)
        .into_iter()
        .map(|value| Tick {
            offset: scale.apply(value),
            label: scale.format_tick(value, count),
        })
        .collect();

    let (r0, r1) = scale.range();
    AxisLayout {
        id: "y-axis",
        orientation: AxisOrientation::Left,
        translate: (config.axis_offset, 0.0),
        domain_path: format!(
            "M{},{}H0.5V{}H{}",
            -OUTER_TICK,
            r0 + 0.5,
            r1 + 0.5,
            -OUTER_TICK
        ),
        ticks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::gdp::DataPoint;

    fn quarterly() -> Dataset {
        Dataset::new(vec![
            DataPoint::new("1947-01-01", 243.1),
            DataPoint::new("1947-04-01", 246.3),
            DataPoint::new("1947-07-01", 250.1),
            DataPoint::new("1947-10-01", 260.3),
        ])
    }

    #[test]
    fn test_empty_dataset_has_no_layout() {
        assert!(ChartLayout::compute(&Dataset::default(), &ChartConfig::default()).is_none());
    }

    #[test]
    fn test_bars_follow_dataset_order() {
        let layout = ChartLayout::compute(&quarterly(), &ChartConfig::default()).unwrap();
        let dates: Vec<&str> = layout.bars.iter().map(|b| b.date.as_str()).collect();
        assert_eq!(
            dates,
            vec!["1947-01-01", "1947-04-01", "1947-07-01", "1947-10-01"]
        );
        assert!(layout.bars.iter().enumerate().all(|(i, b)| b.index == i));
    }

    #[test]
    fn test_tallest_bar_fills_height() {
        let layout = ChartLayout::compute(&quarterly(), &ChartConfig::default()).unwrap();
        let last = layout.bars.last().unwrap();
        assert_eq!(last.height, 400.0);
        assert_eq!(last.y, 0.0);
    }

    #[test]
    fn test_axis_placement() {
        let layout = ChartLayout::compute(&quarterly(), &ChartConfig::default()).unwrap();
        assert_eq!(layout.x_axis.transform(), "translate(60, 400)");
        assert_eq!(layout.y_axis.transform(), "translate(60, 0)");
        assert_eq!(layout.bar_transform, "translate(60, 0)");
        assert_eq!(layout.x_axis.domain_path, "M0.5,6V0.5H800.5V6");
        assert_eq!(layout.y_axis.domain_path, "M-6,400.5H0.5V0.5H-6");
    }

    #[test]
    fn test_value_axis_is_inverted() {
        let layout = ChartLayout::compute(&quarterly(), &ChartConfig::default()).unwrap();
        let first = layout.y_axis.ticks.first().unwrap();
        assert_eq!(first.label, "0");
        assert_eq!(first.offset, 400.0);
        assert!(
            layout
                .y_axis
                .ticks
                .windows(2)
                .all(|w| w[1].offset < w[0].offset)
        );
    }

    #[test]
    fn test_unparseable_date_yields_nan_position() {
        let dataset = Dataset::new(vec![
            DataPoint::new("1947-01-01", 243.1),
            DataPoint::new("garbage", 100.0),
            DataPoint::new("1948-01-01", 260.0),
        ]);
        let layout = ChartLayout::compute(&dataset, &ChartConfig::default()).unwrap();
        assert_eq!(layout.bars.len(), 3);
        assert!(layout.bars[1].x.is_nan());
        assert!(layout.bars[1].height.is_finite());
    }
}
