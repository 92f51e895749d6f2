/// Configuration constants for the application
pub struct Config;

impl Config {
    /// GDP time series served as `{ "data": [[date, value], ...] }`
    pub const DATA_URL: &'static str =
        "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/GDP-data.json";

    /// Width of the bar area in pixels
    pub const CHART_WIDTH: f64 = 800.0;

    /// Height of the bar area in pixels
    pub const CHART_HEIGHT: f64 = 400.0;

    /// Extra horizontal room around the bar area for the value axis
    pub const MARGIN_WIDTH: f64 = 100.0;

    /// Extra vertical room below the bar area for the time axis
    pub const MARGIN_HEIGHT: f64 = 60.0;

    /// Horizontal translation applied to bars and both axes
    pub const AXIS_OFFSET: f64 = 60.0;

    /// Number of bar slots the canvas width is divided into (GDP quarters 1947-2015)
    pub const BAR_SLOTS: usize = 275;

    /// Approximate number of ticks requested from each scale
    pub const TICK_COUNT: usize = 10;

    /// Tooltip opacity while a bar is hovered
    pub const TOOLTIP_OPACITY: f64 = 0.9;

    /// Tooltip horizontal offset from the hovered bar slot
    pub const TOOLTIP_OFFSET_X: f64 = 30.0;

    /// Tooltip distance above the chart baseline
    pub const TOOLTIP_OFFSET_Y: f64 = 10.0;
}

/// How the width of each bar is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarWidth {
    /// Divide the canvas into a fixed number of slots regardless of dataset length.
    FixedSlots(usize),
    /// Divide the canvas by the number of points actually loaded.
    PerPoint,
}

impl Default for BarWidth {
    fn default() -> Self {
        Self::FixedSlots(Config::BAR_SLOTS)
    }
}

/// Geometry settings for a single chart render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin_width: f64,
    pub margin_height: f64,
    pub axis_offset: f64,
    pub bar_width: BarWidth,
    pub tick_count: usize,
}

impl ChartConfig {
    /// Full SVG width including margin
    pub fn outer_width(&self) -> f64 {
        self.width + self.margin_width
    }

    /// Full SVG height including margin
    pub fn outer_height(&self) -> f64 {
        self.height + self.margin_height
    }

    /// Pixel width of one bar for a dataset of `len` points.
    pub fn bar_width_for(&self, len: usize) -> f64 {
        let slots = match self.bar_width {
            BarWidth::FixedSlots(n) => n,
            BarWidth::PerPoint => len,
        };

        if slots == 0 {
            0.0
        } else {
            self.width / slots as f64
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: Config::CHART_WIDTH,
            height: Config::CHART_HEIGHT,
            margin_width: Config::MARGIN_WIDTH,
            margin_height: Config::MARGIN_HEIGHT,
            axis_offset: Config::AXIS_OFFSET,
            bar_width: BarWidth::default(),
            tick_count: Config::TICK_COUNT,
        }
    }
}
