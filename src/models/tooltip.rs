use crate::config::{ChartConfig, Config};

use super::layout::BarGeometry;

/// Hover overlay state. Hiding only drops the opacity; the last content stays in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
    pub date: String,
    pub gdp: f64,
    pub left: f64,
    pub top: f64,
    pub opacity: f64,
}

impl TooltipState {
    /// Tooltip for the hovered bar, placed next to its slot just above the baseline.
    pub fn show(bar: &BarGeometry, config: &ChartConfig) -> Self {
        Self {
            date: bar.date.clone(),
            gdp: bar.gdp,
            left: bar.index as f64 * bar.width + Config::TOOLTIP_OFFSET_X,
            top: config.height - Config::TOOLTIP_OFFSET_Y,
            opacity: Config::TOOLTIP_OPACITY,
        }
    }

    pub fn hide(&self) -> Self {
        Self {
            opacity: 0.0,
            ..self.clone()
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    pub fn text(&self) -> String {
        format!("Date: {}, GDP: {}", self.date, self.gdp)
    }

    /// Inline CSS for the overlay element.
    pub fn style(&self, config: &ChartConfig) -> String {
        format!(
            "opacity: {}; left: {}px; top: {}px; transform: translateX({}px);",
            self.opacity, self.left, self.top, config.axis_offset
        )
    }
}
