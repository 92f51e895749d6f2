use std::rc::Rc;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::ChartConfig;
use crate::models::gdp::Dataset;
use crate::models::layout::{AxisLayout, AxisOrientation, BarGeometry, ChartLayout};
use crate::models::tooltip::TooltipState;

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    pub dataset: Rc<Dataset>,
    #[prop_or_default]
    pub config: ChartConfig,
}

/// GDP bar chart with time and value axes and a hover tooltip.
///
/// The SVG is rebuilt from the layout on every render, so re-rendering never
/// stacks duplicate bars or axes.
#[function_component(Chart)]
pub fn chart(props: &ChartProps) -> Html {
    let config = props.config;
    let layout = use_memo((props.dataset.clone(), config), |(dataset, config)| {
        ChartLayout::compute(dataset, config)
    });
    let tooltip = use_state(TooltipState::default);

    let Some(layout) = &*layout else {
        return html! {};
    };

    let bars = layout
        .bars
        .iter()
        .map(|bar| render_bar(bar, &layout.bar_transform, &tooltip, &config))
        .collect::<Html>();

    let caption = props.dataset.source().caption();

    html! {
        <div class="graph-main">
            <svg
                width={layout.outer_width.to_string()}
                height={layout.outer_height.to_string()}
            >
                {bars}
                {render_axis(&layout.x_axis)}
                {render_axis(&layout.y_axis)}
            </svg>
            <div
                id="tooltip"
                class="tooltip"
                data-date={tooltip.date.clone()}
                style={tooltip.style(&config)}
            >
                if !tooltip.date.is_empty() {
                    {tooltip.text()}
                }
            </div>
            if let Some(caption) = caption {
                <p class="chart-source">{caption}</p>
            }
        </div>
    }
}

fn render_bar(
    bar: &BarGeometry,
    transform: &str,
    tooltip: &UseStateHandle<TooltipState>,
    config: &ChartConfig,
) -> Html {
    let onmouseenter = {
        let tooltip = tooltip.clone();
        let shown = TooltipState::show(bar, config);
        Callback::from(move |_: MouseEvent| tooltip.set(shown.clone()))
    };

    let onmouseleave = {
        let tooltip = tooltip.clone();
        Callback::from(move |_: MouseEvent| tooltip.set(tooltip.hide()))
    };

    html! {
        <rect
            class="bar"
            index={bar.index.to_string()}
            x={bar.x.to_string()}
            y={bar.y.to_string()}
            width={bar.width.to_string()}
            height={bar.height.to_string()}
            data-date={bar.date.clone()}
            data-gdp={bar.gdp.to_string()}
            transform={transform.to_string()}
            {onmouseenter}
            {onmouseleave}
        />
    }
}

fn render_axis(axis: &AxisLayout) -> Html {
    let (line_x2, line_y2, text_x, text_y) = axis.tick_geometry();
    let (anchor, dy) = match axis.orientation {
        AxisOrientation::Bottom => ("middle", "0.71em"),
        AxisOrientation::Left => ("end", "0.32em"),
    };

    html! {
        <g
            id={axis.id}
            class="axis"
            transform={axis.transform()}
            fill="none"
            font-size="10"
            font-family="sans-serif"
            text-anchor={anchor}
        >
            <path class="domain" stroke="currentColor" d={axis.domain_path.clone()} />
            {
                axis.ticks.iter().map(|tick| html! {
                    <g class="tick" opacity="1" transform={axis.tick_transform(tick)}>
                        <line
                            stroke="currentColor"
                            x2={line_x2.to_string()}
                            y2={line_y2.to_string()}
                        />
                        <text
                            fill="currentColor"
                            x={text_x.to_string()}
                            y={text_y.to_string()}
                            dy={dy}
                        >
                            {tick.label.clone()}
                        </text>
                    </g>
                }).collect::<Html>()
            }
        </g>
    }
}
