use yew::prelude::*;

use gdp_chart::components::{Chart, Status};
use gdp_chart::hooks::use_gdp::use_gdp_data;

#[function_component(App)]
fn app() -> Html {
    let state = use_gdp_data();

    html! {
        <div class="main">
            <div class="container">
                <h1 id="title" class="title">{"United States GDP"}</h1>

                <Status state={(*state).clone()} />

                if let Some(dataset) = state.data() {
                    <Chart dataset={dataset.clone()} />
                }
            </div>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
