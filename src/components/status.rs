use crate::hooks::use_gdp::DataState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: DataState,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.state {
        DataState::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading..."}</p>
            </div>
        },
        DataState::Loaded(_) => html! {},
        DataState::Error(msg) => html! {
            <div class="status error">
                <p>{"Error: "}{msg}</p>
            </div>
        },
    }
}
