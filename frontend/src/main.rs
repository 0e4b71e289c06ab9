//! Farm Advisory Dashboard - browser client
//!
//! Four independent widgets, each with its own local state and fetch
//! lifecycle. There is no shared store; no cross-widget invariant exists.

use yew::prelude::*;

mod widgets;

use widgets::{CalendarWidget, ChatWidget, CropGrid, WeatherCard};

#[function_component]
fn App() -> Html {
    html! {
        <div class="dashboard">
            <header>
                <h1>{ "Farm Advisory Dashboard" }</h1>
            </header>
            <main>
                <WeatherCard />
                <CalendarWidget />
                <ChatWidget />
                <CropGrid />
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
