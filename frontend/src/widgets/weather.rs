//! Weather card widget
//!
//! One fetch on mount; any successful JSON parse transitions the card to
//! loaded. Failures leave it in the loading state with no retry.

use gloo_net::http::Request;
use shared::{ForecastDay, WeatherView};
use yew::prelude::*;

#[function_component]
pub fn WeatherCard() -> Html {
    let weather: UseStateHandle<Option<WeatherView>> = use_state(|| None);

    {
        let weather = weather.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    let fetched = Request::get("/api/weather").send().await;
                    if let Ok(response) = fetched {
                        if let Ok(view) = response.json::<WeatherView>().await {
                            weather.set(Some(view));
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    match weather.as_ref() {
        None => html! {
            <section class="card weather-card">
                <h2>{ "Weather" }</h2>
                <p class="loading">{ "Loading weather..." }</p>
            </section>
        },
        Some(view) => html! {
            <section class="card weather-card">
                <h2>{ format!("{}, {}", view.location.name, view.location.country) }</h2>
                <div class="current">
                    <img src={view.current.condition.icon.clone()} alt={view.current.condition.text.clone()} />
                    <span class="temp">{ format!("{:.0}°C", view.current.temp_c) }</span>
                    <span>{ view.current.condition.text.clone() }</span>
                    <span>{ format!("Humidity {}%", view.current.humidity) }</span>
                    <span>{ format!("Wind {:.0} km/h", view.current.wind_kph) }</span>
                </div>
                <div class="forecast">
                    { for view.forecast_days().iter().map(forecast_day) }
                </div>
            </section>
        },
    }
}

fn forecast_day(day: &ForecastDay) -> Html {
    html! {
        <div class="forecast-day" key={day.date.clone()}>
            <span class="date">{ day.date.clone() }</span>
            <img src={day.day.condition.icon.clone()} alt={day.day.condition.text.clone()} />
            <span>{ format!("{:.0}° / {:.0}°", day.day.maxtemp_c, day.day.mintemp_c) }</span>
        </div>
    }
}
