//! Calendar widget
//!
//! Purely local selection state over the current month; no network
//! interaction.

use chrono::{Datelike, Local, NaiveDate};
use yew::prelude::*;

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

#[function_component]
pub fn CalendarWidget() -> Html {
    let today = Local::now().date_naive();
    let selected = use_state(|| today);

    let year = today.year();
    let month = today.month();

    html! {
        <section class="card calendar">
            <h2>{ today.format("%B %Y").to_string() }</h2>
            <div class="days">
                { for (1..=days_in_month(year, month)).map(|day| {
                    let date = NaiveDate::from_ymd_opt(year, month, day)
                        .unwrap_or(today);
                    let is_selected = *selected == date;
                    let onclick = {
                        let selected = selected.clone();
                        Callback::from(move |_| selected.set(date))
                    };
                    html! {
                        <button
                            key={day.to_string()}
                            class={classes!("day", is_selected.then_some("selected"))}
                            {onclick}
                        >
                            { day }
                        </button>
                    }
                }) }
            </div>
            <p class="selected-date">
                { format!("Selected: {}", selected.format("%Y-%m-%d")) }
            </p>
        </section>
    }
}
