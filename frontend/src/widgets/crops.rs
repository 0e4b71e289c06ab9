//! Crop price grid widget
//!
//! Fetches the full catalog once on mount and recomputes the filtered
//! view synchronously on every keystroke. No pagination, no debounce.

use gloo_net::http::Request;
use shared::{filter_crops, CropCatalog, CropRecord};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component]
pub fn CropGrid() -> Html {
    let crops: UseStateHandle<Vec<CropRecord>> = use_state(Vec::new);
    let search = use_state(String::new);

    {
        let crops = crops.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    let fetched = Request::get("/api/crops").send().await;
                    if let Ok(response) = fetched {
                        if let Ok(catalog) = response.json::<CropCatalog>().await {
                            crops.set(catalog.crops);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let oninput = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let filtered = filter_crops(&crops, &search);

    html! {
        <section class="card crop-grid">
            <h2>{ "Crop Prices" }</h2>
            <input
                type="text"
                placeholder="Search by name or category..."
                value={(*search).clone()}
                {oninput}
            />
            <table>
                <thead>
                    <tr>
                        <th>{ "Crop" }</th>
                        <th>{ "Category" }</th>
                        <th>{ "Price/kg" }</th>
                        <th>{ "Season" }</th>
                        <th>{ "Growth" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for filtered.iter().map(crop_row) }
                </tbody>
            </table>
        </section>
    }
}

fn crop_row(crop: &CropRecord) -> Html {
    html! {
        <tr key={crop.id.to_string()}>
            <td>{ crop.name.clone() }</td>
            <td>{ crop.category.clone() }</td>
            <td>{ format!("{:.2} {}", crop.price_per_kg, crop.currency) }</td>
            <td>{ crop.season.clone() }</td>
            <td>{ crop.growth_duration.clone() }</td>
        </tr>
    }
}
