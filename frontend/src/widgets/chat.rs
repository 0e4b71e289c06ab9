//! Advisory chat widget
//!
//! Append-only transcript with a pending gate: the user turn is appended
//! optimistically, the input cleared, and exactly one assistant turn is
//! appended when the request resolves. Submission works from the button
//! and from an Enter keypress, and is blocked while a request is in
//! flight.

use gloo_net::http::Request;
use shared::{ChatRequest, ChatResponse, ChatRole, ChatTurn, Transcript};
use web_sys::HtmlInputElement;
use yew::prelude::*;

async fn request_advice(message: String) -> Option<String> {
    let request = Request::post("/api/chat")
        .json(&ChatRequest {
            message: Some(message),
        })
        .ok()?;
    let response = request.send().await.ok()?;
    let body: ChatResponse = response.json().await.ok()?;
    Some(body.response)
}

#[function_component]
pub fn ChatWidget() -> Html {
    let transcript = use_state(Transcript::new);
    let input = use_state(String::new);

    let submit = {
        let transcript = transcript.clone();
        let input = input.clone();
        Callback::from(move |_: ()| {
            let message = (*input).clone();
            let mut next = (*transcript).clone();
            if !next.begin_submission(&message) {
                return;
            }
            input.set(String::new());
            transcript.set(next.clone());

            let transcript = transcript.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match request_advice(message).await {
                    Some(reply) => next.resolve(reply),
                    None => next.resolve_with_failure(),
                }
                transcript.set(next);
            });
        })
    };

    let onclick = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };

    let onkeypress = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit.emit(());
            }
        })
    };

    let oninput = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let element: HtmlInputElement = e.target_unchecked_into();
            input.set(element.value());
        })
    };

    html! {
        <section class="card chat">
            <h2>{ "Farm Advisor" }</h2>
            <div class="transcript">
                { for transcript.turns().iter().map(turn_bubble) }
                if transcript.is_pending() {
                    <p class="pending">{ "Thinking..." }</p>
                }
            </div>
            <div class="composer">
                <input
                    type="text"
                    placeholder="Ask about crops, weather, pests..."
                    value={(*input).clone()}
                    {oninput}
                    {onkeypress}
                />
                <button {onclick} disabled={transcript.is_pending()}>
                    { "Send" }
                </button>
            </div>
        </section>
    }
}

fn turn_bubble(turn: &ChatTurn) -> Html {
    let class = match turn.role {
        ChatRole::User => "turn user",
        ChatRole::Assistant => "turn assistant",
    };
    html! {
        <p class={class}>{ turn.content.clone() }</p>
    }
}
