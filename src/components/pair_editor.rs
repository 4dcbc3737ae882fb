//! Pair Editor Form Component
//!
//! Form for entering new word pairs. Enter in either input submits the form.

use leptos::prelude::*;

use crate::context::use_game_context;
use crate::game;

/// Form for creating new pairs
#[component]
pub fn PairEditor() -> impl IntoView {
    let ctx = use_game_context();

    let (item1, set_item1) = signal(String::new());
    let (item2, set_item2) = signal(String::new());
    let (error, set_error) = signal(None::<&'static str>);

    let add_pair = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match game::validate_pair(&item1.get(), &item2.get()) {
            Ok(pair) => {
                ctx.mutate_pairs(|pairs| pairs.push(pair));
                set_item1.set(String::new());
                set_item2.set(String::new());
                set_error.set(None);
            }
            Err(err) => set_error.set(Some(err.message())),
        }
    };

    view! {
        <form class="pair-editor" on:submit=add_pair>
            <div class="pair-editor-row">
                <input
                    type="text"
                    placeholder="First item..."
                    prop:value=move || item1.get()
                    on:input=move |ev| set_item1.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Matching item..."
                    prop:value=move || item2.get()
                    on:input=move |ev| set_item2.set(event_target_value(&ev))
                />
                <button type="submit">"Add Pair"</button>
            </div>

            {move || error.get().map(|message| view! {
                <p class="form-error">{message}</p>
            })}
        </form>
    }
}
