//! Pair List Component
//!
//! Lists the stored pairs with per-row removal.

use leptos::prelude::*;

use crate::context::use_game_context;
use crate::game;

/// Stored pair list with remove buttons
#[component]
pub fn PairList() -> impl IntoView {
    let ctx = use_game_context();

    let indexed_pairs = move || ctx.pairs.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="pairs-list">
            <For
                each=indexed_pairs
                key=|(index, pair)| (*index, pair.item1.clone(), pair.item2.clone())
                children=move |(index, pair)| {
                    view! {
                        <div class="pair-item">
                            <span>{format!("{} \u{2194} {}", pair.item1, pair.item2)}</span>
                            <button
                                class="remove-btn"
                                on:click=move |_| ctx.mutate_pairs(|pairs| game::remove_pair(pairs, index))
                            >
                                "Remove"
                            </button>
                        </div>
                    }
                }
            />

            <Show when=move || ctx.pairs.get().is_empty()>
                <p class="pairs-empty">"No pairs yet. Add a few to start playing."</p>
            </Show>
        </div>
    }
}
