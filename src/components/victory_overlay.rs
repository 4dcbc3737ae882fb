//! Victory Overlay Component

use leptos::prelude::*;

/// Full-screen banner shown shortly after a fully correct check
#[component]
pub fn VictoryOverlay(visible: ReadSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="victory-overlay">
                <div class="victory-banner">
                    <h2>"\u{1f389} You matched them all!"</h2>
                </div>
            </div>
        </Show>
    }
}
