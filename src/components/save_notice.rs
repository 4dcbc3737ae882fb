//! Save Notice Component
//!
//! Transient banner shown after saves and imports, with an optional manual
//! download of the freshly saved document.

use leptos::prelude::*;
use log::warn;

use crate::context::use_game_context;
use crate::download;

#[component]
pub fn SaveNotice() -> impl IntoView {
    let ctx = use_game_context();

    view! {
        {move || ctx.notice.get().map(|notice| {
            view! {
                <div class="save-notification">
                    <span class="notification-text">{notice.message.clone()}</span>
                    {notice.download.clone().map(|json| view! {
                        <button
                            class="download-btn-small"
                            on:click=move |_| {
                                if let Err(err) = download::download_json("pairs.json", &json) {
                                    warn!("Download failed: {err}");
                                }
                            }
                        >
                            "Download JSON"
                        </button>
                    })}
                    <button class="close-btn" on:click=move |_| ctx.set_notice.set(None)>
                        "\u{00d7}"
                    </button>
                </div>
            }
        })}
    }
}
