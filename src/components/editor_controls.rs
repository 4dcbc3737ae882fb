//! Editor Controls Component
//!
//! Start, clear-all, and import/export actions for the editor screen.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::components::ConfirmButton;
use crate::context::use_game_context;
use crate::download;
use crate::models::Notice;
use crate::storage;

#[component]
pub fn EditorControls(#[prop(into)] on_start: Callback<()>) -> impl IntoView {
    let ctx = use_game_context();

    let can_start = move || !ctx.pairs.get().is_empty();

    let export_pairs = move |_| {
        let json = ctx.pairs.with_untracked(|pairs| {
            let doc = storage::export_document(pairs, storage::timestamp_now());
            storage::document_json(&doc)
        });
        if let Err(err) = download::download_json("matching-pairs-backup.json", &json) {
            warn!("Export failed: {err}");
        }
    };

    let import_file = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // allow re-importing the same file later
        input.set_value("");

        spawn_local(async move {
            match read_file_text(&file).await {
                Ok(text) => match storage::parse_import(&text) {
                    Ok(pairs) => {
                        let count = pairs.len();
                        ctx.replace_pairs(pairs);
                        ctx.show_notice(Notice::message(format!(
                            "Successfully imported {count} pairs!"
                        )));
                    }
                    Err(err) => ctx.show_notice(Notice::message(err.to_string())),
                },
                Err(err) => {
                    ctx.show_notice(Notice::message(format!("Could not read file: {err}")))
                }
            }
        });
    };

    view! {
        <div class="editor-controls">
            <button
                class="start-btn"
                disabled=move || !can_start()
                on:click=move |_| on_start.run(())
            >
                "Start Game"
            </button>

            <ConfirmButton
                label="Clear All Pairs"
                prompt="Clear all pairs?"
                button_class="clear-btn"
                on_confirm=Callback::new(move |_| ctx.replace_pairs(Vec::new()))
            />

            <button class="export-btn" on:click=export_pairs>"Export JSON"</button>

            <label class="import-label">
                "Import JSON"
                <input
                    type="file"
                    accept="application/json,.json"
                    class="import-input"
                    on:change=import_file
                />
            </label>
        </div>
    }
}

async fn read_file_text(file: &web_sys::File) -> Result<String, String> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|err| format!("{err:?}"))?;
    text.as_string()
        .ok_or_else(|| "file contents are not text".to_string())
}
