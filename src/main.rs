//! Matching Pairs Frontend Entry Point

mod app;
mod components;
mod context;
mod data;
mod dnd;
mod download;
mod game;
mod models;
mod storage;
mod timers;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    mount_to_body(App);
}
