//! Application Context
//!
//! Shared state provided via Leptos Context API. Every pair-list mutation
//! goes through here so the list is persisted on each change and the save
//! notification stays consistent.

use leptos::prelude::*;

use crate::models::{Notice, Pair};
use crate::storage;
use crate::timers::{FeedbackTimers, SAVE_NOTICE_MS};

/// Timer handles are JS values, so they live in thread-local storage
pub type TimerStore = StoredValue<FeedbackTimers, LocalStorage>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct GameContext {
    pub pairs: ReadSignal<Vec<Pair>>,
    set_pairs: WriteSignal<Vec<Pair>>,
    pub notice: ReadSignal<Option<Notice>>,
    pub set_notice: WriteSignal<Option<Notice>>,
    pub timers: TimerStore,
}

impl GameContext {
    pub fn new(
        pairs: (ReadSignal<Vec<Pair>>, WriteSignal<Vec<Pair>>),
        notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>),
        timers: TimerStore,
    ) -> Self {
        Self {
            pairs: pairs.0,
            set_pairs: pairs.1,
            notice: notice.0,
            set_notice: notice.1,
            timers,
        }
    }

    /// Replace the whole pair list (import, clear all).
    pub fn replace_pairs(&self, pairs: Vec<Pair>) {
        self.set_pairs.set(pairs);
        self.after_mutation();
    }

    /// Apply an editor mutation to the pair list.
    pub fn mutate_pairs(&self, mutate: impl FnOnce(&mut Vec<Pair>)) {
        self.set_pairs.update(mutate);
        self.after_mutation();
    }

    /// Show a transient notice, auto-hidden after the save-notice delay.
    pub fn show_notice(&self, notice: Notice) {
        self.set_notice.set(Some(notice));
        let set_notice = self.set_notice;
        self.timers.update_value(|timers| {
            timers
                .save_notice
                .schedule(SAVE_NOTICE_MS, move || set_notice.set(None));
        });
    }

    /// Persist the current list and announce the change with a snapshot
    /// document ready for manual download.
    fn after_mutation(&self) {
        let (json, count) = self.pairs.with_untracked(|pairs| {
            storage::save_pairs(pairs);
            let doc = storage::snapshot_document(pairs, storage::timestamp_now());
            (storage::document_json(&doc), pairs.len())
        });
        self.show_notice(Notice {
            message: format!("Data updated! {count} pairs ready"),
            download: Some(json),
        });
    }
}

pub fn use_game_context() -> GameContext {
    expect_context::<GameContext>()
}
