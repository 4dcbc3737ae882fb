//! Matching Pairs App
//!
//! Root component owning the session state and the phase transitions
//! (Editing -> Playing -> Won). All delayed visual feedback goes through the
//! cancellable timer slots so a reset can never race a pending callback.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    EditorControls, GameBoard, PairEditor, PairList, SaveNotice, VictoryOverlay,
};
use crate::context::GameContext;
use crate::data;
use crate::game::{phase_after_check, Phase, Round};
use crate::models::{Notice, Pair};
use crate::timers::{FeedbackTimers, VICTORY_HIDE_MS, VICTORY_SHOW_MS, WRONG_CLEAR_MS};

#[component]
pub fn App() -> impl IntoView {
    let (pairs, set_pairs) = signal(Vec::<Pair>::new());
    let (notice, set_notice) = signal(None::<Notice>);
    let (phase, set_phase) = signal(Phase::Editing);
    let (round, set_round) = signal(None::<Round>);
    let (attempts, set_attempts) = signal(0u32);
    let (matched, set_matched) = signal(0u32);
    let (marks, set_marks) = signal(Vec::<Option<bool>>::new());
    let (victory_visible, set_victory_visible) = signal(false);
    let timers = StoredValue::new_local(FeedbackTimers::default());

    provide_context(GameContext::new(
        (pairs, set_pairs),
        (notice, set_notice),
        timers,
    ));

    // Startup load chain; writes the signal directly so no save notice fires.
    Effect::new(move |_| {
        spawn_local(async move {
            let loaded = data::load_initial_pairs().await;
            set_pairs.set(loaded);
        });
    });

    let on_start = move |_: ()| {
        let Some(started) = pairs.with_untracked(|pairs| Round::start(pairs)) else {
            return;
        };
        set_marks.set(vec![None; started.left.len()]);
        set_round.set(Some(started));
        set_attempts.set(0);
        set_matched.set(0);
        set_victory_visible.set(false);
        set_phase.set(Phase::Playing);
    };

    let on_check = move |_: ()| {
        let Some(report) = round.with_untracked(|r| r.as_ref().map(Round::check)) else {
            return;
        };
        set_attempts.update(|attempts| *attempts += 1);
        set_matched.set(report.matched as u32);
        set_marks.set(report.marks.iter().map(|m| Some(*m)).collect());

        set_phase.set(phase_after_check(&report));
        if report.all_correct {
            timers.update_value(|t| {
                t.victory_show.schedule(VICTORY_SHOW_MS, move || {
                    set_victory_visible.set(true);
                    timers.update_value(|t| {
                        t.victory_hide
                            .schedule(VICTORY_HIDE_MS, move || set_victory_visible.set(false));
                    });
                });
            });
        } else {
            timers.update_value(|t| {
                t.wrong_clear.schedule(WRONG_CLEAR_MS, move || {
                    set_marks.update(|marks| {
                        for mark in marks.iter_mut() {
                            if *mark == Some(false) {
                                *mark = None;
                            }
                        }
                    });
                });
            });
        }
    };

    // Back to the editor; stored pairs are kept.
    let on_reset = move |_: ()| {
        timers.update_value(FeedbackTimers::cancel_round_feedback);
        set_victory_visible.set(false);
        set_round.set(None);
        set_marks.set(Vec::new());
        set_phase.set(Phase::Editing);
    };

    view! {
        <div class="app-container">
            <h1>"Matching Pairs"</h1>

            <SaveNotice/>

            <Show when=move || phase.get() == Phase::Editing>
                <section class="admin-panel">
                    <h2>"Pair Editor"</h2>
                    <PairEditor/>
                    <PairList/>
                    <EditorControls on_start=Callback::new(on_start)/>
                </section>
            </Show>

            <Show when=move || phase.get() != Phase::Editing>
                <GameBoard
                    round=round
                    set_round=set_round
                    marks=marks
                    attempts=attempts
                    matched=matched
                    on_check=Callback::new(on_check)
                    on_reset=Callback::new(on_reset)
                />
            </Show>

            <VictoryOverlay visible=victory_visible/>
        </div>
    }
}
