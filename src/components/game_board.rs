//! Game Board Component
//!
//! Two-column board: the fixed left column and the drag-reorderable right
//! column, plus session stats and the check/reset controls.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DragEvent;

use crate::dnd::{
    self, create_drag_signals, drop_position, make_on_dragend, make_on_dragstart, DropPosition,
};
use crate::game::Round;
use crate::models::GameItem;

#[component]
pub fn GameBoard(
    round: ReadSignal<Option<Round>>,
    set_round: WriteSignal<Option<Round>>,
    /// Per-position check marks in column order; None means unmarked
    marks: ReadSignal<Vec<Option<bool>>>,
    attempts: ReadSignal<u32>,
    matched: ReadSignal<u32>,
    #[prop(into)] on_check: Callback<()>,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    let drag = create_drag_signals();

    let left_items = move || {
        round
            .get()
            .map(|r| r.left.into_iter().enumerate().collect::<Vec<_>>())
            .unwrap_or_default()
    };
    let right_items = move || round.get().map(|r| r.right).unwrap_or_default();
    let pair_count = move || round.with(|r| r.as_ref().map(|r| r.left.len()).unwrap_or(0));

    // Dragging over column space below every item's midpoint moves the
    // dragged item to the end; item-level handlers stop propagation first.
    let on_column_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        let Some(dragged) = drag.dragging.get_untracked() else {
            return;
        };
        let Some(column) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };

        let pointer_y = ev.client_y() as f64;
        let children = column.children();
        for i in 0..children.length() {
            if let Some(child) = children.item(i) {
                let rect = child.get_bounding_client_rect();
                if pointer_y < rect.top() + rect.height() / 2.0 {
                    return;
                }
            }
        }

        set_round.update(|r| {
            if let Some(round) = r {
                round.move_to_end(dragged);
            }
        });
    };

    let mark_class = |mark: Option<bool>| match mark {
        Some(true) => " matched",
        Some(false) => " wrong",
        None => "",
    };

    view! {
        <section class="game-area">
            <div class="game-stats">
                <span>{move || format!("Matches: {} / {}", matched.get(), pair_count())}</span>
                <span>{move || format!("Attempts: {}", attempts.get())}</span>
            </div>

            <div class="game-board">
                <div class="game-column">
                    <div class="column-header">"Column A (Fixed)"</div>
                    <div class="column-items">
                        <For
                            each=left_items
                            key=|(_, item)| item.pair_index
                            children=move |(position, item): (usize, GameItem)| {
                                let class = move || {
                                    let mark = marks.with(|m| m.get(position).copied().flatten());
                                    format!("game-item fixed-item{}", mark_class(mark))
                                };
                                view! {
                                    <div class=class>{item.text.clone()}</div>
                                }
                            }
                        />
                    </div>
                </div>

                <div class="game-column">
                    <div class="column-header">"Column B (Drag to Reorder)"</div>
                    <div
                        class="column-items sortable-column"
                        on:dragover=on_column_dragover
                        on:drop=dnd::on_drop
                    >
                        <For
                            each=right_items
                            key=|item| item.pair_index
                            children=move |item: GameItem| {
                                let pair_index = item.pair_index;
                                let on_dragstart = make_on_dragstart(drag, pair_index);
                                let on_dragend = make_on_dragend(drag);

                                let on_dragover = move |ev: DragEvent| {
                                    ev.prevent_default();
                                    ev.stop_propagation();
                                    let Some(dragged) = drag.dragging.get_untracked() else {
                                        return;
                                    };
                                    if dragged == pair_index {
                                        return;
                                    }
                                    let Some(target) = ev
                                        .current_target()
                                        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                                    else {
                                        return;
                                    };
                                    let rect = target.get_bounding_client_rect();
                                    let before = drop_position(
                                        ev.client_y() as f64,
                                        rect.top(),
                                        rect.height(),
                                    ) == DropPosition::Before;
                                    set_round.update(|r| {
                                        if let Some(round) = r {
                                            round.reorder(dragged, pair_index, before);
                                        }
                                    });
                                };

                                let class = move || {
                                    // the item's mark follows its current position
                                    let mark = round.with(|r| {
                                        r.as_ref().and_then(|r| {
                                            r.right
                                                .iter()
                                                .position(|i| i.pair_index == pair_index)
                                        })
                                    });
                                    let mark =
                                        mark.and_then(|pos| marks.with(|m| m.get(pos).copied().flatten()));
                                    let dragging = if drag.dragging.get() == Some(pair_index) {
                                        " dragging"
                                    } else {
                                        ""
                                    };
                                    format!("game-item draggable-item{}{dragging}", mark_class(mark))
                                };

                                view! {
                                    <div
                                        class=class
                                        draggable="true"
                                        on:dragstart=on_dragstart
                                        on:dragover=on_dragover
                                        on:drop=dnd::on_drop
                                        on:dragend=on_dragend
                                    >
                                        {item.text.clone()}
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            </div>

            <div class="game-controls">
                <button class="check-btn" on:click=move |_| on_check.run(())>
                    "Check Answers"
                </button>
                <button class="reset-btn" on:click=move |_| on_reset.run(())>
                    "Back to Editor"
                </button>
            </div>
        </section>
    }
}
