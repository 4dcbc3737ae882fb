//! UI Components
//!
//! Leptos components for the editor and game screens.

mod confirm_button;
mod editor_controls;
mod game_board;
mod pair_editor;
mod pair_list;
mod save_notice;
mod victory_overlay;

pub use confirm_button::ConfirmButton;
pub use editor_controls::EditorControls;
pub use game_board::GameBoard;
pub use pair_editor::PairEditor;
pub use pair_list::PairList;
pub use save_notice::SaveNotice;
pub use victory_overlay::VictoryOverlay;
