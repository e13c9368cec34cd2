//! TUI pane rendering modules
//!
//! Stateless render functions for each visible pane:
//!
//! - [`cells`]: the cleaned character sequence with pointer markers
//! - [`narration`]: step descriptions emitted so far
//! - [`pseudocode`]: pseudocode with the currently-executing line marked
//! - [`code`]: multi-language reference implementations
//! - [`info`]: algorithm metadata and complexity notes
//! - [`status`]: status bar with keybindings and playback state

pub mod cells;
pub mod code;
pub mod info;
pub mod narration;
pub mod pseudocode;
pub mod status;

pub use cells::render_cells_pane;
pub use code::render_code_pane;
pub use info::render_info_pane;
pub use narration::render_narration_pane;
pub use pseudocode::render_pseudocode_pane;
pub use status::{render_input_bar, render_status_bar, speed_label};
