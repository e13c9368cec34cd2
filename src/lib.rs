//! # Introduction
//!
//! tacocat animates the two-pointer palindrome check in the terminal: an
//! input string is turned into an ordered trace of descriptive steps, and a
//! playback controller walks that trace forward and backward — manually or on
//! a timer — through a TUI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input string → Trace Generator → Trace → Playback Controller → TUI
//! ```
//!
//! 1. [`trace`] — the pure step generator: normalizes the input and records
//!    every pointer move and comparison as a [`trace::Step`].
//! 2. [`playback`] — the transport state machine: play/pause/reset/step/seek
//!    plus deadline-based auto-advance over the loaded [`trace::Trace`].
//! 3. [`algorithm`] — static content: metadata, pseudocode, example inputs,
//!    and reference implementations in several languages.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod algorithm;
pub mod playback;
pub mod trace;
pub mod ui;
