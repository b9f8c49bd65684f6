//! # Allio - All-in-One Personal Productivity CLI
//!
//! A command-line companion for small daily habits: free-text notes,
//! a calendar with per-day marks, notes and tasks, a water-intake
//! counter and a consecutive-day activity streak.
//!
//! ## Features
//!
//! - **Notes**: Create, edit and delete free-text notes with timestamps
//! - **Calendar**: Mark days, attach a note and a task list to any date
//! - **Water Intake**: Count glasses per day with an automatic daily reset
//! - **Streak**: Track consecutive active days from the overview screen
//! - **Theming**: Two cosmetic color palettes for table output
//!
//! Everything persists to a local key-value store under the platform
//! application-data directory. There is no server and no sync.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use allio::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
