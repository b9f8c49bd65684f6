//! Persistence layer for the allio application.
//!
//! Everything lives in one SQLite file holding a single key-value table:
//! string keys mapped to JSON-encoded values, one independent key per
//! concern. The typed accessors below wrap that store, one per feature.

/// Store connection and schema setup.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// The generic key-value adapter with its swallow-and-log error policy.
pub mod kv;

/// Daily water glass counter with the lazy day-boundary reset.
pub mod water;

/// Free-text note collection, stored as one list.
pub mod notes;

/// Per-day marks, notes and task lists under a single composite key.
pub mod calendar;

/// Consecutive-day activity streak state machine.
pub mod streak;
