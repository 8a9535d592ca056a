//! MEMO-RE Desktop Client
//!
//! Native egui/eframe front end for the MEMO-RE memo service. The app
//! gates every screen behind a stored-session check, then moves between
//! two authenticated screens: the board list (own boards, neighbor
//! boards, the neighbor roster) and a single memo board.
//!
//! # Module Structure
//!
//! - **`config`** - Server URL configuration
//! - **`session`** - Session data and the startup session gate
//! - **`credentials`** - Persisted session on disk
//! - **`api`** - HTTP client for the backend
//! - **`types`** - Wire types shared across screens
//! - **`guide`** - The synthetic onboarding guide board
//! - **`alarms`** - Local per-board reminder timestamps
//! - **`screens`** - Per-screen state machines and worker plumbing
//! - **`state`** - Top-level application state and frame processing
//! - **`views`** - egui rendering
//! - **`theme`** - Color palette

pub mod alarms;
pub mod api;
pub mod config;
pub mod credentials;
pub mod guide;
pub mod screens;
pub mod session;
pub mod state;
pub mod theme;
pub mod types;
pub mod views;

pub use state::AppState;
