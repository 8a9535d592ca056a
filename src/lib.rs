//! MEMO-RE Desktop Client
//!
//! Native desktop client for the MEMO-RE board/memo service, built with
//! egui/eframe. Users sign in, keep time-stamped memos on named boards,
//! ask the service for a summary of a board, and follow "neighbors" whose
//! boards become visible in a read-only shared view.
//!
//! # Module Structure
//!
//! - **`shared`** - Error types used by the persistence layer
//! - **`app`** - The client itself: configuration, credential store,
//!   session gate, API client, screen state, and egui views

pub mod app;
pub mod shared;
