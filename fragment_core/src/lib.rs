#![no_std]

//! # Fragment Core
//!
//! Editing state machine for reviewing text-detection results.
//!
//! ## Philosophy
//!
//! - **No_std compatible**: Uses alloc but not std
//! - **Deterministic**: Same command trace => same session state
//! - **Total operations**: Wraparound replaces bounds checks, refusal replaces errors
//! - **Mechanism over policy**: Core provides editing primitives, hosts decide rendering
//! - **No aliasing**: The text box addresses fragments by index, never by reference
//!
//! ## Design
//!
//! The core provides:
//! - FragmentStore: Ordered, never-empty collection of detected fragments
//! - CursorTextBox: Cursor and visible-window arithmetic over one fragment
//! - EditorController: Highlight index and text-box synchronization
//! - EditorSession: Owns all three and dispatches commands
//! - EditorSnapshot: Deterministic state for parity testing

extern crate alloc;

pub mod command;
pub mod controller;
pub mod fragment;
pub mod key;
pub mod session;
pub mod snapshot;
pub mod store;
pub mod text_box;

pub use command::{CommandOutcome, EditorCommand};
pub use controller::EditorController;
pub use fragment::{BoundingBox, Fragment, FragmentId};
pub use key::Key;
pub use session::{EditorSession, SessionConfig};
pub use snapshot::EditorSnapshot;
pub use store::FragmentStore;
pub use text_box::{BoxRect, CursorTextBox, VisibleSlice, DEFAULT_VISIBLE_WINDOW};
