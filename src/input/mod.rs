//! Pointer and scroll input handling for the tactical view.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`Gesture`) to track the
//! current interaction mode. Claims are arbitrated once per frame from a
//! plain-data [`FrameInput`] snapshot; the view never registers OS event
//! callbacks.
//!
//! ## Modules
//!
//! - `state` - Gesture state machine enum and helper methods
//! - `snapshot` - Per-frame input snapshot handed in by the embedder
//! - `update` - Per-frame arbitration, previews and commits

mod snapshot;
mod state;
mod update;

pub use snapshot::{ButtonState, FrameInput};
pub use state::Gesture;
pub use update::update_gestures;
