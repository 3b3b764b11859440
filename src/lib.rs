//! Top-down tactical view library.
//!
//! Renders a simulation's agents and tactics on a pannable, zoomable 2D
//! map. The crate owns interaction and presentation only: the embedder
//! feeds it one [`FrameInput`] per tick and replays the returned [`Scene`]
//! with its own graphics backend, while the simulation owns entity
//! lifecycle through the [`World`] store.
//!
//! ```no_run
//! use lorise::{Agent, FrameInput, LoRise, Tactic, Vec2, Viewport};
//!
//! let mut view = LoRise::default();
//! view.world_mut().add_agent(Agent::new("raven", true, Vec2::new(40.0, -25.0)));
//! view.world_mut().add_tactic(Tactic::new("hold", Vec2::new(150.0, 80.0)));
//!
//! let input = FrameInput::at(Vec2::ZERO, Viewport::new(1280.0, 720.0));
//! let scene = view.frame(&input);
//! for command in scene.commands() {
//!     // hand off to the renderer
//!     let _ = command;
//! }
//! ```

pub mod camera;
pub mod color;
pub mod constants;
pub mod geometry;
pub mod hit_testing;
pub mod input;
pub mod logging;
pub mod perf;
pub mod render;
pub mod settings;
pub mod settings_watcher;
pub mod spatial_index;
pub mod types;
pub mod view;
pub mod world;

pub use camera::Camera;
pub use color::Color;
pub use geometry::{Vec2, Viewport};
pub use input::{ButtonState, FrameInput, Gesture};
pub use render::{DrawCommand, GridLine, Scene};
pub use settings::{Settings, SettingsError};
pub use settings_watcher::SettingsWatcher;
pub use types::{Agent, AgentId, Tactic, TacticId};
pub use view::LoRise;
pub use world::World;
