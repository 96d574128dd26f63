pub mod colors;
pub mod constants;
pub mod discovery;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod ghost;
pub mod hands;
pub mod items;
pub mod menu;
pub mod merge;
pub mod pipeline;
pub mod recipes;
pub mod tracking;
pub mod tuning;
pub mod world;

pub use constants::*;
pub use discovery::Discovered;
pub use draw::{DrawCmd, DrawList, HandView};
pub use error::CraftError;
pub use gesture::{classify, hands_from_flat, HandId, HandLandmarks, Pointer, ScreenHand};
pub use ghost::Ghost;
pub use hands::HandMode;
pub use items::{Item, ItemId, ItemRegistry};
pub use menu::MenuScrollState;
pub use merge::MergeOutcome;
pub use pipeline::{DetectionThrottle, FramePipeline, LandmarkSource};
pub use recipes::RecipeBook;
pub use tracking::HandTracker;
pub use tuning::*;
pub use world::{World, WorldEvent};
