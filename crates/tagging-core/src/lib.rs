//! Tagging Core Library
//!
//! Platform-agnostic tag placement engine for the tagging question widget:
//! a user sorts tags from a pool into an answer area and checks them
//! against each tag's correctness flag.

pub mod config;
pub mod dataset;
pub mod engine;
pub mod gesture;
pub mod tag;
pub mod view;

pub use config::WidgetConfig;
pub use dataset::{DatasetError, DatasetResult, DatasetSource, MemorySource, parse_records};
pub use engine::{
    CheckEntry, CheckResult, EngineError, EngineResult, Evaluation, Phase, PlacementEngine,
    Snapshot,
};
pub use gesture::{Gesture, GestureRouter, Outcome, Zone};
pub use tag::{TagId, TagRecord};
pub use view::{TagStyle, TagView, WidgetView};

#[cfg(not(target_arch = "wasm32"))]
pub use dataset::FileSource;
