//! Typed proxies for the object-detection runtime.
//!
//! Label maps and feature transformers are built by the backend; the types
//! here only name the entry point, order the arguments and keep whatever
//! value comes back so it can be handed to the next call.

pub mod config;
pub mod label_map;
pub mod logging;
pub mod pipeline;
pub mod session;
pub mod transformer;
pub mod visualizer;

pub use bridge::{Backend, CallError, Handle, Precision, Value};
pub use config::DetectionConfig;
pub use label_map::{LabelMap, LabelMapSource, read_coco_label_map, read_pascal_label_map};
pub use pipeline::Pipeline;
pub use session::Session;
pub use transformer::{DecodeOutput, FeatureTransformer, ImInfo, ScaleDetection, TransformerKind};
pub use visualizer::{Visualizer, VisualizerOptions};
