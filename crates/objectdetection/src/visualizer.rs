use bridge::{Backend, CallError, Precision, Value};

use crate::label_map::LabelMap;
use crate::transformer::{TransformerKind, construct, impl_feature_transformer};

/// Drawing options for [`Visualizer`].
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizerOptions {
    /// Detections scoring below this are not drawn.
    pub threshold: f64,
    /// Image encoding of the rendered output.
    pub encoding: String,
}

impl Default for VisualizerOptions {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            encoding: "png".to_string(),
        }
    }
}

impl VisualizerOptions {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }
}

/// Renders detection results (label, score, bounding box) onto the image.
///
/// The rendered image is read back through the image frame once the stage
/// has been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Visualizer {
    value: Value,
}

impl Visualizer {
    /// Threshold 0.3, PNG output.
    pub fn new<B: Backend + ?Sized>(
        backend: &B,
        label_map: &LabelMap,
        precision: Precision,
    ) -> Result<Self, CallError> {
        Self::with_options(backend, label_map, VisualizerOptions::default(), precision)
    }

    pub fn with_options<B: Backend + ?Sized>(
        backend: &B,
        label_map: &LabelMap,
        options: VisualizerOptions,
        precision: Precision,
    ) -> Result<Self, CallError> {
        let args = vec![
            label_map.as_value().clone(),
            Value::Float(options.threshold),
            Value::Str(options.encoding),
        ];
        let value = construct(backend, TransformerKind::Visualizer, args, precision)?;
        Ok(Self { value })
    }
}

impl_feature_transformer!(Visualizer);
