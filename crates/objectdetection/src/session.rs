use bridge::{Backend, CallError, Precision};

use crate::config::DetectionConfig;
use crate::label_map::{self, LabelMap};
use crate::pipeline::Pipeline;
use crate::transformer::{DecodeOutput, FeatureTransformer, ImInfo, ScaleDetection};
use crate::visualizer::{Visualizer, VisualizerOptions};

/// A backend paired with the precision every call goes out with.
#[derive(Debug, Clone)]
pub struct Session<B> {
    backend: B,
    precision: Precision,
}

impl<B: Backend> Session<B> {
    pub fn new(backend: B, precision: Precision) -> Self {
        Self { backend, precision }
    }

    pub fn from_config(backend: B, config: &DetectionConfig) -> Self {
        Self::new(backend, config.precision)
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn read_pascal_label_map(&self) -> Result<LabelMap, CallError> {
        label_map::read_pascal_label_map(&self.backend, self.precision)
    }

    pub fn read_coco_label_map(&self) -> Result<LabelMap, CallError> {
        label_map::read_coco_label_map(&self.backend, self.precision)
    }

    pub fn im_info(&self) -> Result<ImInfo, CallError> {
        ImInfo::new(&self.backend, self.precision)
    }

    pub fn decode_output(&self) -> Result<DecodeOutput, CallError> {
        DecodeOutput::new(&self.backend, self.precision)
    }

    pub fn scale_detection(&self) -> Result<ScaleDetection, CallError> {
        ScaleDetection::new(&self.backend, self.precision)
    }

    pub fn visualizer(&self, label_map: &LabelMap) -> Result<Visualizer, CallError> {
        Visualizer::new(&self.backend, label_map, self.precision)
    }

    pub fn visualizer_with_options(
        &self,
        label_map: &LabelMap,
        options: VisualizerOptions,
    ) -> Result<Visualizer, CallError> {
        Visualizer::with_options(&self.backend, label_map, options, self.precision)
    }

    pub fn pipeline(&self, stages: &[&dyn FeatureTransformer]) -> Result<Pipeline, CallError> {
        Pipeline::new(&self.backend, stages, self.precision)
    }
}
