use bridge::{Backend, CallError, Precision, Value};

use crate::transformer::{FeatureTransformer, TransformerKind, construct, impl_feature_transformer};

/// Chains stages so the backend applies them in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    value: Value,
}

impl Pipeline {
    /// Sends the stages' values as a single list argument, first stage first.
    pub fn new<B: Backend + ?Sized>(
        backend: &B,
        stages: &[&dyn FeatureTransformer],
        precision: Precision,
    ) -> Result<Self, CallError> {
        let stages = stages.iter().map(|stage| stage.value().clone()).collect();
        let value = construct(
            backend,
            TransformerKind::Pipeline,
            vec![Value::List(stages)],
            precision,
        )?;
        Ok(Self { value })
    }
}

impl_feature_transformer!(Pipeline);
