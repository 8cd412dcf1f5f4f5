use bridge::{Backend, CallError, Precision, Value, invoke};

/// Every transformer the backend can construct, keyed to its entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformerKind {
    ImInfo,
    DecodeOutput,
    ScaleDetection,
    Visualizer,
    Pipeline,
}

impl TransformerKind {
    pub const ALL: [TransformerKind; 5] = [
        TransformerKind::ImInfo,
        TransformerKind::DecodeOutput,
        TransformerKind::ScaleDetection,
        TransformerKind::Visualizer,
        TransformerKind::Pipeline,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            TransformerKind::ImInfo => "ImInfo",
            TransformerKind::DecodeOutput => "DecodeOutput",
            TransformerKind::ScaleDetection => "ScaleDetection",
            TransformerKind::Visualizer => "Visualizer",
            TransformerKind::Pipeline => "Pipeline",
        }
    }

    /// Backend entry point: `create` followed by the transformer name.
    pub const fn constructor(self) -> &'static str {
        match self {
            TransformerKind::ImInfo => "createImInfo",
            TransformerKind::DecodeOutput => "createDecodeOutput",
            TransformerKind::ScaleDetection => "createScaleDetection",
            TransformerKind::Visualizer => "createVisualizer",
            TransformerKind::Pipeline => "createPipeline",
        }
    }
}

/// A pipeline stage bound to the value its constructor call returned.
pub trait FeatureTransformer {
    fn kind(&self) -> TransformerKind;

    /// The backend's reference to this stage, exactly as received.
    fn value(&self) -> &Value;

    fn into_value(self) -> Value
    where
        Self: Sized;
}

pub(crate) fn construct<B: Backend + ?Sized>(
    backend: &B,
    kind: TransformerKind,
    args: Vec<Value>,
    precision: Precision,
) -> Result<Value, CallError> {
    tracing::debug!(transformer = kind.name(), "Constructing feature transformer");
    invoke(backend, precision, kind.constructor(), args)
}

/// Implements `FeatureTransformer` for a struct with a `value: Value` field
/// whose name matches a `TransformerKind` variant.
macro_rules! impl_feature_transformer {
    ($struct_name:ident) => {
        impl $crate::transformer::FeatureTransformer for $struct_name {
            fn kind(&self) -> $crate::transformer::TransformerKind {
                $crate::transformer::TransformerKind::$struct_name
            }

            fn value(&self) -> &bridge::Value {
                &self.value
            }

            fn into_value(self) -> bridge::Value {
                self.value
            }
        }
    };
}

pub(crate) use impl_feature_transformer;

/// Declares a transformer whose constructor takes nothing but the precision tag.
macro_rules! argless_transformer {
    ($(#[$meta:meta])* $struct_name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $struct_name {
            value: Value,
        }

        impl $struct_name {
            pub fn new<B: Backend + ?Sized>(
                backend: &B,
                precision: Precision,
            ) -> Result<Self, CallError> {
                let value = construct(
                    backend,
                    TransformerKind::$struct_name,
                    Vec::new(),
                    precision,
                )?;
                Ok(Self { value })
            }
        }

        impl_feature_transformer!($struct_name);
    };
}

argless_transformer!(
    /// Produces per-image metadata: height, width, scale in height and
    /// scale in width.
    ImInfo
);

argless_transformer!(
    /// Decodes the raw detection output into one row per detected object.
    ///
    /// The model emits a 1-dim tensor whose first element is the number of
    /// objects K, followed by K groups of `label score x1 y1 x2 y2`:
    ///
    /// ```text
    /// 2, 1, 0.5, 10, 20, 50, 80, 3, 0.3, 20, 10, 40, 70
    /// ```
    ///
    /// which decodes to a 2-dim tensor:
    ///
    /// ```text
    /// 1, 0.5, 10, 20, 50, 80
    /// 3, 0.3, 20, 10, 40, 70
    /// ```
    DecodeOutput
);

argless_transformer!(
    /// Decodes like [`DecodeOutput`], then scales normalized boxes (SSD
    /// output lies in `[0, 1]`) back to the original image size.
    ScaleDetection
);
