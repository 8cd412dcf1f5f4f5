use bridge::{Backend, CallError, Precision, Value, invoke};

/// Dataset whose class names the backend ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelMapSource {
    Pascal,
    Coco,
}

impl LabelMapSource {
    pub const fn call_name(self) -> &'static str {
        match self {
            LabelMapSource::Pascal => "readPascalLabelMap",
            LabelMapSource::Coco => "readCocoLabelMap",
        }
    }
}

/// Class id to class name mapping, as returned by the backend.
///
/// The contents are never inspected here; the wrapped value is what gets
/// passed on to [`crate::Visualizer`].
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMap(Value);

impl LabelMap {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for LabelMap {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

pub fn read_label_map<B: Backend + ?Sized>(
    backend: &B,
    source: LabelMapSource,
    precision: Precision,
) -> Result<LabelMap, CallError> {
    tracing::debug!(source = ?source, "Loading label map");
    invoke(backend, precision, source.call_name(), Vec::new()).map(LabelMap)
}

/// Load the PASCAL VOC label map.
pub fn read_pascal_label_map<B: Backend + ?Sized>(
    backend: &B,
    precision: Precision,
) -> Result<LabelMap, CallError> {
    read_label_map(backend, LabelMapSource::Pascal, precision)
}

/// Load the COCO label map.
pub fn read_coco_label_map<B: Backend + ?Sized>(
    backend: &B,
    precision: Precision,
) -> Result<LabelMap, CallError> {
    read_label_map(backend, LabelMapSource::Coco, precision)
}
