//! Call boundary between typed proxies and an external detection runtime.
//!
//! Everything that crosses the boundary is a [`Value`]; every call is a
//! precision tag, a name and an ordered argument list handed to a [`Backend`].

pub mod backend;
pub mod errors;
pub mod recorder;
pub mod types;

pub use backend::{Backend, invoke};
pub use errors::{CallError, ParsePrecisionError};
pub use recorder::CallRecorder;
pub use types::{Call, Handle, Precision, Value};
