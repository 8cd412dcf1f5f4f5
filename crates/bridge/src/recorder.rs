use crate::backend::Backend;
use crate::errors::CallError;
use crate::types::{Call, Handle, Precision, Value};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Backend that intercepts calls instead of executing them.
///
/// Every call is appended to a log exactly as received. The reply comes from
/// a script registered per call name; unscripted calls get a fresh handle,
/// which is what a constructor on the real runtime would return.
#[derive(Debug, Default)]
pub struct CallRecorder {
    state: Mutex<RecorderState>,
}

#[derive(Debug, Default)]
struct RecorderState {
    calls: Vec<Call>,
    replies: HashMap<String, Result<Value, CallError>>,
    last_handle: u64,
}

impl CallRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every future `name` call with `value`.
    pub fn reply_with(&self, name: impl Into<String>, value: Value) -> &Self {
        self.lock().replies.insert(name.into(), Ok(value));
        self
    }

    /// Fail every future `name` call with `error`.
    pub fn fail_with(&self, name: impl Into<String>, error: CallError) -> &Self {
        self.lock().replies.insert(name.into(), Err(error));
        self
    }

    /// Snapshot of the calls seen so far, oldest first.
    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub fn last_call(&self) -> Option<Call> {
        self.lock().calls.last().cloned()
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    /// Forget recorded calls. Scripted replies are kept.
    pub fn clear(&self) {
        self.lock().calls.clear();
    }

    fn lock(&self) -> MutexGuard<'_, RecorderState> {
        // Log stays readable after a panicking caller
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Backend for CallRecorder {
    fn call(&self, precision: Precision, name: &str, args: Vec<Value>) -> Result<Value, CallError> {
        let mut state = self.lock();
        state.calls.push(Call::new(precision, name, args));

        if let Some(reply) = state.replies.get(name) {
            return reply.clone();
        }

        state.last_handle += 1;
        Ok(Value::Handle(Handle::from_raw(state.last_handle)))
    }
}
