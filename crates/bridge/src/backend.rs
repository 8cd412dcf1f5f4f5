use crate::errors::CallError;
use crate::types::{Precision, Value};
use std::rc::Rc;
use std::sync::Arc;

/// The external runtime that owns every entry point.
///
/// Calls are synchronous: the caller's thread blocks until the backend answers.
pub trait Backend {
    /// Invoke the entry point `name` of the `precision` implementation with `args`.
    fn call(&self, precision: Precision, name: &str, args: Vec<Value>) -> Result<Value, CallError>;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn call(&self, precision: Precision, name: &str, args: Vec<Value>) -> Result<Value, CallError> {
        (**self).call(precision, name, args)
    }
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn call(&self, precision: Precision, name: &str, args: Vec<Value>) -> Result<Value, CallError> {
        (**self).call(precision, name, args)
    }
}

impl<B: Backend + ?Sized> Backend for Rc<B> {
    fn call(&self, precision: Precision, name: &str, args: Vec<Value>) -> Result<Value, CallError> {
        (**self).call(precision, name, args)
    }
}

impl<B: Backend + ?Sized> Backend for Arc<B> {
    fn call(&self, precision: Precision, name: &str, args: Vec<Value>) -> Result<Value, CallError> {
        (**self).call(precision, name, args)
    }
}

/// Dispatch a single call and hand back exactly what the backend returned.
pub fn invoke<B: Backend + ?Sized>(
    backend: &B,
    precision: Precision,
    name: &str,
    args: Vec<Value>,
) -> Result<Value, CallError> {
    tracing::debug!(
        call = name,
        precision = %precision,
        args = args.len(),
        "Dispatching backend call"
    );

    let result = backend.call(precision, name, args);

    match &result {
        Ok(_) => tracing::debug!(call = name, "Backend call returned"),
        Err(e) => tracing::debug!(call = name, error = %e, "Backend call failed"),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Handle;
    use std::sync::Mutex;
    use tracing::Level;
    use tracing_subscriber::layer::{Context, SubscriberExt};

    /// Collects the level of every event it sees.
    #[derive(Clone, Default)]
    struct LevelCapture(Arc<Mutex<Vec<Level>>>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LevelCapture {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            self.0.lock().unwrap().push(*event.metadata().level());
        }
    }

    struct Echo;

    impl Backend for Echo {
        fn call(
            &self,
            precision: Precision,
            name: &str,
            args: Vec<Value>,
        ) -> Result<Value, CallError> {
            let mut out = vec![Value::from(precision.as_str()), Value::from(name)];
            out.extend(args);
            Ok(Value::List(out))
        }
    }

    struct Broken;

    impl Backend for Broken {
        fn call(&self, _: Precision, name: &str, _: Vec<Value>) -> Result<Value, CallError> {
            Err(CallError::UnknownCall(name.to_string()))
        }
    }

    #[test]
    fn test_invoke_forwards_arguments_in_order() {
        let h = Handle::from_raw(9);
        let result = invoke(
            &Echo,
            Precision::Double,
            "createThing",
            vec![h.into(), 0.5.into()],
        )
        .unwrap();

        assert_eq!(
            result,
            Value::List(vec![
                "double".into(),
                "createThing".into(),
                Value::Handle(h),
                Value::Float(0.5),
            ])
        );
    }

    #[test]
    fn test_invoke_returns_backend_error_unchanged() {
        let err = invoke(&Broken, Precision::Float, "readNothing", Vec::new()).unwrap_err();
        assert_eq!(err, CallError::UnknownCall("readNothing".to_string()));
    }

    #[test]
    fn test_smart_pointer_backends() {
        let boxed: Box<dyn Backend> = Box::new(Echo);
        let shared: Arc<dyn Backend> = Arc::new(Echo);
        let local: Rc<Echo> = Rc::new(Echo);

        for backend in [&boxed as &dyn Backend, &shared, &local] {
            let v = invoke(backend, Precision::Float, "x", Vec::new()).unwrap();
            assert_eq!(v, Value::List(vec!["float".into(), "x".into()]));
        }
    }

    #[test]
    fn test_invoke_logs_only_at_debug() {
        let capture = LevelCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());

        tracing::subscriber::with_default(subscriber, || {
            invoke(&Echo, Precision::Float, "createImInfo", Vec::new()).unwrap();
            invoke(&Broken, Precision::Float, "createMissing", Vec::new()).unwrap_err();
        });

        let levels = capture.0.lock().unwrap().clone();
        assert!(
            levels.iter().all(|level| *level == Level::DEBUG),
            "Dispatch must not log above debug, saw {levels:?}"
        );
        if cfg!(debug_assertions) {
            assert_eq!(levels.len(), 4, "One event before and one after each call");
        }
    }
}
