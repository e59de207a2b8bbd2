use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring the page up. None of these are fatal: the caller logs
/// them and the rest of the page keeps working.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("could not observe #{target}: {reason}")]
    Observer { target: &'static str, reason: String },
}

impl PageError {
    pub fn observer(target: &'static str, err: JsValue) -> Self {
        PageError::Observer {
            target,
            reason: describe(&err),
        }
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
