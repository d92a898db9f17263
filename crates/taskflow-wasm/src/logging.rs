//! Console logging for browser builds

use wasm_bindgen::prelude::*;

// Console bindings
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}

/// Log an info message to the browser console
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::logging::log(&format_args!($($t)*).to_string())
    }
}

/// Log a warning message to the browser console
#[macro_export]
macro_rules! console_warn {
    ($($t:tt)*) => {
        $crate::logging::log(&format!("WARN: {}", format_args!($($t)*)))
    }
}

/// Log an error message to the browser console
#[macro_export]
macro_rules! console_error {
    ($($t:tt)*) => {
        $crate::logging::log(&format!("ERROR: {}", format_args!($($t)*)))
    }
}
