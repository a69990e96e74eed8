//! imgcap WASM - WebAssembly bindings for imgcap
//!
//! This crate exposes the imgcap-core size-targeting compressor to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `compress` - The `compress` entry point
//! - `types` - Options parsing and the result wrapper
//! - `logger` - Console backend for the `log` facade
//!
//! # Usage
//!
//! ```typescript
//! import init, { compress, supported_types } from '@imgcap/wasm';
//!
//! await init();
//!
//! const result = compress(bytes, 'image/jpeg', { targetSize: 100_000 });
//! console.log(`${result.size} bytes, ${result.outcome} after ${result.iterations} tries`);
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod logger;
mod types;

pub use compress::compress;
pub use types::{CompressOptions, JsCompressionResult};

/// Initialize the WASM module (called automatically on load)
///
/// Routes panics to `console.error` with their message instead of a bare
/// `unreachable` trap, then installs the console logger.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logger::install(log::LevelFilter::Info);
}

/// Change the console log level (`"off"`, `"error"`, ..., `"trace"`).
///
/// Returns `false` for an unknown level name.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    match logger::parse_level(level) {
        Some(filter) => {
            logger::install(filter);
            true
        }
        None => false,
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// MIME types accepted by `compress`, as an array of strings.
#[wasm_bindgen]
pub fn supported_types() -> js_sys::Array {
    imgcap_core::supported_mime_types()
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}
