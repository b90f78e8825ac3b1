//! Platform abstraction layer
//!
//! Browser-only glue: DOM overlays and page-provided tuning. Native builds
//! have no platform layer and run headless.

#[cfg(target_arch = "wasm32")]
pub mod dom;
