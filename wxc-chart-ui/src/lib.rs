//! Shared Dioxus components and Chart.js bridge for WXC chart apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Chart.js via `js_sys::eval()`
//! - `surface`: `JsChartSurface`, the browser implementation of `ChartSurface`
//! - `fetch`: forecast download through `window.fetch`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (date inputs, chart containers, etc.)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
pub mod surface;
