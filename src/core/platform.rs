//! Platform glue: task spawning and device identification.

use std::future::Future;

/// Spawn a detached future on the current executor.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(fut: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(fut);
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(fut);
}

/// Short platform tag recorded alongside summaries.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_string() -> String {
    std::env::consts::OS.to_string()
}

#[cfg(target_arch = "wasm32")]
pub fn platform_string() -> String {
    "web".to_string()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn user_agent_string() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn user_agent_string() -> Option<String> {
    web_sys::window().and_then(|w| w.navigator().user_agent().ok())
}
