//! High-resolution timing for task engines.
//!
//! All scheduling decisions compare stamps from the same monotonic clock;
//! remaining time is always recomputed from `now()` rather than accumulated
//! tick counts, so timer drift does not compound. On native targets the
//! clock is `tokio::time::Instant`, which means tests running under a
//! paused tokio clock see fully deterministic stamps.

/// Milliseconds since the process clock origin.
pub type InstantStamp = f64;

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use once_cell::sync::Lazy;
    use std::time::Duration;

    static ORIGIN: Lazy<tokio::time::Instant> = Lazy::new(tokio::time::Instant::now);

    pub fn now() -> super::InstantStamp {
        ORIGIN.elapsed().as_secs_f64() * 1000.0
    }

    pub async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

#[cfg(target_arch = "wasm32")]
mod imp {
    pub fn now() -> super::InstantStamp {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    pub async fn sleep_ms(ms: u64) {
        gloo_timers::future::TimeoutFuture::new(ms as u32).await;
    }
}

/// Current monotonic stamp in milliseconds.
pub fn now() -> InstantStamp {
    imp::now()
}

/// Cooperative sleep used by every scheduled callback.
pub async fn sleep_ms(ms: u64) {
    imp::sleep_ms(ms).await
}
