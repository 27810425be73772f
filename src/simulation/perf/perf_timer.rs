/// Wall-clock stopwatch behind the `*_ms` fields of [`super::PerfStats`].
///
/// `Engine::step` starts one per phase (tree rebuild and clip, collisions,
/// forces and integration) and one for the whole step, only while perf
/// metrics are enabled.
///
/// `std::time::Instant` panics on `wasm32-unknown-unknown`, so the browser
/// build reads `Date.now()` instead; that clock can step backwards, hence
/// the clamp.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfTimer { start_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer { start: std::time::Instant::now() }
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            (js_sys::Date::now() - self.start_ms).max(0.0)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_monotonic_and_in_milliseconds() {
        let timer = PerfTimer::start();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let first = timer.elapsed_ms();
        assert!(first >= 2.0, "slept 2ms, measured {}", first);
        assert!(timer.elapsed_ms() >= first);
    }
}
