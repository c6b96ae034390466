//! Trailing-edge debounce for the search box.
//!
//! Every keystroke calls [`Debouncer::settle`] from its own task. Each call
//! takes a new generation number and sleeps for the quiet window; only the
//! call whose generation is still the latest when it wakes returns `true`.
//! Earlier keystrokes are thereby cancelled by later ones.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
    window: Duration,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            window,
        }
    }

    /// Wait out the quiet window. Returns `false` if another call started meanwhile.
    pub async fn settle(&self) -> bool {
        let mine = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        sleep(self.window).await;
        self.generation.load(Ordering::SeqCst) == mine
    }
}

pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
