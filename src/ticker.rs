//! Scoped recurring timer.
//!
//! A [`Ticker`] calls its callback on a fixed interval from a dedicated
//! thread until it is cancelled or dropped. Cancellation disconnects the
//! control channel and joins the thread, so once `cancel` (or `drop`)
//! returns the callback will never run again. This is the teardown contract
//! every carousel timer must honor: no state mutation after disposal.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct Ticker {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start calling `on_tick` every `interval`.
    ///
    /// The first call happens one full interval after start.
    pub fn start<F>(interval: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            loop {
                match rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => on_tick(),
                    // Explicit stop or the ticker was dropped
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });
        Self {
            stop: Some(tx),
            handle: Some(handle),
        }
    }

    /// Stop the timer and wait for any in-flight callback to finish.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn fires_repeatedly() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let ticker = Ticker::start(Duration::from_millis(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        thread::sleep(Duration::from_millis(120));
        ticker.cancel();
        assert!(count.load(Ordering::SeqCst) >= 2);
    }

    #[test]
    fn no_ticks_after_cancel() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let ticker = Ticker::start(Duration::from_millis(5), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        thread::sleep(Duration::from_millis(30));
        ticker.cancel();

        let after_cancel = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(40));
        assert_eq!(count.load(Ordering::SeqCst), after_cancel);
    }

    #[test]
    fn drop_cancels() {
        let count = Arc::new(AtomicUsize::new(0));
        {
            let counter = Arc::clone(&count);
            let _ticker = Ticker::start(Duration::from_millis(5), move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            thread::sleep(Duration::from_millis(20));
        }
        let after_drop = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(40));
        assert_eq!(count.load(Ordering::SeqCst), after_drop);
    }

    #[test]
    fn cancel_before_first_tick_never_fires() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let ticker = Ticker::start(Duration::from_secs(60), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        ticker.cancel();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
