// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Quiet-period debouncing for bursts of input.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Hands the latest value to a handler once no new value has arrived for a
/// quiet period.
///
/// Every [`push`](Self::push) restarts the timer. Values superseded before the
/// timer fires are discarded, never queued. A value equal to the last one
/// delivered is not delivered again.
///
/// [`reset`](Self::reset) drops a value still waiting for its quiet period.
/// Dropping the debouncer or calling [`cancel`](Self::cancel) stops the timer
/// task; a value still waiting is never delivered.
#[derive(Debug)]
pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<Signal<T>>,
    task: JoinHandle<()>,
    quiet: Duration,
}

#[derive(Debug)]
enum Signal<T> {
    Value(T),
    Reset,
}

impl<T> Debouncer<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    /// Starts a debouncer on the given runtime.
    pub fn spawn_on<F>(handle: &Handle, quiet: Duration, mut handler: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<Signal<T>>();
        let task = handle.spawn(async move {
            let mut pending: Option<T> = None;
            let mut delivered: Option<T> = None;
            let sleep = tokio::time::sleep(quiet);
            tokio::pin!(sleep);

            loop {
                tokio::select! {
                    next = rx.recv() => match next {
                        Some(Signal::Value(value)) => {
                            pending = Some(value);
                            sleep.as_mut().reset(Instant::now() + quiet);
                        }
                        Some(Signal::Reset) => {
                            pending = None;
                            delivered = None;
                        }
                        None => break,
                    },
                    () = &mut sleep, if pending.is_some() => {
                        if let Some(value) = pending.take() {
                            if delivered.as_ref() == Some(&value) {
                                continue;
                            }
                            tracing::debug!(?quiet, "debounce period elapsed");
                            delivered = Some(value.clone());
                            handler(value);
                        }
                    }
                }
            }
        });

        Self { tx, task, quiet }
    }

    /// Offers a new value, restarting the quiet period.
    ///
    /// Returns `false` once the debouncer has been cancelled.
    pub fn push(&self, value: T) -> bool {
        !self.task.is_finished() && self.tx.send(Signal::Value(value)).is_ok()
    }

    /// Drops the value waiting for its quiet period, if any.
    ///
    /// The next value pushed is delivered even if it equals the last one.
    pub fn reset(&self) {
        if !self.task.is_finished() {
            let _ = self.tx.send(Signal::Reset);
        }
    }

    /// Stops the timer task. Pending values are dropped.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Returns the quiet period.
    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn recording(quiet: u64) -> (Debouncer<String>, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let debouncer = Debouncer::spawn_on(
            &Handle::current(),
            Duration::from_millis(quiet),
            move |value: String| sink.lock().push(value),
        );
        (debouncer, seen)
    }

    #[tokio::test(start_paused = true)]
    async fn test_latest_value_wins() {
        let (debouncer, seen) = recording(300);

        assert!(debouncer.push("1".into()));
        assert!(debouncer.push("12".into()));
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(debouncer.push("123".into()));

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert!(seen.lock().is_empty());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(*seen.lock(), vec!["123".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_value_is_not_redelivered() {
        let (debouncer, seen) = recording(300);

        debouncer.push("40".into());
        tokio::time::sleep(Duration::from_millis(400)).await;
        debouncer.push("40".into());
        tokio::time::sleep(Duration::from_millis(400)).await;
        debouncer.push("41".into());
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(*seen.lock(), vec!["40".to_string(), "41".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_drops_pending_value() {
        let (debouncer, seen) = recording(300);

        debouncer.push("50".into());
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.reset();
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(seen.lock().is_empty());

        debouncer.push("50".into());
        tokio::time::sleep(Duration::from_millis(400)).await;
        debouncer.reset();
        debouncer.push("50".into());
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(*seen.lock(), vec!["50".to_string(), "50".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_value() {
        let (debouncer, seen) = recording(300);

        debouncer.push("7".into());
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.cancel();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert!(seen.lock().is_empty());
        assert!(!debouncer.push("8".into()));
    }
}
