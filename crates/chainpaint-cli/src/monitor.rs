//! Progress logging and the search time limit.

use std::{
    sync::mpsc::{self, RecvTimeoutError},
    thread,
    time::Duration,
};

use chainpaint_search::{CancelToken, ProgressObserver, SearchProgress};

/// Logs each progress report at `info` level.
#[derive(Debug, Default)]
pub(crate) struct LogProgress;

impl ProgressObserver for LogProgress {
    fn on_progress(&mut self, progress: &SearchProgress) {
        log::info!("{progress}");
    }
}

/// Cancels a search once its time limit passes.
///
/// Dropping the deadline stops the timer thread without cancelling.
#[derive(Debug)]
pub(crate) struct Deadline {
    stop: Option<mpsc::Sender<()>>,
    timer: Option<thread::JoinHandle<()>>,
}

impl Deadline {
    pub(crate) fn start(limit: Duration, cancel: CancelToken) -> Self {
        let (stop, stopped) = mpsc::channel::<()>();
        let timer = thread::spawn(move || {
            if let Err(RecvTimeoutError::Timeout) = stopped.recv_timeout(limit) {
                let secs = limit.as_secs();
                log::warn!("time limit of {secs}s reached, stopping the search");
                cancel.cancel();
            }
        });
        Self {
            stop: Some(stop),
            timer: Some(timer),
        }
    }
}

impl Drop for Deadline {
    fn drop(&mut self) {
        // disconnects the channel and wakes the timer
        drop(self.stop.take());
        if let Some(timer) = self.timer.take()
            && timer.join().is_err()
        {
            log::error!("deadline timer panicked");
        }
    }
}
