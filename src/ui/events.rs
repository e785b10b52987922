use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::summarize::WorkerEvent;

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
    /// Progress or outcome from a summarize worker.
    Worker(WorkerEvent),
}

impl From<WorkerEvent> for AppEvent {
    fn from(event: WorkerEvent) -> Self {
        AppEvent::Worker(event)
    }
}

/// Single channel the UI loop drains: terminal input, ticks and worker
/// events all arrive here, in order.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    /// Channel only, with no input thread. Used by tests and by callers
    /// that feed events themselves.
    pub fn detached() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            rx,
            tx,
            stop: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Channel plus a thread that reads terminal input and emits ticks.
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        thread::Builder::new()
            .name("input-reader".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                while !thread_stop.load(Ordering::Relaxed) {
                    // Short poll timeout so the stop flag is checked frequently
                    let timeout = tick_rate
                        .saturating_sub(last_tick.elapsed())
                        .min(Duration::from_millis(50));

                    match event::poll(timeout) {
                        Ok(true) => {
                            let forwarded = match event::read() {
                                Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                                Ok(Event::Mouse(mouse)) => Some(AppEvent::Mouse(mouse)),
                                Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                                Ok(_) => None,
                                Err(err) => {
                                    tracing::error!(error = %err, "Terminal read failed");
                                    break;
                                }
                            };
                            if let Some(app_event) = forwarded {
                                if event_tx.send(app_event).is_err() {
                                    break;
                                }
                            }
                        }
                        Ok(false) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "Terminal poll failed");
                            break;
                        }
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if event_tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
            })?;

        Ok(Self { rx, tx, stop })
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
