use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    /// Terminal resized. ratatui re-measures on the next draw.
    Resize,
    Tick,
    /// A scheduled confirmation fired. Tagged with the submit generation so
    /// stale deliveries can be ignored.
    ConfirmationDue { generation: u64 },
    /// SIGTERM received, shutdown requested elsewhere, or the input reader
    /// stopped.
    Shutdown,
}

/// Where the reader thread gets terminal events from.
pub trait InputSource: Send + 'static {
    /// Wait up to `timeout` for one event. `Ok(None)` on timeout.
    fn read_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// Reads the process terminal through crossterm.
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn read_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        Self::with_source(CrosstermInput, tick_rate, shutdown)
    }

    pub fn with_source<S: InputSource>(
        source: S,
        tick_rate: Duration,
        shutdown: ShutdownHandle,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        let spawned = thread::Builder::new()
            .name("input-reader".to_string())
            .spawn(move || {
                read_loop(source, tick_rate, &shutdown, &event_tx);
                // Whatever stopped the reader, the UI can no longer receive
                // keys and must not wait on them.
                let _ = event_tx.send(AppEvent::Shutdown);
            });
        if let Err(err) = spawned {
            tracing::error!(error = %err, "failed to spawn input reader");
            let _ = tx.send(AppEvent::Shutdown);
        }

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

fn read_loop<S: InputSource>(
    mut source: S,
    tick_rate: Duration,
    shutdown: &ShutdownHandle,
    event_tx: &Sender<AppEvent>,
) {
    let mut last_tick = Instant::now();
    loop {
        if shutdown.is_shutting_down() {
            break;
        }

        // Short poll so the shutdown flag is seen promptly.
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        match source.read_event(timeout) {
            Ok(Some(Event::Key(key))) => {
                let _ = event_tx.send(AppEvent::Key(key));
            }
            Ok(Some(Event::Resize(..))) => {
                let _ = event_tx.send(AppEvent::Resize);
            }
            Ok(Some(_)) | Ok(None) => {}
            Err(err) => {
                tracing::error!(error = %err, "terminal input failed");
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
}
