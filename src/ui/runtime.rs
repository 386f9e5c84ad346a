use crate::config::Config;
use crate::scheduler::TokioScheduler;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;

/// Run the signup form until the user quits or SIGTERM arrives.
///
/// The UI loop owns all state on this thread. The tokio runtime only hosts
/// confirmation timers, which report back through the event channel.
pub fn run(config: &Config) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("signup-timer")
        .enable_time()
        .build()?;

    let shutdown = ShutdownHandle::new();
    shutdown.install_signal_handlers()?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let due_tx = events.sender();
    let scheduler = TokioScheduler::new(runtime.handle().clone(), move |generation| {
        let _ = due_tx.send(AppEvent::ConfirmationDue { generation });
    });
    let mut app = App::from_config(config, Box::new(scheduler));

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize | AppEvent::Tick) => {}
            Ok(AppEvent::ConfirmationDue { generation }) => app.on_confirmation_due(generation),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {
                if shutdown.is_shutting_down() {
                    app.request_quit();
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    app.teardown();
    drop(app);
    shutdown.signal();
    drop(guard);
    runtime.shutdown_background();
    Ok(())
}
