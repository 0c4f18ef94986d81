use crate::ui::app::App;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use std::io;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;

/// Redraw cadence; also drives the launch animation.
pub const TICK_RATE: Duration = Duration::from_millis(33);

/// Run the terminal UI until the user quits.
///
/// Terminal input, effect output and animation ticks are multiplexed on the
/// calling task; the store is only ever touched from here.
pub async fn run(mut app: App) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventStream::new();
    let mut ticks = tokio::time::interval(TICK_RATE);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

    app.load();
    tracing::info!("UI started");

    loop {
        let now = Instant::now();
        app.on_tick(now);
        let mut measured = None;
        terminal.draw(|frame| measured = Some(draw(frame, &app, now)))?;
        if let Some(measured) = measured {
            app.record(measured);
        }
        if app.should_quit() {
            break;
        }

        let effects_running = app.store_mut().running_effects().next().is_some();
        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => app.on_key(key),
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    tracing::error!(error = %err, "Terminal input failed");
                    break;
                }
                None => break,
            },
            action = app.store_mut().next(), if effects_running => {
                if let Some(action) = action {
                    tracing::trace!(action = ?action, "Effect output applied");
                }
            }
            _ = ticks.tick() => {}
        }
    }

    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}
