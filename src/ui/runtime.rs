use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::sync::Refetch;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the listing page until the user quits.
pub async fn run(mut app: App) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(TICK_RATE);
    events.forward_navigation(app.sync().navigation_events());
    events.forward_changes(app.query().subscribe(), || AppEvent::DataChanged);
    events.forward_changes(app.sync().subscribe_loading(), || AppEvent::LoadingChanged);

    // First page load is not debounced.
    let query = Arc::clone(app.query());
    tokio::spawn(async move {
        if let Err(err) = query.refetch().await {
            tracing::warn!(kind = err.kind(), "initial fetch failed: {}", err);
        }
    });

    loop {
        let view = app.view();
        terminal.draw(|frame| draw(frame, &app, &view))?;
        if app.should_quit() {
            break;
        }

        match events.next().await {
            Some(AppEvent::Key(key)) => handle_key(&mut app, key),
            Some(AppEvent::Navigation(event)) => app.on_navigation(event),
            Some(
                AppEvent::Resize
                | AppEvent::Tick
                | AppEvent::DataChanged
                | AppEvent::LoadingChanged,
            ) => {}
            None => break,
        }
    }

    drop(guard);
    Ok(())
}
