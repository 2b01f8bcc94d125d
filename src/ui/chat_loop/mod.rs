//! Main event loop for the interactive session.
//!
//! Terminal events are read on a background task and mapped to actions. The
//! loop drains the action queue, applies it to the [`App`], runs the returned
//! commands and redraws at most [`MAX_FPS`] times a second.

mod keybindings;
mod lifecycle;
mod turn_timer;

pub use self::keybindings::{actions_for_key, actions_for_mouse};
pub use self::turn_timer::spawn_turn_timer;

use std::{
    error::Error,
    io,
    sync::Arc,
    time::{Duration, Instant},
};

use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::{Rect, Size};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info};

use self::lifecycle::{restore_terminal, setup_terminal, SharedTerminal};
use crate::core::app::{
    apply_actions, App, AppAction, AppActionContext, AppActionDispatcher, AppActionEnvelope,
    AppCommand,
};
use crate::ui::renderer::ui;

const MAX_FPS: u64 = 60;

#[derive(Debug)]
pub enum UiEvent {
    Crossterm(Event),
}

async fn is_exit_requested(app: &Arc<Mutex<App>>) -> bool {
    let app_guard = app.lock().await;
    app_guard.ui.exit_requested
}

async fn current_terminal_size(terminal: &SharedTerminal) -> Size {
    let terminal_guard = terminal.lock().await;
    terminal_guard.size().unwrap_or_default()
}

async fn try_draw_frame(
    app: &Arc<Mutex<App>>,
    terminal: &SharedTerminal,
    request_redraw: &mut bool,
    last_draw: &mut Instant,
    frame_duration: Duration,
) -> io::Result<()> {
    if !*request_redraw {
        return Ok(());
    }

    let now = Instant::now();
    if now.duration_since(*last_draw) < frame_duration {
        return Ok(());
    }

    let app_guard = app.lock().await;
    let mut terminal_guard = terminal.lock().await;
    terminal_guard.draw(|f| ui(f, &app_guard))?;
    *last_draw = now;
    *request_redraw = false;
    Ok(())
}

fn action_context(term_size: Size) -> AppActionContext {
    AppActionContext {
        term_width: term_size.width,
        term_height: term_size.height,
    }
}

/// Maps queued terminal events to actions. Returns whether anything arrived.
async fn process_ui_events(
    app: &Arc<Mutex<App>>,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
    dispatcher: &AppActionDispatcher,
    term_size: Size,
) -> bool {
    let mut events_processed = false;
    let ctx = action_context(term_size);
    let area = Rect::new(0, 0, term_size.width, term_size.height);

    while let Ok(UiEvent::Crossterm(ev)) = event_rx.try_recv() {
        events_processed = true;
        let actions = {
            let app_guard = app.lock().await;
            match ev {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    actions_for_key(&app_guard, key)
                }
                Event::Mouse(mouse) => actions_for_mouse(&app_guard, mouse, area),
                Event::Paste(text) => text
                    .chars()
                    .filter(|ch| !ch.is_control())
                    .map(|ch| AppAction::InsertChar { ch })
                    .collect(),
                _ => Vec::new(),
            }
        };
        dispatcher.dispatch_many(actions, ctx);
    }

    events_processed
}

/// Applies every queued action, then runs the commands they produced.
async fn drain_action_queue(
    app: &Arc<Mutex<App>>,
    dispatcher: &AppActionDispatcher,
    action_rx: &mut mpsc::UnboundedReceiver<AppActionEnvelope>,
    term_size: Size,
) -> bool {
    let mut pending = Vec::new();
    while let Ok(envelope) = action_rx.try_recv() {
        pending.push(envelope);
    }

    if pending.is_empty() {
        return false;
    }

    let mut app_guard = app.lock().await;
    let commands = apply_actions(&mut app_guard, pending);
    drop(app_guard);
    for cmd in commands {
        match cmd {
            AppCommand::ScheduleTurn(turn) => {
                debug!(
                    turn_id = turn.turn_id,
                    delay_ms = turn.delay.as_millis() as u64,
                    "turn timer started"
                );
                spawn_turn_timer(dispatcher.clone(), turn, action_context(term_size));
            }
        }
    }
    true
}

pub async fn run_chat(app: App) -> Result<(), Box<dyn Error>> {
    let app = Arc::new(Mutex::new(app));
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<AppActionEnvelope>();
    let action_dispatcher = AppActionDispatcher::new(action_tx);

    let terminal = setup_terminal()?;
    info!("interactive session started");

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();

    let event_reader_handle = tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => continue,
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    });

    let frame_duration = Duration::from_millis(1000 / MAX_FPS);
    let mut last_draw = Instant::now() - frame_duration;
    let mut request_redraw = true;

    let result: Result<(), Box<dyn Error>> = 'main_loop: loop {
        if is_exit_requested(&app).await {
            break 'main_loop Ok(());
        }

        if let Err(err) = try_draw_frame(
            &app,
            &terminal,
            &mut request_redraw,
            &mut last_draw,
            frame_duration,
        )
        .await
        {
            break 'main_loop Err(err.into());
        }

        let term_size = current_terminal_size(&terminal).await;

        let events_processed =
            process_ui_events(&app, &mut event_rx, &action_dispatcher, term_size).await;

        let actions_applied =
            drain_action_queue(&app, &action_dispatcher, &mut action_rx, term_size).await;

        if events_processed || actions_applied {
            request_redraw = true;
        } else {
            tokio::time::sleep(Duration::from_millis(16)).await;
        }
    };

    event_reader_handle.abort();
    app.lock().await.session.teardown();
    info!("interactive session ended");

    restore_terminal(&terminal).await?;
    result
}
