use std::io;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::catalog::Catalog;
use crate::clipboard::ClipboardHandler;
use crate::config::Config;
use crate::submission::{QuoteSink, SubmissionDispatcher};
use crate::ui::app::{App, NoticeKind};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run<S: QuoteSink>(
    config: &Config,
    catalog: Catalog,
    sink: S,
    runtime: &Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new(config, catalog);
    let events = EventHandler::new(tick_rate);

    let delivery_tx = events.sender();
    let quotes = SubmissionDispatcher::spawn(runtime, sink, move |report| {
        let _ = delivery_tx.send(AppEvent::Delivery(report));
    });
    app.attach_submission(quotes);

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    let mut clipboard = ClipboardHandler::new();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if let InputAction::CopyToClipboard(text) = handle_key(&mut app, key) {
                    copy_link(&mut app, &mut clipboard, &text);
                }
            }
            Ok(AppEvent::Mouse(mouse, at)) => handle_mouse(&mut app, mouse, at),
            Ok(AppEvent::Paste(text)) => app.paste_text(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Delivery(report)) => app.on_delivery(report),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

fn copy_link(app: &mut App, clipboard: &mut ClipboardHandler, text: &str) {
    match clipboard.set_text(text) {
        Ok(()) => app.notify(format!("Enlace copiado: {}", text), NoticeKind::Info),
        Err(err) => {
            tracing::warn!("Clipboard copy failed: {}", err);
            app.notify(format!("Abre este enlace: {}", text), NoticeKind::Error);
        }
    }
}
