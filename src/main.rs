//! Terminal orrery runner (default binary).
//!
//! Fixed-interval tick loop: clear, draw the scene, serialize, diff-write,
//! then wait for input until the next tick is due.

use std::cell::Cell;
use std::fmt::Write as _;
use std::rc::Rc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_orrery::core::Scene;
use tui_orrery::input::handle_key_event;
use tui_orrery::logging;
use tui_orrery::settings::Settings;
use tui_orrery::term::{Canvas, FrameMonitor, TerminalWriter};
use tui_orrery::types::{Color, CELL_HEIGHT};

fn main() -> Result<()> {
    let settings = Settings::parse();
    if let Some(path) = Settings::log_path_from_env() {
        logging::init(&path)?;
    }

    let mut term = TerminalWriter::new();
    term.enter()?;

    let result = run(&mut term, &settings);

    // Always try to restore terminal state.
    let _ = term.exit();
    match &result {
        Ok(()) => log::info!("render loop stopped"),
        Err(e) => log::error!("render loop failed: {e:#}"),
    }
    result
}

fn run(term: &mut TerminalWriter, settings: &Settings) -> Result<()> {
    let mut canvas = Canvas::from_terminal()?;
    let mut scene = Scene::new(settings.scene_config());
    let mut monitor = FrameMonitor::new();

    // Resizes are applied between ticks, never mid-frame.
    let pending_resize: Rc<Cell<Option<(u16, u16)>>> = Rc::default();
    let pending = Rc::clone(&pending_resize);
    term.on_resize(move |columns, rows| pending.set(Some((columns, rows))));

    let tick = settings.tick_interval();
    let started = Instant::now();
    let mut frame = String::with_capacity(canvas.cells().len() * 20);
    let mut status = String::new();

    log::info!(
        "render loop started: {}x{} px, tick {:?}",
        canvas.width(),
        canvas.height(),
        tick
    );
    term.clear()?;

    loop {
        let tick_start = Instant::now();

        if let Some((columns, rows)) = pending_resize.take() {
            canvas.rebuild_for_terminal(columns, rows)?;
            term.clear()?;
        }

        canvas.clear();
        scene.draw(&mut canvas);
        if scene.hints() {
            status.clear();
            write!(status, "{} fps  x{}", monitor.fps(), scene.speed())?;
            canvas.text(0.0, CELL_HEIGHT as f64, &status, Color::White);
        }

        frame.clear();
        canvas.write_frame(&mut frame, "\n")?;
        term.partial_write(&frame)?;
        monitor.measure(started.elapsed().as_millis() as u64);

        scene.advance();

        // Input until the next tick is due.
        let deadline = tick_start + tick;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = handle_key_event(key) {
                        scene.apply_action(action);
                    }
                }
                Event::Resize(columns, rows) => term.notify_resize(columns, rows),
                _ => {}
            }
            if scene.should_quit() {
                return Ok(());
            }
        }
    }
}
