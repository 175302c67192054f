/// Terminal front end for the rotating wireframe cube
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    terminal::{self, Clear, ClearType},
};
use log::{debug, error, info, warn};
use std::io::{stdout, Write};
use std::time::Instant;
use wirecube_core::{Cube, CubeConfig, Surface};

pub mod canvas;
pub mod error;
pub mod logger;
pub mod scheduler;

pub use canvas::Canvas;
pub use error::{AppError, AppResult};
pub use scheduler::Interval;

/// Main application struct: owns the cube and the canvas it draws into
pub struct TerminalApp {
    config: CubeConfig,
    cube: Cube,
    canvas: Canvas,
    origin: (u16, u16),
    running: bool,
}

impl TerminalApp {
    pub fn new(config: CubeConfig) -> AppResult<Self> {
        let (columns, rows) = terminal::size()?;
        let canvas = Canvas::new(config.canvas_width, config.canvas_height, config.background);
        let origin = canvas_origin((columns, rows), &canvas);
        debug!("terminal {columns}x{rows}, canvas origin {origin:?}");

        Ok(Self {
            cube: Cube::new(&config),
            canvas,
            origin,
            running: true,
            config,
        })
    }

    pub fn run(&mut self) -> AppResult<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        let restored = restore_terminal();
        if let Err(e) = &result {
            error!("animation stopped: {e}");
        }
        result?;
        restored?;
        Ok(())
    }

    fn main_loop(&mut self) -> AppResult<()> {
        // First frame at the starting angles, before any tick.
        self.cube.clear(&mut self.canvas);
        self.cube.render(&mut self.canvas)?;
        self.present()?;

        let mut interval = Interval::new(self.config.tick_interval(), Instant::now());
        info!("ticking every {:?}", interval.period());

        while self.running {
            let timeout = interval.remaining(Instant::now());
            if event::poll(timeout)? {
                self.handle_event(event::read()?)?;
                continue;
            }

            let skipped = interval.advance(Instant::now());
            if skipped > 0 {
                warn!("fell behind, skipped {skipped} ticks");
            }
            self.on_tick()?;
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> AppResult<()> {
        match event {
            Event::Key(key) if is_quit_key(&key) => {
                info!("quit requested");
                self.running = false;
            }
            Event::Resize(columns, rows) => {
                self.origin = canvas_origin((columns, rows), &self.canvas);
                debug!("resized to {columns}x{rows}, canvas origin {:?}", self.origin);
                queue!(stdout(), Clear(ClearType::All))?;
                self.canvas.refresh();
                self.present()?;
            }
            _ => {}
        }
        Ok(())
    }

    fn on_tick(&mut self) -> AppResult<()> {
        self.cube.tick(&mut self.canvas)?;
        self.present()
    }

    /// Write the canvas to the terminal if it changed
    fn present(&mut self) -> AppResult<()> {
        if self.canvas.take_dirty() {
            let mut stdout = stdout();
            self.canvas.draw(&mut stdout, self.origin)?;
            stdout.flush()?;
        }
        Ok(())
    }
}

fn restore_terminal() -> AppResult<()> {
    terminal::disable_raw_mode()?;
    execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}

/// Keys that end the program: q, Esc, Ctrl+C, Ctrl+Q
pub fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') if key.modifiers.is_empty() => true,
        KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('q') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Top-left terminal cell that centres the canvas. Pinned to (0, 0) when the terminal
/// is smaller than the canvas.
pub fn canvas_origin(terminal_size: (u16, u16), canvas: &Canvas) -> (u16, u16) {
    let (columns, rows) = terminal_size;
    let width = u16::try_from(canvas.width()).unwrap_or(u16::MAX);
    let height = u16::try_from(canvas.rows()).unwrap_or(u16::MAX);
    (
        columns.saturating_sub(width) / 2,
        rows.saturating_sub(height) / 2,
    )
}
