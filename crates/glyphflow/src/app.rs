//! Terminal application: the host loop that drives the scene.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use glyphflow_config::Config;
use glyphflow_core::ColorTheme;
use glyphflow_scene::{Canvas, Driver};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    text::Line,
};
use tracing::info;

/// The main application which holds the scene and the loop state.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Is ticking suspended? The tick counter does not advance while paused.
    paused: bool,
    color_theme: ColorTheme,
    show_help: bool,
    frame_interval: Duration,
    driver: Driver,
    canvas: Canvas,
}

impl App {
    /// Build the scene from `config` and attach it to a fresh canvas.
    pub fn new(config: &Config) -> color_eyre::Result<Self> {
        let mut driver = config.build_scene()?;
        let mut canvas = Canvas::new();
        driver.attach(&mut canvas, config.grid, config.initial_paint);
        canvas.set_style(Style::new().fg(config.theme.color()));

        Ok(Self {
            running: false,
            paused: false,
            color_theme: config.theme,
            show_help: config.show_help,
            frame_interval: config.frame_interval(),
            driver,
            canvas,
        })
    }

    /// Run the application's main loop.
    ///
    /// Each pass cycles the driver, draws, then waits out the rest of the
    /// frame interval while handling input.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        info!(
            elements = self.driver.elements().len(),
            interval_ms = self.interval_ms(),
            "animation started"
        );

        while self.running {
            let deadline = Instant::now() + self.frame_interval;
            self.step();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events(deadline)?;
        }

        info!(tick = self.driver.tick(), "animation stopped");
        Ok(())
    }

    /// Frame interval in whole milliseconds, saturating.
    fn interval_ms(&self) -> u64 {
        u64::try_from(self.frame_interval.as_millis()).unwrap_or(u64::MAX)
    }

    /// Advance the scene by one tick unless paused.
    fn step(&mut self) {
        if !self.paused {
            self.driver.cycle(&mut self.canvas);
        }
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        if !self.show_help {
            frame.render_widget(&self.canvas, frame.area());
            return;
        }

        let color = self.color_theme.color();
        let [scene, help] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        frame.render_widget(&self.canvas, scene);

        let pause_label = if self.paused { " resume  " } else { " pause  " };
        let help_line = Line::from(vec![
            "q".bold().fg(color),
            " quit  ".dark_gray(),
            "space".bold().fg(color),
            pause_label.dark_gray(),
            "c".bold().fg(color),
            " cycle color".dark_gray(),
        ])
        .centered();
        frame.render_widget(help_line, help);
    }

    /// Reads crossterm events until `deadline`, so input never shortens or
    /// stretches a frame.
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        while self.running {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if timeout.is_zero() || !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char(' ')) => self.toggle_pause(),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            _ => {}
        }
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        info!(paused = self.paused, tick = self.driver.tick(), "toggled pause");
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.color_theme = self.color_theme.next();
        self.canvas.set_style(Style::new().fg(self.color_theme.color()));
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
