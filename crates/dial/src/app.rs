use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dial_audio::Jukebox;
use dial_config::Config;
use dial_core::{AppState, ClockTime, Command, Direction, Size};
use dial_render::{Canvas, ClockAssets, compose};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

/// Rows reserved for the status text above the clock.
const STATUS_HEIGHT: u16 = 3;

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Clock, ball and playback state.
    state: AppState,
    /// Decoded face and hand images.
    assets: ClockAssets,
    /// Music playback.
    jukebox: Jukebox,
    /// Frame buffer the clock is composited into.
    canvas: Canvas,
    /// Time budget of one frame.
    frame_interval: Duration,
    /// Last playback message or startup notice.
    status: Option<String>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(
        config: &Config,
        assets: ClockAssets,
        jukebox: Jukebox,
        status: Option<String>,
    ) -> Self {
        let surface = Size::default();
        let track_count = jukebox.playlist().len();
        Self {
            state: AppState::new(surface, config.ball_radius, config.ball_step, track_count),
            assets,
            jukebox,
            canvas: Canvas::new(surface),
            frame_interval: Duration::from_secs(1) / config.frame_rate.max(1),
            status,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.state.resize(surface_for(Rect::new(0, 0, size.width, size.height)));

        while self.state.running {
            let deadline = Instant::now() + self.frame_interval;
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events(deadline)?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let [status_area, clock_area] = split(frame.area());

        let angles = ClockTime::from_timelike(&Local::now()).hand_angles();
        compose(&mut self.canvas, &self.assets, &self.state, angles);
        frame.render_widget(&self.canvas, clock_area);

        let status = Paragraph::new(self.status_lines())
            .style(Style::new().fg(Color::Black).bg(Color::White));
        frame.render_widget(status, status_area);
    }

    fn status_lines(&self) -> Vec<Line<'static>> {
        let playback = &self.state.playback;
        let track = self
            .jukebox
            .playlist()
            .name(playback.track)
            .unwrap_or_else(|| "-".to_string());

        let mut now_playing = vec!["Now Playing: ".into(), track.bold()];
        if playback.paused {
            now_playing.push(" (Paused)".into());
        }
        if let Some(status) = &self.status {
            now_playing.push("  ".into());
            now_playing.push(status.clone().dark_gray());
        }

        vec![
            Line::from(now_playing),
            Line::from(vec![
                "Controls: ".into(),
                "P".bold(),
                "=Play/Pause, ".into(),
                "S".bold(),
                "=Stop, ".into(),
                "N".bold(),
                "=Next, ".into(),
                "B".bold(),
                "=Previous, ".into(),
                "Q".bold(),
                "=Quit".into(),
            ]),
            Line::from(vec!["Ball Controls: ".into(), "Arrow Keys".bold()]),
        ]
    }

    /// Reads the crossterm events until the frame deadline and updates the state of [`App`].
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        while self.state.running {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(command) = command_for(key) {
                        self.dispatch(command);
                    }
                }
                Event::Resize(width, height) => {
                    self.dispatch(Command::Resize(surface_for(Rect::new(0, 0, width, height))));
                }
                _ => {}
            }
            if Instant::now() >= deadline {
                break;
            }
        }
        Ok(())
    }

    /// Apply a command and pass any audio work on to the jukebox.
    fn dispatch(&mut self, command: Command) {
        let Some(request) = self.state.apply(command) else {
            return;
        };
        match self.jukebox.handle(request) {
            Ok(message) => self.status = Some(message),
            Err(err) => {
                self.state.playback.play_failed();
                self.status = Some(err.to_string());
            }
        }
    }
}

/// Map a key press to a command. Unrecognized keys map to nothing.
fn command_for(key: KeyEvent) -> Option<Command> {
    let command = match (key.modifiers, key.code) {
        (_, KeyCode::Esc | KeyCode::Char('q'))
        | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => Command::Quit,
        (_, KeyCode::Char('p' | 'P')) => Command::TogglePlayback,
        (_, KeyCode::Char('s' | 'S')) => Command::Stop,
        (_, KeyCode::Char('n' | 'N')) => Command::NextTrack,
        (_, KeyCode::Char('b' | 'B')) => Command::PreviousTrack,
        (_, KeyCode::Left) => Command::Move(Direction::Left),
        (_, KeyCode::Right) => Command::Move(Direction::Right),
        (_, KeyCode::Up) => Command::Move(Direction::Up),
        (_, KeyCode::Down) => Command::Move(Direction::Down),
        _ => return None,
    };
    Some(command)
}

/// Status rows on top, clock canvas below.
fn split(area: Rect) -> [Rect; 2] {
    Layout::vertical([Constraint::Length(STATUS_HEIGHT), Constraint::Fill(1)]).areas(area)
}

/// Canvas size for a terminal of the given area.
fn surface_for(area: Rect) -> Size {
    let [_, clock_area] = split(area);
    Canvas::size_for(clock_area)
}
