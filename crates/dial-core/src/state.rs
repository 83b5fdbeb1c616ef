//! Application state record and its update step.

use crate::geometry::{Point, Size};

/// Direction of a ball move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// A discrete input the application reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePlayback,
    Stop,
    NextTrack,
    PreviousTrack,
    Move(Direction),
    Resize(Size),
    Quit,
}

/// Why a track is being started. Used for status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCue {
    Start,
    Next,
    Previous,
}

/// Work for the audio backend produced by an update step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioRequest {
    Play { track: usize, cue: PlayCue },
    Pause,
    Resume,
    Stop,
}

/// The movable ball overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    /// Center in canvas pixels.
    pub center: Point,
    /// Radius in canvas pixels.
    pub radius: i32,
    /// Distance covered by a single move.
    pub step: i32,
}

impl Ball {
    pub fn new(center: Point, radius: i32, step: i32) -> Self {
        Self {
            center,
            radius,
            step,
        }
    }

    /// Move one step in `direction`, staying clear of the surface edges.
    ///
    /// A move is refused when it would bring the center closer than
    /// `radius + step` to the edge it is heading toward.
    pub fn nudge(&mut self, direction: Direction, surface: Size) {
        let (width, height) = (surface.width as i32, surface.height as i32);
        let back = self.step.saturating_neg();
        match direction {
            Direction::Left => self.center.x = self.step_axis(self.center.x, back, width),
            Direction::Right => self.center.x = self.step_axis(self.center.x, self.step, width),
            Direction::Up => self.center.y = self.step_axis(self.center.y, back, height),
            Direction::Down => self.center.y = self.step_axis(self.center.y, self.step, height),
        }
    }

    fn step_axis(&self, position: i32, delta: i32, extent: i32) -> i32 {
        let margin = self.radius.saturating_add(self.step);
        let next = position.saturating_add(delta);
        let allowed = if delta > 0 {
            next <= extent.saturating_sub(margin)
        } else {
            next >= margin
        };
        if allowed { next } else { position }
    }
}

/// Audio playback bookkeeping. The backend itself lives outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Playback {
    /// Index into the playlist.
    pub track: usize,
    /// Number of tracks in the playlist.
    pub track_count: usize,
    /// Has a track been handed to the backend?
    pub loaded: bool,
    /// Is the loaded track paused?
    pub paused: bool,
}

impl Playback {
    pub fn new(track_count: usize) -> Self {
        Self {
            track_count,
            ..Self::default()
        }
    }

    /// Record that the backend could not start the current track.
    pub fn play_failed(&mut self) {
        self.loaded = false;
        self.paused = false;
    }

    fn toggle(&mut self) -> Option<AudioRequest> {
        if !self.loaded {
            if self.track_count == 0 {
                return None;
            }
            return Some(self.start(PlayCue::Start));
        }
        if self.paused {
            self.paused = false;
            Some(AudioRequest::Resume)
        } else {
            self.paused = true;
            Some(AudioRequest::Pause)
        }
    }

    fn stop(&mut self) -> Option<AudioRequest> {
        self.loaded = false;
        self.paused = false;
        Some(AudioRequest::Stop)
    }

    fn skip(&mut self, cue: PlayCue) -> Option<AudioRequest> {
        if self.track_count == 0 {
            return None;
        }
        self.track = match cue {
            PlayCue::Previous => (self.track + self.track_count - 1) % self.track_count,
            _ => (self.track + 1) % self.track_count,
        };
        Some(self.start(cue))
    }

    fn start(&mut self, cue: PlayCue) -> AudioRequest {
        self.loaded = true;
        self.paused = false;
        AudioRequest::Play {
            track: self.track,
            cue,
        }
    }
}

/// Everything the render loop mutates between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    /// Current canvas size.
    pub surface: Size,
    /// Clock center.
    pub pivot: Point,
    pub ball: Ball,
    pub playback: Playback,
    /// Is the application running?
    pub running: bool,
}

impl AppState {
    /// Lay out a fresh state for a canvas of `surface`.
    pub fn new(surface: Size, ball_radius: i32, ball_step: i32, track_count: usize) -> Self {
        Self {
            surface,
            pivot: surface.upper_anchor(),
            ball: Ball::new(surface.lower_anchor(), ball_radius, ball_step),
            playback: Playback::new(track_count),
            running: true,
        }
    }

    /// Apply one command, returning any work for the audio backend.
    pub fn apply(&mut self, command: Command) -> Option<AudioRequest> {
        match command {
            Command::TogglePlayback => self.playback.toggle(),
            Command::Stop => self.playback.stop(),
            Command::NextTrack => self.playback.skip(PlayCue::Next),
            Command::PreviousTrack => self.playback.skip(PlayCue::Previous),
            Command::Move(direction) => {
                self.ball.nudge(direction, self.surface);
                None
            }
            Command::Resize(surface) => {
                self.resize(surface);
                None
            }
            Command::Quit => {
                self.running = false;
                None
            }
        }
    }

    /// Take a new canvas size and recenter the clock and the ball.
    pub fn resize(&mut self, surface: Size) {
        self.surface = surface;
        self.pivot = surface.upper_anchor();
        self.ball.center = surface.lower_anchor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_state() -> AppState {
        AppState::new(Size::new(800, 600), 25, 20, 3)
    }

    #[test]
    fn test_initial_layout() {
        let state = demo_state();
        assert_eq!(state.pivot, Point::new(400, 150));
        assert_eq!(state.ball.center, Point::new(400, 450));
        assert!(state.running);
        assert_eq!(state.playback, Playback::new(3));
    }

    #[test]
    fn test_move_right_stops_before_edge() {
        let mut state = demo_state();
        for _ in 0..100 {
            state.apply(Command::Move(Direction::Right));
            assert!(state.ball.center.x <= 755);
        }
        assert_eq!(state.ball.center.x, 740);
        assert_eq!(state.ball.center.y, 450);
    }

    #[test]
    fn test_move_left_stops_before_edge() {
        let mut state = demo_state();
        for _ in 0..100 {
            state.apply(Command::Move(Direction::Left));
            assert!(state.ball.center.x >= 45);
        }
        assert_eq!(state.ball.center.x, 60);
    }

    #[test]
    fn test_move_vertical() {
        let mut state = demo_state();
        state.apply(Command::Move(Direction::Up));
        assert_eq!(state.ball.center, Point::new(400, 430));
        for _ in 0..100 {
            state.apply(Command::Move(Direction::Down));
        }
        assert_eq!(state.ball.center.y, 550);
    }

    #[test]
    fn test_resize_recenters() {
        let mut state = demo_state();
        state.apply(Command::Move(Direction::Right));
        let request = state.apply(Command::Resize(Size::new(1000, 700)));
        assert_eq!(request, None);
        assert_eq!(state.surface, Size::new(1000, 700));
        assert_eq!(state.pivot, Point::new(500, 175));
        assert_eq!(state.ball.center, Point::new(500, 525));
    }

    #[test]
    fn test_toggle_cycle() {
        let mut state = demo_state();
        assert_eq!(
            state.apply(Command::TogglePlayback),
            Some(AudioRequest::Play {
                track: 0,
                cue: PlayCue::Start
            })
        );
        assert!(state.playback.loaded);

        assert_eq!(state.apply(Command::TogglePlayback), Some(AudioRequest::Pause));
        assert!(state.playback.paused);

        assert_eq!(state.apply(Command::TogglePlayback), Some(AudioRequest::Resume));
        assert!(!state.playback.paused);
    }

    #[test]
    fn test_stop_unloads() {
        let mut state = demo_state();
        state.apply(Command::TogglePlayback);
        state.apply(Command::TogglePlayback);
        assert_eq!(state.apply(Command::Stop), Some(AudioRequest::Stop));
        assert!(!state.playback.loaded);
        assert!(!state.playback.paused);

        // Toggling after a stop starts the same track again.
        assert_eq!(
            state.apply(Command::TogglePlayback),
            Some(AudioRequest::Play {
                track: 0,
                cue: PlayCue::Start
            })
        );
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut state = demo_state();
        assert_eq!(
            state.apply(Command::PreviousTrack),
            Some(AudioRequest::Play {
                track: 2,
                cue: PlayCue::Previous
            })
        );
        state.apply(Command::NextTrack);
        assert_eq!(state.playback.track, 0);
        state.apply(Command::NextTrack);
        state.apply(Command::NextTrack);
        state.apply(Command::NextTrack);
        assert_eq!(state.playback.track, 0);
        assert!(state.playback.loaded);
    }

    #[test]
    fn test_skip_clears_pause() {
        let mut state = demo_state();
        state.apply(Command::TogglePlayback);
        state.apply(Command::TogglePlayback);
        assert!(state.playback.paused);
        state.apply(Command::NextTrack);
        assert!(!state.playback.paused);
        assert_eq!(state.playback.track, 1);
    }

    #[test]
    fn test_play_failed_keeps_track() {
        let mut state = demo_state();
        state.apply(Command::NextTrack);
        state.playback.play_failed();
        assert_eq!(state.playback.track, 1);
        assert!(!state.playback.loaded);
    }

    #[test]
    fn test_empty_playlist_ignores_track_commands() {
        let mut state = AppState::new(Size::new(800, 600), 25, 20, 0);
        assert_eq!(state.apply(Command::TogglePlayback), None);
        assert_eq!(state.apply(Command::NextTrack), None);
        assert_eq!(state.apply(Command::PreviousTrack), None);
        assert!(!state.playback.loaded);
    }

    #[test]
    fn test_oversized_ball_stays_put() {
        let mut state = AppState::new(Size::new(80, 40), i32::MAX, 2, 3);
        let start = state.ball.center;
        for direction in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            state.apply(Command::Move(direction));
        }
        assert_eq!(state.ball.center, start);

        let mut state = AppState::new(Size::new(80, 40), 2, i32::MAX, 3);
        state.apply(Command::Move(Direction::Right));
        state.apply(Command::Move(Direction::Left));
        assert_eq!(state.ball.center, start);
    }

    #[test]
    fn test_quit() {
        let mut state = demo_state();
        state.apply(Command::Quit);
        assert!(!state.running);
    }
}
