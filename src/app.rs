//! Screen state machine and frame loop
//!
//! Drives the sim at a fixed tick rate through three screens:
//! Start -> Playing -> GameOver -> (Playing on replay | Terminated).
//! Rendering, input, and audio are injected capabilities; the app never
//! touches a platform API directly. Each screen runs its own bounded
//! per-tick polling loop - nothing here blocks waiting for an event.

use std::thread;
use std::time::Duration;

use glam::Vec2;

use crate::assets::{ImageHandle, SpriteSet};
use crate::audio::{AudioSink, SoundEffect};
use crate::consts::*;
use crate::settings::Variant;
use crate::sim::{Field, GamePhase, GameState, Rect, TickInput, tick};
use crate::tick_interval;

/// Key classification; the app only ever distinguishes escape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Discrete input events, polled fresh every tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window close requested
    Quit,
    KeyDown(Key),
    PointerUp,
    PointerMoved(Vec2),
}

/// Per-tick event polling. A poll that produces nothing (including on a
/// transient platform hiccup) simply means "no events this tick".
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Abstract 2D draw target with fixed logical dimensions. One `present`
/// per frame.
pub trait Surface {
    fn clear(&mut self);
    fn draw_image(&mut self, image: ImageHandle, rect: Rect);
    fn draw_text(&mut self, text: &str, pos: Vec2);
    fn present(&mut self);
}

/// Why the app stopped. `QuitKey` (escape) is reported separately from a
/// window close so the outer driver can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    QuitKey,
    WindowClosed,
}

/// How a round of play ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Ball left the bottom edge; go to the game-over screen
    Lost,
    /// Quit mid-round, skipping the game-over screen
    Terminated(Termination),
}

/// Result of a menu screen (start or game over)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenOutcome {
    Proceed,
    Terminated(Termination),
}

/// Whether a blinking element is visible on the given tick
#[inline]
fn blink_on(ticks: u64, period_ticks: u64) -> bool {
    (ticks / period_ticks.max(1)) % 2 == 0
}

/// The game application: injected capabilities plus loop timing
pub struct App<S, I, A> {
    pub surface: S,
    pub input: I,
    pub audio: A,
    pub sprites: SpriteSet,
    tick_len: Duration,
    blink_period: u64,
    screen: Vec2,
}

impl<S: Surface, I: InputSource, A: AudioSink> App<S, I, A> {
    pub fn new(surface: S, input: I, audio: A, sprites: SpriteSet, variant: Variant) -> Self {
        let tick_len = tick_interval(variant.fps());
        let blink_period = BLINK_MS / tick_len.as_millis().max(1) as u64;
        Self {
            surface,
            input,
            audio,
            sprites,
            tick_len,
            blink_period,
            screen: Vec2::new(SCREEN_WIDTH, variant.screen_height()),
        }
    }

    /// Drop the inter-tick sleep (tests, headless runs)
    pub fn without_sleep(mut self) -> Self {
        self.tick_len = Duration::ZERO;
        self
    }

    /// Run the whole screen flow. Returns only from the Terminated state;
    /// replays keep the level unchanged.
    pub fn run(&mut self, level: u32) -> Termination {
        if let ScreenOutcome::Terminated(t) = self.start_screen() {
            return t;
        }

        loop {
            let mut state = GameState::new_round(level, self.screen.y);
            log::info!("round start: level {level}");

            match self.play_round(&mut state) {
                RoundOutcome::Lost => {
                    log::info!("round over: score {}", state.score);
                    if let ScreenOutcome::Terminated(t) = self.game_over_screen(&state) {
                        return t;
                    }
                }
                RoundOutcome::Terminated(t) => {
                    log::info!("terminated mid-round: {t:?}");
                    return t;
                }
            }
        }
    }

    /// Start screen: showcase brick layout and a blinking title. Any
    /// pointer release or non-escape key begins play.
    pub fn start_screen(&mut self) -> ScreenOutcome {
        let backdrop = Field::showcase();
        let mut ticks = 0u64;

        loop {
            if let Some(outcome) = self.menu_events() {
                return outcome;
            }

            self.surface.clear();
            self.draw_field(&backdrop);
            if blink_on(ticks, self.blink_period) {
                self.surface.draw_text(
                    "Break the Ceiling",
                    Vec2::new(self.screen.x / 2.0, self.screen.y / 2.0),
                );
                self.surface.draw_text(
                    "Touch here to start",
                    Vec2::new(self.screen.x / 2.0, self.screen.y - 100.0),
                );
            }
            self.surface.present();

            ticks += 1;
            thread::sleep(self.tick_len);
        }
    }

    /// One round of play at the fixed tick rate. The quit/escape check runs
    /// before the sim advances, so a cancelled tick is never simulated or
    /// rendered.
    pub fn play_round(&mut self, state: &mut GameState) -> RoundOutcome {
        let mut pointer_x = None;

        loop {
            for event in self.input.poll() {
                match event {
                    InputEvent::Quit => {
                        return RoundOutcome::Terminated(Termination::WindowClosed);
                    }
                    InputEvent::KeyDown(Key::Escape) => {
                        return RoundOutcome::Terminated(Termination::QuitKey);
                    }
                    InputEvent::PointerMoved(pos) => pointer_x = Some(pos.x),
                    InputEvent::KeyDown(Key::Other) | InputEvent::PointerUp => {}
                }
            }

            let events = tick(
                state,
                &TickInput {
                    pointer_x: pointer_x.take(),
                },
            );
            for event in events {
                if let Some(effect) = SoundEffect::for_event(event) {
                    self.audio.play(effect);
                }
            }

            if state.phase == GamePhase::GameOver {
                // Round lost; the frame is not rendered
                return RoundOutcome::Lost;
            }

            self.surface.clear();
            self.draw_field(&state.field);
            self.surface.draw_image(self.sprites.ball, state.ball.rect);
            self.surface
                .draw_text(&format!("Score: {}", state.score), Vec2::new(10.0, 10.0));
            self.surface.present();

            thread::sleep(self.tick_len);
        }
    }

    /// Game-over screen over the final field, blinking the replay prompt.
    /// Any input replays; escape or close terminates.
    pub fn game_over_screen(&mut self, state: &GameState) -> ScreenOutcome {
        let mut ticks = 0u64;

        loop {
            if let Some(outcome) = self.menu_events() {
                return outcome;
            }

            self.surface.clear();
            self.draw_field(&state.field);
            self.surface
                .draw_text(&format!("Score: {}", state.score), Vec2::new(10.0, 10.0));
            if blink_on(ticks, self.blink_period) {
                self.surface.draw_text(
                    "Game Over",
                    Vec2::new(self.screen.x / 2.0, self.screen.y / 2.0),
                );
                self.surface.draw_text(
                    "Press any key to play again",
                    Vec2::new(self.screen.x / 2.0, self.screen.y - 100.0),
                );
            }
            self.surface.present();

            ticks += 1;
            thread::sleep(self.tick_len);
        }
    }

    /// Shared menu input mapping: pointer release or any non-escape key
    /// proceeds; escape and window close terminate (distinctly). `None`
    /// means stay on the screen.
    fn menu_events(&mut self) -> Option<ScreenOutcome> {
        for event in self.input.poll() {
            match event {
                InputEvent::Quit => {
                    return Some(ScreenOutcome::Terminated(Termination::WindowClosed));
                }
                InputEvent::KeyDown(Key::Escape) => {
                    return Some(ScreenOutcome::Terminated(Termination::QuitKey));
                }
                InputEvent::KeyDown(Key::Other) | InputEvent::PointerUp => {
                    return Some(ScreenOutcome::Proceed);
                }
                InputEvent::PointerMoved(_) => {}
            }
        }
        None
    }

    fn draw_field(&mut self, field: &Field) {
        for obstacle in field.iter() {
            self.surface
                .draw_image(self.sprites.for_obstacle(obstacle.kind), obstacle.rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{ImageHandle, SoundHandle};
    use std::collections::VecDeque;

    /// Input script: one batch of events per tick; when the script runs out
    /// the window "closes" so every loop terminates.
    struct ScriptedInput {
        ticks: VecDeque<Vec<InputEvent>>,
    }

    impl ScriptedInput {
        fn new(ticks: Vec<Vec<InputEvent>>) -> Self {
            Self {
                ticks: ticks.into(),
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn poll(&mut self) -> Vec<InputEvent> {
            self.ticks.pop_front().unwrap_or(vec![InputEvent::Quit])
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        presents: u32,
        images: u32,
        texts: Vec<String>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self) {}
        fn draw_image(&mut self, _image: ImageHandle, _rect: Rect) {
            self.images += 1;
        }
        fn draw_text(&mut self, text: &str, _pos: Vec2) {
            self.texts.push(text.to_owned());
        }
        fn present(&mut self) {
            self.presents += 1;
        }
    }

    #[derive(Default)]
    struct RecordingAudio {
        effects: Vec<SoundEffect>,
    }

    impl AudioSink for RecordingAudio {
        fn play(&mut self, effect: SoundEffect) {
            self.effects.push(effect);
        }
    }

    fn sprites() -> SpriteSet {
        SpriteSet {
            brick_blue: ImageHandle(1),
            brick_green: ImageHandle(2),
            brick_red: ImageHandle(3),
            paddle: ImageHandle(4),
            ball: ImageHandle(5),
            brick_break: SoundHandle(6),
        }
    }

    fn app(script: Vec<Vec<InputEvent>>) -> App<RecordingSurface, ScriptedInput, RecordingAudio> {
        App::new(
            RecordingSurface::default(),
            ScriptedInput::new(script),
            RecordingAudio::default(),
            sprites(),
            Variant::Breakout,
        )
        .without_sleep()
    }

    #[test]
    fn test_start_screen_proceeds_on_pointer_up() {
        let mut app = app(vec![vec![], vec![InputEvent::PointerUp]]);
        assert_eq!(app.start_screen(), ScreenOutcome::Proceed);
        // One frame rendered before the pointer release arrived
        assert_eq!(app.surface.presents, 1);
        // Showcase layout drew all three color groups
        assert_eq!(app.surface.images, 120);
        assert!(app.surface.texts.contains(&"Break the Ceiling".to_owned()));
    }

    #[test]
    fn test_start_screen_escape_terminates() {
        let mut app = app(vec![vec![InputEvent::KeyDown(Key::Escape)]]);
        assert_eq!(
            app.start_screen(),
            ScreenOutcome::Terminated(Termination::QuitKey)
        );
        // Aborted before the in-flight frame
        assert_eq!(app.surface.presents, 0);
    }

    #[test]
    fn test_play_round_escape_skips_game_over() {
        let mut app = app(vec![vec![], vec![InputEvent::KeyDown(Key::Escape)]]);
        let mut state = GameState::new_round(0, BREAKOUT_SCREEN_HEIGHT);
        assert_eq!(
            app.play_round(&mut state),
            RoundOutcome::Terminated(Termination::QuitKey)
        );
    }

    #[test]
    fn test_play_round_window_close_is_distinct() {
        let mut app = app(vec![vec![InputEvent::Quit]]);
        let mut state = GameState::new_round(0, BREAKOUT_SCREEN_HEIGHT);
        assert_eq!(
            app.play_round(&mut state),
            RoundOutcome::Terminated(Termination::WindowClosed)
        );
    }

    #[test]
    fn test_play_round_loss_skips_final_render() {
        let mut app = app(vec![vec![]; 8]);
        let mut state = GameState::new_round(0, BREAKOUT_SCREEN_HEIGHT);
        state.field = Field::new();
        state.ball.rect.min = Vec2::new(240.0, BREAKOUT_SCREEN_HEIGHT - 1.0);
        state.ball.vel = Vec2::new(0.0, 5.0);

        assert_eq!(app.play_round(&mut state), RoundOutcome::Lost);
        assert_eq!(state.phase, GamePhase::GameOver);
        // The losing tick is not rendered
        assert_eq!(app.surface.presents, 0);
    }

    #[test]
    fn test_brick_break_reaches_audio_sink() {
        let mut app = app(vec![vec![]; 4]);
        let mut state = GameState::new_round(0, BREAKOUT_SCREEN_HEIGHT);
        // One tick short of the first brick, heading into it
        let brick_rect = state.field.iter().next().unwrap().rect;
        state.ball.rect = Rect::from_center(
            brick_rect.center() + Vec2::new(0.0, 5.0),
            state.ball.rect.size,
        );
        state.ball.vel = Vec2::new(0.0, -5.0);

        // Script runs out -> window closes; the cue fired before that
        assert_eq!(
            app.play_round(&mut state),
            RoundOutcome::Terminated(Termination::WindowClosed)
        );
        assert!(app.audio.effects.contains(&SoundEffect::BrickBreak));
    }

    #[test]
    fn test_pointer_drives_paddle_during_play() {
        let mut app = app(vec![vec![InputEvent::PointerMoved(Vec2::new(42.0, 9.0))]]);
        let mut state = GameState::new_round(0, BREAKOUT_SCREEN_HEIGHT);
        // Park the ball
        state.ball.rect.min = Vec2::new(240.0, 400.0);
        state.ball.vel = Vec2::ZERO;

        app.play_round(&mut state);
        assert_eq!(state.field.paddle().unwrap().rect.min.x, 42.0);
    }

    #[test]
    fn test_game_over_replay_on_any_key() {
        let mut app = app(vec![vec![], vec![InputEvent::KeyDown(Key::Other)]]);
        let state = GameState::new_round(0, BREAKOUT_SCREEN_HEIGHT);
        assert_eq!(app.game_over_screen(&state), ScreenOutcome::Proceed);
        assert!(app.surface.texts.iter().any(|t| t == "Game Over"));
    }

    #[test]
    fn test_run_terminates_from_start_screen() {
        let mut app = app(vec![]);
        assert_eq!(app.run(0), Termination::WindowClosed);
    }

    #[test]
    fn test_blink_cadence() {
        assert!(blink_on(0, 7));
        assert!(blink_on(6, 7));
        assert!(!blink_on(7, 7));
        assert!(!blink_on(13, 7));
        assert!(blink_on(14, 7));
        // Degenerate period never divides by zero
        assert!(blink_on(0, 0));
    }
}
