//! Coin flip screen
//!
//! Three phases: idle, animating through [`COIN_FRAMES`], and showing a
//! result. While a result is shown with auto-replay on, the screen polls
//! every `auto_replay_poll` and flips again once `auto_replay_hold` has
//! passed. Polling keeps the countdown on screen live.
//!
//! Every timer handler re-checks the phase first. Timers cannot be
//! cancelled, so a tick or check may arrive after the state it was armed
//! for is gone. At most one auto-replay check is outstanding at a time.

use crate::app::event::AppEvent;
use crate::app::screens::{center_block, Context, MainMenuScreen, Screen, Update};
use crate::app::theme::Theme;
use crate::app::timer::TimerKind;
use crate::config::GameConfig;
use crate::game::Outcome;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, trace};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use std::time::Duration;
use tokio::time::Instant;

const FACE: &[&str] = &[
    "   ______",
    "  /      \\",
    " |        |",
    " |  COIN  |",
    " |        |",
    "  \\______/",
];

const BLANK_FACE: &[&str] = &[
    "   ______",
    "  /      \\",
    " |        |",
    " |        |",
    " |        |",
    "  \\______/",
];

const TILTED: &[&str] = &["    ____", "   /    \\", "  |      |", "  |______|"];

const THIN: &[&str] = &["     __", "    |  |", "    |  |", "    |__|"];

const EDGE: &[&str] = &["      |", "      |", "      |", "      |"];

/// Animation sequence: one full turn of the coin.
///
/// The last frame is never drawn: the tick that would show it draws the
/// outcome instead and the result face takes its place.
pub const COIN_FRAMES: [&[&str]; 14] = [
    FACE, TILTED, THIN, EDGE, EDGE, THIN, TILTED, BLANK_FACE, TILTED, THIN, EDGE, EDGE, THIN,
    TILTED,
];

/// Logical keys understood by the coin flip screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinFlipAction {
    Flip,
    ToggleAutoReplay,
    Back,
    Quit,
}

/// Visible phase of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipPhase {
    Idle,
    Animating,
    ShowingResult,
}

/// Heads and tails counted since the screen was opened
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub heads: u32,
    pub tails: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Heads => self.heads += 1,
            Outcome::Tails => self.tails += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.heads + self.tails
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinFlipScreen {
    flipping: bool,
    animation_step: usize,
    result: Option<Outcome>,
    show_result: bool,
    result_started: Option<Instant>,
    auto_replay: bool,
    hold: Duration,
    check_armed: bool,
    tally: Tally,
}

impl CoinFlipScreen {
    /// Fresh idle screen; auto-replay starts as configured
    pub fn new(config: &GameConfig) -> Self {
        Self {
            flipping: false,
            animation_step: 0,
            result: None,
            show_result: false,
            result_started: None,
            auto_replay: config.auto_replay,
            hold: config.auto_replay_hold,
            check_armed: false,
            tally: Tally::default(),
        }
    }

    pub fn phase(&self) -> FlipPhase {
        if self.flipping {
            FlipPhase::Animating
        } else if self.show_result {
            FlipPhase::ShowingResult
        } else {
            FlipPhase::Idle
        }
    }

    pub fn animation_step(&self) -> usize {
        self.animation_step
    }

    /// Outcome of the last completed flip
    pub fn result(&self) -> Option<Outcome> {
        self.result
    }

    /// When the current result started being shown
    pub fn result_started(&self) -> Option<Instant> {
        self.result_started
    }

    pub fn auto_replay(&self) -> bool {
        self.auto_replay
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Time left before the automatic re-flip, floored at zero.
    /// `None` unless a result is shown with auto-replay on.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        if self.phase() != FlipPhase::ShowingResult || !self.auto_replay {
            return None;
        }
        let started = self.result_started?;
        Some(self.hold.saturating_sub(now.saturating_duration_since(started)))
    }

    /// Convert a key press into a coin flip action
    pub fn key_to_action(key: KeyEvent) -> Option<CoinFlipAction> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(CoinFlipAction::Quit)
            }
            KeyCode::Char('q') => Some(CoinFlipAction::Quit),
            KeyCode::Char('f') | KeyCode::Enter | KeyCode::Char(' ') => Some(CoinFlipAction::Flip),
            KeyCode::Char('a') => Some(CoinFlipAction::ToggleAutoReplay),
            KeyCode::Char('b') | KeyCode::Esc => Some(CoinFlipAction::Back),
            _ => None,
        }
    }

    pub fn handle(&mut self, event: &AppEvent, ctx: &mut Context<'_>) -> Update {
        match event {
            AppEvent::Key(key) => match Self::key_to_action(*key) {
                Some(CoinFlipAction::Quit) => Update::quit(),
                Some(CoinFlipAction::Back) => {
                    debug!("coin flip: back to menu");
                    Update::switch(Screen::MainMenu(MainMenuScreen::new()))
                }
                Some(CoinFlipAction::Flip) => self.start_flip(ctx.config),
                Some(CoinFlipAction::ToggleAutoReplay) => self.toggle_auto_replay(ctx.config),
                None => Update::none(),
            },
            AppEvent::Timer(TimerKind::AnimationTick) => self.on_animation_tick(ctx),
            AppEvent::Timer(TimerKind::AutoReplayCheck) => self.on_auto_replay_check(ctx),
        }
    }

    fn start_flip(&mut self, config: &GameConfig) -> Update {
        if self.flipping {
            trace!("coin flip: already flipping");
            return Update::none();
        }
        self.flipping = true;
        self.show_result = false;
        self.animation_step = 0;
        Update::schedule(TimerKind::AnimationTick, config.animation_interval)
    }

    fn on_animation_tick(&mut self, ctx: &mut Context<'_>) -> Update {
        if !self.flipping {
            trace!("coin flip: stale animation tick");
            return Update::none();
        }

        // The tick that would land on the last frame draws the outcome; the
        // result face takes that frame's place
        if self.animation_step + 1 < COIN_FRAMES.len() - 1 {
            self.animation_step += 1;
            return Update::schedule(TimerKind::AnimationTick, ctx.config.animation_interval);
        }

        let outcome = ctx.coin.flip();
        debug!("coin flip: landed {}", outcome);
        self.result = Some(outcome);
        self.tally.record(outcome);
        self.flipping = false;
        self.show_result = true;
        self.animation_step = 0;
        self.result_started = Some(ctx.now);

        if self.auto_replay {
            self.arm_check(ctx.config)
        } else {
            Update::none()
        }
    }

    /// Request an AutoReplayCheck unless one is already in flight. A check
    /// armed for an earlier result is still useful: it measures against
    /// `result_started`, which always belongs to the current result.
    fn arm_check(&mut self, config: &GameConfig) -> Update {
        if self.check_armed {
            trace!("coin flip: auto-replay check already armed");
            return Update::none();
        }
        self.check_armed = true;
        Update::schedule(TimerKind::AutoReplayCheck, config.auto_replay_poll)
    }

    fn on_auto_replay_check(&mut self, ctx: &mut Context<'_>) -> Update {
        self.check_armed = false;
        if !self.show_result || !self.auto_replay || self.flipping {
            trace!("coin flip: stale auto-replay check");
            return Update::none();
        }
        let Some(started) = self.result_started else {
            return Update::none();
        };

        if ctx.now.saturating_duration_since(started) >= self.hold {
            debug!("coin flip: auto-replay");
            self.start_flip(ctx.config)
        } else {
            self.arm_check(ctx.config)
        }
    }

    fn toggle_auto_replay(&mut self, config: &GameConfig) -> Update {
        self.auto_replay = !self.auto_replay;
        debug!("coin flip: auto-replay {}", self.auto_replay);
        // Resume the countdown. If the check armed before turning it off has
        // not arrived yet, it carries on the polling.
        if self.auto_replay && self.phase() == FlipPhase::ShowingResult {
            self.arm_check(config)
        } else {
            Update::none()
        }
    }

    /// Render the screen for the instant `now`
    pub fn view(&self, theme: &Theme, now: Instant) -> Text<'static> {
        let mut lines = vec![
            Line::from(Span::styled(" COIN FLIP ", theme.title_style())),
            Line::default(),
        ];

        match self.phase() {
            FlipPhase::Animating => {
                push_block(&mut lines, COIN_FRAMES[self.animation_step], theme);
                lines.push(Line::default());
            }
            FlipPhase::ShowingResult => {
                let label = self.result.map(|o| o.label()).unwrap_or("?");
                push_block(&mut lines, &result_face(label), theme);
                lines.push(Line::default());

                let inner = format!(" Result: {} ", label);
                let bar = "─".repeat(inner.chars().count());
                let boxed = [
                    format!("╭{}╮", bar),
                    format!("│{}│", inner),
                    format!("╰{}╯", bar),
                ];
                for row in center_block(&boxed, theme.width) {
                    lines.push(Line::from(Span::styled(row, theme.result_style())));
                }
                lines.push(Line::default());

                if let Some(remaining) = self.remaining(now) {
                    let countdown =
                        format!("Next flip in {:.1} seconds...", remaining.as_secs_f64());
                    push_centered(&mut lines, &countdown, theme.width, theme.muted_style());
                }
            }
            FlipPhase::Idle => {
                push_block(&mut lines, COIN_FRAMES[0], theme);
                lines.push(Line::default());
                push_centered(
                    &mut lines,
                    "Press F or ENTER to flip the coin",
                    theme.width,
                    Style::default(),
                );
                lines.push(Line::default());
            }
        }

        if self.tally.total() > 0 {
            let tally = format!("Heads: {}  Tails: {}", self.tally.heads, self.tally.tails);
            push_centered(&mut lines, &tally, theme.width, theme.muted_style());
        }
        let status = if self.auto_replay {
            "Auto-replay: on"
        } else {
            "Auto-replay: off"
        };
        push_centered(&mut lines, status, theme.width, theme.muted_style());

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "f/enter: flip • a: auto-replay • b/esc: back to menu • q: quit",
            theme.help_style(),
        )));

        Text::from(lines)
    }
}

fn result_face(label: &str) -> Vec<String> {
    vec![
        FACE[0].to_string(),
        FACE[1].to_string(),
        FACE[2].to_string(),
        format!(" |{:^8}|", label),
        FACE[4].to_string(),
        FACE[5].to_string(),
    ]
}

fn push_block<S: AsRef<str>>(lines: &mut Vec<Line<'static>>, block: &[S], theme: &Theme) {
    for row in center_block(block, theme.width) {
        lines.push(Line::from(Span::styled(row, theme.coin_style())));
    }
}

fn push_centered(lines: &mut Vec<Line<'static>>, text: &str, width: usize, style: Style) {
    for row in center_block(&[text], width) {
        lines.push(Line::from(Span::styled(row, style)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::test_support::ScriptedCoin;
    use crate::app::screens::{plain_text, Transition};
    use crate::app::timer::TimerRequest;

    const N: usize = COIN_FRAMES.len();

    struct Harness {
        config: GameConfig,
        coin: ScriptedCoin,
        start: Instant,
    }

    impl Harness {
        fn new(script: &[Outcome]) -> Self {
            Self {
                config: GameConfig::default(),
                coin: ScriptedCoin::new(script),
                start: Instant::now(),
            }
        }

        fn send(&mut self, screen: &mut CoinFlipScreen, event: AppEvent, at: Duration) -> Update {
            let mut ctx = Context {
                now: self.start + at,
                config: &self.config,
                coin: &mut self.coin,
            };
            screen.handle(&event, &mut ctx)
        }
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn tick() -> AppEvent {
        AppEvent::Timer(TimerKind::AnimationTick)
    }

    fn check() -> AppEvent {
        AppEvent::Timer(TimerKind::AutoReplayCheck)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Flip and deliver every animation tick, the last one at `at`
    fn flip_to_result(h: &mut Harness, screen: &mut CoinFlipScreen, at: Duration) -> Update {
        h.send(screen, key(KeyCode::Char('f')), at);
        let mut last = Update::none();
        for _ in 0..N - 1 {
            last = h.send(screen, tick(), at);
        }
        last
    }

    #[test]
    fn test_new_screen_is_idle() {
        let screen = CoinFlipScreen::new(&GameConfig::default());
        assert_eq!(screen.phase(), FlipPhase::Idle);
        assert_eq!(screen.animation_step(), 0);
        assert_eq!(screen.result(), None);
        assert_eq!(screen.result_started(), None);
        assert!(screen.auto_replay());
        assert_eq!(screen.tally().total(), 0);

        let screen = CoinFlipScreen::new(&GameConfig::default().with_auto_replay(false));
        assert!(!screen.auto_replay());
    }

    #[test]
    fn test_flip_keys_start_animation() {
        for code in [KeyCode::Char('f'), KeyCode::Enter, KeyCode::Char(' ')] {
            let mut h = Harness::new(&[]);
            let mut screen = CoinFlipScreen::new(&h.config);
            let update = h.send(&mut screen, key(code), ms(0));

            assert_eq!(screen.phase(), FlipPhase::Animating);
            assert_eq!(screen.animation_step(), 0);
            assert!(update.is_stay());
            assert_eq!(
                update.timers,
                vec![TimerRequest::new(TimerKind::AnimationTick, ms(100))]
            );
        }
    }

    #[test]
    fn test_flip_while_animating_is_noop() {
        let mut h = Harness::new(&[]);
        let mut screen = CoinFlipScreen::new(&h.config);
        h.send(&mut screen, key(KeyCode::Char('f')), ms(0));
        h.send(&mut screen, tick(), ms(100));
        h.send(&mut screen, tick(), ms(200));
        let before = screen.clone();

        let update = h.send(&mut screen, key(KeyCode::Enter), ms(250));
        assert!(update.is_stay());
        assert!(update.timers.is_empty());
        assert_eq!(screen, before);
    }

    #[test]
    fn test_animation_takes_n_minus_one_ticks() {
        let mut h = Harness::new(&[Outcome::Tails]);
        let mut screen = CoinFlipScreen::new(&h.config);
        h.send(&mut screen, key(KeyCode::Char('f')), ms(0));

        for i in 1..N - 1 {
            let update = h.send(&mut screen, tick(), ms(100 * i as u64));
            assert_eq!(screen.phase(), FlipPhase::Animating);
            assert_eq!(screen.animation_step(), i);
            assert_eq!(update.timers[0].kind, TimerKind::AnimationTick);
            assert_eq!(h.coin.flips, 0);
        }

        let last_tick_at = ms(100 * (N - 1) as u64);
        let update = h.send(&mut screen, tick(), last_tick_at);
        assert_eq!(h.coin.flips, 1);
        assert_eq!(screen.phase(), FlipPhase::ShowingResult);
        assert_eq!(screen.result(), Some(Outcome::Tails));
        assert_eq!(screen.animation_step(), 0);
        assert_eq!(screen.result_started(), Some(h.start + last_tick_at));
        assert_eq!(
            update.timers,
            vec![TimerRequest::new(TimerKind::AutoReplayCheck, ms(500))]
        );
    }

    #[test]
    fn test_result_without_auto_replay_schedules_nothing() {
        let mut h = Harness::new(&[Outcome::Heads]);
        h.config = GameConfig::default().with_auto_replay(false);
        let mut screen = CoinFlipScreen::new(&h.config);

        let update = flip_to_result(&mut h, &mut screen, ms(0));
        assert_eq!(screen.phase(), FlipPhase::ShowingResult);
        assert!(update.timers.is_empty());
        assert_eq!(screen.remaining(h.start), None);
    }

    #[test]
    fn test_auto_replay_waits_for_hold() {
        let mut h = Harness::new(&[Outcome::Heads]);
        let mut screen = CoinFlipScreen::new(&h.config);
        flip_to_result(&mut h, &mut screen, ms(0));

        let update = h.send(&mut screen, check(), ms(5_999));
        assert_eq!(screen.phase(), FlipPhase::ShowingResult);
        assert_eq!(
            update.timers,
            vec![TimerRequest::new(TimerKind::AutoReplayCheck, ms(500))]
        );

        let update = h.send(&mut screen, check(), ms(6_000));
        assert_eq!(screen.phase(), FlipPhase::Animating);
        assert_eq!(screen.animation_step(), 0);
        assert_eq!(
            update.timers,
            vec![TimerRequest::new(TimerKind::AnimationTick, ms(100))]
        );
    }

    #[test]
    fn test_configured_hold_drives_replay_and_countdown() {
        let mut h = Harness::new(&[Outcome::Heads]);
        h.config = GameConfig::default().with_auto_replay_hold(Duration::from_secs(2));
        let mut screen = CoinFlipScreen::new(&h.config);
        flip_to_result(&mut h, &mut screen, ms(0));

        assert_eq!(screen.remaining(h.start + ms(500)), Some(ms(1_500)));
        h.send(&mut screen, check(), ms(2_000));
        assert_eq!(screen.phase(), FlipPhase::Animating);
    }

    #[test]
    fn test_late_check_always_replays() {
        let mut h = Harness::new(&[Outcome::Heads]);
        let mut screen = CoinFlipScreen::new(&h.config);
        flip_to_result(&mut h, &mut screen, ms(0));

        h.send(&mut screen, check(), ms(60_000));
        assert_eq!(screen.phase(), FlipPhase::Animating);
    }

    #[test]
    fn test_stale_timers_are_ignored() {
        let mut h = Harness::new(&[Outcome::Heads]);
        let mut screen = CoinFlipScreen::new(&h.config);

        // Idle: both kinds are stale
        for event in [tick(), check()] {
            let update = h.send(&mut screen, event, ms(0));
            assert!(update.timers.is_empty());
            assert_eq!(screen.phase(), FlipPhase::Idle);
        }

        // Animating: a check is stale
        h.send(&mut screen, key(KeyCode::Char('f')), ms(0));
        let before = screen.clone();
        let update = h.send(&mut screen, check(), ms(10_000));
        assert!(update.timers.is_empty());
        assert_eq!(screen, before);
    }

    #[test]
    fn test_check_after_auto_replay_disabled_is_ignored() {
        let mut h = Harness::new(&[Outcome::Heads]);
        let mut screen = CoinFlipScreen::new(&h.config);
        flip_to_result(&mut h, &mut screen, ms(0));

        let update = h.send(&mut screen, key(KeyCode::Char('a')), ms(100));
        assert!(!screen.auto_replay());
        assert!(update.timers.is_empty());

        let update = h.send(&mut screen, check(), ms(7_000));
        assert!(update.timers.is_empty());
        assert_eq!(screen.phase(), FlipPhase::ShowingResult);

        // Turning it back on resumes polling
        let update = h.send(&mut screen, key(KeyCode::Char('a')), ms(7_100));
        assert_eq!(
            update.timers,
            vec![TimerRequest::new(TimerKind::AutoReplayCheck, ms(500))]
        );
        h.send(&mut screen, check(), ms(7_600));
        assert_eq!(screen.phase(), FlipPhase::Animating);
    }

    #[test]
    fn test_toggling_auto_replay_keeps_a_single_check() {
        let mut h = Harness::new(&[Outcome::Heads]);
        let mut screen = CoinFlipScreen::new(&h.config);
        let update = flip_to_result(&mut h, &mut screen, ms(0));
        assert_eq!(update.timers.len(), 1);

        for i in 0..10 {
            let update = h.send(&mut screen, key(KeyCode::Char('a')), ms(10 * i));
            assert!(update.timers.is_empty());
        }
        assert!(screen.auto_replay());

        // The original check keeps polling, and only it
        let update = h.send(&mut screen, check(), ms(500));
        assert_eq!(
            update.timers,
            vec![TimerRequest::new(TimerKind::AutoReplayCheck, ms(500))]
        );
        let update = h.send(&mut screen, key(KeyCode::Char('a')), ms(600));
        assert!(update.timers.is_empty());
        let update = h.send(&mut screen, key(KeyCode::Char('a')), ms(700));
        assert!(update.timers.is_empty());
    }

    #[test]
    fn test_check_from_previous_result_carries_over() {
        let mut h = Harness::new(&[Outcome::Heads, Outcome::Tails]);
        let mut screen = CoinFlipScreen::new(&h.config);
        let first = flip_to_result(&mut h, &mut screen, ms(0));
        assert_eq!(first.timers.len(), 1);

        // Flip again and land before the first check arrives
        let second = flip_to_result(&mut h, &mut screen, ms(200));
        assert_eq!(screen.result(), Some(Outcome::Tails));
        assert!(second.timers.is_empty());

        let update = h.send(&mut screen, check(), ms(500));
        assert_eq!(screen.phase(), FlipPhase::ShowingResult);
        assert_eq!(
            update.timers,
            vec![TimerRequest::new(TimerKind::AutoReplayCheck, ms(500))]
        );
        h.send(&mut screen, check(), ms(6_200));
        assert_eq!(screen.phase(), FlipPhase::Animating);
    }

    #[test]
    fn test_flip_from_result_restarts_animation() {
        let mut h = Harness::new(&[Outcome::Heads, Outcome::Tails]);
        let mut screen = CoinFlipScreen::new(&h.config);
        flip_to_result(&mut h, &mut screen, ms(0));
        flip_to_result(&mut h, &mut screen, ms(2_000));

        assert_eq!(screen.result(), Some(Outcome::Tails));
        assert_eq!(screen.tally(), Tally { heads: 1, tails: 1 });
        assert_eq!(screen.result_started(), Some(h.start + ms(2_000)));
    }

    #[test]
    fn test_back_and_quit() {
        let mut h = Harness::new(&[]);
        let mut screen = CoinFlipScreen::new(&h.config);
        h.send(&mut screen, key(KeyCode::Char('f')), ms(0));

        let update = h.send(&mut screen, key(KeyCode::Esc), ms(50));
        match update.transition {
            Transition::Switch(Screen::MainMenu(menu)) => assert_eq!(menu.cursor(), 0),
            other => panic!("expected main menu, got {:?}", other),
        }

        let update = h.send(&mut screen, key(KeyCode::Char('q')), ms(60));
        assert!(update.is_quit());
        let ctrl_c = AppEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(h.send(&mut screen, ctrl_c, ms(70)).is_quit());
    }

    #[test]
    fn test_unbound_keys_do_nothing() {
        let mut h = Harness::new(&[]);
        let mut screen = CoinFlipScreen::new(&h.config);
        let before = screen.clone();
        let update = h.send(&mut screen, key(KeyCode::Char('z')), ms(0));
        assert!(update.is_stay());
        assert!(update.timers.is_empty());
        assert_eq!(screen, before);
    }

    #[test]
    fn test_countdown_is_monotonic_and_floored() {
        let mut h = Harness::new(&[Outcome::Heads]);
        let mut screen = CoinFlipScreen::new(&h.config);
        flip_to_result(&mut h, &mut screen, ms(0));

        let mut previous = Duration::MAX;
        for step in 0..20 {
            let remaining = screen.remaining(h.start + ms(step * 450)).unwrap();
            assert!(remaining <= previous);
            previous = remaining;
        }
        assert_eq!(previous, Duration::ZERO);
    }

    #[test]
    fn test_view_idle() {
        let screen = CoinFlipScreen::new(&GameConfig::default());
        let text = plain_text(&screen.view(&Theme::default(), Instant::now()));
        assert!(text.starts_with(" COIN FLIP "));
        assert!(text.contains("|  COIN  |"));
        assert!(text.contains("Press F or ENTER to flip the coin"));
        assert!(!text.contains("Heads:"));
        assert!(text.ends_with("q: quit"));
    }

    #[test]
    fn test_view_animating_shows_current_frame() {
        let mut h = Harness::new(&[]);
        let mut screen = CoinFlipScreen::new(&h.config);
        h.send(&mut screen, key(KeyCode::Char('f')), ms(0));
        for _ in 0..3 {
            h.send(&mut screen, tick(), ms(0));
        }
        assert_eq!(screen.animation_step(), 3);

        let text = plain_text(&screen.view(&Theme::default(), h.start));
        let rows: Vec<&str> = text.lines().collect();
        // Edge-on frame: four identical bars, no face
        assert_eq!(rows[2].trim(), "|");
        assert_eq!(rows[5].trim(), "|");
        assert!(!text.contains("COIN  |"));
        assert!(!text.contains("Press F"));
    }

    #[test]
    fn test_view_result_with_countdown() {
        let mut h = Harness::new(&[Outcome::Tails]);
        let mut screen = CoinFlipScreen::new(&h.config);
        flip_to_result(&mut h, &mut screen, ms(0));
        let theme = Theme::default();

        let text = plain_text(&screen.view(&theme, h.start + ms(1_500)));
        assert!(text.contains("| TAILS  |"));
        assert!(text.contains("│ Result: TAILS │"));
        assert!(text.contains("Next flip in 4.5 seconds..."));
        assert!(text.contains("Heads: 0  Tails: 1"));

        let text = plain_text(&screen.view(&theme, h.start + ms(9_000)));
        assert!(text.contains("Next flip in 0.0 seconds..."));
    }

    #[test]
    fn test_view_result_without_auto_replay_has_no_countdown() {
        let mut h = Harness::new(&[Outcome::Heads]);
        h.config = GameConfig::default().with_auto_replay(false);
        let mut screen = CoinFlipScreen::new(&h.config);
        flip_to_result(&mut h, &mut screen, ms(0));

        let text = plain_text(&screen.view(&Theme::default(), h.start));
        assert!(text.contains("Result: HEADS"));
        assert!(!text.contains("Next flip"));
        assert!(text.contains("Auto-replay: off"));
    }

    #[test]
    fn test_frames_have_fixed_length() {
        assert_eq!(COIN_FRAMES.len(), 14);
        assert_eq!(COIN_FRAMES[0], FACE);
        assert_eq!(COIN_FRAMES[7], BLANK_FACE);
    }

    #[test]
    fn test_result_face_replaces_last_frame() {
        let mut h = Harness::new(&[Outcome::Heads]);
        let mut screen = CoinFlipScreen::new(&h.config);
        h.send(&mut screen, key(KeyCode::Char('f')), ms(0));

        let mut steps = vec![screen.animation_step()];
        while screen.phase() == FlipPhase::Animating {
            h.send(&mut screen, tick(), ms(0));
            if screen.phase() == FlipPhase::Animating {
                steps.push(screen.animation_step());
            }
        }
        assert_eq!(steps, (0..N - 1).collect::<Vec<_>>());
        let text = plain_text(&screen.view(&Theme::default(), h.start));
        assert!(text.contains("| HEADS  |"));
    }
}
