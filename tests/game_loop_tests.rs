//! Game loop tests - the driver against scripted input and a recording display

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;

use tui_snake::core::GameState;
use tui_snake::engine::{Display, GameLoop, InputSource, Pacer};
use tui_snake::types::{Direction, GameOutcome, Intent, Position, GAME_OVER_TEXT};

#[derive(Debug, Clone, PartialEq)]
struct Frame {
    head: Position,
    len: usize,
    score: u32,
    game_over: bool,
}

#[derive(Default)]
struct RecordingDisplay {
    frames: Vec<Frame>,
    game_over: Option<(String, Position)>,
}

impl Display for RecordingDisplay {
    fn render_frame(&mut self, state: &GameState) -> Result<()> {
        self.frames.push(Frame {
            head: state.head(),
            len: state.len(),
            score: state.score(),
            game_over: state.game_over(),
        });
        Ok(())
    }

    fn render_game_over(&mut self, text: &str, at: Position) -> Result<()> {
        self.game_over = Some((text.to_string(), at));
        Ok(())
    }
}

#[derive(Default)]
struct ScriptedInput {
    polls: VecDeque<Option<Intent>>,
    waited_for_quit: bool,
}

impl ScriptedInput {
    fn new(polls: &[Option<Intent>]) -> Self {
        Self {
            polls: polls.iter().copied().collect(),
            waited_for_quit: false,
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<Option<Intent>> {
        Ok(self.polls.pop_front().flatten())
    }

    fn wait_for_quit(&mut self) -> Result<()> {
        self.waited_for_quit = true;
        Ok(())
    }
}

#[derive(Default)]
struct CountingPacer {
    ticks: Vec<Duration>,
}

impl Pacer for CountingPacer {
    fn pace(&mut self, tick: Duration) {
        self.ticks.push(tick);
    }
}

fn pos(x: i16, y: i16) -> Position {
    Position::new(x, y)
}

#[test]
fn test_quit_on_first_poll() {
    let mut state = GameState::new(30, 10, 1);
    let mut display = RecordingDisplay::default();
    let mut input = ScriptedInput::new(&[Some(Intent::Quit)]);
    let mut pacer = CountingPacer::default();

    let outcome = GameLoop::default()
        .run(&mut state, &mut display, &mut input, &mut pacer)
        .unwrap();

    assert_eq!(outcome, GameOutcome::Quit);
    // Initial frame plus the frame of the quitting tick.
    assert_eq!(display.frames.len(), 2);
    assert!(display.frames[1].game_over);
    assert!(pacer.ticks.is_empty());
    assert_eq!(
        display.game_over,
        Some((GAME_OVER_TEXT.to_string(), pos(1, 5)))
    );
    assert!(input.waited_for_quit);
}

#[test]
fn test_idle_ticks_move_the_snake() {
    let mut state =
        GameState::from_layout(30, 10, 1, &[pos(15, 5)], Direction::Down, pos(1, 1)).unwrap();
    let mut display = RecordingDisplay::default();
    let mut input = ScriptedInput::new(&[None, None, None, Some(Intent::Quit)]);
    let mut pacer = CountingPacer::default();
    let tick = Duration::from_millis(50);

    let outcome = GameLoop::new(tick)
        .run(&mut state, &mut display, &mut input, &mut pacer)
        .unwrap();

    assert_eq!(outcome, GameOutcome::Quit);
    let heads: Vec<Position> = display.frames.iter().map(|f| f.head).collect();
    assert_eq!(
        heads,
        vec![pos(15, 5), pos(15, 6), pos(15, 7), pos(15, 8), pos(15, 8)]
    );
    assert_eq!(pacer.ticks, vec![tick; 3]);
}

#[test]
fn test_turn_into_body_ends_with_collision() {
    let body = [pos(5, 5), pos(6, 5), pos(6, 6), pos(5, 6), pos(4, 6)];
    let mut state = GameState::from_layout(30, 10, 1, &body, Direction::Left, pos(1, 1)).unwrap();
    let mut display = RecordingDisplay::default();
    let mut input = ScriptedInput::new(&[Some(Intent::Turn(Direction::Down))]);
    let mut pacer = CountingPacer::default();

    let outcome = GameLoop::default()
        .run(&mut state, &mut display, &mut input, &mut pacer)
        .unwrap();

    assert_eq!(outcome, GameOutcome::Collided);
    let last = display.frames.last().unwrap();
    assert_eq!(last.head, pos(5, 5));
    assert_eq!(last.len, body.len());
    assert!(display.game_over.is_some());
    assert!(input.waited_for_quit);
}

#[test]
fn test_eating_is_visible_in_the_next_frame() {
    let mut state =
        GameState::from_layout(30, 10, 1, &[pos(15, 5)], Direction::Down, pos(15, 6)).unwrap();
    let mut display = RecordingDisplay::default();
    let mut input = ScriptedInput::new(&[None, Some(Intent::Quit)]);
    let mut pacer = CountingPacer::default();

    GameLoop::default()
        .run(&mut state, &mut display, &mut input, &mut pacer)
        .unwrap();

    assert_eq!(display.frames[0].score, 0);
    assert_eq!(display.frames[1].score, 1);
    assert_eq!(display.frames[1].len, 2);
}

#[test]
fn test_finished_state_goes_straight_to_prompt() {
    // 3x3 grid: the spawn fills the only interior cell.
    let mut state = GameState::new(3, 3, 1);
    let mut display = RecordingDisplay::default();
    let mut input = ScriptedInput::new(&[]);
    let mut pacer = CountingPacer::default();

    let outcome = GameLoop::default()
        .run(&mut state, &mut display, &mut input, &mut pacer)
        .unwrap();

    assert_eq!(outcome, GameOutcome::BoardFilled);
    assert!(pacer.ticks.is_empty());
    assert!(input.waited_for_quit);
}
