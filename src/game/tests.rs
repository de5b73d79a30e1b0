use super::*;
use crate::store::{FileStore, MemoryStore};
use crossterm::event::KeyCode;
use rand::{seq::IndexedRandom, SeedableRng};
use rand_chacha::ChaCha12Rng;
use rstest::rstest;

const RNG_SEED: u64 = 0x0123456789ABCDEF;

type TestGame = Game<ChaCha12Rng, MemoryStore>;

fn new_game() -> TestGame {
    Game::new_with_rng(MemoryStore::new(), ChaCha12Rng::seed_from_u64(RNG_SEED))
}

fn press<S: KeyValueStore>(game: &mut Game<ChaCha12Rng, S>, code: KeyCode) {
    assert!(game.handle_event(Event::Key(code.into())).is_continue());
}

fn cells(game: &TestGame) -> Vec<(i16, i16)> {
    game.state.snake.cells().map(|c| (c.x, c.y)).collect()
}

#[test]
fn starts_idle() {
    let game = new_game();
    assert_eq!(game.status(), Status::Idle);
    assert_eq!(cells(&game), [(13, 15), (13, 16), (13, 17)]);
    assert_eq!(game.state.scores, Scoreboard::new(0));
    assert!(consts::GRID.contains(game.state.food));
    assert!(!game.state.snake.contains(game.state.food));
}

#[test]
fn loads_high_score() {
    let mut store = MemoryStore::new();
    store
        .set(consts::HIGH_SCORE_KEY, String::from("17"))
        .unwrap();
    let game = Game::new_with_rng(store, ChaCha12Rng::seed_from_u64(RNG_SEED));
    assert_eq!(game.state.scores.high_score(), 17);
    assert_eq!(game.state.scores.score(), 0);
}

#[test]
fn idle_does_not_tick() {
    let mut game = new_game();
    assert_eq!(game.tick(), None);
    assert_eq!(cells(&game), [(13, 15), (13, 16), (13, 17)]);
}

#[test]
fn arrow_key_starts_game() {
    let mut game = new_game();
    game.state.food = Cell::new(0, 0);
    press(&mut game, KeyCode::Left);
    assert_eq!(game.status(), Status::Running);
    assert_eq!(game.tick(), Some(StepOutcome::Moved));
    assert_eq!(cells(&game), [(12, 15), (13, 15), (13, 16)]);
    assert_eq!(game.state.heading, Direction::Left);
}

#[test]
fn space_starts_game_heading_up() {
    let mut game = new_game();
    game.state.food = Cell::new(0, 0);
    press(&mut game, KeyCode::Char(' '));
    assert_eq!(game.status(), Status::Running);
    assert_eq!(game.tick(), Some(StepOutcome::Moved));
    assert_eq!(cells(&game), [(13, 14), (13, 15), (13, 16)]);
}

#[test]
fn unknown_keys_ignored() {
    let mut game = new_game();
    press(&mut game, KeyCode::Char('x'));
    press(&mut game, KeyCode::F(5));
    assert_eq!(game.status(), Status::Idle);
    assert_eq!(game.steering, Mailbox::new());
}

#[test]
fn directions_coalesce() {
    let mut game = new_game();
    game.state.food = Cell::new(0, 0);
    press(&mut game, KeyCode::Up);
    press(&mut game, KeyCode::Left);
    press(&mut game, KeyCode::Right);
    assert_eq!(game.tick(), Some(StepOutcome::Moved));
    assert_eq!(cells(&game), [(14, 15), (13, 15), (13, 16)]);
    // The heading persists once the mailbox is empty
    assert_eq!(game.tick(), Some(StepOutcome::Moved));
    assert_eq!(cells(&game), [(15, 15), (14, 15), (13, 15)]);
}

#[test]
fn feeding_saves_high_score() {
    let mut game = new_game();
    game.state.food = Cell::new(13, 14);
    press(&mut game, KeyCode::Up);
    assert_eq!(
        game.tick(),
        Some(StepOutcome::Fed {
            new_high: true,
            board_full: false
        })
    );
    assert_eq!(cells(&game), [(13, 14), (13, 15), (13, 16), (13, 17)]);
    assert_eq!(game.state.scores.score(), 1);
    assert_eq!(game.state.scores.high_score(), 1);
    assert_eq!(game.store.get(consts::HIGH_SCORE_KEY).as_deref(), Some("1"));
}

#[test]
fn feeding_below_high_score_keeps_store() {
    let mut store = MemoryStore::new();
    store.set(consts::HIGH_SCORE_KEY, String::from("9")).unwrap();
    let mut game = Game::new_with_rng(store, ChaCha12Rng::seed_from_u64(RNG_SEED));
    game.state.food = Cell::new(13, 14);
    press(&mut game, KeyCode::Up);
    assert!(matches!(game.tick(), Some(StepOutcome::Fed { new_high: false, .. })));
    assert_eq!(game.state.scores.high_score(), 9);
    assert_eq!(game.store.get(consts::HIGH_SCORE_KEY).as_deref(), Some("9"));
}

#[test]
fn failed_save_keeps_playing() {
    let tmpdir = tempfile::tempdir().unwrap();
    // Writing to a directory path always fails
    let store = FileStore::empty(tmpdir.path().to_path_buf());
    let mut game = Game::new_with_rng(store, ChaCha12Rng::seed_from_u64(RNG_SEED));
    game.state.food = Cell::new(13, 14);
    press(&mut game, KeyCode::Up);
    assert!(matches!(game.tick(), Some(StepOutcome::Fed { new_high: true, .. })));
    assert_eq!(game.status(), Status::Running);
    assert_eq!(game.state.scores.score(), 1);
    assert_eq!(game.state.scores.high_score(), 1);
    assert_eq!(game.store.get(consts::HIGH_SCORE_KEY).as_deref(), Some("1"));
}

#[test]
fn random_play_stays_in_bounds() {
    const STEERING: [Command; 4] = [Command::Up, Command::Down, Command::Left, Command::Right];
    let mut game = new_game();
    let mut player = ChaCha12Rng::seed_from_u64(0xFEDCBA9876543210);
    let mut games_over = 0;
    for _ in 0..5000 {
        if game.status() == Status::Over {
            games_over += 1;
            game.reset();
        }
        if let Some(&cmd) = STEERING.choose(&mut player) {
            assert!(game.handle_command(cmd).is_continue());
        }
        let _ = game.tick();
        let scores = game.state.scores;
        assert!(scores.high_score() >= scores.score());
        if game.status() != Status::Over {
            assert_ne!(game.state.snake.len(), 0);
            assert!(game.state.snake.cells().all(|c| consts::GRID.contains(c)));
            assert!(consts::GRID.contains(game.state.food));
            assert!(!game.state.snake.contains(game.state.food));
        }
    }
    assert!(games_over > 0);
}

#[test]
fn pause_and_resume() {
    let mut game = new_game();
    game.state.food = Cell::new(0, 0);
    press(&mut game, KeyCode::Up);
    press(&mut game, KeyCode::Char('p'));
    assert_eq!(game.status(), Status::Paused);
    assert_eq!(game.tick(), None);
    // Steering is ignored while paused
    press(&mut game, KeyCode::Left);
    assert_eq!(game.status(), Status::Paused);
    press(&mut game, KeyCode::Char('p'));
    assert_eq!(game.status(), Status::Running);
    assert_eq!(game.tick(), Some(StepOutcome::Moved));
    assert_eq!(cells(&game), [(13, 14), (13, 15), (13, 16)]);
}

#[test]
fn space_resumes() {
    let mut game = new_game();
    press(&mut game, KeyCode::Up);
    press(&mut game, KeyCode::Esc);
    assert_eq!(game.status(), Status::Paused);
    press(&mut game, KeyCode::Char(' '));
    assert_eq!(game.status(), Status::Running);
}

#[test]
fn focus_lost_pauses() {
    let mut game = new_game();
    press(&mut game, KeyCode::Up);
    assert!(game.handle_event(Event::FocusLost).is_continue());
    assert_eq!(game.status(), Status::Paused);
}

#[test]
fn quit() {
    let mut game = new_game();
    assert!(game
        .handle_event(Event::Key(KeyCode::Char('q').into()))
        .is_break());
}

#[test]
fn over_ignores_everything_but_reset() {
    let mut game = new_game();
    game.state.snake = Snake::from_cells([Cell::new(13, 0), Cell::new(13, 1)]).unwrap();
    game.state.food = Cell::new(0, 0);
    press(&mut game, KeyCode::Up);
    assert_eq!(
        game.tick(),
        Some(StepOutcome::Collided(step::Collision::Wall))
    );
    assert_eq!(game.status(), Status::Over);
    for code in [KeyCode::Left, KeyCode::Char('p'), KeyCode::Char(' ')] {
        press(&mut game, code);
        assert_eq!(game.status(), Status::Over);
    }
    assert_eq!(game.tick(), None);
    press(&mut game, KeyCode::Char('r'));
    assert_eq!(game.status(), Status::Idle);
}

#[rstest]
#[case(Status::Idle)]
#[case(Status::Running)]
#[case(Status::Paused)]
#[case(Status::Over)]
fn reset_from_any_status(#[case] status: Status) {
    let mut game = new_game();
    game.state.snake = Snake::from_cells([Cell::new(2, 2), Cell::new(2, 3)]).unwrap();
    game.state.status = status;
    game.state.heading = Direction::Down;
    game.state.scores = Scoreboard::new(6);
    game.state.scores.record_feed();
    game.state.scores.record_feed();
    game.steering.put(Direction::Right);
    assert!(game.handle_command(Command::Reset).is_continue());
    assert_eq!(game.status(), Status::Idle);
    assert_eq!(cells(&game), [(13, 15), (13, 16), (13, 17)]);
    assert_eq!(game.state.heading, Direction::Up);
    assert_eq!(game.state.scores.score(), 0);
    assert_eq!(game.state.scores.high_score(), 6);
    assert_eq!(game.steering.take(), None);
}

#[test]
fn reset_moves_food_off_snake() {
    let mut game = new_game();
    game.state.food = Cell::new(13, 16);
    game.reset();
    assert!(!game.state.snake.contains(game.state.food));
    assert!(consts::GRID.contains(game.state.food));
}

#[test]
fn reset_keeps_food_elsewhere() {
    let mut game = new_game();
    game.state.food = Cell::new(1, 1);
    game.reset();
    assert_eq!(game.state.food, Cell::new(1, 1));
}

#[test]
fn render_idle() {
    let mut game = new_game();
    game.state.food = Cell::new(3, 4);
    let area = Rect::new(0, 0, 60, 27);
    let mut buffer = Buffer::empty(area);
    game.render(area, &mut buffer);
    let mut expected = Buffer::with_lines([
        " Score: 0   High Score: 0                                   ",
        "               ┌────────────────────────────┐               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │   ●                        │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │             v              │               ",
        "               │             ⚬              │               ",
        "               │             ⚬              │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               └────────────────────────────┘               ",
        " Press an arrow key to start                                ",
        " [Pause (p)] [Resume (space)] [Reset (r)] [Quit (q)]        ",
    ]);
    expected.set_style(Rect::new(0, 0, 60, 1), consts::SCORE_BAR_STYLE);
    expected.set_style(Rect::new(19, 6, 1, 1), consts::FOOD_STYLE);
    expected.set_style(Rect::new(29, 17, 1, 3), consts::SNAKE_STYLE);
    expected.set_style(Rect::new(1, 26, 11, 1), consts::DISABLED_STYLE);
    expected.set_style(Rect::new(22, 26, 5, 1), consts::KEY_STYLE);
    expected.set_style(Rect::new(38, 26, 1, 1), consts::KEY_STYLE);
    expected.set_style(Rect::new(49, 26, 1, 1), consts::KEY_STYLE);
    pretty_assertions::assert_eq!(buffer, expected);
}

#[test]
fn render_game_over() {
    let mut game = new_game();
    game.state.snake =
        Snake::from_cells([Cell::new(13, 0), Cell::new(13, 1), Cell::new(13, 2)]).unwrap();
    game.state.food = Cell::new(20, 10);
    game.state.scores = Scoreboard::new(5);
    game.state.scores.record_feed();
    game.state.scores.record_feed();
    game.state.status = Status::Over;
    let area = Rect::new(0, 0, 60, 27);
    let mut buffer = Buffer::empty(area);
    game.render(area, &mut buffer);
    let mut expected = Buffer::with_lines([
        " Score: 2   High Score: 5                                   ",
        "               ┌────────────────────────────┐               ",
        "               │             ×              │               ",
        "               │             ⚬              │               ",
        "               │             ⚬              │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                    ●       │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               │                            │               ",
        "               └────────────────────────────┘               ",
        " Game over; press r to play again                           ",
        " [Pause (p)] [Resume (space)] [Reset (r)] [Quit (q)]        ",
    ]);
    expected.set_style(Rect::new(0, 0, 60, 1), consts::SCORE_BAR_STYLE);
    expected.set_style(Rect::new(29, 2, 1, 1), consts::COLLISION_STYLE);
    expected.set_style(Rect::new(29, 3, 1, 2), consts::SNAKE_STYLE);
    expected.set_style(Rect::new(36, 12, 1, 1), consts::FOOD_STYLE);
    expected.set_style(Rect::new(1, 26, 11, 1), consts::DISABLED_STYLE);
    expected.set_style(Rect::new(13, 26, 16, 1), consts::DISABLED_STYLE);
    expected.set_style(Rect::new(38, 26, 1, 1), consts::KEY_STYLE);
    expected.set_style(Rect::new(49, 26, 1, 1), consts::KEY_STYLE);
    pretty_assertions::assert_eq!(buffer, expected);
}
