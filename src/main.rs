mod game_events;
mod input;
mod ui;

use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use game_events::{apply_game_events, Presentation};
use input::{map_key, KeyAction};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use skyward::build_info;
use skyward::core::{Game, GameConfig, GameInput};
use skyward::storage::{JsonFileStore, KeyValueStore, MemoryStore};
use skyward::utils::logging::init_file_logging;
use std::io;
use std::time::{Duration, Instant};

/// Input poll timeout. Bounds how long a frame waits for a key.
const FRAME_POLL_MS: u64 = 8;
/// How long the flap sprite shows when the terminal cannot report key releases.
const SYNTHETIC_RELEASE_MS: u64 = 120;

#[derive(Debug, Default)]
struct Options {
    no_save: bool,
    reset_high_score: bool,
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    if let Err(e) = init_file_logging() {
        eprintln!("Warning: could not open log file: {}", e);
    }

    let config = GameConfig::load();
    let store = open_store(options.no_save);
    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(config, store, rng);

    if options.reset_high_score {
        game.reset_high_score();
        println!("High score cleared.");
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let releases_reported = supports_keyboard_enhancement().unwrap_or(false);
    if releases_reported {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut game, releases_reported);

    // Restore terminal even if the loop failed
    if releases_reported {
        terminal.backend_mut().execute(PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "game loop failed");
    }
    result
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Skyward - a terminal side-scroller\n");
                println!("Usage: skyward [options]\n");
                println!("Options:");
                println!("  --no-save            Play without reading or writing the high score");
                println!("  --reset-high-score   Clear the stored high score and exit");
                println!("  --seed <N>           Seed obstacle placement");
                println!("  --version            Show version information");
                println!("  --help               Show this help message");
                println!("\nControls: Enter to start, Space/Up to ascend, Q to quit.");
                println!("Tuning: ~/.skyward/config.json   Logs: ~/.skyward/skyward.log");
                std::process::exit(0);
            }
            "--no-save" => options.no_save = true,
            "--reset-high-score" => options.reset_high_score = true,
            "--seed" => {
                let seed = args.get(i + 1).and_then(|s| s.parse().ok());
                if seed.is_none() {
                    eprintln!("--seed needs a number");
                    std::process::exit(1);
                }
                options.seed = seed;
                i += 1;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'skyward --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    options
}

/// The high-score store. Falls back to memory if the save directory is unusable.
fn open_store(no_save: bool) -> Box<dyn KeyValueStore> {
    if no_save {
        return Box::new(MemoryStore::new());
    }
    match JsonFileStore::open_default() {
        Ok(store) => {
            tracing::debug!(path = %store.path().display(), "opened high-score store");
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!(error = %e, "high score will not be saved");
            Box::new(MemoryStore::new())
        }
    }
}

fn run<B: Backend, S: KeyValueStore, R: Rng>(
    terminal: &mut Terminal<B>,
    game: &mut Game<S, R>,
    releases_reported: bool,
) -> io::Result<()> {
    let mut presentation = Presentation::new();
    let mut last_frame = Instant::now();
    let mut pending_release: Option<Instant> = None;

    loop {
        terminal.draw(|frame| ui::draw(frame, game.session(), game.config(), &presentation))?;

        // Poll for input (non-blocking, short timeout)
        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                match map_key(key_event) {
                    KeyAction::Quit => break,
                    KeyAction::Game(input) => {
                        if input == GameInput::AscendPress && !releases_reported {
                            pending_release =
                                Some(Instant::now() + Duration::from_millis(SYNTHETIC_RELEASE_MS));
                        }
                        let events = game.handle_input(input);
                        apply_game_events(&mut presentation, &events);
                    }
                    KeyAction::Ignore => {}
                }
            }
        }

        if pending_release.is_some_and(|at| Instant::now() >= at) {
            pending_release = None;
            let events = game.handle_input(GameInput::AscendRelease);
            apply_game_events(&mut presentation, &events);
        }

        // Whole milliseconds only; the fraction carries into the next frame.
        let dt_ms = last_frame.elapsed().as_millis() as u64;
        last_frame += Duration::from_millis(dt_ms);
        let events = game.advance(dt_ms);
        apply_game_events(&mut presentation, &events);
    }

    tracing::info!(high_score = game.session().high_score, "quit");
    Ok(())
}
