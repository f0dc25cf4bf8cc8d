mod catch;
mod config;
mod constants;
mod input;
mod ui;

use catch::logic::tick_catch;
use catch::types::CatchGame;
use config::GameConfig;
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use input::HeldTracker;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config = GameConfig::default();

    if args.len() > 1 {
        match args[1].as_str() {
            "--config" => {
                let Some(path) = args.get(2) else {
                    eprintln!("--config requires a path");
                    std::process::exit(1);
                };
                config = GameConfig::load(Path::new(path))?;
            }
            "--version" | "-v" => {
                println!("windfall {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Windfall - Terminal Arcade Catcher\n");
                println!("Steer the basket with the arrow keys and catch what falls.");
                println!("Leaves are worth 10 points, bricks 25.\n");
                println!("Usage: windfall [--config <path>]\n");
                println!("Options:");
                println!("  --config <path>  Load cosmetic settings from a JSON file");
                println!("  --version        Show version information");
                println!("  --help           Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'windfall --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;

    // Real press/release pairs where the terminal supports them; the held
    // tracker falls back to repeat-decay elsewhere.
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = CatchGame::new();
    let mut tracker = HeldTracker::new(release_events);
    let mut rng = rand::thread_rng();

    let session_start = Instant::now();
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| {
            ui::catch_scene::render_catch_scene(frame, frame.size(), &game, &config);
        })?;

        // Poll for input (~16ms, the frame cadence)
        if event::poll(Duration::from_millis(constants::PHYSICS_TICK_MS))? {
            if let Event::Key(key) = event::read()? {
                let quit = matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                    && key.kind != KeyEventKind::Release;
                if quit {
                    break;
                }
                tracker.handle_key(&key, session_start.elapsed().as_millis() as u64);
            }
        }

        let now_ms = session_start.elapsed().as_millis() as u64;
        let dt_ms = last_frame.elapsed().as_millis() as u64;
        last_frame = Instant::now();

        tick_catch(&mut game, dt_ms, tracker.held(now_ms), &mut rng);
    }

    // Restore terminal
    if release_events {
        terminal.backend_mut().execute(PopKeyboardEnhancementFlags)?;
    }
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;

    Ok(())
}
