//! Detective Quest: a mansion-exploration mystery for the terminal
//!
//! Explore the mansion, collect the clues, and name the culprit.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use detective_quest::tui::App;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout};

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new();

    // Main loop
    while app.running {
        // Draw
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        // Handle input
        if !app.handle_input()? {
            break;
        }
    }

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  The case file is closed.                              ║");
    println!("║  Thanks for playing Detective Quest!                   ║");
    println!("║                                                        ║");
    println!("║  Keep your eyes open, detective.                       ║");
    println!("╚════════════════════════════════════════════════════════╝\n");

    Ok(())
}
