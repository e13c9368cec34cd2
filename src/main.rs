// tacocat: step-through two-pointer palindrome visualizer for the terminal

mod algorithm;
mod playback;
mod trace;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algorithm::EXAMPLE_STRINGS;
use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("tacocat");
        eprintln!("Usage: {} [string to check]", program_name);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} \"racecar\"", program_name);
        eprintln!("  {} \"A man, a plan, a canal: Panama\"", program_name);
        eprintln!();
        eprintln!("With no argument, a bundled example string is used.");
        eprintln!("Press 'e' inside the TUI to enter a new string.");
        std::process::exit(0);
    }

    // Remaining arguments form the input string
    let input = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        EXAMPLE_STRINGS[0].to_string()
    };

    let mut app = App::new(&input);
    eprintln!("Generating trace for \"{}\"...", input);
    eprintln!("Total steps: {}", app.playback.total_steps());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
