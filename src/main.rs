// algoviz: step-by-step algorithm playback in the terminal

use std::fs::File;
use std::io;
use std::sync::Mutex;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algoviz::config::{Config, SourceSelection};
use algoviz::samples::Sample;
use algoviz::simulator;
use algoviz::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("Usage: algoviz [FILE] [--sample ID] [--speed 0.5x|1x|2x|4x|10x] [--loop] [--trace] [--log PATH]");
            eprintln!("       algoviz --list-samples");
            std::process::exit(1);
        }
    };

    if config.list_samples {
        for sample in Sample::ALL {
            println!("{:<24} {}", sample.id(), sample.title());
        }
        return Ok(());
    }

    // The TUI owns the terminal, so logs only ever go to a file
    if let Some(path) = &config.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .init();
    }

    let source = match config.load_source() {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if config.print_trace {
        let trace = simulator::generate(&source);
        for step in &trace {
            println!("{} {} {} {}", step.id, step.line, step.kind, step.description);
        }
        eprintln!("{} steps", trace.len());
        return Ok(());
    }

    let sample = match &config.source {
        SourceSelection::Sample(sample) => Some(*sample),
        SourceSelection::File(_) => None,
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source, sample, config.playback());
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
