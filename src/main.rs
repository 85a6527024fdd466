use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;
use zide::app::Workbench;
use zide::kernel::services::adapters::{ensure_settings_file, load_settings, AsyncRuntime};
use zide::tui::crossterm::poll_event;
use zide::tui::terminal_guard::{TerminalGuard, TerminationSignal};
use zide::tui::view::View;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

const USAGE: &str = "\
Usage: zide [--help | --version]

A mock IDE in the terminal: explorer, editor, terminal and assistant.

Keys:
  Ctrl+E / Ctrl+J / Ctrl+L   focus explorer / terminal / assistant
  Esc                        focus editor
  F6                         cycle focus
  Ctrl+K                     show or hide the assistant
  Ctrl+W, Alt+Left/Right     close tab, switch tabs
  Ctrl+Q                     quit";

#[derive(Debug, PartialEq, Eq)]
enum CliAction {
    Run,
    Help,
    Version,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliAction, String> {
    let mut action = CliAction::Run;
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => action = CliAction::Help,
            "-V" | "--version" => action = CliAction::Version,
            other => return Err(format!("unexpected argument '{other}'")),
        }
    }
    Ok(action)
}

fn main() {
    match parse_args(std::env::args().skip(1)) {
        Ok(CliAction::Run) => {}
        Ok(CliAction::Help) => {
            println!("{USAGE}");
            return;
        }
        Ok(CliAction::Version) => {
            println!("zide {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Err(msg) => {
            eprintln!("zide: {msg}\n\n{USAGE}");
            std::process::exit(2);
        }
    }

    let mut logging = logging::init();
    let log_rx = logging.as_mut().and_then(|guard| guard.take_log_rx());

    let code = match run(log_rx) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "zide exited with error");
            eprintln!("zide: {e}");
            1
        }
    };

    // Flush the log writer before exiting.
    drop(logging);
    std::process::exit(code);
}

fn run(log_rx: Option<Receiver<String>>) -> io::Result<i32> {
    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "settings file unavailable, using defaults");
    }
    let settings = load_settings();

    let (msg_tx, msg_rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(msg_tx)?;
    let mut workbench = Workbench::new(&settings, runtime, log_rx);

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    #[cfg(unix)]
    let _signals =
        zide::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let mut dirty = true;
    let code = loop {
        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                workbench.render(frame, area);
            })?;
            dirty = false;
        }

        if let Some(event) = poll_event(POLL_INTERVAL)? {
            if workbench.handle_input(&event).is_quit() {
                break 0;
            }
            dirty = true;
        }

        dirty |= workbench.drain_messages(&msg_rx);
        dirty |= workbench.tick();

        if let Ok(signal) = signal_rx.try_recv() {
            break signal.exit_code();
        }
        if workbench.should_quit() {
            break 0;
        }
    };

    drop(terminal);
    drop(guard);
    tracing::info!(code, "zide exiting");
    Ok(code)
}
