use std::{
    io::{self, IsTerminal},
    process::ExitCode,
    thread,
};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use crossbeam_channel::bounded;
use log::info;
use readily_core::{
    app::ReaderApp,
    clock::SystemClock,
    content::TextBuffer,
    input::{COMMAND_QUEUE_CAPACITY, command_queue},
};

use cli::Cli;
use screen::TerminalDisplay;
use terminal::TerminalSession;

#[path = "main/cli.rs"]
mod cli;
#[path = "main/keys.rs"]
mod keys;
#[path = "main/logging.rs"]
mod logging;
#[path = "main/screen.rs"]
mod screen;
#[path = "main/terminal.rs"]
mod terminal;

const ENGINE_THREAD_NAME: &str = "readily-engine";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("readily: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("readily: reading text from stdin, finish with Ctrl-D");
    }
    let text = TextBuffer::from_reader(stdin.lock(), cli.decode_policy())
        .context("failed to load text")?;
    info!("boot: loaded chars={}", text.len());

    let session = TerminalSession::enter()?;
    let display = TerminalDisplay::stdout().context("failed to query terminal size")?;

    let (sender, receiver) = command_queue(COMMAND_QUEUE_CAPACITY);
    let mut app = ReaderApp::new(text, receiver, cli.reader_config(), &display);

    let (status_tx, status_rx) = bounded::<()>(1);
    let engine = thread::Builder::new()
        .name(ENGINE_THREAD_NAME.to_string())
        .spawn(move || {
            let mut display = display;
            let outcome = app.run(&mut display, &mut SystemClock::new());
            status_tx.send(()).ok();
            outcome
        })
        .context("failed to spawn engine thread")?;

    let input_exit = keys::run_input_loop(sender, &status_rx);
    let outcome = engine
        .join()
        .map_err(|_| anyhow!("engine thread panicked"))?;
    session.leave()?;

    let input_exit = input_exit?;
    let outcome = outcome.context("failed to draw to the terminal")?;
    info!("boot: exit input={:?} outcome={:?}", input_exit, outcome);
    Ok(())
}
