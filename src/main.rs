//! be - a small modal, line-oriented terminal text editor
//! Main entry point

use anyhow::{Context, Result};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::io::Write;
use std::process::ExitCode;

use be::cli::{self, CliAction};
use be::config::Config;
use be::constants::env;
use be::editor::Editor;
use be::file_io::FsIo;
use be::message::{lookup, MessageId};
use be::term::ansi;
use be::term::crossterm::CrosstermBackend;

/// Log to the file named by `BE_LOG`; the terminal is in raw mode, so
/// without it logging stays off
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(env::LOG) else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.to_string_lossy()))?;

    let mut logger = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        logger.filter_level(LevelFilter::Info);
    }
    logger.target(env_logger::Target::Pipe(Box::new(file)));
    logger.init();
    Ok(())
}

/// Restore the terminal before the default hook prints the panic
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut out = std::io::stdout();
        let _ = out.write_all(ansi::CLEAR_SCREEN);
        let _ = out.write_all(ansi::CURSOR_HOME);
        let _ = out.write_all(ansi::SHOW_CURSOR);
        let _ = out.flush();
        original_hook(panic_info);
    }));
}

fn run() -> Result<ExitCode> {
    let path = match cli::parse(std::env::args().skip(1)) {
        CliAction::Open(path) => path,
        CliAction::Usage => {
            eprintln!("{}", lookup(MessageId::Usage));
            return Ok(ExitCode::from(2));
        }
        CliAction::Version => {
            println!("be-{}", env!("CARGO_PKG_VERSION"));
            return Ok(ExitCode::SUCCESS);
        }
    };

    init_logging()?;
    install_panic_hook();

    let config = Config::load();
    let backend = CrosstermBackend::new(config.idle_timeout())?;
    let mut editor = Editor::new(backend, Box::new(FsIo), config)?;
    editor
        .open(path.as_deref())
        .with_context(|| format!("opening {}", path.unwrap_or_default().display()))?;
    editor.run()?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("be: {e:#}");
            ExitCode::FAILURE
        }
    }
}
