use chrono::Local;
use std::io::{self, Write};

use env_logger::{Builder, Env, Target};

/// Environment variable naming a file that receives log records instead of
/// standard error.
pub const LOG_FILE_ENV: &str = "UNHEX_LOG_FILE";

/// Common initialization performed once before any conversion runs.
pub fn init_common() {
    restore_default_sigpipe();

    if let Ok(path) = std::env::var(LOG_FILE_ENV) {
        if let Err(err) = init_file_logger(&path) {
            eprintln!("Failed to initialize file logger at '{path}': {err}");
            init_stderr_logger();
        }
    } else {
        init_stderr_logger();
    }
}

/// Log to standard error at `warn` unless `RUST_LOG` says otherwise. Standard
/// output carries the converted bytes, so it is never a log target.
fn init_stderr_logger() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .init();
}

/// Append records to `path`, one line each, stamped with local time and the
/// process id so runs sharing a file can be told apart. Defaults to `debug`.
fn init_file_logger(path: &str) -> io::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let pid = std::process::id();

    Builder::from_env(Env::default().default_filter_or("debug"))
        .format(move |buf, record| {
            writeln!(
                buf,
                "{} unhex[{pid}] {:<5} {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(file)))
        .init();

    log::debug!("Logging to {path}");

    Ok(())
}

/// The Rust runtime ignores SIGPIPE, which turns a closed downstream pipe
/// into a write error. Put the default disposition back so the process ends
/// quietly like any other filter. SIGINT keeps its default and is not caught.
fn restore_default_sigpipe() {
    #[cfg(unix)]
    {
        // SAFETY: called once at startup before any other thread exists.
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
}
