mod logging;
mod terminal;

use clap::Parser;
use std::io::{stdin, stdout, Write};
use std::process::ExitCode;
use tally::shell::Session;
use tally::SettingsBuilder;
use terminal::TerminalSurface;

/// Tally: a running-total calculator for the terminal
///
/// Reads commands from stdin, one line at a time: digit runs (`12`),
/// operators (`+ - * / % **`), `hold`/`release`/`shift`, `undo`, `clear`,
/// `digits=N`, `=X` to overwrite the result, `status` for a JSON snapshot,
/// and `quit`.
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(author, version, about)]
struct Cli {
    /// Digits per operand before it commits
    #[arg(short, long, env = "TALLY_DIGITS", default_value_t = 1)]
    digits: usize,

    /// Starting operator
    #[arg(short, long, env = "TALLY_OPERATOR", default_value = "+")]
    operator: String,

    /// Print a JSON snapshot after every line
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = match SettingsBuilder::new()
        .operator(cli.operator)
        .digit_count(cli.digits)
        .build()
    {
        Ok(settings) => settings,
        Err(errors) => {
            for error in errors.iter() {
                eprintln!("error: {error}");
            }
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        operator = %settings.operator,
        digits = settings.digit_count.get(),
        "session started"
    );

    let mut session = Session::new(&settings, TerminalSurface::default());
    println!("{}", session.surface().status_line());

    for line in stdin().lines().map_while(Result::ok) {
        match line.trim() {
            "quit" | "q" => break,
            "status" => print_snapshot(&session),
            line => {
                if let Err(err) = session.run_line(line) {
                    tracing::info!(%err, line, "line rejected");
                    eprintln!("error: {err}");
                }
                for fault in session.surface_mut().take_faults() {
                    eprintln!("warning: {fault}, result unchanged");
                }
                println!("{}", session.surface().status_line());
                if cli.json {
                    print_snapshot(&session);
                }
            }
        }
        if let Err(err) = stdout().flush() {
            tracing::debug!(%err, "stdout flush failed");
        }
    }

    tracing::info!(commands = session.dispatched(), "session ended");
    ExitCode::SUCCESS
}

fn print_snapshot(session: &Session<TerminalSurface>) {
    match serde_json::to_string(&session.tally().snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("error: {err}"),
    }
}
