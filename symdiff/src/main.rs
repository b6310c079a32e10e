use std::{io::{self, Read}, process::ExitCode};
use symdiff::differentiate_and_simplify;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

/// Returns the expression to differentiate: the command line arguments joined by spaces, or all
/// of stdin if there are no arguments.
fn read_input() -> io::Result<String> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn main() -> ExitCode {
    // logs go to stderr, so that stdout only carries the result
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_env("SYMDIFF_LOG"))
        .init();

    let input = match read_input() {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: failed to read input: {}", err);
            return ExitCode::FAILURE;
        },
    };

    match differentiate_and_simplify(&input) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        },
        Err(err) => {
            if let Err(io_err) = err.report_to_stderr("input", &input) {
                eprintln!("error: {} ({})", err, io_err);
            }
            ExitCode::FAILURE
        },
    }
}
