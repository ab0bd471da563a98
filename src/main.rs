//! Binary entrypoint that serves the trendlens UI.

use std::process::ExitCode;

use trendlens::start_trendlens;

fn main() -> ExitCode {
    start_trendlens::run()
}
