use clap::Parser;
use gof_core::cli::{run, Cli};
use gof_core::exit_codes::ExitCode;
use gof_core::logging::init_logging;
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    let code = match run(&cli).and_then(|report| Ok(serde_json::to_string_pretty(&report)?)) {
        Ok(json) => {
            println!("{json}");
            ExitCode::Clean
        }
        Err(err) => {
            debug!(code = err.code(), error = %err, "summary failed");
            eprintln!("error: {err}");
            ExitCode::from(&err)
        }
    };
    std::process::exit(code.as_i32());
}
