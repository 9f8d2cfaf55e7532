use calcalyzer::{
    error::SessionError,
    run_session,
    terminal::{PromptReader, StreamWriter},
};
use clap::Parser;

/// calcalyzer is an interactive calculator that analyzes every result it
/// computes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log filter used when `RUST_LOG` is not set. Logs go to stderr.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Skips the welcome banner.
    #[arg(long)]
    no_banner: bool,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    match run_session(PromptReader::stdio(), StreamWriter::stdout(), !args.no_banner) {
        Ok(_) => {},
        Err(SessionError::EndOfInput { prompt }) => {
            println!();
            log::info!("Input closed at prompt '{}'", prompt.trim_end());
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
