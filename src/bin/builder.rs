use creational_patterns::application::builder;
use creational_patterns::{DemoConfig, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    let config = DemoConfig::default();
    let mut stdout = std::io::stdout().lock();

    if let Err(e) = builder::run(&config, &mut stdout) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
