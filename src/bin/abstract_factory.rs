use creational_patterns::application::abstract_factory;
use creational_patterns::{DemoConfig, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    let config = DemoConfig::default();
    let mut stdout = std::io::stdout().lock();

    match abstract_factory::run_program(&config, &mut stdout) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
