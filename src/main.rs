use file_null_pointer_deref::error::EXIT_OK;
use file_null_pointer_deref::metadata::FIXTURE;
use file_null_pointer_deref::{fault, logging, parse_invocation, sample};
use file_null_pointer_deref::{FixtureConfig, FixtureError, Outcome};
use std::process::ExitCode;
use tracing::{debug, warn};

fn main() -> ExitCode {
    logging::init().ok();

    debug!(
        "starting {}/{} ({}): {}",
        FIXTURE.dataset,
        FIXTURE.name,
        FIXTURE.cwe_labels().join(", "),
        FIXTURE.summary
    );

    match try_main() {
        Ok(outcome) => {
            fault::inject(outcome);
            ExitCode::from(EXIT_OK)
        }
        Err(e) => {
            warn!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn try_main() -> Result<Outcome, FixtureError> {
    let invocation = parse_invocation(std::env::args_os())?;

    // Configuration only affects the file path; other modes stay a no-op.
    let config = if invocation.wants_file() {
        FixtureConfig::from_env()?
    } else {
        FixtureConfig::default()
    };
    debug!("open-failure policy: {}", config.on_open_failure);

    sample::run(&invocation, &config)
}
