use std::io;

use tracing::{debug, info};

use arith::api;
use arith::core::parse::parse_pair;
use arith::report::write_report;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    let input = parse_pair(&args.operands).ok_or(AppError::Usage)?;
    debug!("parsed operands: a={} b={}", input.a, input.b);

    let result = api::run_computation(input);
    debug!(
        "computed: mul={} div_present={}",
        result.mul,
        result.div.is_some()
    );

    // Inputs and mul are always reported; the div block only on success
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &result)?;

    api::require_division(&result)?;
    info!("computation complete");
    Ok(())
}
