use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use pacmind::prelude::*;

fn main() -> Result<()>
{
    // Read the dotenv file.
    dotenvy::dotenv().ok();

    // Parse the cli options.
    let options = HostOptions::parse();

    let _logger = Logger::try_with_env_or_str(options.log_level.clone())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(AdaptiveFormat::Default)
        .set_palette("b196;208;195;111;67".to_owned())
        .start()?;

    print_header();

    // A bad configuration fails fast; the host loop never starts.
    let mut host = Host::new(options).map_err(|e| {
        log::error!("invalid configuration: {}", e);
        e
    })?;

    match host.run()
    {
        | Ok(_) => Ok(()),
        | Err(e) if e.fatal() =>
        {
            log::error!("fatal error: {}", e);
            Err(e)
        }
        | Err(e) =>
        {
            log::error!("{}", e);
            Ok(())
        }
    }
}

fn print_header()
{
    log::info!("👻 starting {} v{} 👻", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    log::trace!("waka waka");
}
