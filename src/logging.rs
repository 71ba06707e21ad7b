use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Installs the global subscriber, writing to stderr so it never mixes with
/// the token listing.
///
/// `RUST_LOG` wins when set; otherwise `-v` enables debug and `-vv` trace
/// output for this crate. The error log already echoes diagnostics, so the
/// default filter leaves their warn events out.
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level = match verbosity {
                0 => "error",
                1 => "manual_scanner=debug",
                _ => "manual_scanner=trace",
            };
            EnvFilter::new(level)
        });

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
