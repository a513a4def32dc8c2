//! stderr logging through tracing-subscriber.
//!
//! `RUST_LOG` wins when set; otherwise the level is `warn`, or `debug`
//! for the gbln crates under `--verbose`.

use tracing_subscriber::EnvFilter;

const VERBOSE_DIRECTIVES: &str = "warn,gbln=debug,gbln_core=debug,gbln_io=debug,gbln_interchange=debug,gbln_cli=debug";

pub(crate) fn init(verbose: bool) {
    let default = if verbose { VERBOSE_DIRECTIVES } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A second initialisation (only possible in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
