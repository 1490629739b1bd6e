/*---------- Imports ----------*/
use tracing_subscriber::EnvFilter;

/*---------- Constants ----------*/
const DEFAULT_FILTER: &str = "info";

/// Installs the global `fmt` subscriber. `RUST_LOG` overrides the default
/// `info` filter. Calling it again after a subscriber is set is a no-op.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        // CloudWatch prefixes every line with its own ingestion time.
        .without_time()
        .with_target(false)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_can_be_called_twice() {
        init();
        init();
    }
}
