// Tracing setup for hosts embedding the widget.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,paint_ui=debug,paint_core=debug";

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to
/// `DEFAULT_FILTER`. A subscriber that is already installed is kept as is.
pub fn init_tracing() -> anyhow::Result<()> {
    if tracing::dispatcher::has_been_set() {
        tracing::debug!("tracing subscriber already installed");
        return Ok(());
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
    {
        Ok(()) => Ok(()),
        // Another thread won the race to install one
        Err(_) if tracing::dispatcher::has_been_set() => Ok(()),
        Err(err) => Err(anyhow::anyhow!("install tracing subscriber: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_keeps_first_subscriber() {
        init_tracing().unwrap();
        init_tracing().unwrap();
        assert!(tracing::dispatcher::has_been_set());
    }
}
