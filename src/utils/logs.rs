use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "info";

// RUST_LOG takes precedence over the default info level when it parses.
pub(crate) fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

pub fn setup_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives.as_deref()))
        // disable printing the name of the module in every log line.
        .with_target(false)
        // plain output, the json lines are meant for collectors rather than terminals.
        .with_ansi(false)
        .json()
        .try_init();
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;
    use crate::utils::logs::{build_filter, setup_tracing};

    #[tokio::test]
    async fn test_should_build_default_filter() {
        assert_eq!(Some(LevelFilter::INFO), build_filter(None).max_level_hint());
    }

    #[tokio::test]
    async fn test_should_build_filter_from_directives() {
        assert_eq!(Some(LevelFilter::DEBUG), build_filter(Some("debug")).max_level_hint());
    }

    #[tokio::test]
    async fn test_should_setup_tracing_twice() {
        setup_tracing();
        setup_tracing();
    }
}
