use std::str::FromStr;
use tracing::Level;

// Installs the JSON subscriber once per process. Unknown levels fall back to info.
pub fn setup_tracing(level: &str) {
    let max_level = Level::from_str(level).unwrap_or(Level::INFO);
    let _ = tracing_subscriber::fmt()
        .with_max_level(max_level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // ANSI color codes show up garbled in CloudWatch and piped logs.
        .with_ansi(false)
        // the hosting platform stamps each line with its ingestion time.
        .without_time()
        .json()
        .try_init();
}

#[cfg(test)]
mod tests {
    use crate::utils::logs::setup_tracing;

    #[tokio::test]
    async fn test_should_setup_tracing_more_than_once() {
        setup_tracing("debug");
        setup_tracing("not-a-level");
        tracing::info!("tracing installed");
    }
}
