use color_eyre::Result;

/// Install the JSON file subscriber. The terminal belongs to the TUI, so
/// events only go anywhere when built with the `trace-log` feature.
#[cfg(feature = "trace-log")]
pub fn init() -> Result<()> {
    use std::fs::File;
    use std::sync::Mutex;

    use color_eyre::eyre::{WrapErr, eyre};

    let path = std::env::temp_dir().join("ticktop.log");
    let file = File::create(&path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .json()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(Mutex::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))?;
    tracing::info!(path = %path.display(), "trace log enabled");
    Ok(())
}

#[cfg(not(feature = "trace-log"))]
pub fn init() -> Result<()> {
    Ok(())
}
