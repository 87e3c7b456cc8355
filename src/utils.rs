use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so the report on stdout stays clean.
pub fn setup_logging(verbose: bool) {
    let level = if verbose { "info" } else { "error" };
    let timer = LocalTime::new(format_description!(
        "[hour]:[minute]:[second].[subsecond digits:3]"
    ));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_timer(timer)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if args.top == 0 {
        anyhow::bail!("--top must be greater than 0");
    }

    if args.window == 0 {
        anyhow::bail!("--window must be greater than 0");
    }

    Ok(())
}

/// Length of `window` half-hour periods in hours: 3 -> "1.5", 4 -> "2".
pub fn window_hours_label(window: usize) -> String {
    if window % 2 == 0 {
        (window / 2).to_string()
    } else {
        format!("{}.5", window / 2)
    }
}
