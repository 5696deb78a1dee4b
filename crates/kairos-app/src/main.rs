use kairos_app::error::AppError;
use kairos_app::listing::{build_schedules, listing_from, render_listing};
use kairos_core::config::load_config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let built = build_schedules(&config.schedules);
    for (name, error) in &built.rejected {
        tracing::error!(schedule = %name, error = %error, "Skipping invalid schedule");
    }

    if built.rules.is_empty() {
        return Err(AppError::NoSchedules.into());
    }

    let from = listing_from(&config)?;
    let count = usize::try_from(config.listing.count).unwrap_or(usize::MAX);

    tracing::info!(
        schedules = built.rules.len(),
        count,
        from = ?from,
        "Listing occurrences"
    );

    for named in &built.rules {
        print!("{}", render_listing(named, count, from));
    }

    Ok(())
}
