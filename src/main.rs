use std::env;
use std::sync::Arc;

use chrono::Local;
use tracing_subscriber::EnvFilter;

use tablebook::api::{BookingApi, RestApi};
use tablebook::config::AppConfig;
use tablebook::models::BookingMode;
use tablebook::services::selector::FetchPhase;
use tablebook::services::timezone;
use tablebook::session::BookingSession;

/// Read-only storefront preview: lists a business's services and the
/// bookable slots for one date and party size. Never creates a booking.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    anyhow::ensure!(
        !config.business_slug.is_empty(),
        "BUSINESS_SLUG must be set"
    );

    let api: Arc<RestApi> = Arc::new(RestApi::new(config.api_base_url.clone()));

    let business = api.business_details(&config.business_slug).await?;
    tracing::info!(business = %business.name, timezone = %business.timezone, "loaded business");
    let tz = timezone::resolve_zone(&business.timezone)?;

    let services = api.business_services(&config.business_slug).await?;
    println!("{} services:", business.name);
    for service in services.iter().filter(|s| s.active) {
        println!(
            "  {} - {} ({} min)",
            service.name,
            service.display_price(&business.currency),
            service.duration_minutes
        );
        let hours = service.weekly_hours();
        if !hours.is_empty() {
            println!("    open {hours}");
        }
    }

    let Some(service) = services
        .into_iter()
        .find(|s| s.active && s.mode == BookingMode::Appointment)
    else {
        anyhow::bail!("no active appointment-mode service to preview");
    };

    let today = Local::now().date_naive();
    let date = match env::var("BOOKING_DATE") {
        Ok(s) => timezone::parse_local_date(&s)?,
        Err(_) => today,
    };
    let party_size: u32 = env::var("PARTY_SIZE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(2);

    let mut session = BookingSession::new(api, config.business_slug.clone(), service, today);
    session.set_party_size(party_size).await?;
    session.set_date(date).await?;

    match session.selector().phase() {
        FetchPhase::Loaded => {
            println!(
                "\nAvailable on {} for a party of {party_size}:",
                timezone::format_ymd(date)
            );
            if session.selector().slots().is_empty() {
                println!("  (no slots)");
            }
            for slot in session.selector().slots() {
                println!(
                    "  {} - {}",
                    timezone::format_time_in_zone(slot.starts_at, tz, config.clock),
                    timezone::format_time_in_zone(slot.ends_at, tz, config.clock),
                );
            }
            match session.assigned_table() {
                Ok(table) => println!("\nYour party would be seated at table {}.", table.code),
                Err(e) => println!("\n{e}"),
            }
        }
        FetchPhase::Failed => {
            let reason = session.selector().error().unwrap_or("unknown error");
            anyhow::bail!("availability check failed: {reason}");
        }
        FetchPhase::Idle | FetchPhase::Loading => unreachable!("fetch completed above"),
    }

    Ok(())
}
