use estate_tracker::compare::ComparisonTable;
use estate_tracker::config::AppConfig;
use estate_tracker::detail::load_detail;
use estate_tracker::engine::{ListingEngine, ViewResult};
use estate_tracker::models::format_price;
use estate_tracker::settings::{SettingsStore, Theme};
use estate_tracker::sources::{self, LoadState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("estate_tracker=info")),
        )
        .init();

    info!("🏠 EstateTracker - Property Dashboard");
    info!("=====================================");

    let config = AppConfig::from_env()?;

    let settings = match &config.settings_path {
        Some(path) => SettingsStore::load(path).await,
        None => SettingsStore::default(),
    };
    let theme = settings.current().theme();
    info!("Theme: {}", if theme == Theme::Dark { "dark" } else { "light" });

    let source = sources::build(&config.source)?;

    // The fetch is the only await in the listing path; Ctrl-C drops it.
    let mut state = LoadState::Loading;
    info!("Loading properties from {}...", source.source_name());
    tokio::select! {
        loaded = sources::load(source.as_ref()) => state = loaded,
        _ = tokio::signal::ctrl_c() => warn!("Interrupted while loading properties"),
    }

    let snapshot = match state {
        LoadState::Loaded(snapshot) => snapshot,
        LoadState::Failed(reason) => {
            error!("Failed to fetch properties: {}", reason);
            println!("Could not load properties. Please try again later.");
            return Ok(());
        }
        LoadState::Loading => {
            println!("Loading interrupted, nothing to show.");
            settings.persist().await?;
            return Ok(());
        }
    };

    let engine = ListingEngine::new(snapshot.records, config.view_state());
    let view = engine.view();
    print_listing(&view, settings.current().compact_mode);

    if !config.compare.is_empty() {
        print_comparison(&ComparisonTable::build(engine.records(), config.compare.as_slice()));
    }

    if let Some(id) = &config.detail {
        let mut rng = StdRng::from_entropy();
        match load_detail(source.as_ref(), id, &mut rng).await {
            Ok(detail) => {
                println!("== {} ==", detail.record.title);
                println!("   {} · {}", detail.record.city, format_price(detail.record.price));
                for point in &detail.price_history {
                    println!("   {:>4}  {}", point.month, format_price(point.price));
                }
                println!();
            }
            Err(e) if e.is_not_found() => {
                warn!("{}", e);
                println!("Property {} not found, back to the listing.", id);
            }
            Err(e) => error!("Failed to load property {}: {}", id, e),
        }
    }

    settings.persist().await?;
    Ok(())
}

fn print_listing(view: &ViewResult, compact: bool) {
    if view.is_empty() {
        println!("No properties found.");
        return;
    }

    for (i, property) in view.items.iter().enumerate() {
        println!("{}. {} ({})", i + 1, property.title, format_price(property.price));
        if compact {
            continue;
        }
        println!("   City: {}", property.city);
        println!("   Size: {} sq ft", property.size);
        println!(
            "   Bedrooms: {}, Bathrooms: {}",
            property.bedrooms, property.bathrooms
        );
        if let Some(rating) = property.rating {
            println!("   Rating: {:.1}", rating);
        }
        println!("   ID: {}", property.id);
        println!();
    }

    println!(
        "Page {} of {} · {} matching properties",
        view.current_page, view.total_pages, view.total_matched
    );
}

fn print_comparison(table: &ComparisonTable) {
    if table.is_empty() {
        println!("Nothing to compare.");
        return;
    }

    println!("\n== Compare ==");
    for row in &table.rows {
        let mut marks = Vec::new();
        if table.cheapest.as_deref() == Some(row.id.as_str()) {
            marks.push("cheapest");
        }
        if table.largest.as_deref() == Some(row.id.as_str()) {
            marks.push("largest");
        }
        println!(
            "{} | {} | {} | {} bd | {} ba | {} sq ft | {}{}",
            row.title,
            row.location,
            format_price(row.price),
            row.bedrooms,
            row.bathrooms,
            row.size,
            row.tags.join(", "),
            if marks.is_empty() {
                String::new()
            } else {
                format!(" [{}]", marks.join(", "))
            }
        );
    }
    println!();
}
