//! Preview tier and title for a hypothetical session.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use timewaster_core::{format_elapsed, pick_title, ReportStats};

pub fn run(clicks: u64, seconds: u64, seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let stats = ReportStats::compute(clicks, seconds);
    let title = match seed {
        Some(seed) => pick_title(stats.tier, &mut StdRng::seed_from_u64(seed)),
        None => pick_title(stats.tier, &mut rand::thread_rng()),
    };

    let report = json!({
        "total_clicks": clicks,
        "elapsed_seconds": seconds,
        "elapsed": format_elapsed(seconds),
        "tier": stats.tier,
        "tier_label": stats.tier.label(),
        "minutes_wasted": stats.minutes_wasted,
        "productivity_lost": stats.productivity_lost,
        "title": title,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
