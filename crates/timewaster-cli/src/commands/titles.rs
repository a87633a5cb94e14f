//! Print the full tier/title table.

use serde_json::json;

use timewaster_core::{title_pool, EfficiencyTier};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let tiers = [
        EfficiencyTier::LowAttention,
        EfficiencyTier::WhyClicking,
        EfficiencyTier::ThoughtsGone,
        EfficiencyTier::CertifiedChaos,
    ];
    let table: Vec<_> = tiers
        .into_iter()
        .map(|tier| {
            json!({
                "tier": tier,
                "label": tier.label(),
                "titles": title_pool(tier),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}
