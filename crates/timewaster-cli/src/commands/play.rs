//! The interactive five-page run.

use timewaster_core::{Journey, Page, SessionStore};

use crate::config::PlayConfig;
use crate::pages::{self, Emitter, Outcome};

pub fn run(events: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = PlayConfig::load()?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(play(config, Emitter::new(events)))
}

async fn play(config: PlayConfig, emitter: Emitter) -> Result<(), Box<dyn std::error::Error>> {
    let store = SessionStore::new();
    emitter.emit(&store.snapshot_event());
    let mut journey = Journey::new(store);

    loop {
        let outcome = match journey.page() {
            Page::WhyAreYouHere => pages::why_are_you_here(&mut journey, &config, &emitter).await?,
            Page::TimeWasting => pages::time_wasting(&mut journey, &config, &emitter).await?,
            Page::PointlessActions => {
                pages::pointless_actions(&mut journey, &config, &emitter).await?
            }
            Page::PickACard => pages::pick_a_card(&mut journey, &config, &emitter).await?,
            Page::FinalReport => pages::final_report(&mut journey, &config, &emitter).await?,
        };
        if outcome == Outcome::Quit {
            // Giving up mid-session still stops the clock.
            if let Some(event) = journey.store().stop_timer() {
                emitter.emit(&event);
            }
            println!("Fine. Go be productive.");
            return Ok(());
        }
    }
}
