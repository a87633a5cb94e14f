//! Interactive page implementations for `play`.
//!
//! Page-local state (wait counts live in the journey gate; flip sets and
//! fake progress live here) belongs to the page's activation: created when
//! the page becomes active, dropped when it goes inactive. Only the
//! session counters survive navigation.

use std::collections::BTreeSet;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::Rng;
use tokio::task::JoinHandle;

use timewaster_core::{format_elapsed, Event, Journey, ReportStats};

use crate::config::PlayConfig;
use crate::flavor;

type BoxError = Box<dyn std::error::Error>;

/// What a page run ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Moved on (forward, or back to page one via restart).
    Advanced,
    /// The visitor gave up.
    Quit,
}

/// Optional JSON event stream on stderr.
pub struct Emitter {
    enabled: bool,
}

impl Emitter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn emit(&self, event: &Event) {
        if !self.enabled {
            return;
        }
        match serde_json::to_string(event) {
            Ok(json) => eprintln!("{json}"),
            Err(e) => eprintln!("event serialization failed: {e}"),
        }
    }

    fn emit_all(&self, events: &[Event]) {
        for event in events {
            self.emit(event);
        }
    }
}

/// Print a prompt and read one trimmed, lowercased line.
/// `None` means EOF.
async fn prompt(text: &str) -> Result<Option<String>, BoxError> {
    print!("{text}");
    io::stdout().flush()?;
    let line = tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line)),
            Err(e) => Err(e),
        }
    })
    .await??;
    Ok(line.map(|l| l.trim().to_lowercase()))
}

fn stats_bar(journey: &Journey) -> String {
    let store = journey.store();
    format!(
        "[{} | {} clicks]",
        format_elapsed(store.elapsed_seconds()),
        store.total_clicks()
    )
}

fn header(journey: &Journey) {
    println!();
    println!("=== {} ===", journey.page().title());
}

// ── Page 1: the warning ──────────────────────────────────────────────

pub async fn why_are_you_here(
    journey: &mut Journey,
    config: &PlayConfig,
    emitter: &Emitter,
) -> Result<Outcome, BoxError> {
    header(journey);
    println!("WARNING");
    println!(
        "You are about to waste a significant portion of your precious \
         time on absolutely nothing productive."
    );
    println!("Button stabilizing in {} seconds...", config.intro_delay_secs);
    tokio::time::sleep(Duration::from_secs(config.intro_delay_secs)).await;

    loop {
        match prompt("[ok] OK, I Accept My Fate  [q] quit > ").await? {
            None => return Ok(Outcome::Quit),
            Some(line) => match line.as_str() {
                "q" => return Ok(Outcome::Quit),
                "ok" => {
                    emitter.emit(&journey.record_action());
                    println!("Prepare yourself...");
                    tokio::time::sleep(Duration::from_secs(config.transition_delay_secs)).await;
                    emitter.emit_all(&journey.advance()?);
                    return Ok(Outcome::Advanced);
                }
                _ => println!("The button ignores you."),
            },
        }
    }
}

// ── Page 2: time wasting ─────────────────────────────────────────────

pub async fn time_wasting(
    journey: &mut Journey,
    config: &PlayConfig,
    emitter: &Emitter,
) -> Result<Outcome, BoxError> {
    header(journey);
    let mut rng = rand::thread_rng();
    // Creeps upward forever, capped short of done.
    let mut fake_progress: f64 = 0.0;

    loop {
        fake_progress = (fake_progress + rng.gen_range(0.0..3.0)).min(99.0);
        println!(
            "{}  Loading something important... {:.0}%",
            stats_bar(journey),
            fake_progress
        );
        println!(
            "Clicks on this page: {} / {}",
            journey.gate().count(),
            journey.gate().threshold()
        );

        let choices = if journey.can_advance() {
            "[w] Wait  [c] Continue to More Pointlessness  [q] quit > "
        } else {
            "[w] Wait  [q] quit > "
        };
        match prompt(choices).await? {
            None => return Ok(Outcome::Quit),
            Some(line) => match line.as_str() {
                "q" => return Ok(Outcome::Quit),
                "w" => {
                    emitter.emit(&journey.record_action());
                    if config.flavor {
                        println!("  {}", flavor::pick(&flavor::SARCASTIC_MESSAGES, &mut rng));
                    }
                }
                "c" if journey.can_advance() => {
                    emitter.emit(&journey.store().record_click());
                    emitter.emit_all(&journey.advance()?);
                    return Ok(Outcome::Advanced);
                }
                _ => println!("  Nothing happens. Fitting."),
            },
        }
    }
}

// ── Page 3: pointless actions ────────────────────────────────────────

pub async fn pointless_actions(
    journey: &mut Journey,
    config: &PlayConfig,
    emitter: &Emitter,
) -> Result<Outcome, BoxError> {
    header(journey);
    println!("Choose your meaningless adventure");
    let mut rng = rand::thread_rng();

    loop {
        println!(
            "{}  Pointless actions performed: {} / {}",
            stats_bar(journey),
            journey.gate().count(),
            journey.gate().threshold()
        );

        let choices = if journey.can_advance() {
            "[1] Click Again  [2] Do Something  [3] This Won't Help  \
             [c] Continue to Card Selection  [q] quit > "
        } else {
            "[1] Click Again  [2] Do Something  [3] This Won't Help  [q] quit > "
        };
        match prompt(choices).await? {
            None => return Ok(Outcome::Quit),
            Some(line) => match line.as_str() {
                "q" => return Ok(Outcome::Quit),
                "1" | "2" | "3" => {
                    emitter.emit(&journey.record_action());
                    // Same effect mapping as the buttons' animations.
                    let effect = match line.as_str() {
                        "1" => ["tilt", "invert"][rng.gen_range(0..2)],
                        "2" => ["explosion", "crack", "split"][rng.gen_range(0..3)],
                        _ => "glitch",
                    };
                    println!("  *screen does a {effect}*");
                    if config.flavor {
                        println!("  {}", flavor::pick(&flavor::ACTION_FEEDBACK, &mut rng));
                    }
                }
                "c" if journey.can_advance() => {
                    emitter.emit(&journey.store().record_click());
                    emitter.emit_all(&journey.advance()?);
                    return Ok(Outcome::Advanced);
                }
                _ => println!("  Nothing happens. Fitting."),
            },
        }
    }
}

// ── Page 4: pick a card ──────────────────────────────────────────────

const CARD_COUNT: usize = 7;

/// Page-local card table. Flips arrive from staggered one-shot tasks;
/// dropping the table aborts any still in flight, so a torn-down page
/// never gets late mutations.
struct CardTable {
    flipped: Arc<Mutex<BTreeSet<usize>>>,
    tasks: Vec<JoinHandle<()>>,
}

impl CardTable {
    fn new() -> Self {
        Self {
            flipped: Arc::new(Mutex::new(BTreeSet::new())),
            tasks: Vec::new(),
        }
    }

    fn is_flipped(&self, index: usize) -> bool {
        self.flipped.lock().map(|set| set.contains(&index)).unwrap_or(false)
    }

    fn any_flipped(&self) -> bool {
        self.flipped.lock().map(|set| !set.is_empty()).unwrap_or(false)
    }

    /// Flip every card with staggered timing, the picked one first in
    /// spirit: each card lands `stagger` after the previous.
    fn start_flip_sequence(&mut self, stagger: Duration) {
        for index in 0..CARD_COUNT {
            let flipped = Arc::clone(&self.flipped);
            self.tasks.push(tokio::spawn(async move {
                tokio::time::sleep(stagger * index as u32).await;
                if let Ok(mut set) = flipped.lock() {
                    set.insert(index);
                }
                let phrase = flavor::CARD_PHRASES[index];
                let snippet: Vec<&str> = phrase.split_whitespace().take(4).collect();
                println!("  card {} flips: \"{}...\"", index + 1, snippet.join(" "));
            }));
        }
    }
}

impl Drop for CardTable {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

pub async fn pick_a_card(
    journey: &mut Journey,
    config: &PlayConfig,
    emitter: &Emitter,
) -> Result<Outcome, BoxError> {
    header(journey);
    let mut table = CardTable::new();
    let stagger = Duration::from_millis(config.flip_stagger_ms);

    loop {
        println!("{}", stats_bar(journey));
        if table.any_flipped() {
            println!("All cards have been revealed!");
        } else {
            println!("Click any card to reveal all of them");
        }

        let choices = if journey.can_advance() {
            "[1-7] pick a card  [c] See Your Final Report  [q] quit > "
        } else {
            "[1-7] pick a card  [q] quit > "
        };
        match prompt(choices).await? {
            None => return Ok(Outcome::Quit),
            Some(line) => match line.as_str() {
                "q" => return Ok(Outcome::Quit),
                "c" if journey.can_advance() => {
                    emitter.emit(&journey.store().record_click());
                    emitter.emit_all(&journey.advance()?);
                    return Ok(Outcome::Advanced);
                }
                other => match other.parse::<usize>() {
                    Ok(n) if (1..=CARD_COUNT).contains(&n) => {
                        let picked = n - 1;
                        if table.is_flipped(picked) {
                            println!("  That card is already face up.");
                            continue;
                        }
                        emitter.emit(&journey.record_action());
                        table.start_flip_sequence(stagger);
                        // Let the sequence land before prompting again.
                        tokio::time::sleep(stagger * CARD_COUNT as u32).await;
                        if config.flavor {
                            println!("  {}", flavor::CARD_PHRASES[picked]);
                        }
                    }
                    _ => println!("  Nothing happens. Fitting."),
                },
            },
        }
    }
}

// ── Page 5: the final report ─────────────────────────────────────────

pub async fn final_report(
    journey: &mut Journey,
    config: &PlayConfig,
    emitter: &Emitter,
) -> Result<Outcome, BoxError> {
    header(journey);
    let store = journey.store().clone();
    let stats = ReportStats::compute(store.total_clicks(), store.elapsed_seconds());
    let title = store.award_title();

    println!("Your journey of glorious uselessness is complete");
    println!();
    println!(
        "  Total Time Spent   {} minutes {} seconds",
        store.elapsed_seconds() / 60,
        store.elapsed_seconds() % 60
    );
    println!("  Pointless Clicks   {}", store.total_clicks());
    println!("  Minutes Wasted     {:.2}", stats.minutes_wasted);
    println!("  Efficiency Level   {}", stats.tier);
    println!("  Productivity Lost  {:.2} units", stats.productivity_lost);
    println!();
    println!("You have been awarded the title of: {title}");

    loop {
        match prompt("[d] Download Report  [r] Start Wasting Again  [q] quit > ").await? {
            None => return Ok(Outcome::Quit),
            Some(line) => match line.as_str() {
                "q" => return Ok(Outcome::Quit),
                "d" => {
                    emitter.emit(&store.record_download_attempt());
                    let attempts = store.download_attempts();
                    if config.flavor {
                        let index = (attempts as usize - 1) % flavor::DOWNLOAD_FAILURES.len();
                        println!("  {}", flavor::DOWNLOAD_FAILURES[index]);
                    }
                    println!("  Failed download attempts: {attempts}");
                }
                "r" => {
                    emitter.emit_all(&journey.restart());
                    return Ok(Outcome::Advanced);
                }
                _ => println!("  Nothing happens. Fitting."),
            },
        }
    }
}
