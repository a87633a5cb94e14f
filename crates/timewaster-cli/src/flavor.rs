//! Flavor text pools.
//!
//! Cosmetic only: nothing here touches session state beyond the counter
//! increments the pages already record.

use rand::Rng;

/// Shown after each "Wait" click on the time-wasting page.
pub const SARCASTIC_MESSAGES: [&str; 10] = [
    "Wow, you clicked. Revolutionary.",
    "Time is literally slipping away. Nice choice.",
    "Your productivity level just dropped. Congrats.",
    "That click accomplished absolutely nothing.",
    "Still here? Impressive dedication to nothing.",
    "Each click is a tiny victory... for procrastination.",
    "You could be doing anything else right now.",
    "Loading... just kidding, there's nothing to load.",
    "That was the most pointless click of your life. So far.",
    "Your future self is judging you. Hard.",
];

/// Shown after each action on the pointless-actions page.
pub const ACTION_FEEDBACK: [&str; 10] = [
    "That accomplished literally nothing. Well done.",
    "Congratulations! You did... something?",
    "The universe remains unchanged by your actions.",
    "If pointlessness was an Olympic sport, you'd medal.",
    "Your click has been filed under 'Unnecessary'.",
    "Error 418: I'm a teapot. Also, that was useless.",
    "Achievement Unlocked: Master of the Void",
    "Processing... Processing... Nope, still nothing.",
    "You're really committed to this, aren't you?",
    "Your dedication to futility is admirable.",
];

/// One phrase per card on the pick-a-card page.
pub const CARD_PHRASES: [&str; 7] = [
    "You picked the LOL card. Hilarious choice.",
    "Confetti! For absolutely no reason.",
    "BOOM! Nothing exploded but your expectations.",
    "Sparkles! Making nothing feel special.",
    "This card judges your life choices.",
    "WOW! You're still here. Amazing.",
    "Party time! Party of one, that is.",
];

/// Rotated through on each failed download click.
pub const DOWNLOAD_FAILURES: [&str; 17] = [
    "Did you really expect that to work?",
    "Download failed successfully.",
    "Report is too useless to download.",
    "Error 404: Purpose not found.",
    "This button is just for show.",
    "You've been pranked. Again.",
    "Download cancelled by the universe.",
    "File not found: your_wasted_time.pdf",
    "Server too busy laughing at you.",
    "Nice try, but no.",
    "ERROR: Irony overload detected.",
    "Download quota exceeded (you clicked too much).",
    "Access denied: You're not productive enough.",
    "Connection lost to reality.",
    "This feature is under construction... forever.",
    "Downloads are so 2010. Get with the times.",
    "Your ISP blocked this download for being too pointless.",
];

/// Uniform draw from a pool.
pub fn pick<'a, R: Rng + ?Sized>(pool: &'a [&'a str], rng: &mut R) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}
