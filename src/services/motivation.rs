use rand::seq::SliceRandom;
use rand::Rng;

const GENERAL: &[&str] = &[
    "You're doing great, keep showing up!",
    "Every rep counts. Stay consistent.",
    "The hardest part is starting — you're already ahead.",
];

const MISSED_WORKOUT: &[&str] = &[
    "One day off won't stop progress. Let's get back to it!",
    "Missed a day? Shake it off and go again tomorrow.",
];

const ACHIEVEMENT: &[&str] = &[
    "Amazing work! You crushed it today.",
    "You're leveling up — keep pushing!",
];

/// Message pool for a context tag; anything unrecognized gets the general
/// pool.
fn pool(context: &str) -> &'static [&'static str] {
    match context.to_lowercase().as_str() {
        "missed_workout" => MISSED_WORKOUT,
        "achievement" => ACHIEVEMENT,
        _ => GENERAL,
    }
}

/// One message drawn uniformly from the context's pool.
pub fn pick<R: Rng + ?Sized>(context: &str, rng: &mut R) -> String {
    pool(context)
        .choose(rng)
        .copied()
        .unwrap_or(GENERAL[0])
        .to_string()
}
