//! Question bank and the daily question draw.

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Questions asked per session.
pub const DAILY_QUESTION_COUNT: usize = 8;

/// Every question that can be drawn.
pub const QUESTION_BANK: [&str; 64] = [
    "How do you typically recharge your energy - through social interaction or solitude?",
    "When making decisions, do you rely more on logic and analysis or feelings and values?",
    "Do you prefer detailed planning or keeping your options open and being spontaneous?",
    "How do you handle stress and overwhelming situations?",
    "Describe your ideal work environment and what motivates you most.",
    "How do you typically respond to criticism or feedback from others?",
    "What are your biggest fears or anxieties in daily life?",
    "What do you value most in friendships?",
    "Describe your sleep patterns and how they affect your mood and energy.",
    "How do you cope with major life changes or unexpected challenges?",
    "What role does creativity play in your daily life?",
    "How do you prefer to learn new things - hands-on, reading, or discussing with others?",
    "What kind of music or sounds help you focus or relax?",
    "How do you approach conflicts in personal relationships?",
    "What does success mean to you personally?",
    "How do you balance work and personal time?",
    "What activities make you lose track of time?",
    "How do you handle unexpected changes in your routine?",
    "What motivates you to get up in the morning?",
    "How do you prefer to celebrate achievements?",
    "What kind of physical environment makes you feel most comfortable?",
    "How do you approach making new friends or social connections?",
    "What role does spirituality or philosophy play in your life?",
    "How do you handle feeling overwhelmed or burnt out?",
    "What childhood experiences shaped who you are today?",
    "How do you prefer to receive and give emotional support?",
    "What kind of challenges do you actively seek out?",
    "How do you deal with uncertainty about the future?",
    "What makes you feel most confident and self-assured?",
    "How do you approach personal growth and self-improvement?",
    "What role does humor play in your daily interactions?",
    "How do you handle disappointment or failure?",
    "What kind of legacy do you want to leave behind?",
    "How do you prefer to spend your free time on weekends?",
    "What triggers your strongest emotional responses?",
    "How do you approach financial planning and security?",
    "What kind of stories or movies resonate most with you?",
    "How do you handle peer pressure or social expectations?",
    "What makes you feel most alive and energized?",
    "How do you approach forgiveness - of yourself and others?",
    "What role does nature and the outdoors play in your well-being?",
    "How do you handle compliments and praise from others?",
    "What kind of conversations do you find most meaningful?",
    "How do you approach risk-taking in different areas of life?",
    "What habits or routines are most important to your daily life?",
    "How do you handle being the center of attention?",
    "What kind of books or content do you gravitate toward?",
    "How do you approach helping others who are struggling?",
    "What makes you feel most misunderstood by others?",
    "How do you handle transitions between different life phases?",
    "What role does competition play in motivating you?",
    "How do you approach expressing your authentic self?",
    "What kind of feedback helps you grow the most?",
    "How do you handle moments of self-doubt?",
    "What traditions or rituals are meaningful to you?",
    "How do you approach setting and maintaining boundaries?",
    "What makes you feel most connected to others?",
    "How do you handle information overload in today's world?",
    "What role does adventure play in your ideal life?",
    "How do you approach making important life decisions?",
    "What kind of work or activities drain your energy most?",
    "How do you handle being criticized or judged by others?",
    "What makes you feel most grateful in daily life?",
    "How do you approach maintaining long-distance relationships?",
];

/// Seed for a date, e.g. `20240305` for 2024-03-05.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn date_seed(date: NaiveDate) -> u64 {
    let year = date.year().max(0) as u64;
    year * 10_000 + u64::from(date.month()) * 100 + u64::from(date.day())
}

/// The questions for a given day.
///
/// The same date always yields the same questions in the same order.
#[must_use]
pub fn daily_questions(date: NaiveDate) -> Vec<&'static str> {
    let mut rng = StdRng::seed_from_u64(date_seed(date));
    rand::seq::index::sample(&mut rng, QUESTION_BANK.len(), DAILY_QUESTION_COUNT)
        .into_iter()
        .map(|i| QUESTION_BANK[i])
        .collect()
}
