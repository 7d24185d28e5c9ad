//! Persona Assessment
//!
//! A daily self-reflection questionnaire and a deterministic personality
//! report engine.
//!
//! # Features
//!
//! - 8 questions per day drawn from a fixed bank of 64, stable per date
//! - Keyword scoring across five personality categories plus an
//!   aggressive-language channel
//! - Optional sentiment (hosted model or offline lexicon) and optional
//!   Claude-generated insight, both best effort
//! - Fixed-ladder classification into eight personality types
//! - Markdown report and JSON export
//!
//! # Quick Start
//!
//! ```bash
//! persona-assessment questions
//! persona-assessment interview --seed 7
//! SENTIMENT_BACKEND=lexicon persona-assessment report --session session.json
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐   ┌──────────────────────────────────────────────┐   ┌────────────┐
//! │ session  │──▶│ assessor                                     │──▶│ report     │
//! │ (CLI or  │   │  sentiment ─┐                                │   │ markdown + │
//! │  JSON)   │   │  insight ───┼─▶ engine: score ▶ combine ▶    │   │ JSON       │
//! └──────────┘   │  keywords ──┘   classify ▶ compose           │   └────────────┘
//!                └──────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod anthropic;
pub mod assessor;
pub mod config;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod report;
pub mod sentiment;
pub mod session;
pub mod traits;
