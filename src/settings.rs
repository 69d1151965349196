//! UI tuning constants shared by the server render and the hydrated client.

use std::time::Duration;

use crate::reveal::Threshold;

/// Fraction of a section that must be on screen before its header animates in.
pub const SECTION_REVEAL: Threshold = Threshold::new(0.1);
/// Fraction of a card that must be on screen before it animates in.
pub const CARD_REVEAL: Threshold = Threshold::new(0.2);

/// Per-card transition delay step for the experience and project timelines.
pub const CARD_STAGGER_MS: usize = 200;
/// Per-card transition delay step for the skills grid.
pub const SKILL_STAGGER_MS: usize = 100;

/// Simulated network latency of the contact form.
pub const SUBMIT_DELAY_MS: u64 = 1000;
pub const SUBMIT_DELAY: Duration = Duration::from_millis(SUBMIT_DELAY_MS);

pub const TOAST_DURATION_MS: f64 = 5000.0;
pub const TOAST_LIMIT: usize = 1;

/// Scroll offset (px) past which the header gets an opaque background.
pub const HEADER_SCROLL_PX: f64 = 50.0;

/// Number of achievements and technologies shown on an expanded experience card.
pub const ACHIEVEMENTS_SHOWN: usize = 3;
pub const TECHNOLOGIES_SHOWN: usize = 6;
