//! Strategy Analyzer - retention, pacing, and ad plan for a niche and length

use crate::domain::entities::Strategy;
use crate::domain::value_objects::Niche;

/// Seconds between retention beats
const RETENTION_INTERVAL_SECS: u32 = 120;
/// Videos shorter than this get only the pre-roll
const MID_ROLL_MIN_MINUTES: u32 = 8;
const MID_ROLL_STEP_MINUTES: usize = 3;

const EMOTION_CYCLE: [&str; 3] = ["excitement-buildup", "tension-peak", "emotional-resolution"];

const VIRAL_FACTORS: [&str; 6] = [
    "Strong emotional hooks",
    "Unexpected plot twists",
    "Relatable characters",
    "High production quality",
    "Shareable moments",
    "Cliffhanger endings",
];

/// Derive the viral strategy for a `duration`-minute video in `niche`
pub fn analyze_strategy(niche: Niche, duration: u32) -> Strategy {
    Strategy {
        hook_strategy: niche.hook_strategy().to_string(),
        retention_points: retention_points(duration),
        emotion_pacing: emotion_pacing(duration),
        ad_placements: ad_placements(duration),
        target_audience: niche.target_audience().to_string(),
        viral_factors: VIRAL_FACTORS.iter().map(|f| f.to_string()).collect(),
    }
}

pub fn retention_points(duration: u32) -> Vec<u32> {
    let end = duration.saturating_mul(60);
    (RETENTION_INTERVAL_SECS..end)
        .step_by(RETENTION_INTERVAL_SECS as usize)
        .collect()
}

pub fn emotion_pacing(duration: u32) -> Vec<String> {
    EMOTION_CYCLE
        .iter()
        .cycle()
        .take((duration / 3) as usize)
        .map(|beat| beat.to_string())
        .collect()
}

/// Pre-roll at 0, then a mid-roll every 3 minutes from minute 8
pub fn ad_placements(duration: u32) -> Vec<u32> {
    let mut placements = vec![0];
    if duration >= MID_ROLL_MIN_MINUTES {
        placements.extend(
            (MID_ROLL_MIN_MINUTES..duration)
                .step_by(MID_ROLL_STEP_MINUTES)
                .map(|minute| minute * 60),
        );
    }
    placements
}
