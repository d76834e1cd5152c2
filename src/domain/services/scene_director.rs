//! Scene Director - expands a script into a cinematic scene breakdown

use rand::Rng;

use crate::domain::entities::{Scene, Script};

const MIN_SCENE_SECS: u32 = 15;
/// Exclusive upper bound of the random extra seconds added per scene
const SCENE_SECS_SPREAD: u32 = 20;

const CAMERA_ANGLES: [&str; 8] = [
    "Wide shot establishing environment",
    "Medium shot focusing on characters",
    "Close-up on emotional facial expressions",
    "Dynamic tracking shot following action",
    "Over-the-shoulder perspective",
    "Low angle showing character power",
    "High angle revealing environment scale",
    "Dutch angle for tension and unease",
];

pub const EMOTIONS: [&str; 8] = [
    "Curiosity and wonder",
    "Excitement and anticipation",
    "Determination and courage",
    "Fear and uncertainty",
    "Hope and resilience",
    "Joy and triumph",
    "Relief and happiness",
    "Warmth and friendship",
];

const ACTION_BEATS: [[&str; 3]; 5] = [
    ["Character enters frame", "Notices something important", "Reacts with emotion"],
    ["Movement toward goal", "Encounters obstacle", "Plans next move"],
    ["Takes action", "Faces challenge", "Shows determination"],
    ["Emotional moment", "Connection with others", "Renewed purpose"],
    ["Climactic action", "High-stakes moment", "Resolution begins"],
];

/// Break the script into `script.total_scenes` scenes
///
/// Scene durations are the only random draw, one per scene in order.
pub fn direct_scenes<R: Rng + ?Sized>(script: &Script, rng: &mut R) -> Vec<Scene> {
    let total = script.total_scenes as usize;

    (0..total)
        .map(|index| {
            let progress = index as f64 / total as f64;

            Scene {
                scene_number: index as u32 + 1,
                visual_description: visual_description(progress).to_string(),
                camera_angle: camera_angle(index).to_string(),
                lighting: lighting(progress).to_string(),
                emotions: emotion(progress).to_string(),
                duration: MIN_SCENE_SECS + rng.gen_range(0..SCENE_SECS_SPREAD),
                dialogue: script.dialogue_for(index).to_string(),
                action_beats: action_beats(index),
            }
        })
        .collect()
}

/// Arc stage for the scene's position: establishing, setup, conflict, climax, resolution
pub fn visual_description(progress: f64) -> &'static str {
    if progress < 0.1 {
        "Wide establishing shot of vibrant animated world, colorful buildings and bustling activity, characters introduced with dynamic movement"
    } else if progress < 0.3 {
        "Characters interact in detailed environment, expressive facial animations showing curiosity and determination, rich background details"
    } else if progress < 0.6 {
        "Tension builds with dramatic action sequences, dynamic camera movement following characters, intense facial expressions and body language"
    } else if progress < 0.9 {
        "High-stakes action with particle effects and dramatic lighting, characters showing determination, fast-paced movement and reactions"
    } else {
        "Emotional resolution with warm lighting, characters celebrating together, satisfying conclusion with hopeful atmosphere"
    }
}

pub fn camera_angle(index: usize) -> &'static str {
    CAMERA_ANGLES[index % CAMERA_ANGLES.len()]
}

pub fn lighting(progress: f64) -> &'static str {
    if progress < 0.25 {
        "Bright, warm lighting with soft shadows, inviting and cheerful atmosphere"
    } else if progress < 0.5 {
        "Natural balanced lighting with defined shadows, realistic and engaging"
    } else if progress < 0.75 {
        "Dramatic lighting with strong contrasts, mysterious and tense mood"
    } else {
        "Warm golden-hour lighting, hopeful and uplifting atmosphere"
    }
}

pub fn emotion(progress: f64) -> &'static str {
    let index = (progress * EMOTIONS.len() as f64).floor() as usize;
    EMOTIONS[index.min(EMOTIONS.len() - 1)]
}

pub fn action_beats(index: usize) -> Vec<String> {
    ACTION_BEATS[index % ACTION_BEATS.len()]
        .iter()
        .map(|beat| beat.to_string())
        .collect()
}

/// Single descriptive text-to-video prompt for a scene
pub fn animation_prompt(scene: &Scene) -> String {
    format!(
        "Ultra-realistic 3D animation, cinematic quality: {}. {}. {}. Characters displaying {}. \
         Smooth motion, vibrant colors, high detail, professional animation, movie-quality rendering, 1920x1080.",
        scene.visual_description, scene.camera_angle, scene.lighting, scene.emotions
    )
}
