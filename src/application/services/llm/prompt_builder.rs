//! Prompt building functions for assisted authoring requests

use crate::domain::entities::{Script, Strategy};
use crate::domain::value_objects::Niche;

/// System prompt shared by every authoring request
pub fn build_system_prompt() -> String {
    r#"You are a creative director for short-form animated video channels.

You write for a content pipeline that parses your replies as JSON. Always:
- Reply with a single JSON object and nothing else
- Use exactly the keys requested, in camelCase
- Keep content family-friendly
- Do not wrap the JSON in commentary"#
        .to_string()
}

/// Ask for the retention and pacing plan of a video
pub fn build_strategy_prompt(niche: Niche, duration: u32) -> String {
    format!(
        "As a video-platform algorithm expert, analyze the best strategy for a {}-minute {} video.\n\n\
         Provide:\n\
         1. Hook structure (first 5 seconds)\n\
         2. Retention points (offsets in seconds where cliffhangers should land)\n\
         3. Emotion pacing (ordered beat labels)\n\
         4. Optimal ad placement (offsets in seconds, starting with 0)\n\n\
         Format as JSON with keys: hookStrategy (string), retentionPoints (array of integers), \
         emotionPacing (array of strings), adPlacements (array of integers)",
        duration,
        niche.slug()
    )
}

/// Ask for the hook and three acts of the script
pub fn build_script_prompt(story_idea: &str, strategy: &Strategy, duration: u32) -> String {
    let mut prompt = format!(
        "Write a {}-minute viral video script for: \"{}\"\n\n\
         Requirements:\n\
         - Hook in first 5 seconds: {}\n\
         - 3-act structure with cliffhangers\n\
         - Kid-friendly dialogue\n",
        duration, story_idea, strategy.hook_strategy
    );

    if !strategy.emotion_pacing.is_empty() {
        prompt.push_str(&format!(
            "- Emotional peaks at: {}\n",
            strategy.emotion_pacing.join(", ")
        ));
    }
    prompt.push_str("- Retention loops every 2 minutes\n\n");
    prompt.push_str("Format as JSON with keys: hook, act1, act2, act3 (all strings)");

    prompt
}

/// Ask for publishing metadata
pub fn build_metadata_prompt(story_idea: &str, script: &Script, niche: Niche) -> String {
    format!(
        "Create viral video metadata for this video:\n\n\
         Story: {}\n\
         Niche: {}\n\
         Hook: {}\n\n\
         Generate:\n\
         1. Viral title (under 60 chars, clickable but not clickbait)\n\
         2. SEO-optimized description (300+ words)\n\
         3. 15 relevant tags\n\
         4. Thumbnail prompt for AI image generation\n\n\
         Format as JSON with keys: title (string), description (string), tags (array of strings), \
         thumbnailPrompt (string)",
        story_idea,
        niche.slug(),
        script.hook
    )
}
