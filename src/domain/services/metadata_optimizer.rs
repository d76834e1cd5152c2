//! Metadata Builder - title, description, tags, and keywords for publishing

use std::collections::HashSet;

use rand::Rng;

use crate::domain::entities::{VideoMetadata, MAX_KEYWORDS, MAX_TAGS, MAX_TITLE_CHARS};
use crate::domain::value_objects::Niche;

const TITLE_TEMPLATE_COUNT: usize = 5;
/// Characters of the story idea kept after the capitalized first letter
const TITLE_IDEA_TAIL_CHARS: usize = 50;
const MIN_KEYWORD_CHARS: usize = 5;

const UNIVERSAL_TAGS: [&str; 9] = [
    "animation",
    "animated video",
    "kids entertainment",
    "cartoon",
    "story time",
    "animated movie",
    "kids channel",
    "family video",
    "hd animation",
];

const NICHE_KEYWORDS: [&str; 5] = ["animation", "kids", "video", "animated", "story"];

pub fn optimize_metadata<R: Rng + ?Sized>(
    story_idea: &str,
    niche: Niche,
    duration: u32,
    rng: &mut R,
) -> VideoMetadata {
    VideoMetadata {
        title: viral_title(story_idea, rng.gen_range(0..TITLE_TEMPLATE_COUNT)),
        description: seo_description(story_idea, duration),
        tags: tags(niche),
        thumbnail_prompt: thumbnail_prompt(story_idea),
        category: niche.category().to_string(),
        target_keywords: target_keywords(story_idea, niche),
    }
}

/// Render title template `template` (taken modulo the template count)
pub fn viral_title(story_idea: &str, template: usize) -> String {
    let idea = capitalize_first(story_idea);
    let title = match template % TITLE_TEMPLATE_COUNT {
        0 => format!("{} | Animated Story", idea),
        1 => format!("The Amazing {} Adventure!", idea),
        2 => format!("{} - Epic Animated Movie", idea),
        3 => format!("Watch This: {} Full Story", idea),
        _ => format!("{} | Kids Animation HD", idea),
    };
    truncate_title(&title)
}

/// Clip to the display limit, ending with an ellipsis when clipped
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() <= MAX_TITLE_CHARS {
        return title.to_string();
    }
    let mut clipped: String = title.chars().take(MAX_TITLE_CHARS - 3).collect();
    clipped.push_str("...");
    clipped
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.take(TITLE_IDEA_TAIL_CHARS))
            .collect(),
        None => String::new(),
    }
}

pub fn seo_description(story_idea: &str, duration: u32) -> String {
    format!(
        r#"🎬 Watch this amazing {duration}-minute animated story: {story_idea}!

Join us on an incredible adventure filled with excitement, friendship, and valuable lessons! This high-quality animated video is perfect for kids and families.

✨ What You'll Love:
• Stunning 3D animation with vibrant colors
• Engaging characters and heartwarming story
• Educational and entertaining content
• Family-friendly and kid-safe
• Professional voice acting and sound design

🎯 Perfect For:
• Kids aged 5-12 and their families
• Fans of animated stories and adventures
• Educational entertainment
• Quality family time together

📺 Subscribe for more amazing animated stories every week! Hit the bell icon to never miss a new adventure!

👍 If you enjoyed this video, please LIKE, SHARE, and COMMENT below!

---

#animation #kidsvideo #animatedstory #familyfriendly #kidslearning #educationalvideo #storytime #cartoon #3danimation #kidsadventure

© All content is 100% original and created using AI animation technology. Safe for monetization and copyright-compliant.

🎵 Music: Royalty-free tracks licensed for commercial use
🎨 Animation: AI-generated original content
🎤 Voices: AI-synthesized for copyright safety

For business inquiries: [contact info]

---

Our Channel Features:
✓ New videos every week
✓ High-quality 1080p HD content
✓ Educational and entertaining stories
✓ Safe, positive content for all ages
✓ Engaging characters and plots

Thank you for watching! Don't forget to subscribe and join our community of animation lovers! 🌟"#
    )
}

pub fn tags(niche: Niche) -> Vec<String> {
    niche
        .base_tags()
        .iter()
        .chain(UNIVERSAL_TAGS.iter())
        .take(MAX_TAGS)
        .map(|tag| tag.to_string())
        .collect()
}

pub fn thumbnail_prompt(story_idea: &str) -> String {
    format!(
        "Ultra-realistic 3D animated thumbnail, cinematic quality, 16:9 aspect ratio: \
         Main character from \"{}\" in dramatic heroic pose, vibrant bold colors with high contrast, \
         emotional facial expression showing determination and excitement, dynamic action pose with motion blur effect, \
         dramatic lighting with rim lighting, epic background with depth, large bold text overlay readable at small size, \
         professional movie poster style, eye-catching composition that demands clicks, \
         YouTube thumbnail optimized, ultra-sharp 4K quality, no watermarks",
        story_idea
    )
}

/// Long story words (first occurrence wins), then niche constants, capped
pub fn target_keywords(story_idea: &str, niche: Niche) -> Vec<String> {
    let lowered = story_idea.to_lowercase();
    let mut seen = HashSet::new();

    lowered
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS)
        .filter(|word| seen.insert(*word))
        .map(str::to_string)
        .chain(std::iter::once(niche.slug().to_string()))
        .chain(NICHE_KEYWORDS.iter().map(|k| k.to_string()))
        .take(MAX_KEYWORDS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_titles_never_exceed_limit() {
        let ideas = [
            "A robot learns to dance",
            "",
            "x",
            "An extraordinarily long story idea about a lighthouse keeper who befriends a whale and sails the seven seas",
            "ünïcödé story with ëmöjï 🎉🎉🎉🎉🎉🎉🎉🎉🎉🎉🎉🎉🎉🎉🎉🎉🎉🎉🎉🎉🎉🎉🎉🎉🎉🎉",
        ];
        for idea in ideas {
            for template in 0..TITLE_TEMPLATE_COUNT {
                let title = viral_title(idea, template);
                assert!(title.chars().count() <= MAX_TITLE_CHARS, "{title}");
            }
        }
    }

    #[test]
    fn test_title_capitalizes_story_idea() {
        assert_eq!(
            viral_title("a robot learns to dance", 0),
            "A robot learns to dance | Animated Story"
        );
    }

    #[test]
    fn test_long_title_gets_ellipsis() {
        let title = viral_title(&"dragon ".repeat(12), 1);
        assert_eq!(title.chars().count(), 60);
        assert!(title.ends_with("..."));
        assert!(title.starts_with("The Amazing Dragon"));
    }

    #[test]
    fn test_tags_are_capped() {
        for niche in Niche::ALL {
            let tags = tags(niche);
            assert_eq!(tags.len(), 15);
            assert_eq!(tags[0], niche.base_tags()[0]);
            assert_eq!(tags[14], "hd animation");
        }
    }

    #[test]
    fn test_keywords_dedupe_and_cap() {
        let keywords = target_keywords("Brave robot meets brave robot dancer", Niche::Comedy);
        assert_eq!(
            keywords,
            vec![
                "brave", "robot", "meets", "dancer", "comedy", "animation", "kids", "video",
                "animated", "story"
            ]
        );

        let many = target_keywords(
            "alpha bravo charlie delta foxtrot hotel india juliet kilos limas mikes",
            Niche::Mystery,
        );
        assert_eq!(many.len(), 10);
        assert!(!many.contains(&"mystery".to_string()));
    }

    #[test]
    fn test_short_words_are_skipped() {
        let keywords = target_keywords("A cat and a dog", Niche::Educational);
        assert_eq!(keywords[0], "educational");
        assert_eq!(keywords.len(), 6);
    }

    #[test]
    fn test_unknown_niche_uses_kids_animation_metadata() {
        let fallback = Niche::parse_or_default("asmr");
        let a = optimize_metadata("A robot", fallback, 5, &mut StdRng::seed_from_u64(9));
        let b = optimize_metadata("A robot", Niche::KidsAnimation, 5, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
        assert_eq!(a.category, "Entertainment");
        assert_eq!(a.tags[0], "kids animation");
    }

    #[test]
    fn test_thumbnail_prompt_quotes_idea() {
        let prompt = thumbnail_prompt("A robot learns to dance");
        assert!(prompt.starts_with("Ultra-realistic 3D animated thumbnail"));
        assert!(prompt.contains("Main character from \"A robot learns to dance\""));
        assert!(prompt.contains("YouTube thumbnail optimized, ultra-sharp 4K quality"));
        assert!(prompt.ends_with("no watermarks"));
    }

    #[test]
    fn test_description_interpolates_idea_and_duration() {
        let description = seo_description("A robot learns to dance", 5);
        assert!(description.starts_with("🎬 Watch this amazing 5-minute animated story: A robot learns to dance!"));
        assert!(description.contains("#animation"));
    }
}
