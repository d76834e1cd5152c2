//! Content niche - drives template selection across the pipeline

use std::fmt;

use serde::{Deserialize, Serialize};

/// The enumerated content categories a video can target.
///
/// Every per-niche table in the pipeline is a `match` on this enum. Unknown
/// input never reaches those tables: it is resolved to [`Niche::DEFAULT`]
/// at the boundary via [`Niche::parse_or_default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Niche {
    KidsAnimation,
    Educational,
    Adventure,
    SciFi,
    Comedy,
    Mystery,
}

impl Niche {
    /// Fallback for anything outside the enumerated set
    pub const DEFAULT: Niche = Niche::KidsAnimation;

    pub const ALL: [Niche; 6] = [
        Niche::KidsAnimation,
        Niche::Educational,
        Niche::Adventure,
        Niche::SciFi,
        Niche::Comedy,
        Niche::Mystery,
    ];

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "kids-animation" => Some(Self::KidsAnimation),
            "educational" => Some(Self::Educational),
            "adventure" => Some(Self::Adventure),
            "sci-fi" => Some(Self::SciFi),
            "comedy" => Some(Self::Comedy),
            "mystery" => Some(Self::Mystery),
            _ => None,
        }
    }

    /// Resolve a raw niche string, substituting the default for unknown values
    pub fn parse_or_default(slug: &str) -> Self {
        Self::from_slug(slug.trim()).unwrap_or(Self::DEFAULT)
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::KidsAnimation => "kids-animation",
            Self::Educational => "educational",
            Self::Adventure => "adventure",
            Self::SciFi => "sci-fi",
            Self::Comedy => "comedy",
            Self::Mystery => "mystery",
        }
    }

    /// Human-readable label shown by the input form
    pub fn label(&self) -> &'static str {
        match self {
            Self::KidsAnimation => "Kids Animation",
            Self::Educational => "Educational Content",
            Self::Adventure => "Adventure Stories",
            Self::SciFi => "Sci-Fi Fantasy",
            Self::Comedy => "Comedy & Fun",
            Self::Mystery => "Mystery & Suspense",
        }
    }

    /// How the first seconds of the video should grab attention
    pub fn hook_strategy(&self) -> &'static str {
        match self {
            Self::KidsAnimation => {
                "Start with exciting visual action and a question that creates curiosity"
            }
            Self::Educational => "Open with a surprising fact or mind-blowing revelation",
            Self::Adventure => "Begin with high-stakes danger or an impossible challenge",
            Self::SciFi => "Start with futuristic visuals and a mysterious discovery",
            Self::Comedy => "Open with a laugh-out-loud moment or relatable situation",
            Self::Mystery => "Begin with a shocking reveal or cryptic clue",
        }
    }

    pub fn target_audience(&self) -> &'static str {
        match self {
            Self::KidsAnimation => "Children 5-12 and parents",
            Self::Educational => "Students and lifelong learners 10-25",
            Self::Adventure => "Action enthusiasts 8-18",
            Self::SciFi => "Sci-fi fans 12-30",
            Self::Comedy => "General audience 10-40",
            Self::Mystery => "Mystery lovers 12-35",
        }
    }

    /// Video-platform category the upload is filed under
    pub fn category(&self) -> &'static str {
        match self {
            Self::KidsAnimation | Self::Adventure | Self::Mystery => "Entertainment",
            Self::Educational => "Education",
            Self::SciFi => "Science & Technology",
            Self::Comedy => "Comedy",
        }
    }

    pub fn base_tags(&self) -> [&'static str; 6] {
        match self {
            Self::KidsAnimation => [
                "kids animation",
                "animated story",
                "children cartoon",
                "family friendly",
                "kids video",
                "3d animation",
            ],
            Self::Educational => [
                "educational video",
                "learning animation",
                "kids learning",
                "educational content",
                "teaching video",
                "edutainment",
            ],
            Self::Adventure => [
                "adventure animation",
                "action story",
                "adventure cartoon",
                "exciting story",
                "hero adventure",
                "quest animation",
            ],
            Self::SciFi => [
                "sci-fi animation",
                "futuristic story",
                "space adventure",
                "technology cartoon",
                "sci-fi kids",
                "future world",
            ],
            Self::Comedy => [
                "funny animation",
                "comedy cartoon",
                "kids comedy",
                "funny story",
                "hilarious video",
                "comedy animation",
            ],
            Self::Mystery => [
                "mystery animation",
                "detective story",
                "mystery cartoon",
                "puzzle solving",
                "mystery kids",
                "adventure mystery",
            ],
        }
    }
}

impl Default for Niche {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Niche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
