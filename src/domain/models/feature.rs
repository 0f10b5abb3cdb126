#[cfg(test)]
#[path = "feature_test.rs"]
mod tests;

use std::fmt;

use strum::EnumIter;
use strum::IntoEnumIterator;

const FALLBACK_QUESTIONS: &[&str] = &["Tell me more about your idea..."];

const BRAND_NAME_QUESTIONS: &[&str] = &[
    "Which sector or industry best describes your brand? (e.g. fitness, gaming, fashion, tech, food...)",
    "Who is your main target audience? (age, gender, interests, location...)",
    "What feeling or personality should the name give? (modern, fun, luxury, trustworthy, edgy, cozy...)",
    "Are there any themes you definitely want included?",
    "Are there any words, letters or styles you want to avoid?",
];

const TAGLINE_QUESTIONS: &[&str] = &[
    "What is your brand name?",
    "What is the main benefit or promise your brand delivers?",
    "Short & punchy (3–6 words) or a bit longer?",
    "Preferred tone? (inspirational, funny, bold, warm, professional...)",
    "Any keywords or phrases you want to include?",
    "Do you have an existing tagline you're trying to improve?",
];

const LOGO_QUESTIONS: &[&str] = &[
    "What is your brand name?",
    "What style do you prefer? (minimal, bold, illustrative, vintage, geometric...)",
    "Favorite colors or palette? Any colors to avoid?",
    "Any symbols/icons that represent your idea? (leaf, camera, rocket...)",
    "Text-only, icon+text, or symbol-only logo?",
];

const SOCIAL_CAPTIONS_QUESTIONS: &[&str] = &[
    "Which platform(s) are we writing for? (Instagram, TikTok, X, LinkedIn...)",
    "Type of post? (reel, carousel, story, single image, thread...)",
    "What is the goal? (sell product, get likes, educate, drive traffic...)",
    "Desired tone & vibe? (funny, motivational, elegant, casual...)",
    "How long should captions be? (short & snappy, medium, storytelling...)",
];

const THUMBNAILS_QUESTIONS: &[&str] = &[
    "What is the video title or main topic?",
    "What emotion should the thumbnail create? (excited, curious, relaxed...)",
    "What text should appear big on the thumbnail? (title, number, question...)",
    "Preferred color scheme? (bright/neon, dark/moody, pastel, brand colors...)",
    "Style vibe? (clean, bold, cinematic, cartoon, retro...)",
];

const FULL_BRAND_QUESTIONS: &[&str] = &[
    "What is your business/channel/product in one sentence?",
    "Who is your ideal customer? (age, gender, lifestyle, problems...)",
    "What 3–5 core values or personality traits define your brand?",
    "Do you have any name, color or logo ideas already?",
    "Any brands you admire or want to be similar to?",
    "Where will this brand appear most? (app, YouTube, Instagram, website...)",
    "Any budget, timeline or must-have deliverables?",
];

/// A creative brief type. Each one owns a fixed, ordered question list.
///
/// Tags outside the catalog parse to `Unknown`, which keeps the tag for the
/// backend and asks a single generic question.
#[derive(Clone, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Feature {
    BrandName,
    Tagline,
    Logo,
    SocialCaptions,
    Thumbnails,
    FullBrand,
    Unknown(String),
}

impl Feature {
    pub fn parse(tag: &str) -> Feature {
        let tag = tag.trim();
        if let Some(feature) = Feature::catalog().into_iter().find(|e| return e.id() == tag) {
            return feature;
        }

        return Feature::Unknown(tag.to_string());
    }

    /// Every known feature in display order.
    pub fn catalog() -> Vec<Feature> {
        return Feature::iter()
            .filter(|e| return !matches!(e, Feature::Unknown(_)))
            .collect();
    }

    pub fn id(&self) -> &str {
        match self {
            Feature::BrandName => return "brand-name",
            Feature::Tagline => return "tagline",
            Feature::Logo => return "logo",
            Feature::SocialCaptions => return "social-captions",
            Feature::Thumbnails => return "thumbnails",
            Feature::FullBrand => return "full-brand",
            Feature::Unknown(tag) => return tag,
        }
    }

    /// Human readable name, used in the "generating" notice.
    pub fn title(&self) -> String {
        return self.id().replacen('-', " ", 1);
    }

    pub fn questions(&self) -> &'static [&'static str] {
        match self {
            Feature::BrandName => return BRAND_NAME_QUESTIONS,
            Feature::Tagline => return TAGLINE_QUESTIONS,
            Feature::Logo => return LOGO_QUESTIONS,
            Feature::SocialCaptions => return SOCIAL_CAPTIONS_QUESTIONS,
            Feature::Thumbnails => return THUMBNAILS_QUESTIONS,
            Feature::FullBrand => return FULL_BRAND_QUESTIONS,
            Feature::Unknown(_) => return FALLBACK_QUESTIONS,
        }
    }

    /// Features finalized on this machine instead of by the backend.
    pub fn is_local(&self) -> bool {
        return *self == Feature::Logo;
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.id());
    }
}
