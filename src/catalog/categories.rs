//! Canonical category names for the comparison site.
//!
//! Raw catalogs label categories freely ("text-to-speech", "AI writing",
//! "dev tools"). When canonicalization is enabled the normalizer maps them
//! onto the site's category set using this keyword table.

use crate::core::DEFAULT_CATEGORY;

/// Keyword → canonical category. Order matters for partial matches.
const CATEGORY_KEYWORDS: &[(&str, &str)] = &[
    // Voice & Audio
    ("voice", "Best Voice AI Tools"),
    ("audio", "Best Voice AI Tools"),
    ("text-to-speech", "Best Voice AI Tools"),
    ("tts", "Best Voice AI Tools"),
    ("speech", "Best Voice AI Tools"),
    ("music", "Best Voice AI Tools"),
    ("sound", "Best Voice AI Tools"),
    // Content Creation
    ("text", "Content Creation"),
    ("writing", "Content Creation"),
    ("content", "Content Creation"),
    ("copywriting", "Content Creation"),
    ("text generation", "Content Creation"),
    ("content creation", "Content Creation"),
    ("ai writing", "Content Creation"),
    ("blog", "Content Creation"),
    ("article", "Content Creation"),
    // Image & Design
    ("image", "Image Generation"),
    ("art", "Image Generation"),
    ("design", "Image Generation"),
    ("graphics", "Image Generation"),
    ("image generation", "Image Generation"),
    ("ai art", "Image Generation"),
    ("photo", "Image Generation"),
    ("visual", "Image Generation"),
    // Video
    ("video", "Video Generation"),
    ("video editing", "Video Generation"),
    ("video generation", "Video Generation"),
    ("animation", "Video Generation"),
    ("film", "Video Generation"),
    // Code & Development
    ("code", "Code Generation"),
    ("coding", "Code Generation"),
    ("programming", "Code Generation"),
    ("development", "Code Generation"),
    ("developer tools", "Code Generation"),
    ("dev tools", "Code Generation"),
    ("software", "Code Generation"),
    // Business & Productivity
    ("automation", "AI Automation"),
    ("workflow", "AI Automation"),
    ("productivity", "Productivity"),
    ("business", "Productivity"),
    ("task management", "Productivity"),
    ("organization", "Productivity"),
    // Marketing & SEO
    ("marketing", "Social Media"),
    ("social media", "Social Media"),
    ("social", "Social Media"),
    ("advertising", "Paid Search & PPC"),
    ("campaign", "Social Media"),
    ("seo", "SEO & Optimization"),
    ("search engine optimization", "SEO & Optimization"),
    ("optimization", "SEO & Optimization"),
    ("email", "Email Marketing"),
    ("email marketing", "Email Marketing"),
    ("newsletter", "Email Marketing"),
    ("ppc", "Paid Search & PPC"),
    ("paid search", "Paid Search & PPC"),
    ("google ads", "Paid Search & PPC"),
    ("facebook ads", "Paid Search & PPC"),
    // Data & Analytics
    ("data", "Data Analysis"),
    ("analytics", "Data Analysis"),
    ("data analysis", "Data Analysis"),
    ("business intelligence", "Data Analysis"),
    ("bi", "Data Analysis"),
    ("reporting", "Data Analysis"),
    ("dashboard", "Data Analysis"),
    // AI Assistants & Chat
    ("chatbot", "AI Assistants"),
    ("chat", "AI Assistants"),
    ("conversational ai", "AI Assistants"),
    ("assistant", "AI Assistants"),
    ("ai assistant", "AI Assistants"),
    ("virtual assistant", "AI Assistants"),
    // Education & Research
    ("research", "Research & Education"),
    ("education", "Research & Education"),
    ("learning", "Research & Education"),
    ("study", "Research & Education"),
    ("academic", "Research & Education"),
    ("knowledge", "Research & Education"),
    // Specialized
    ("translation", "Translation"),
    ("language", "Translation"),
    ("multilingual", "Translation"),
    ("finance", "Finance"),
    ("financial", "Finance"),
    ("accounting", "Finance"),
    ("legal", "Legal"),
    ("law", "Legal"),
    ("compliance", "Legal"),
    ("healthcare", "Healthcare"),
    ("medical", "Healthcare"),
    ("health", "Healthcare"),
];

/// Map a raw category label to its canonical name.
///
/// Exact keyword match first, then the first keyword that contains or is
/// contained by the label. Unmatched labels map to `"other"`.
pub fn canonical_category(raw: &str) -> &'static str {
    let label = raw.trim().to_lowercase();
    if label.is_empty() {
        return DEFAULT_CATEGORY;
    }

    if let Some((_, canonical)) = CATEGORY_KEYWORDS.iter().find(|(key, _)| *key == label) {
        return canonical;
    }

    CATEGORY_KEYWORDS
        .iter()
        .find(|(key, _)| label.contains(key) || key.contains(label.as_str()))
        .map(|(_, canonical)| *canonical)
        .unwrap_or(DEFAULT_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_keywords_map_directly() {
        assert_eq!(canonical_category("TTS"), "Best Voice AI Tools");
        assert_eq!(canonical_category("copywriting"), "Content Creation");
        assert_eq!(canonical_category("advertising"), "Paid Search & PPC");
    }

    #[test]
    fn partial_matches_use_table_order() {
        assert_eq!(canonical_category("AI Video Editor"), "Video Generation");
        assert_eq!(canonical_category("Email Automation"), "AI Automation");
    }

    #[test]
    fn canonical_names_map_to_themselves() {
        for name in [
            "Content Creation",
            "Image Generation",
            "Video Generation",
            "Code Generation",
            "AI Automation",
            "Best Voice AI Tools",
        ] {
            assert_eq!(canonical_category(name), name);
        }
    }

    #[test]
    fn unknown_and_blank_labels_are_other() {
        assert_eq!(canonical_category(""), "other");
        assert_eq!(canonical_category("   "), "other");
        assert_eq!(canonical_category("zzz"), "other");
    }
}
