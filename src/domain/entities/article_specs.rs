//! Content-submission specification of a website.

use serde::{Deserialize, Serialize};

/// Accepted article length in words.
///
/// Stored as real numbers; the schema requires both bounds to be at least 1
/// and `max > min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WordCountRange {
    pub min: f64,
    pub max: f64,
}

impl WordCountRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Default for WordCountRange {
    fn default() -> Self {
        Self::new(500.0, 2000.0)
    }
}

/// SEO checklist. The three flags are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoRequirements {
    pub meta_description: bool,
    pub keywords: bool,
    pub heading_structure: bool,
}

impl SeoRequirements {
    /// Number of enabled requirements.
    pub fn enabled_count(&self) -> usize {
        [self.meta_description, self.keywords, self.heading_structure]
            .into_iter()
            .filter(|enabled| *enabled)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSpecs {
    pub content_types: Vec<String>,
    pub word_count_range: WordCountRange,
    pub tone_of_voice: Vec<String>,
    pub required_sections: Vec<String>,
    pub seo_requirements: SeoRequirements,
    pub submission_guidelines: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_word_count_range() {
        let range = WordCountRange::default();
        assert_eq!(range.min, 500.0);
        assert_eq!(range.max, 2000.0);
    }

    #[test]
    fn test_seo_enabled_count() {
        let seo = SeoRequirements {
            meta_description: true,
            keywords: false,
            heading_structure: true,
        };
        assert_eq!(seo.enabled_count(), 2);
        assert_eq!(SeoRequirements::default().enabled_count(), 0);
    }

    #[test]
    fn test_article_specs_json_shape() {
        let specs = ArticleSpecs {
            content_types: vec!["Blog".to_string()],
            word_count_range: WordCountRange::new(500.0, 1000.0),
            tone_of_voice: vec!["Casual".to_string()],
            required_sections: vec!["Intro".to_string()],
            seo_requirements: SeoRequirements::default(),
            submission_guidelines: "Write clearly and simply.".to_string(),
        };

        let value = serde_json::to_value(&specs).unwrap();
        assert_eq!(value["wordCountRange"]["max"], 1000.0);
        assert_eq!(value["seoRequirements"]["headingStructure"], false);
        assert_eq!(value["submissionGuidelines"], "Write clearly and simply.");
    }
}
