//! Dotted field paths used in validation reports.
//!
//! List elements are addressed by appending the index, e.g.
//! `offers.features.0`.

pub const NAME: &str = "name";
pub const URL: &str = "url";
pub const DESCRIPTION: &str = "description";
pub const CATEGORY: &str = "category";
pub const STATUS: &str = "status";

pub const PRICING_TYPE: &str = "offers.pricing.type";
pub const PRICING_AMOUNT: &str = "offers.pricing.amount";
pub const PRICING_CURRENCY: &str = "offers.pricing.currency";
pub const PRICING_BILLING_CYCLE: &str = "offers.pricing.billingCycle";
pub const FEATURES: &str = "offers.features";
pub const TARGET_AUDIENCE: &str = "offers.targetAudience";
pub const UNIQUE_SELLING_POINTS: &str = "offers.uniqueSellingPoints";

pub const CONTENT_TYPES: &str = "articleSpecs.contentTypes";
pub const WORD_COUNT_MIN: &str = "articleSpecs.wordCountRange.min";
pub const WORD_COUNT_MAX: &str = "articleSpecs.wordCountRange.max";
pub const TONE_OF_VOICE: &str = "articleSpecs.toneOfVoice";
pub const REQUIRED_SECTIONS: &str = "articleSpecs.requiredSections";
pub const SEO_META_DESCRIPTION: &str = "articleSpecs.seoRequirements.metaDescription";
pub const SEO_KEYWORDS: &str = "articleSpecs.seoRequirements.keywords";
pub const SEO_HEADING_STRUCTURE: &str = "articleSpecs.seoRequirements.headingStructure";
pub const SUBMISSION_GUIDELINES: &str = "articleSpecs.submissionGuidelines";

/// Path of the `index`-th element of the list at `list_path`.
pub fn item(list_path: &str, index: usize) -> String {
    format!("{list_path}.{index}")
}
