//! Record schema: validation of website form input.
//!
//! [`validate`] accepts any JSON value, applies every field rule and returns
//! either the normalized [`WebsiteFormData`] or a [`ValidationReport`] listing
//! each violation with its dotted field path. Rules are evaluated
//! independently, so one bad field never hides another.
//!
//! # Rules
//!
//! | Path | Rule |
//! |------|------|
//! | `name` | 1 to 100 characters |
//! | `url` | absolute URL with scheme and host |
//! | `description` | 10 to 1000 characters |
//! | `category` | non-empty |
//! | `status` | `active`, `inactive` or `pending` |
//! | `offers.pricing.amount` | paid pricing needs amount > 0, currency and billing cycle |
//! | `offers.*`, `articleSpecs.*` lists | at least one element, no empty element |
//! | `articleSpecs.wordCountRange.max` | both bounds ≥ 1 and `max > min` |
//! | `articleSpecs.submissionGuidelines` | at least 10 characters |
//!
//! Normalization drops the amount, currency and billing cycle of `free` and
//! `freemium` pricing; every other value is kept as submitted.

pub mod paths;
mod reader;
mod report;
pub mod rules;

pub use report::{FieldError, ValidationReport};
pub use rules::codes;

use serde_json::Value;

use crate::domain::entities::{
    ArticleSpecs, Offers, SeoRequirements, WebsiteFormData, WebsiteStatus,
};
use reader::FormReader;

/// Validates loosely shaped form input.
///
/// # Errors
///
/// Returns a non-empty [`ValidationReport`] when any rule fails.
pub fn validate(input: &Value) -> Result<WebsiteFormData, ValidationReport> {
    let mut reader = FormReader::new(input);

    let name = rules::text(&mut reader, &rules::NAME);
    let url = rules::url(&mut reader);
    let description = rules::text(&mut reader, &rules::DESCRIPTION);
    let category = rules::text(&mut reader, &rules::CATEGORY);
    let status: Option<WebsiteStatus> = rules::choice(
        &mut reader,
        paths::STATUS,
        "status",
        &["active", "inactive", "pending"],
    );
    let offers = offers(&mut reader);
    let article_specs = article_specs(&mut reader);

    let form = (|| {
        Some(WebsiteFormData {
            name: name?,
            url: url?,
            description: description?,
            category: category?,
            status: status?,
            offers: offers?,
            article_specs: article_specs?,
        })
    })();

    let report = reader.finish();
    match form {
        Some(form) if report.is_empty() => Ok(form),
        _ => {
            debug_assert!(!report.is_empty(), "rejected form without errors");
            Err(report)
        }
    }
}

/// Validates an already-typed payload against the same rules.
///
/// Typed values can still break length, URL, list and ordering rules, so
/// they go through the full rule set.
///
/// # Errors
///
/// Returns a non-empty [`ValidationReport`] when any rule fails.
pub fn validate_form(form: &WebsiteFormData) -> Result<WebsiteFormData, ValidationReport> {
    match serde_json::to_value(form) {
        Ok(value) => validate(&value),
        Err(e) => {
            let mut report = ValidationReport::new();
            report.push(FieldError::new("", codes::TYPE, e.to_string()));
            Err(report)
        }
    }
}

fn offers(reader: &mut FormReader<'_>) -> Option<Offers> {
    let pricing = rules::pricing(reader);
    let features = rules::string_list(reader, &rules::FEATURES);
    let target_audience = rules::string_list(reader, &rules::TARGET_AUDIENCE);
    let unique_selling_points = rules::string_list(reader, &rules::UNIQUE_SELLING_POINTS);

    Some(Offers {
        pricing: pricing?,
        features: features?,
        target_audience: target_audience?,
        unique_selling_points: unique_selling_points?,
    })
}

fn article_specs(reader: &mut FormReader<'_>) -> Option<ArticleSpecs> {
    let content_types = rules::string_list(reader, &rules::CONTENT_TYPES);
    let word_count_range = rules::word_count_range(reader);
    let tone_of_voice = rules::string_list(reader, &rules::TONE_OF_VOICE);
    let required_sections = rules::string_list(reader, &rules::REQUIRED_SECTIONS);
    let seo_requirements = seo_requirements(reader);
    let submission_guidelines = rules::text(reader, &rules::SUBMISSION_GUIDELINES);

    Some(ArticleSpecs {
        content_types: content_types?,
        word_count_range: word_count_range?,
        tone_of_voice: tone_of_voice?,
        required_sections: required_sections?,
        seo_requirements: seo_requirements?,
        submission_guidelines: submission_guidelines?,
    })
}

fn seo_requirements(reader: &mut FormReader<'_>) -> Option<SeoRequirements> {
    let meta_description = rules::flag(reader, paths::SEO_META_DESCRIPTION);
    let keywords = rules::flag(reader, paths::SEO_KEYWORDS);
    let heading_structure = rules::flag(reader, paths::SEO_HEADING_STRUCTURE);

    Some(SeoRequirements {
        meta_description: meta_description?,
        keywords: keywords?,
        heading_structure: heading_structure?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{BillingCycle, Pricing};
    use serde_json::json;

    fn acme() -> Value {
        json!({
            "name": "Acme",
            "url": "https://acme.io",
            "description": "A test site for acme products.",
            "category": "SaaS",
            "status": "active",
            "offers": {
                "pricing": { "type": "free" },
                "features": ["X"],
                "targetAudience": ["Y"],
                "uniqueSellingPoints": ["Z"]
            },
            "articleSpecs": {
                "contentTypes": ["Blog"],
                "wordCountRange": { "min": 500, "max": 1000 },
                "toneOfVoice": ["Casual"],
                "requiredSections": ["Intro"],
                "seoRequirements": {
                    "metaDescription": false,
                    "keywords": false,
                    "headingStructure": false
                },
                "submissionGuidelines": "Write clearly and simply."
            }
        })
    }

    #[test]
    fn test_valid_form_is_normalized() {
        let form = validate(&acme()).unwrap();

        assert_eq!(form.name, "Acme");
        assert_eq!(form.status, WebsiteStatus::Active);
        assert_eq!(form.offers.pricing, Pricing::Free);
        assert_eq!(form.article_specs.word_count_range.max, 1000.0);
    }

    #[test]
    fn test_free_pricing_drops_paid_fields() {
        let mut input = acme();
        input["offers"]["pricing"] = json!({ "type": "free", "amount": -3, "currency": 7 });

        let form = validate(&input).unwrap();
        assert_eq!(form.offers.pricing, Pricing::Free);
    }

    #[test]
    fn test_paid_pricing_is_typed() {
        let mut input = acme();
        input["offers"]["pricing"] = json!({
            "type": "paid", "amount": 2.9, "currency": "USD", "billingCycle": "one-time"
        });

        let form = validate(&input).unwrap();
        assert_eq!(
            form.offers.pricing,
            Pricing::Paid {
                amount: 2.9,
                currency: "USD".to_string(),
                billing_cycle: BillingCycle::OneTime,
            }
        );
    }

    #[test]
    fn test_errors_are_collected_across_sections() {
        let mut input = acme();
        input["name"] = json!("");
        input["url"] = json!("not a url");
        input["offers"]["features"] = json!([]);
        input["articleSpecs"]["submissionGuidelines"] = json!("short");

        let report = validate(&input).unwrap_err();

        assert_eq!(report.len(), 4);
        assert!(report.has_error_at("name"));
        assert!(report.has_error_at("url"));
        assert!(report.has_error_at("offers.features"));
        assert!(report.has_error_at("articleSpecs.submissionGuidelines"));
    }

    #[test]
    fn test_empty_object_reports_every_required_field() {
        let report = validate(&json!({})).unwrap_err();

        for path in [
            paths::NAME,
            paths::URL,
            paths::DESCRIPTION,
            paths::CATEGORY,
            paths::STATUS,
            paths::PRICING_TYPE,
            paths::FEATURES,
            paths::CONTENT_TYPES,
            paths::WORD_COUNT_MIN,
            paths::WORD_COUNT_MAX,
            paths::SEO_KEYWORDS,
            paths::SUBMISSION_GUIDELINES,
        ] {
            assert!(report.has_error_at(path), "missing error for {path}");
        }
    }

    #[test]
    fn test_invalid_status() {
        let mut input = acme();
        input["status"] = json!("archived");

        let report = validate(&input).unwrap_err();
        assert_eq!(
            report.messages_for("status"),
            vec!["Invalid status. Expected 'active' | 'inactive' | 'pending', received 'archived'"]
        );
    }

    #[test]
    fn test_validate_form_checks_typed_payload() {
        let form = validate(&acme()).unwrap();
        assert_eq!(validate_form(&form).unwrap(), form);

        let blank = WebsiteFormData::default();
        let report = validate_form(&blank).unwrap_err();
        assert!(report.has_error_at("name"));
        assert!(report.has_error_at("offers.features.0"));
    }
}
