//! Declarative field rules and the checks that apply them.
//!
//! Each check reads its own fields, records every violation it finds and
//! returns the typed value only when the field is valid.

use serde_json::Value;
use std::str::FromStr;
use validator::ValidateLength;

use super::paths;
use super::reader::{FormReader, Read};
use crate::domain::entities::{BillingCycle, Pricing, PricingKind, WordCountRange};
use crate::utils::url_check::check_absolute_url;

/// Machine codes attached to [`super::FieldError`].
pub mod codes {
    pub const REQUIRED: &str = "required";
    pub const LENGTH: &str = "length";
    pub const URL: &str = "url";
    pub const ENUM: &str = "enum";
    pub const RANGE: &str = "range";
    pub const TYPE: &str = "type";
    pub const PAID_PRICING: &str = "paid_pricing";
    pub const WORD_COUNT_ORDER: &str = "word_count_order";
}

/// Length bounds for a free-text field, counted in characters.
pub(crate) struct TextRule {
    pub path: &'static str,
    pub label: &'static str,
    pub min: u64,
    pub max: Option<u64>,
    pub min_message: &'static str,
    pub max_message: &'static str,
}

pub(crate) const NAME: TextRule = TextRule {
    path: paths::NAME,
    label: "Website name",
    min: 1,
    max: Some(100),
    min_message: "Website name is required",
    max_message: "Name must be less than 100 characters",
};

pub(crate) const DESCRIPTION: TextRule = TextRule {
    path: paths::DESCRIPTION,
    label: "Description",
    min: 10,
    max: Some(1000),
    min_message: "Description must be at least 10 characters",
    max_message: "Description must be less than 1000 characters",
};

pub(crate) const CATEGORY: TextRule = TextRule {
    path: paths::CATEGORY,
    label: "Category",
    min: 1,
    max: None,
    min_message: "Category is required",
    max_message: "",
};

pub(crate) const SUBMISSION_GUIDELINES: TextRule = TextRule {
    path: paths::SUBMISSION_GUIDELINES,
    label: "Submission guidelines",
    min: 10,
    max: None,
    min_message: "Guidelines must be at least 10 characters",
    max_message: "",
};

/// A non-empty list of non-empty strings.
pub(crate) struct ListRule {
    pub path: &'static str,
    pub item_message: &'static str,
    pub min_message: &'static str,
}

pub(crate) const FEATURES: ListRule = ListRule {
    path: paths::FEATURES,
    item_message: "Feature cannot be empty",
    min_message: "At least one feature is required",
};

pub(crate) const TARGET_AUDIENCE: ListRule = ListRule {
    path: paths::TARGET_AUDIENCE,
    item_message: "Audience cannot be empty",
    min_message: "At least one target audience is required",
};

pub(crate) const UNIQUE_SELLING_POINTS: ListRule = ListRule {
    path: paths::UNIQUE_SELLING_POINTS,
    item_message: "USP cannot be empty",
    min_message: "At least one USP is required",
};

pub(crate) const CONTENT_TYPES: ListRule = ListRule {
    path: paths::CONTENT_TYPES,
    item_message: "Content type cannot be empty",
    min_message: "At least one content type is required",
};

pub(crate) const TONE_OF_VOICE: ListRule = ListRule {
    path: paths::TONE_OF_VOICE,
    item_message: "Tone cannot be empty",
    min_message: "At least one tone is required",
};

pub(crate) const REQUIRED_SECTIONS: ListRule = ListRule {
    path: paths::REQUIRED_SECTIONS,
    item_message: "Section cannot be empty",
    min_message: "At least one section is required",
};

pub(crate) const PAID_PRICING_MESSAGE: &str =
    "Paid pricing requires amount, currency, and billing cycle";
pub(crate) const WORD_COUNT_ORDER_MESSAGE: &str = "Maximum word count must be greater than minimum";

pub(crate) fn text(reader: &mut FormReader<'_>, rule: &TextRule) -> Option<String> {
    let value = match reader.string(rule.path) {
        Read::Found(value) => value.to_string(),
        Read::Missing => {
            reader.error(rule.path, codes::REQUIRED, format!("{} is required", rule.label));
            return None;
        }
        Read::Invalid => return None,
    };

    if !value.validate_length(Some(rule.min), None, None) {
        reader.error(rule.path, codes::LENGTH, rule.min_message);
        return None;
    }

    if let Some(max) = rule.max
        && !value.validate_length(None, Some(max), None)
    {
        reader.error(rule.path, codes::LENGTH, rule.max_message);
        return None;
    }

    Some(value)
}

pub(crate) fn url(reader: &mut FormReader<'_>) -> Option<String> {
    match reader.string(paths::URL) {
        Read::Found(value) => match check_absolute_url(value) {
            Ok(_) => Some(value.to_string()),
            Err(_) => {
                reader.error(paths::URL, codes::URL, "Please enter a valid URL");
                None
            }
        },
        Read::Missing => {
            reader.error(paths::URL, codes::REQUIRED, "Website URL is required");
            None
        }
        Read::Invalid => None,
    }
}

/// Parses an enumerated string without reporting a missing value.
fn parse_choice<T: FromStr>(
    reader: &mut FormReader<'_>,
    path: &str,
    label: &str,
    allowed: &[&str],
) -> Read<T> {
    match reader.string(path) {
        Read::Found(value) => match value.parse::<T>() {
            Ok(choice) => Read::Found(choice),
            Err(_) => {
                reader.error(
                    path,
                    codes::ENUM,
                    format!(
                        "Invalid {label}. Expected {}, received '{value}'",
                        expected_list(allowed)
                    ),
                );
                Read::Invalid
            }
        },
        Read::Missing => Read::Missing,
        Read::Invalid => Read::Invalid,
    }
}

pub(crate) fn choice<T: FromStr>(
    reader: &mut FormReader<'_>,
    path: &str,
    label: &str,
    allowed: &[&str],
) -> Option<T> {
    match parse_choice(reader, path, label, allowed) {
        Read::Found(choice) => Some(choice),
        Read::Missing => {
            reader.error(path, codes::REQUIRED, format!("Please select a {label}"));
            None
        }
        Read::Invalid => None,
    }
}

fn expected_list(allowed: &[&str]) -> String {
    allowed
        .iter()
        .map(|option| format!("'{option}'"))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Reads the pricing union.
///
/// For `free` and `freemium` the amount, currency and billing cycle are not
/// read at all. For `paid`, a missing or non-positive amount, a missing or
/// empty currency, or a missing billing cycle is reported once against
/// `offers.pricing.amount`.
pub(crate) fn pricing(reader: &mut FormReader<'_>) -> Option<Pricing> {
    let kind: PricingKind = choice(
        reader,
        paths::PRICING_TYPE,
        "pricing type",
        &["free", "paid", "freemium"],
    )?;

    match kind {
        PricingKind::Free => Some(Pricing::Free),
        PricingKind::Freemium => Some(Pricing::Freemium),
        PricingKind::Paid => paid_pricing(reader),
    }
}

fn paid_pricing(reader: &mut FormReader<'_>) -> Option<Pricing> {
    let amount = reader.number(paths::PRICING_AMOUNT);
    let currency = reader.string(paths::PRICING_CURRENCY);
    let billing_cycle: Read<BillingCycle> = parse_choice(
        reader,
        paths::PRICING_BILLING_CYCLE,
        "billing cycle",
        &["monthly", "yearly", "one-time"],
    );

    if amount.is_invalid() || currency.is_invalid() || billing_cycle.is_invalid() {
        return None;
    }

    match (amount, currency, billing_cycle) {
        (Read::Found(amount), Read::Found(currency), Read::Found(billing_cycle))
            if amount > 0.0 && !currency.is_empty() =>
        {
            Some(Pricing::Paid {
                amount,
                currency: currency.to_string(),
                billing_cycle,
            })
        }
        _ => {
            reader.error(
                paths::PRICING_AMOUNT,
                codes::PAID_PRICING,
                PAID_PRICING_MESSAGE,
            );
            None
        }
    }
}

pub(crate) fn string_list(reader: &mut FormReader<'_>, rule: &ListRule) -> Option<Vec<String>> {
    let items = match reader.array(rule.path) {
        Read::Found(items) => items,
        Read::Missing => {
            reader.error(rule.path, codes::REQUIRED, rule.min_message);
            return None;
        }
        Read::Invalid => return None,
    };

    let mut values = Vec::with_capacity(items.len());
    let mut valid = true;

    for (index, item) in items.iter().enumerate() {
        let path = paths::item(rule.path, index);
        match item {
            Value::String(value) if value.validate_length(Some(1_u64), None, None) => {
                values.push(value.clone());
            }
            Value::String(_) => {
                reader.error(path, codes::LENGTH, rule.item_message);
                valid = false;
            }
            other => {
                reader.type_error(&path, "string", other);
                valid = false;
            }
        }
    }

    if items.is_empty() {
        reader.error(rule.path, codes::LENGTH, rule.min_message);
        valid = false;
    }

    valid.then_some(values)
}

/// Reads the word count bounds; `max > min` is reported against `max`.
pub(crate) fn word_count_range(reader: &mut FormReader<'_>) -> Option<WordCountRange> {
    let min = word_count(
        reader,
        paths::WORD_COUNT_MIN,
        "Minimum word count must be at least 1",
    );
    let max = word_count(
        reader,
        paths::WORD_COUNT_MAX,
        "Maximum word count must be at least 1",
    );
    let (min, max) = (min?, max?);

    if max > min {
        Some(WordCountRange::new(min, max))
    } else {
        reader.error(
            paths::WORD_COUNT_MAX,
            codes::WORD_COUNT_ORDER,
            WORD_COUNT_ORDER_MESSAGE,
        );
        None
    }
}

fn word_count(reader: &mut FormReader<'_>, path: &str, message: &str) -> Option<f64> {
    match reader.number(path) {
        Read::Found(count) if count >= 1.0 => Some(count),
        Read::Found(_) => {
            reader.error(path, codes::RANGE, message);
            None
        }
        Read::Missing => {
            reader.error(path, codes::REQUIRED, "Word count is required");
            None
        }
        Read::Invalid => None,
    }
}

pub(crate) fn flag(reader: &mut FormReader<'_>, path: &str) -> Option<bool> {
    match reader.boolean(path) {
        Read::Found(value) => Some(value),
        Read::Missing => {
            reader.error(path, codes::REQUIRED, "Required");
            None
        }
        Read::Invalid => None,
    }
}
