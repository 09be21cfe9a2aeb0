//! Website record and its editable form payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::article_specs::ArticleSpecs;
use super::offers::Offers;

/// Opaque website identifier.
pub type WebsiteId = String;

/// Categories offered by the form. Stored values are free-form strings.
pub const CATEGORIES: &[&str] = &[
    "E-commerce",
    "SaaS",
    "Blog",
    "Portfolio",
    "News",
    "Education",
    "Healthcare",
    "Finance",
    "Entertainment",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebsiteStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl WebsiteStatus {
    pub const ALL: [WebsiteStatus; 3] = [Self::Active, Self::Inactive, Self::Pending];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for WebsiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WebsiteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown status '{s}'"))
    }
}

/// A website entry in the directory.
///
/// Records are created, replaced and removed only by
/// [`crate::application::services::WebsiteStore`]; `id` and `created_at`
/// never change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    pub id: WebsiteId,
    pub name: String,
    pub url: String,
    pub description: String,
    pub category: String,
    pub status: WebsiteStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub offers: Offers,
    pub article_specs: ArticleSpecs,
}

impl Website {
    /// Builds a new record from form data with both timestamps set to `now`.
    pub fn from_form(id: WebsiteId, data: WebsiteFormData, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: data.name,
            url: data.url,
            description: data.description,
            category: data.category,
            status: data.status,
            created_at: now,
            updated_at: now,
            offers: data.offers,
            article_specs: data.article_specs,
        }
    }

    /// Replaces every editable field and refreshes `updated_at`.
    ///
    /// `updated_at` never moves before `created_at`, even if the clock does.
    pub fn apply_form(&mut self, data: WebsiteFormData, now: DateTime<Utc>) {
        self.name = data.name;
        self.url = data.url;
        self.description = data.description;
        self.category = data.category;
        self.status = data.status;
        self.offers = data.offers;
        self.article_specs = data.article_specs;
        self.updated_at = now.max(self.created_at);
    }

    /// Returns the editable part of this record.
    pub fn to_form_data(&self) -> WebsiteFormData {
        WebsiteFormData {
            name: self.name.clone(),
            url: self.url.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            status: self.status,
            offers: self.offers.clone(),
            article_specs: self.article_specs.clone(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == WebsiteStatus::Active
    }

    pub fn is_paid(&self) -> bool {
        self.offers.pricing.is_paid()
    }
}

/// Editable payload exchanged between the form and the store: a
/// [`Website`] without `id`, `created_at` and `updated_at`.
///
/// The default value mirrors a blank form: it is intentionally not valid
/// until the user fills it in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteFormData {
    pub name: String,
    pub url: String,
    pub description: String,
    pub category: String,
    pub status: WebsiteStatus,
    pub offers: Offers,
    pub article_specs: ArticleSpecs,
}

impl Default for WebsiteFormData {
    fn default() -> Self {
        let blank = || vec![String::new()];

        Self {
            name: String::new(),
            url: String::new(),
            description: String::new(),
            category: String::new(),
            status: WebsiteStatus::Active,
            offers: Offers {
                features: blank(),
                target_audience: blank(),
                unique_selling_points: blank(),
                ..Offers::default()
            },
            article_specs: ArticleSpecs {
                content_types: blank(),
                tone_of_voice: blank(),
                required_sections: blank(),
                ..ArticleSpecs::default()
            },
        }
    }
}
