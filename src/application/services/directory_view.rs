//! Read-side projections for the directory list: summary counters, search,
//! filters, sorting and display labels.
//!
//! Everything here works on clones returned by
//! [`WebsiteStore::list`](super::WebsiteStore::list); nothing is persisted.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::entities::{Pricing, PricingKind, Website, WebsiteStatus};

/// Counters shown above the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DirectorySummary {
    pub total: usize,
    pub active: usize,
    pub paid: usize,
}

impl DirectorySummary {
    pub fn from_websites(websites: &[Website]) -> Self {
        Self {
            total: websites.len(),
            active: websites.iter().filter(|w| w.is_active()).count(),
            paid: websites.iter().filter(|w| w.is_paid()).count(),
        }
    }

    /// Share of active records, rounded to a whole percent. `0` when empty.
    pub fn active_percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.active as f64 * 100.0 / self.total as f64).round() as u32
    }
}

/// Column a list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Stored order: most recently created first.
    #[default]
    Stored,
    Name,
    UpdatedAt,
    CreatedAt,
    Category,
    Status,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stored" | "none" => Ok(Self::Stored),
            "name" => Ok(Self::Name),
            "updated" | "updated-at" | "updatedat" => Ok(Self::UpdatedAt),
            "created" | "created-at" | "createdat" => Ok(Self::CreatedAt),
            "category" => Ok(Self::Category),
            "status" => Ok(Self::Status),
            other => Err(format!(
                "unknown sort key '{other}' (expected name, updated, created, category or status)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Search, filter and sort options for the list.
///
/// The default query returns every record in stored order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    /// Case-insensitive substring matched against name, URL, description
    /// and category.
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<WebsiteStatus>,
    pub pricing: Option<PricingKind>,
    pub sort: SortKey,
    pub direction: SortDirection,
}

impl ListQuery {
    pub fn matches(&self, website: &Website) -> bool {
        if let Some(status) = self.status
            && website.status != status
        {
            return false;
        }

        if let Some(kind) = self.pricing
            && website.offers.pricing.kind() != kind
        {
            return false;
        }

        if let Some(category) = &self.category
            && !website.category.eq_ignore_ascii_case(category)
        {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                [
                    &website.name,
                    &website.url,
                    &website.description,
                    &website.category,
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
            }
            _ => true,
        }
    }
}

/// Filters and orders `websites` according to `query`.
///
/// Sorting is stable, so ties keep their stored order.
pub fn apply_query(websites: Vec<Website>, query: &ListQuery) -> Vec<Website> {
    let mut rows: Vec<Website> = websites.into_iter().filter(|w| query.matches(w)).collect();

    if query.sort != SortKey::Stored {
        rows.sort_by(|a, b| {
            let ordering = compare(a, b, query.sort);
            match query.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    rows
}

fn compare(a: &Website, b: &Website, key: SortKey) -> Ordering {
    match key {
        SortKey::Stored => Ordering::Equal,
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        SortKey::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
        SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
    }
}

/// Badge text for a pricing model: `Free`, `Freemium` or `$29/m`.
pub fn pricing_label(pricing: &Pricing) -> String {
    match pricing {
        Pricing::Free => "Free".to_string(),
        Pricing::Freemium => "Freemium".to_string(),
        Pricing::Paid {
            amount,
            billing_cycle,
            ..
        } => format!("${}/{}", amount, billing_cycle.short()),
    }
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

impl fmt::Display for DirectorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} websites, {} active ({}%), {} paid",
            self.total,
            self.active,
            self.active_percentage(),
            self.paid
        )
    }
}
