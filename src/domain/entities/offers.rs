//! Monetization offers attached to a website.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currencies offered by the form for paid pricing.
pub const CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "CAD", "AUD"];

/// Billing cadence of a paid offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BillingCycle {
    Monthly,
    Yearly,
    OneTime,
}

impl BillingCycle {
    pub const ALL: [BillingCycle; 3] = [Self::Monthly, Self::Yearly, Self::OneTime];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::OneTime => "one-time",
        }
    }

    /// Single-letter suffix used in compact price labels (`$29/m`).
    pub fn short(self) -> char {
        match self {
            Self::Monthly => 'm',
            Self::Yearly => 'y',
            Self::OneTime => 'o',
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingCycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cycle| cycle.as_str() == s)
            .ok_or_else(|| format!("unknown billing cycle '{s}'"))
    }
}

/// Pricing model of a website.
///
/// Only the `Paid` variant carries an amount, a currency and a billing cycle,
/// so a paid offer without them cannot be represented.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Pricing {
    #[default]
    Free,
    Paid {
        amount: f64,
        currency: String,
        #[serde(rename = "billingCycle")]
        billing_cycle: BillingCycle,
    },
    Freemium,
}

impl Pricing {
    pub fn kind(&self) -> PricingKind {
        match self {
            Pricing::Free => PricingKind::Free,
            Pricing::Paid { .. } => PricingKind::Paid,
            Pricing::Freemium => PricingKind::Freemium,
        }
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, Pricing::Paid { .. })
    }
}

/// Discriminant of [`Pricing`], used for filtering and form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PricingKind {
    Free,
    Paid,
    Freemium,
}

impl PricingKind {
    pub const ALL: [PricingKind; 3] = [Self::Free, Self::Paid, Self::Freemium];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Paid => "paid",
            Self::Freemium => "freemium",
        }
    }
}

impl fmt::Display for PricingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown pricing type '{s}'"))
    }
}

/// Offers section of a website record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offers {
    pub pricing: Pricing,
    pub features: Vec<String>,
    pub target_audience: Vec<String>,
    pub unique_selling_points: Vec<String>,
}
