//! GuidedInputSet - operational counts a non-expert can read off their tools.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::numeric::{deserialize_non_negative, floor_one, non_negative};
use crate::domain::foundation::ReviewProcessLevel;

/// Raw operational figures used to derive rates in guided mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuidedInputSet {
    // Knowledge base
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub total_articles: f64,
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub stale_articles: f64,
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub contributors: f64,
    pub review_process: ReviewProcessLevel,

    // AI support volume
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub ai_conversations: f64,
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub ai_tickets: f64,
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub wrong_tickets: f64,
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub silent_multiplier: f64,
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub cost_per_ticket: f64,

    // Customers
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub customers: f64,
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub account_value: f64,
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub churn_mentions: f64,
    /// Collected for context; no derivation reads it.
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub total_churned: f64,

    // Rework and platform
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub rework_hours: f64,
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub rework_rate: f64,
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub platform_cost: f64,
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub setup_cost: f64,
}

impl GuidedInputSet {
    /// Total article count floored at 1.
    pub fn article_base(&self) -> f64 {
        floor_one(self.total_articles)
    }

    /// Stale article count capped at the article base.
    pub fn effective_stale_articles(&self) -> f64 {
        non_negative(self.stale_articles).min(self.article_base())
    }

    /// Share of articles that are stale, in [0, 1].
    pub fn stale_fraction(&self) -> f64 {
        self.effective_stale_articles() / self.article_base()
    }

    /// Conversation count floored at 1.
    pub fn conversation_base(&self) -> f64 {
        floor_one(self.ai_conversations)
    }

    /// Silent-failure multiplier floored at 1.
    pub fn effective_silent_multiplier(&self) -> f64 {
        floor_one(self.silent_multiplier)
    }

    /// Monthly conversations spread over a 30-day month.
    pub fn daily_queries(&self) -> f64 {
        non_negative(self.ai_conversations) / 30.0
    }
}

/// Values for expert fields that guided mode does not collect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionDefaults {
    pub queries_per_customer: f64,
    pub revenue_at_risk_pct: f64,
    pub attribution_weight_pct: f64,
}

/// Queries per customer assumed whenever the real figure is unknown.
pub const DEFAULT_QUERIES_PER_CUSTOMER: f64 = 200.0;

impl Default for ProjectionDefaults {
    fn default() -> Self {
        Self {
            queries_per_customer: DEFAULT_QUERIES_PER_CUSTOMER,
            revenue_at_risk_pct: 100.0,
            attribution_weight_pct: 15.0,
        }
    }
}
