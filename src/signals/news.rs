//! News and corporate-event scoring
//!
//! A string-matching keyword classifier over already-fetched news items,
//! plus calendar-proximity points for earnings and ex-dividend dates. The
//! caller supplies the items, the event dates, and the as-of date; nothing
//! here touches the network.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::NewsConfig;
use crate::models::news::{CorporateEvents, NewsItem};

/// What the assessment suggests doing with the asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewsAction {
    BuyNow,
    Monitor,
    Watch,
}

/// The primary driver behind an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    EarningsSoon,
    ExDividendSoon,
    AnalystUpgrade,
    BuyRecommendation,
    RecordResults,
    Growth,
    RegulatoryApproval,
    PriceSurge,
    PositiveFlow,
}

impl Trigger {
    /// One-line rationale for the suggested entry.
    pub fn rationale(&self) -> &'static str {
        match self {
            Trigger::EarningsSoon => {
                "High volatility expected; chance to capture a strong post-earnings move."
            }
            Trigger::ExDividendSoon => {
                "Strategic entry to lock in the upcoming dividend payment."
            }
            Trigger::AnalystUpgrade | Trigger::BuyRecommendation => {
                "Banks and analysts revised the rating upward, pointing to institutional buy flow."
            }
            Trigger::RecordResults | Trigger::Growth => {
                "Company reporting growth or record results, validating the uptrend."
            }
            Trigger::RegulatoryApproval => {
                "Regulatory approval unlocks fundamental value in the stock."
            }
            Trigger::PriceSurge | Trigger::PositiveFlow => {
                "Strongly positive news flow suggests market optimism."
            }
        }
    }
}

/// Output of [`assess`]. Created fresh per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsAssessment {
    pub total_score: i32,
    pub action: NewsAction,
    pub trigger: Trigger,
    /// Short notes for each calendar event that scored.
    pub events: Vec<String>,
    /// The headline that drove the first keyword match, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_headline: Option<NewsItem>,
}

impl NewsAssessment {
    pub fn rationale(&self) -> &'static str {
        self.trigger.rationale()
    }
}

const KEYWORD_TRIGGERS: &[(&str, Trigger)] = &[
    ("upgrade", Trigger::AnalystUpgrade),
    ("buy", Trigger::BuyRecommendation),
    ("record", Trigger::RecordResults),
    ("growth", Trigger::Growth),
    ("approval", Trigger::RegulatoryApproval),
    ("soar", Trigger::PriceSurge),
    ("jump", Trigger::PriceSurge),
];

const POSITIVE_WORDS: &[&str] = &[
    "beat", "beats", "strong", "surge", "rally", "gain", "gains", "profit", "upgrade", "record",
    "growth", "approval", "soar", "soars", "jump", "jumps", "buy", "outperform", "bullish",
];

const NEGATIVE_WORDS: &[&str] = &[
    "miss", "misses", "weak", "plunge", "drop", "drops", "loss", "losses", "downgrade", "lawsuit",
    "recall", "cut", "cuts", "sell", "underperform", "bearish", "fraud", "probe",
];

/// Net keyword polarity of a lowercased text. Positive means optimistic.
fn polarity(text: &str) -> i32 {
    let count = |words: &[&str]| {
        words
            .iter()
            .filter(|word| text.split(|c: char| !c.is_alphanumeric()).any(|t| t == **word))
            .count() as i32
    };
    count(POSITIVE_WORDS) - count(NEGATIVE_WORDS)
}

fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// Score an asset's news flow and calendar. Pure function of its inputs.
pub fn assess(
    news: &[NewsItem],
    events: &CorporateEvents,
    today: NaiveDate,
    config: &NewsConfig,
) -> NewsAssessment {
    let mut total = 0;
    let mut event_notes = Vec::new();
    let mut trigger: Option<Trigger> = None;
    let mut top_headline: Option<NewsItem> = None;

    if let Some(earnings) = events.earnings_date {
        let days = days_until(earnings, today);
        if (0..=config.earnings_window_days).contains(&days) {
            total += config.earnings_weight;
            trigger.get_or_insert(Trigger::EarningsSoon);
            event_notes.push(format!("earnings in {}d", days));
        }
    }

    if let Some(ex_dividend) = events.ex_dividend_date {
        let days = days_until(ex_dividend, today);
        if (0..=config.dividend_window_days).contains(&days) {
            total += config.dividend_weight;
            trigger.get_or_insert(Trigger::ExDividendSoon);
            let yield_note = events
                .dividend_yield
                .map(|y| format!("{:.1}%", y * 100.0))
                .unwrap_or_else(|| "?".to_string());
            event_notes.push(format!("ex-dividend in {}d (yield {})", days, yield_note));
        }
    }

    let mut news_points = 0;
    for item in news {
        if news_points >= config.news_points_cap {
            break;
        }
        let text = format!("{} {}", item.headline, item.summary).to_lowercase();
        let matched = KEYWORD_TRIGGERS
            .iter()
            .find(|(keyword, _)| text.contains(keyword));
        if let Some((_, item_trigger)) = matched {
            if polarity(&text) > 0 {
                news_points = (news_points + config.headline_weight).min(config.news_points_cap);
                trigger.get_or_insert(*item_trigger);
                if top_headline.is_none() {
                    top_headline = Some(item.clone());
                }
            }
        }
    }
    total += news_points;

    let total = total.min(config.max_score);
    let action = if total >= config.buy_threshold {
        NewsAction::BuyNow
    } else if total >= config.monitor_threshold {
        NewsAction::Monitor
    } else {
        NewsAction::Watch
    };

    NewsAssessment {
        total_score: total,
        action,
        trigger: trigger.unwrap_or(Trigger::PositiveFlow),
        events: event_notes,
        top_headline,
    }
}
