use chrono::{DateTime, Local};
use common::models::SignalResponse;

use crate::format::{
    ConfidenceDisplay, NOT_AVAILABLE, format_confidence, format_optional, format_price,
    format_reasons, format_rsi,
};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Every display field of the signal panel, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalCard {
    pub symbol: String,
    pub badge_text: String,
    pub badge_class: String,
    pub current_price: String,
    pub take_profit: String,
    pub stop_loss: String,
    pub rsi: String,
    pub ema12: String,
    pub ema26: String,
    pub atr: String,
    pub confidence: ConfidenceDisplay,
    pub reasons: Vec<String>,
    pub timeframe_summary: Option<[String; 3]>,
    pub last_updated: String,
}

impl SignalCard {
    /// Projection with the wall clock read now, at render time.
    pub fn render(data: &SignalResponse) -> Self {
        Self::project(data, Local::now())
    }

    /// `now` only fills in `last_updated` when the backend sent no timestamp.
    pub fn project(data: &SignalResponse, now: DateTime<Local>) -> Self {
        let timeframe_summary = data.timeframe_analysis.map(|ta| {
            let analyzed = data
                .timeframes_analyzed
                .as_ref()
                .map_or_else(|| NOT_AVAILABLE.to_string(), |labels| labels.join(", "));
            [
                format!(
                    "Bullish Timeframes: {} / {}",
                    ta.bullish_timeframes, ta.total_timeframes
                ),
                format!(
                    "Bearish Timeframes: {} / {}",
                    ta.bearish_timeframes, ta.total_timeframes
                ),
                format!("Timeframes Analyzed: {}", analyzed),
            ]
        });

        let timestamp = data
            .timestamp
            .clone()
            .unwrap_or_else(|| now.format(TIMESTAMP_FORMAT).to_string());

        Self {
            symbol: data.symbol.clone(),
            badge_text: data.signal.clone(),
            badge_class: data.style_class(),
            current_price: format_price(data.current_price),
            take_profit: format_price(data.take_profit),
            stop_loss: format_price(data.stop_loss),
            rsi: format_rsi(data.rsi),
            ema12: format_optional(data.ema12),
            ema26: format_optional(data.ema26),
            atr: format_optional(data.atr),
            confidence: format_confidence(data.confidence),
            reasons: format_reasons(data.reasons.as_deref()),
            timeframe_summary,
            last_updated: format!("Last updated: {}", timestamp),
        }
    }
}
