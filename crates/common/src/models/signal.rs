use serde::{Deserialize, Serialize};

/// Body of `GET /api/signal`. Everything but `symbol` and `signal` is optional;
/// an absent value means "not applicable", never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResponse {
    pub symbol: String,
    pub signal: String, // "BUY", "SELL" or "HOLD"
    // older backend builds send the last close as "price"
    #[serde(default, alias = "price")]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub take_profit: Option<f64>,
    #[serde(default)]
    pub stop_loss: Option<f64>,
    #[serde(default)]
    pub rsi: Option<f64>,
    #[serde(default)]
    pub ema12: Option<f64>,
    #[serde(default)]
    pub ema26: Option<f64>,
    #[serde(default)]
    pub atr: Option<f64>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub reasons: Option<Vec<String>>,
    #[serde(default)]
    pub timeframe_analysis: Option<TimeframeAnalysis>,
    #[serde(default)]
    pub timeframes_analyzed: Option<Vec<String>>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeframeAnalysis {
    pub bullish_timeframes: u32,
    pub bearish_timeframes: u32,
    pub total_timeframes: u32,
}

impl SignalResponse {
    /// Lower-cased signal, used as the badge style key.
    pub fn style_class(&self) -> String {
        self.signal.to_lowercase()
    }
}
