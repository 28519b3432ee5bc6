pub const DEFAULT_SYMBOL: &str = "BTC-USDT";
pub const DEFAULT_TIMEFRAME: &str = "1hour";

/// The (symbol, timeframe) pair the next request is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub symbol: String,
    pub timeframe: String,
}

impl Selection {
    pub fn new(symbol: impl Into<String>, timeframe: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            timeframe: timeframe.into(),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOL, DEFAULT_TIMEFRAME)
    }
}
