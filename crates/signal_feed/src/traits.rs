use std::sync::Arc;

use async_trait::async_trait;
use common::models::SignalResponse;

use crate::error::FetchFailure;

/// Anything that can answer "what is the signal for this pair right now".
#[async_trait]
pub trait SignalSource: Send + Sync {
    async fn fetch_signal(
        &self,
        symbol: &str,
        timeframe: &str,
    ) -> Result<SignalResponse, FetchFailure>;
}

#[async_trait]
impl<T: SignalSource + ?Sized> SignalSource for Arc<T> {
    async fn fetch_signal(
        &self,
        symbol: &str,
        timeframe: &str,
    ) -> Result<SignalResponse, FetchFailure> {
        (**self).fetch_signal(symbol, timeframe).await
    }
}
