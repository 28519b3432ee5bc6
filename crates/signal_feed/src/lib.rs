pub mod error;
pub mod remote;
pub mod traits;

pub use error::FetchFailure;
pub use remote::SignalClient;
pub use traits::SignalSource;
