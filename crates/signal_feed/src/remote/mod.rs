pub mod signal_client;

pub use signal_client::SignalClient;
