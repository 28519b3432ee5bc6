pub mod selection;
pub mod signal;

pub use selection::Selection;
pub use signal::{SignalResponse, TimeframeAnalysis};
