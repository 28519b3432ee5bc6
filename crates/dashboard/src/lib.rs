pub mod card;
pub mod controller;
pub mod format;
pub mod terminal;
pub mod view;

pub use card::SignalCard;
pub use controller::{AUTO_REFRESH_PERIOD, RefreshMode, SignalViewController};
pub use terminal::TerminalView;
pub use view::{Panel, SignalView};
