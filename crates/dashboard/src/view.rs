use crate::card::SignalCard;

/// The three mutually exclusive panels. Holding exactly one of them is what
/// keeps loading, error and result from ever being visible together.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Loading,
    Error(String),
    Result(SignalCard),
}

impl Panel {
    #[cfg(test)]
    pub(crate) fn is_loading(&self) -> bool {
        matches!(self, Panel::Loading)
    }

    #[cfg(test)]
    pub(crate) fn error_message(&self) -> Option<&str> {
        match self {
            Panel::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn card(&self) -> Option<&SignalCard> {
        match self {
            Panel::Result(card) => Some(card),
            _ => None,
        }
    }
}

pub trait SignalView: Send {
    /// Replaces whatever panel is showing.
    fn show(&mut self, panel: Panel);

    fn set_auto_refresh(&mut self, enabled: bool);
}

pub fn auto_refresh_label(enabled: bool) -> &'static str {
    if enabled {
        "Auto Refresh: ON"
    } else {
        "Auto Refresh: OFF"
    }
}
