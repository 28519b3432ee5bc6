use std::io::{self, Write};

use tracing::error;

use crate::{
    card::SignalCard,
    view::{Panel, SignalView, auto_refresh_label},
};

const GAUGE_CELLS: usize = 20;
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Buy,
    Sell,
    Hold,
    Plain,
}

impl BadgeStyle {
    pub fn from_class(class: &str) -> Self {
        match class {
            "buy" => BadgeStyle::Buy,
            "sell" => BadgeStyle::Sell,
            "hold" => BadgeStyle::Hold,
            _ => BadgeStyle::Plain,
        }
    }

    fn ansi(self) -> Option<&'static str> {
        match self {
            BadgeStyle::Buy => Some("\x1b[1;32m"),
            BadgeStyle::Sell => Some("\x1b[1;31m"),
            BadgeStyle::Hold => Some("\x1b[1;33m"),
            BadgeStyle::Plain => None,
        }
    }
}

/// Line-oriented dashboard. Every panel change redraws the whole block.
pub struct TerminalView<W: Write + Send> {
    out: W,
    color: bool,
    panel: Option<Panel>,
    auto_refresh: bool,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), true)
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            panel: None,
            auto_refresh: false,
        }
    }

    #[cfg(test)]
    fn panel(&self) -> Option<&Panel> {
        self.panel.as_ref()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self) {
        let mut frame = String::new();
        frame.push_str(&format!("=== {} ===\n", auto_refresh_label(self.auto_refresh)));
        match &self.panel {
            Some(Panel::Loading) => frame.push_str("Loading signal...\n"),
            Some(Panel::Error(message)) => frame.push_str(&format!("{}\n", message)),
            Some(Panel::Result(card)) => frame.push_str(&self.render_card(card)),
            None => {}
        }

        if let Err(e) = self.out.write_all(frame.as_bytes()).and_then(|_| self.out.flush()) {
            error!("Failed to draw dashboard: {}", e);
        }
    }

    fn render_card(&self, card: &SignalCard) -> String {
        let mut lines = Vec::with_capacity(16);

        lines.push(format!("{}  {}", card.symbol, self.badge(card)));
        lines.push(format!(
            "Price: {}   Take Profit: {}   Stop Loss: {}",
            card.current_price, card.take_profit, card.stop_loss
        ));
        lines.push(format!(
            "RSI: {}   EMA12: {}   EMA26: {}   ATR: {}",
            card.rsi, card.ema12, card.ema26, card.atr
        ));
        lines.push(format!(
            "Confidence: [{}] {}",
            gauge(card.confidence.width),
            card.confidence.label
        ));

        lines.push("Reasons:".to_string());
        lines.extend(card.reasons.iter().map(|reason| format!("  - {}", reason)));

        if let Some(summary) = &card.timeframe_summary {
            lines.push("Timeframe Analysis:".to_string());
            lines.extend(summary.iter().map(|line| format!("  {}", line)));
        }

        lines.push(card.last_updated.clone());

        let mut block = lines.join("\n");
        block.push('\n');
        block
    }

    fn badge(&self, card: &SignalCard) -> String {
        let style = BadgeStyle::from_class(&card.badge_class);
        match style.ansi() {
            Some(code) if self.color => format!("{}[{}]{}", code, card.badge_text, RESET),
            _ => format!("[{}]", card.badge_text),
        }
    }
}

impl<W: Write + Send> SignalView for TerminalView<W> {
    fn show(&mut self, panel: Panel) {
        self.panel = Some(panel);
        self.draw();
    }

    fn set_auto_refresh(&mut self, enabled: bool) {
        self.auto_refresh = enabled;
        self.draw();
    }
}

// The gauge is the only place the width gets clamped; the value itself is not.
fn gauge(width: f64) -> String {
    let filled = ((width / 100.0) * GAUGE_CELLS as f64).round();
    let filled = filled.clamp(0.0, GAUGE_CELLS as f64) as usize;
    format!("{}{}", "#".repeat(filled), "-".repeat(GAUGE_CELLS - filled))
}
