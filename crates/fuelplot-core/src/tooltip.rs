// File: crates/fuelplot-core/src/tooltip.rs
// Summary: Shared floating tooltip state machine and per-chart label formats.

use crate::record::{FillupRecord, FIRST_FILLUP_DEFAULT_DAYS};
use crate::ticks::format_number;

/// Fade duration for both show and hide transitions, in milliseconds.
pub const FADE_MS: u64 = 200;

/// The label floats this far above the pointer.
pub const POINTER_Y_OFFSET: f64 = 20.0;

/// Which label template a chart element uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipKind {
    Mileage,
    PotentialMiles,
    AvgMpg,
    PricePerMile,
    FillupFrequency,
}

impl TooltipKind {
    /// Format the label for `record`. Pure and deterministic: the same
    /// record always yields the same text. `date_prefixed` prepends
    /// `[date]: ` the way some chart variants do.
    pub fn format(&self, record: &FillupRecord, date_prefixed: bool) -> String {
        let body = match self {
            TooltipKind::Mileage => format_number(record.mileage),
            TooltipKind::PotentialMiles => format!(
                "{} + {} = {}",
                format_number(record.mileage),
                format_number(record.miles_remaining),
                format_number(record.miles_remaining + record.mileage),
            ),
            TooltipKind::AvgMpg => format!("{} mpg", format_number(record.mpg)),
            TooltipKind::PricePerMile => format!("{:.3} $/mile", record.price_per_mile),
            TooltipKind::FillupFrequency => {
                let days = record
                    .days_since_fillup
                    .unwrap_or(FIRST_FILLUP_DEFAULT_DAYS);
                return format!("[{}]: {:.0} days", record.date_key, days);
            }
        };
        if date_prefixed {
            format!("[{}]: {}", record.date_key, body)
        } else {
            body
        }
    }
}

/// Visibility endpoint of a fade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

/// A fade the pointer host should animate: toward `to` over `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fade {
    pub to: Visibility,
    pub duration_ms: u64,
}

/// The single floating label shared by every chart on a page.
///
/// One pointer hovers one element at a time, so last-writer-wins is the
/// whole arbitration policy. Created once per page render and passed
/// around explicitly.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    visibility: Visibility,
    text: String,
    x: f64,
    y: f64,
}

impl Tooltip {
    pub fn new() -> Self {
        Self {
            visibility: Visibility::Hidden,
            text: String::new(),
            x: 0.0,
            y: 0.0,
        }
    }

    /// Pointer entered a shape: set the text, move above the pointer, and
    /// fade in.
    pub fn pointer_over(&mut self, text: &str, page_x: f64, page_y: f64) -> Fade {
        self.set(text, page_x, page_y);
        self.visibility = Visibility::Visible;
        Fade { to: Visibility::Visible, duration_ms: FADE_MS }
    }

    /// Pointer moved within a shape: update text and position without
    /// restarting the fade.
    pub fn pointer_move(&mut self, text: &str, page_x: f64, page_y: f64) {
        self.set(text, page_x, page_y);
    }

    /// Pointer left the shape: fade out. The text and position are kept
    /// until the next `pointer_over` overwrites them.
    pub fn pointer_out(&mut self) -> Fade {
        self.visibility = Visibility::Hidden;
        Fade { to: Visibility::Hidden, duration_ms: FADE_MS }
    }

    fn set(&mut self, text: &str, page_x: f64, page_y: f64) {
        self.text.clear();
        self.text.push_str(text);
        self.x = page_x;
        self.y = page_y - POINTER_Y_OFFSET;
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new()
    }
}
