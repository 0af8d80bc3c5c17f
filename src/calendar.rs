use serde::{Deserialize, Serialize};

const MONTHS: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

/// A day/month pair as sent by the caller. Day-for-month validity is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub day: i32,
    pub month: i32,
}

impl CalendarDate {
    pub fn new(day: i32, month: i32) -> Self {
        Self { day, month }
    }

    /// Page title for this date, e.g. `15_de_marzo`.
    pub fn page_slug(&self) -> String {
        format!("{}_de_{}", self.day, month_name(self.month))
    }

    pub fn page_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.page_slug())
    }
}

/// Spanish month name for 1..=12, empty string otherwise.
pub fn month_name(month: i32) -> &'static str {
    match month {
        1..=12 => MONTHS[(month - 1) as usize],
        _ => "",
    }
}
