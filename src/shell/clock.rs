//! Taskbar clock

use std::fmt::Write as _;

use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::warn;

use crate::config::{ClockConfig, DEFAULT_CLOCK_FORMAT};

/// Clock display state
#[derive(Debug, Clone)]
pub struct Clock {
    format: String,
    text: String,
}

impl Clock {
    pub fn new(config: &ClockConfig) -> Self {
        let mut clock = Self {
            format: config.format.clone(),
            text: String::new(),
        };
        clock.tick();
        clock
    }

    /// Refresh from local time; returns whether the text changed
    pub fn tick(&mut self) -> bool {
        self.update(Local::now().naive_local())
    }

    /// Render `now`; returns whether the text changed
    pub fn update(&mut self, now: NaiveDateTime) -> bool {
        let text = self.render(now);
        if text == self.text {
            return false;
        }
        self.text = text;
        true
    }

    fn render(&mut self, now: NaiveDateTime) -> String {
        let mut text = String::new();
        if write!(text, "{}", now.format(&self.format)).is_ok() {
            return text;
        }
        warn!("Unusable clock format {:?}, using {}", self.format, DEFAULT_CLOCK_FORMAT);
        self.format = DEFAULT_CLOCK_FORMAT.to_string();
        now.format(DEFAULT_CLOCK_FORMAT).to_string()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(&ClockConfig::default())
    }
}

/// Short US-style date, e.g. `Oct 16, 2026`
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
