use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Decides which calendar dates can be booked. `Err` carries the reason shown
/// to the visitor.
pub trait VisitDatePolicy {
    fn check(&self, date: NaiveDate, today: NaiveDate) -> Result<(), String>;
}

impl<F> VisitDatePolicy for F
where
    F: Fn(NaiveDate, NaiveDate) -> Result<(), String>,
{
    fn check(&self, date: NaiveDate, today: NaiveDate) -> Result<(), String> {
        self(date, today)
    }
}

/// Configurable date bounds. The default only forbids past dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DateRules {
    pub allow_past: bool,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub max_days_ahead: Option<u32>,
    pub excluded_dates: Vec<NaiveDate>,
}

impl DateRules {
    pub fn new() -> Self {
        DateRules::default()
    }

    pub fn with_min_date(mut self, date: NaiveDate) -> Self {
        self.min_date = Some(date);
        self
    }

    pub fn with_max_date(mut self, date: NaiveDate) -> Self {
        self.max_date = Some(date);
        self
    }

    pub fn with_max_days_ahead(mut self, days: u32) -> Self {
        self.max_days_ahead = Some(days);
        self
    }

    pub fn with_excluded_date(mut self, date: NaiveDate) -> Self {
        self.excluded_dates.push(date);
        self
    }

    pub fn allowing_past(mut self) -> Self {
        self.allow_past = true;
        self
    }
}

impl VisitDatePolicy for DateRules {
    fn check(&self, date: NaiveDate, today: NaiveDate) -> Result<(), String> {
        if !self.allow_past && date < today {
            return Err("visit date cannot be in the past".to_string());
        }

        if let Some(min) = self.min_date {
            if date < min {
                return Err(format!("visit date is before {}", min));
            }
        }

        if let Some(max) = self.max_date {
            if date > max {
                return Err(format!("visit date is after {}", max));
            }
        }

        if let Some(days) = self.max_days_ahead {
            if (date - today).num_days() > i64::from(days) {
                return Err(format!("visit date is more than {} days ahead", days));
            }
        }

        if self.excluded_dates.contains(&date) {
            return Err(format!("visit date {} is not available", date));
        }

        Ok(())
    }
}
