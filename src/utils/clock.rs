use chrono::{Local, NaiveDate};

/// Represents an entity responsible for providing the current day across the application. This
/// allows tests to pin "today" to a known date.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Sync + Send + 'static {
    fn today(&self) -> NaiveDate;
}

pub struct DefaultClock;

impl Clock for DefaultClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
