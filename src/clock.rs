use chrono::{Datelike, Local, NaiveDate};

pub trait Clock {
    fn today(&self) -> NaiveDate;

    fn year(&self) -> i32 {
        self.today().year()
    }
}

/// Reads the local calendar date at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn copyright_notice(owner: &str, clock: &impl Clock) -> String {
    format!("© {} {}. All rights reserved.", clock.year(), owner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_notice() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2031, 12, 31).unwrap());
        assert_eq!(
            copyright_notice("Daniel Olanrewaju", &clock),
            "© 2031 Daniel Olanrewaju. All rights reserved."
        );
    }

    #[test]
    fn test_system_clock_year() {
        let year = SystemClock.year();
        assert_eq!(year, Local::now().year());
    }
}
