use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Europe::Kyiv;

/// Source of the current calendar day.
///
/// Generation rejects birthdays after [`Clock::today`], so tests inject a
/// [`FixedClock`] to pin the upper bound.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Wall-clock time, read as a calendar day in Europe/Kyiv.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KyivClock;

impl Clock for KyivClock {
    fn today(&self) -> NaiveDate {
        kyiv_date(&Utc::now())
    }
}

/// A clock that always reports the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Calendar day of `moment` in Europe/Kyiv.
pub fn kyiv_date<Tz: TimeZone>(moment: &DateTime<Tz>) -> NaiveDate {
    moment.with_timezone(&Kyiv).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn fixed_clock_reports_its_day() {
        let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(FixedClock(day).today(), day);
        assert_eq!((&FixedClock(day)).today(), day);
    }

    #[test]
    fn kyiv_date_crosses_midnight_before_utc() {
        // 22:30 UTC on 31 Dec is already 1 Jan in Kyiv (UTC+2 in winter)
        let moment = Utc.with_ymd_and_hms(2023, 12, 31, 22, 30, 0).unwrap();
        assert_eq!(kyiv_date(&moment), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn kyiv_date_uses_summer_offset() {
        // 21:30 UTC in July is 00:30 next day in Kyiv (UTC+3)
        let moment = Utc.with_ymd_and_hms(2024, 7, 14, 21, 30, 0).unwrap();
        assert_eq!(kyiv_date(&moment), NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
    }

    #[test]
    fn kyiv_date_from_other_offset() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let moment = tokyo.with_ymd_and_hms(2000, 1, 1, 5, 0, 0).unwrap();
        // 20:00 UTC on 31 Dec 1999, 22:00 in Kyiv
        assert_eq!(kyiv_date(&moment), NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
    }

    #[test]
    fn kyiv_clock_is_close_to_utc_today() {
        let utc_today = Utc::now().date_naive();
        let diff = (KyivClock.today() - utc_today).num_days();
        assert!((0..=1).contains(&diff));
    }
}
