use crate::translate::TranslateError;
use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt::Display;
use std::str::FromStr;

/// When a reminder should be posted, relative to its event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderTiming {
    TwoWeeksBefore,
    OneWeekBefore,
    OneDayBefore,
    DayOf,
    Now,
}

impl ReminderTiming {
    /// Whether this timing already lands on the event day, which makes a
    /// chained same-day follow-up redundant.
    pub fn is_same_day(&self) -> bool {
        matches!(self, Self::DayOf | Self::Now)
    }
}

impl Display for ReminderTiming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::TwoWeeksBefore => "two weeks before",
            Self::OneWeekBefore => "one week before",
            Self::OneDayBefore => "one day before",
            Self::DayOf => "day of",
            Self::Now => "now",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for ReminderTiming {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "two weeks before" => Ok(Self::TwoWeeksBefore),
            "one week before" => Ok(Self::OneWeekBefore),
            "one day before" => Ok(Self::OneDayBefore),
            "day of" => Ok(Self::DayOf),
            "now" => Ok(Self::Now),
            _ => Err(TranslateError::InvalidTiming(s.to_string())),
        }
    }
}

/// Resolve the absolute fire time for `timing` relative to `event_date` in
/// the venue timezone.
///
/// Evening announcements go out at 21:00 local, same-day ones at noon, and
/// "now" lands 15 seconds after `now`. The result must be strictly in the
/// future at submission time.
pub fn resolve_fire_time(
    event_date: NaiveDate,
    timing: ReminderTiming,
    timezone: Tz,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, TranslateError> {
    let evening = NaiveTime::from_hms_opt(21, 0, 0).unwrap();
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();

    let fire_at = match timing {
        ReminderTiming::TwoWeeksBefore => {
            at_local(event_date - Duration::days(14), evening, timezone)?
        }
        ReminderTiming::OneWeekBefore => {
            at_local(event_date - Duration::days(7), evening, timezone)?
        }
        ReminderTiming::OneDayBefore => at_local(event_date - Duration::days(1), evening, timezone)?,
        ReminderTiming::DayOf => at_local(event_date, noon, timezone)?,
        ReminderTiming::Now => now + Duration::seconds(15),
    };

    if fire_at <= now {
        return Err(TranslateError::ScheduledInPast { now, fire_at });
    }

    Ok(fire_at)
}

fn at_local(date: NaiveDate, time: NaiveTime, timezone: Tz) -> Result<DateTime<Utc>, TranslateError> {
    match timezone.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(fire_at) => Ok(fire_at.with_timezone(&Utc)),
        // DST fold: take the first occurrence of the repeated hour.
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(TranslateError::NonexistentLocalTime { date, time }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Paris;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn one_week_before_is_evening_local_time() {
        let now = utc(2025, 3, 1, 10, 0, 0);
        let fire_at =
            resolve_fire_time(date(2025, 3, 20), ReminderTiming::OneWeekBefore, Paris, now)
                .unwrap();
        let expected = Paris.with_ymd_and_hms(2025, 3, 13, 21, 0, 0).unwrap();
        assert_eq!(fire_at, expected);
    }

    #[test]
    fn two_weeks_and_one_day_offsets() {
        let now = utc(2025, 3, 1, 10, 0, 0);
        let two_weeks =
            resolve_fire_time(date(2025, 3, 20), ReminderTiming::TwoWeeksBefore, Paris, now)
                .unwrap();
        assert_eq!(two_weeks, Paris.with_ymd_and_hms(2025, 3, 6, 21, 0, 0).unwrap());

        let one_day =
            resolve_fire_time(date(2025, 3, 20), ReminderTiming::OneDayBefore, Paris, now).unwrap();
        assert_eq!(one_day, Paris.with_ymd_and_hms(2025, 3, 19, 21, 0, 0).unwrap());
    }

    #[test]
    fn day_of_is_noon_local_time() {
        let now = utc(2025, 3, 1, 10, 0, 0);
        let fire_at =
            resolve_fire_time(date(2025, 3, 20), ReminderTiming::DayOf, Paris, now).unwrap();
        assert_eq!(fire_at, Paris.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap());
    }

    #[test]
    fn now_is_fifteen_seconds_out() {
        let now = utc(2025, 3, 1, 10, 0, 0);
        let fire_at = resolve_fire_time(date(2025, 3, 20), ReminderTiming::Now, Paris, now).unwrap();
        assert_eq!(fire_at, utc(2025, 3, 1, 10, 0, 15));
    }

    #[test]
    fn rejects_fire_times_in_the_past() {
        let now = utc(2025, 3, 25, 10, 0, 0);
        let err = resolve_fire_time(date(2025, 3, 20), ReminderTiming::OneWeekBefore, Paris, now)
            .unwrap_err();
        match err {
            TranslateError::ScheduledInPast { now: n, fire_at } => {
                assert_eq!(n, now);
                assert!(fire_at < now);
            }
            other => panic!("expected ScheduledInPast, got {:?}", other),
        }
    }

    #[test]
    fn fire_time_equal_to_now_is_rejected() {
        // Exactly noon local on the event day, which is the computed fire time.
        let now = Paris
            .with_ymd_and_hms(2025, 3, 20, 12, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        assert!(resolve_fire_time(date(2025, 3, 20), ReminderTiming::DayOf, Paris, now).is_err());
    }

    #[test]
    fn parses_timing_labels() {
        assert_eq!(
            "two weeks before".parse::<ReminderTiming>().unwrap(),
            ReminderTiming::TwoWeeksBefore
        );
        assert_eq!("day of".parse::<ReminderTiming>().unwrap(), ReminderTiming::DayOf);
        assert_eq!("now".parse::<ReminderTiming>().unwrap(), ReminderTiming::Now);

        let err = "next year".parse::<ReminderTiming>().unwrap_err();
        assert!(matches!(err, TranslateError::InvalidTiming(label) if label == "next year"));
    }
}
