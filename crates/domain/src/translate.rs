use crate::{
    markup::bold,
    timing::{resolve_fire_time, ReminderTiming},
    ChildReminder, Reminder,
};
use chrono::{DateTime, Locale, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use rand::Rng;
use thiserror::Error;

/// Hard cap on the channel message length, in characters.
pub const REMINDER_TEXT_LIMIT: usize = 4000;

const FOLLOW_UP_PHRASES: [&str; 4] = ["c'est aujourd'hui", "aujourd'hui", "ce soir", "c'est ce soir"];
// One slot is deliberately empty so the follow-up sometimes has no emoji.
const FOLLOW_UP_EMOJIS: [&str; 7] = ["😁", "🤩", "🥳", "🔥", "💯", "", "😎"];

#[derive(Error, Debug, PartialEq)]
pub enum TranslateError {
    #[error("invalid timing label: `{0}`")]
    InvalidTiming(String),
    #[error("cannot schedule in the past (now={now}, fire_at={fire_at})")]
    ScheduledInPast {
        now: DateTime<Utc>,
        fire_at: DateTime<Utc>,
    },
    #[error("the local time {time} does not exist on {date} in the venue timezone")]
    NonexistentLocalTime { date: NaiveDate, time: NaiveTime },
    #[error(
        "reminder text cannot exceed {limit} characters, got {length}; shorten the event description or skip the channel post"
    )]
    TextTooLong { limit: usize, length: usize },
}

/// The slice of an event the translator needs to build an announcement.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetails {
    pub title: String,
    /// Category hierarchy, most general first. Joined into the subtitle line.
    pub categories: Vec<String>,
    pub date: NaiveDate,
    pub doors: NaiveTime,
    pub starts: NaiveTime,
    pub price: String,
    /// Description already converted to the channel markup subset.
    pub description: String,
}

impl EventDetails {
    pub fn subtitle(&self) -> String {
        self.categories
            .iter()
            .map(|category| category.trim())
            .filter(|category| !category.is_empty())
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

#[derive(Debug)]
pub struct TranslationRequest<'a> {
    pub event: &'a EventDetails,
    pub timing: ReminderTiming,
    /// Prepared image blob (base64 JPEG), when the announcement carries one.
    pub image: Option<String>,
    /// Ask for a same-day follow-up after the announcement.
    pub with_follow_up: bool,
    pub timezone: Tz,
}

/// Translate an event into the reminder submitted to the registry.
///
/// Pure: the submission clock and the randomness behind the follow-up flavor
/// text are both injected by the caller, so tests can pin them down.
pub fn translate<R: Rng>(
    request: TranslationRequest<'_>,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<Reminder, TranslateError> {
    let fire_at = resolve_fire_time(request.event.date, request.timing, request.timezone, now)?;
    let text = announcement_text(request.event)?;

    // A same-day follow-up only makes sense when the announcement itself does
    // not already land on the event day.
    let child = if request.with_follow_up && !request.timing.is_same_day() {
        Some(ChildReminder {
            text: follow_up_text(rng),
            fire_at: resolve_fire_time(request.event.date, ReminderTiming::DayOf, request.timezone, now)?,
        })
    } else {
        None
    };

    Ok(Reminder {
        text,
        fire_at,
        image: request.image,
        reply_to: None,
        child,
    })
}

fn announcement_text(event: &EventDetails) -> Result<String, TranslateError> {
    let text = format!(
        "{}\n\n{}\n\n⁉ {}\n📅 {}\n⏰ portes : {} début : {}\n💰 {} (cash uniquement)",
        bold(&event.title.to_uppercase()),
        event.description,
        event.subtitle(),
        event.date.format_localized("%A %d %B", Locale::fr_CH),
        event.doors.format("%Hh%M"),
        event.starts.format("%Hh%M"),
        event.price,
    );

    let length = text.chars().count();
    if length > REMINDER_TEXT_LIMIT {
        return Err(TranslateError::TextTooLong {
            limit: REMINDER_TEXT_LIMIT,
            length,
        });
    }

    Ok(text)
}

/// Assemble the short same-day follow-up: a phrase from a fixed pool, one to
/// three exclamation marks, up to two emojis and a coin-flip upper-casing.
pub fn follow_up_text<R: Rng>(rng: &mut R) -> String {
    let phrase = FOLLOW_UP_PHRASES[rng.gen_range(0..FOLLOW_UP_PHRASES.len())];
    let bangs = "!".repeat(rng.gen_range(1..=3));
    let emoji = FOLLOW_UP_EMOJIS[rng.gen_range(0..FOLLOW_UP_EMOJIS.len())].repeat(rng.gen_range(1..=2));

    let mut text = format!("{} {} {}", phrase, bangs, emoji).trim().to_string();
    if rng.gen_bool(0.5) {
        text = text.to_uppercase();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Europe::Paris;
    use rand::{rngs::StdRng, SeedableRng};

    fn event() -> EventDetails {
        EventDetails {
            title: "Nuit du maloya".to_string(),
            categories: vec!["concert".to_string(), "maloya".to_string(), String::new()],
            date: NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
            doors: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            starts: NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
            price: "10.-".to_string(),
            description: "Un concert <b>unique</b> au caveau".to_string(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap()
    }

    fn request(event: &EventDetails, timing: ReminderTiming, with_follow_up: bool) -> TranslationRequest<'_> {
        TranslationRequest {
            event,
            timing,
            image: None,
            with_follow_up,
            timezone: Paris,
        }
    }

    #[test]
    fn builds_the_announcement() {
        let event = event();
        let mut rng = StdRng::seed_from_u64(7);
        let reminder =
            translate(request(&event, ReminderTiming::OneWeekBefore, false), now(), &mut rng)
                .unwrap();

        assert!(reminder.text.starts_with("<b>NUIT DU MALOYA</b>\n\n"));
        assert!(reminder.text.contains("Un concert <b>unique</b> au caveau"));
        assert!(reminder.text.contains("⁉ concert · maloya\n"));
        assert!(reminder.text.contains("jeudi 20 mars"));
        assert!(reminder.text.contains("⏰ portes : 19h30 début : 20h30"));
        assert!(reminder.text.contains("💰 10.- (cash uniquement)"));
        assert_eq!(
            reminder.fire_at,
            Paris.with_ymd_and_hms(2025, 3, 13, 21, 0, 0).unwrap()
        );
        assert_eq!(reminder.reply_to, None);
        assert_eq!(reminder.child, None);
    }

    #[test]
    fn attaches_the_follow_up_at_noon_on_the_event_day() {
        let event = event();
        let mut rng = StdRng::seed_from_u64(7);
        let reminder =
            translate(request(&event, ReminderTiming::TwoWeeksBefore, true), now(), &mut rng)
                .unwrap();

        let child = reminder.child.expect("expected a follow-up");
        assert_eq!(
            child.fire_at,
            Paris.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap()
        );
        assert!(!child.text.is_empty());
    }

    #[test]
    fn same_day_timings_never_chain() {
        let event = event();
        let mut rng = StdRng::seed_from_u64(7);
        let day_of =
            translate(request(&event, ReminderTiming::DayOf, true), now(), &mut rng).unwrap();
        assert_eq!(day_of.child, None);

        let right_away = translate(request(&event, ReminderTiming::Now, true), now(), &mut rng).unwrap();
        assert_eq!(right_away.child, None);
    }

    #[test]
    fn image_is_carried_through() {
        let event = event();
        let mut rng = StdRng::seed_from_u64(7);
        let mut req = request(&event, ReminderTiming::OneDayBefore, false);
        req.image = Some("aGVsbG8=".to_string());
        let reminder = translate(req, now(), &mut rng).unwrap();
        assert_eq!(reminder.image.as_deref(), Some("aGVsbG8="));
    }

    #[test]
    fn text_at_the_limit_passes_and_one_over_fails() {
        let mut event = event();
        event.description.clear();
        let base_length = announcement_text(&event).unwrap().chars().count();

        event.description = "a".repeat(REMINDER_TEXT_LIMIT - base_length);
        assert!(announcement_text(&event).is_ok());

        event.description.push('a');
        let err = announcement_text(&event).unwrap_err();
        assert_eq!(
            err,
            TranslateError::TextTooLong {
                limit: REMINDER_TEXT_LIMIT,
                length: REMINDER_TEXT_LIMIT + 1,
            }
        );
        let message = err.to_string();
        assert!(message.contains("4000"));
        assert!(message.contains("4001"));
    }

    #[test]
    fn follow_up_text_is_deterministic_under_a_seeded_rng() {
        let first = follow_up_text(&mut StdRng::seed_from_u64(42));
        let second = follow_up_text(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn follow_up_text_is_a_phrase_with_punctuation() {
        for seed in 0..32 {
            let text = follow_up_text(&mut StdRng::seed_from_u64(seed));
            assert!(!text.is_empty());
            assert!(text.contains('!'));
            assert_eq!(text, text.trim());
            let lowered = text.to_lowercase();
            assert!(
                FOLLOW_UP_PHRASES.iter().any(|phrase| lowered.starts_with(phrase)),
                "unexpected phrase: {}",
                text
            );
            let bangs = text.matches('!').count();
            assert!((1..=3).contains(&bangs));
        }
    }
}
