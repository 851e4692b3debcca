//! Relative time phrases ("3 days ago", "in 2 hours")
//!
//! The delta between an instant and a reference is bucketed on UTC values.
//! Month and year buckets use calendar arithmetic rather than fixed-length
//! durations.

use crate::culture::Culture;
use crate::domain::{keys, ResourceDomain, ResourceKey};
use crate::error::I18nResult;
use crate::format::{format_template, FormatArg};
use crate::localizer::Localizer;
use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

/// Whether the instant lies before or after the reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Past,
    Future,
}

/// Phrase bucket for a time delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBucket {
    JustNow,
    InAFewSeconds,
    Seconds(i64),
    Minutes(i64),
    Hours(i64),
    AdjacentDay,
    Days(i64),
    Months(i64),
    Years(i64),
}

impl TimeBucket {
    /// Classify `instant` against `reference`
    pub fn classify(direction: Direction, instant: DateTime<Utc>, reference: DateTime<Utc>) -> Self {
        let (earlier, later) = match direction {
            Direction::Past => (instant, reference),
            Direction::Future => {
                if instant <= reference {
                    return Self::JustNow;
                }
                (reference, instant)
            }
        };

        let diff = later - earlier;
        if diff < Duration::seconds(5) {
            return match direction {
                Direction::Past => Self::JustNow,
                Direction::Future => Self::InAFewSeconds,
            };
        }
        if diff < Duration::minutes(1) {
            return Self::Seconds(diff.num_seconds());
        }
        if diff < Duration::hours(1) {
            return Self::Minutes(diff.num_minutes());
        }
        if diff < Duration::days(1) {
            return Self::Hours(diff.num_hours());
        }
        if diff < Duration::days(2) {
            return Self::AdjacentDay;
        }
        if diff < Duration::days(30) {
            return Self::Days(diff.num_days());
        }

        let months = months_between(earlier, later);
        if months < 12 {
            // 30+ days inside one calendar month (Dec 31 to Jan 30) would
            // count 0 months; report 1 so the phrase never reads "0 months"
            Self::Months(months.max(1))
        } else {
            Self::Years(years_between(earlier, later).max(1))
        }
    }

    /// TimeStrings key for this bucket
    pub fn key(&self, direction: Direction) -> &'static str {
        match (self, direction) {
            (Self::JustNow, _) => keys::JUST_NOW,
            (Self::InAFewSeconds, _) => keys::IN_A_FEW_SECONDS,
            (Self::Seconds(_), Direction::Past) => keys::SECONDS_AGO,
            (Self::Seconds(_), Direction::Future) => keys::IN_SECONDS,
            (Self::Minutes(_), Direction::Past) => keys::MINUTES_AGO,
            (Self::Minutes(_), Direction::Future) => keys::IN_MINUTES,
            (Self::Hours(_), Direction::Past) => keys::HOURS_AGO,
            (Self::Hours(_), Direction::Future) => keys::IN_HOURS,
            (Self::AdjacentDay, Direction::Past) => keys::YESTERDAY,
            (Self::AdjacentDay, Direction::Future) => keys::TOMORROW,
            (Self::Days(_), Direction::Past) => keys::DAYS_AGO,
            (Self::Days(_), Direction::Future) => keys::IN_DAYS,
            (Self::Months(_), Direction::Past) => keys::MONTHS_AGO,
            (Self::Months(_), Direction::Future) => keys::IN_MONTHS,
            (Self::Years(_), Direction::Past) => keys::YEARS_AGO,
            (Self::Years(_), Direction::Future) => keys::IN_YEARS,
        }
    }

    /// Number substituted into the template, if the bucket carries one
    pub fn amount(&self) -> Option<i64> {
        match self {
            Self::Seconds(n) | Self::Minutes(n) | Self::Hours(n) | Self::Days(n) => Some(*n),
            Self::Months(n) | Self::Years(n) => Some(*n),
            Self::JustNow | Self::InAFewSeconds | Self::AdjacentDay => None,
        }
    }
}

/// Whole calendar months from `earlier` to `later`, never negative
pub fn months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month()) - i64::from(earlier.month());
    if later.day() < earlier.day() {
        months -= 1;
    }
    months.max(0)
}

/// Whole calendar years from `earlier` to `later`, never negative
pub fn years_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut years = i64::from(later.year() - earlier.year());
    if (later.month(), later.day()) < (earlier.month(), earlier.day()) {
        years -= 1;
    }
    years.max(0)
}

impl Localizer {
    /// Phrase for how long ago `instant` was, relative to `reference` (default now)
    pub fn time_ago<Tz: TimeZone>(
        &self,
        instant: &DateTime<Tz>,
        culture: Option<&Culture>,
        reference: Option<DateTime<Utc>>,
    ) -> I18nResult<String> {
        self.relative_phrase(Direction::Past, instant, culture, reference)
    }

    /// Phrase for how long until `instant`, relative to `reference` (default now)
    pub fn time_until<Tz: TimeZone>(
        &self,
        instant: &DateTime<Tz>,
        culture: Option<&Culture>,
        reference: Option<DateTime<Utc>>,
    ) -> I18nResult<String> {
        self.relative_phrase(Direction::Future, instant, culture, reference)
    }

    fn relative_phrase<Tz: TimeZone>(
        &self,
        direction: Direction,
        instant: &DateTime<Tz>,
        culture: Option<&Culture>,
        reference: Option<DateTime<Utc>>,
    ) -> I18nResult<String> {
        let instant = instant.with_timezone(&Utc);
        let reference = reference.unwrap_or_else(Utc::now);
        let bucket = TimeBucket::classify(direction, instant, reference);
        let key = ResourceKey::fixed(ResourceDomain::TimeStrings, bucket.key(direction));

        self.with_culture(culture, |culture| {
            let template = self.resolve(&key, culture)?;
            let args: Vec<FormatArg> = bucket.amount().map(FormatArg::from).into_iter().collect();
            format_template(&template, culture, &args)
        })
    }
}
