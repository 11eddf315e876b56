use crate::models::{
    CategoryTotal, DerivedMood, MoodCategory, MoodCounts, MoodRecord, WeeklyBucket, WeeklySeries,
};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Weekday};

/// Sunday-first order of the weekly chart.
pub const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Maps stored mood labels onto chart series.
///
/// `Relaxed` is counted as both calm and neutral unless `relaxed_overlap` is
/// turned off, in which case it only counts as calm. Unrecognized labels always
/// fall back to neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodMapping {
    pub relaxed_overlap: bool,
}

impl Default for MoodMapping {
    fn default() -> Self {
        Self {
            relaxed_overlap: true,
        }
    }
}

impl MoodMapping {
    pub fn targets(&self, category: MoodCategory) -> &'static [DerivedMood] {
        match category {
            MoodCategory::Happy => &[DerivedMood::Happy],
            MoodCategory::Relaxed if self.relaxed_overlap => {
                &[DerivedMood::Calm, DerivedMood::Neutral]
            }
            MoodCategory::Relaxed => &[DerivedMood::Calm],
            MoodCategory::Stressed => &[DerivedMood::Anxious],
            MoodCategory::Sad => &[DerivedMood::Sad],
            MoodCategory::Unrecognized => &[DerivedMood::Neutral],
        }
    }
}

pub fn aggregate_weekly(records: &[MoodRecord]) -> WeeklySeries {
    aggregate_weekly_in(records, &Local, &MoodMapping::default())
}

/// Groups records into seven Sunday-first buckets using the calendar day of
/// `occurred_at` in `tz`. Records whose timestamp cannot be read are skipped
/// and counted in `malformed`.
pub fn aggregate_weekly_in<Tz: TimeZone>(
    records: &[MoodRecord],
    tz: &Tz,
    mapping: &MoodMapping,
) -> WeeklySeries {
    let mut buckets: Vec<WeeklyBucket> = WEEK
        .iter()
        .map(|day| WeeklyBucket {
            day: *day,
            counts: MoodCounts::default(),
        })
        .collect();
    let mut malformed = 0;

    for record in records {
        let Some(day) = local_weekday(&record.occurred_at, tz) else {
            malformed += 1;
            continue;
        };
        let Some(bucket) = buckets.get_mut(day.num_days_from_sunday() as usize) else {
            continue;
        };
        for mood in mapping.targets(record.category) {
            bucket.counts.increment(*mood);
        }
    }

    WeeklySeries { buckets, malformed }
}

pub fn aggregate_distribution(records: &[MoodRecord]) -> Vec<CategoryTotal> {
    aggregate_distribution_with(records, &MoodMapping::default())
}

/// Totals per chart series across every record, timestamps ignored.
pub fn aggregate_distribution_with(
    records: &[MoodRecord],
    mapping: &MoodMapping,
) -> Vec<CategoryTotal> {
    let mut counts = MoodCounts::default();
    for record in records {
        for mood in mapping.targets(record.category) {
            counts.increment(*mood);
        }
    }

    DerivedMood::ALL
        .iter()
        .map(|mood| CategoryTotal {
            category: *mood,
            name: mood.display_name(),
            total: counts.get(*mood),
            fill: mood.color(),
        })
        .collect()
}

/// Accepts RFC 3339 timestamps (converted into `tz`), offset-less date-times
/// (already local) and plain `YYYY-MM-DD` dates.
pub fn local_weekday<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<Weekday> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.with_timezone(tz).weekday());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.weekday());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.weekday())
}
