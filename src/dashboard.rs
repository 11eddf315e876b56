use crate::aggregate::{MoodMapping, aggregate_distribution_with, aggregate_weekly_in};
use crate::models::{DashboardResponse, JournalEntry, MoodRecord};
use chrono::{Local, TimeZone};

const HIGHLIGHT_COUNT: usize = 3;

pub fn build_dashboard(
    moods: &[MoodRecord],
    journals: &[JournalEntry],
    mapping: &MoodMapping,
) -> DashboardResponse {
    build_dashboard_in(moods, journals, &Local, mapping)
}

pub fn build_dashboard_in<Tz: TimeZone>(
    moods: &[MoodRecord],
    journals: &[JournalEntry],
    tz: &Tz,
    mapping: &MoodMapping,
) -> DashboardResponse {
    let weekly = aggregate_weekly_in(moods, tz, mapping);

    DashboardResponse {
        mood_logs: moods.len(),
        journal_entries: journals.len(),
        weekly: weekly.buckets,
        distribution: aggregate_distribution_with(moods, mapping),
        malformed: weekly.malformed,
        highlights: journals.iter().take(HIGHLIGHT_COUNT).cloned().collect(),
    }
}
