//! Fixed placeholder values substituted for absent sources.
//!
//! Every function is pure: same output on every call, no clock, no randomness.
//! Values are round and plausible so a demo dashboard still reads naturally.

use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;

use crate::{DashboardSummary, DashboardViewState, SeriesMap, UpcomingEvent};

// 2024-01-15T00:00:00Z
const LAST_UPDATED: i64 = 1_705_276_800;

fn at(unix_seconds: i64) -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + TimeDelta::seconds(unix_seconds)
}

/// Placeholder headline counters.
#[must_use]
pub fn summary() -> DashboardSummary {
    DashboardSummary {
        total_students: 1200,
        total_enrollments: 1150,
        total_teachers: 80,
        overall_average: 82.0,
        approval_rate: 90.0,
        grade_levels: 6,
        revenue_total: Decimal::new(150_000_000, 2),
        upcoming_events: 3,
        performance_alerts: 5,
        last_updated: at(LAST_UPDATED),
    }
}

/// Four quarters with a gently rising average.
#[must_use]
pub fn average_by_quarter() -> SeriesMap {
    [("Q1", 78.5), ("Q2", 81.0), ("Q3", 83.5), ("Q4", 86.0)]
        .into_iter()
        .collect()
}

/// Five regions.
#[must_use]
pub fn average_by_region() -> SeriesMap {
    [
        ("North", 84.0),
        ("South", 79.5),
        ("East", 82.5),
        ("West", 80.0),
        ("Central", 85.5),
    ]
    .into_iter()
    .collect()
}

/// Six grade levels.
#[must_use]
pub fn average_by_grade() -> SeriesMap {
    [
        ("1st Grade", 88.0),
        ("2nd Grade", 86.5),
        ("3rd Grade", 84.0),
        ("4th Grade", 82.5),
        ("5th Grade", 80.0),
        ("6th Grade", 78.5),
    ]
    .into_iter()
    .collect()
}

/// Three canned events.
#[must_use]
pub fn upcoming_events() -> Vec<UpcomingEvent> {
    vec![
        UpcomingEvent::new(
            "Parent-teacher conference",
            at(1_707_145_200),
            at(1_707_156_000),
            "All Grades",
        )
        .with_description("Quarterly progress review with families"),
        UpcomingEvent::new(
            "Science fair",
            at(1_708_419_600),
            at(1_708_434_000),
            "5th Grade",
        ),
        UpcomingEvent::new(
            "End-of-quarter exams",
            at(1_711_353_600),
            at(1_711_720_800),
            "6th Grade",
        )
        .with_description("Written exams for every core subject"),
    ]
}

/// A complete, fully synthetic view state (the "demo" dashboard).
#[must_use]
pub fn view_state() -> DashboardViewState {
    DashboardViewState {
        summary: Some(summary()),
        average_by_quarter: average_by_quarter(),
        average_by_region: average_by_region(),
        average_by_grade: average_by_grade(),
        upcoming_events: upcoming_events(),
        is_loading: false,
        is_using_synthetic_data: true,
        error: None,
    }
}
