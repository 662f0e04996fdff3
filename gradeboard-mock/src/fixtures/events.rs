use chrono::TimeZone;
use gradeboard_core::UpcomingEvent;

pub fn upcoming() -> Vec<UpcomingEvent> {
    vec![
        UpcomingEvent::new(
            "Spring recital",
            chrono::Utc.with_ymd_and_hms(2024, 4, 18, 17, 0, 0).unwrap(),
            chrono::Utc.with_ymd_and_hms(2024, 4, 18, 19, 30, 0).unwrap(),
            "3rd Grade",
        ),
        UpcomingEvent::new(
            "Math olympiad qualifiers",
            chrono::Utc.with_ymd_and_hms(2024, 4, 25, 9, 0, 0).unwrap(),
            chrono::Utc.with_ymd_and_hms(2024, 4, 25, 12, 0, 0).unwrap(),
            "6th Grade",
        )
        .with_description("Regional qualifying round"),
    ]
}
