use gradeboard_core::SeriesMap;

pub fn by_quarter() -> SeriesMap {
    [("Q1", 80.2), ("Q2", 84.7), ("Q3", 86.1)].into_iter().collect()
}

pub fn by_region() -> SeriesMap {
    [
        ("Harbor District", 87.3),
        ("Hillside", 82.9),
        ("Old Town", 79.4),
    ]
    .into_iter()
    .collect()
}

pub fn by_grade() -> SeriesMap {
    [
        ("1st Grade", 90.1),
        ("2nd Grade", 88.4),
        ("3rd Grade", 85.0),
        ("4th Grade", 83.6),
        ("5th Grade", 82.2),
        ("6th Grade", 81.7),
    ]
    .into_iter()
    .collect()
}
