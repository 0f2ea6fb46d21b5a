//! Integration tests for instant formatting

mod common;
use common::*;

use calendar_between::format::FORMATTED_CAPACITY;
use calendar_between::{CalendarError, DATE_FORMAT, DATETIME_FORMAT, TIME_FORMAT, format_instant};

#[test]
fn formats_date_and_time_patterns() {
    let dt = utc(2020, 11, 17, 8, 5, 9);
    assert_eq!(format_instant(&dt, Some(DATE_FORMAT)).unwrap().as_str(), "2020-11-17");
    assert_eq!(format_instant(&dt, Some(TIME_FORMAT)).unwrap().as_str(), "08:05:09");
}

#[test]
fn formats_in_the_instant_own_offset() {
    let dt = offset(8, 2021, 1, 1, 2, 0, 0);
    assert_eq!(
        format_instant(&dt, None).unwrap().as_str(),
        "2021-01-01 02:00:00"
    );
    assert_eq!(format_instant(&dt, Some("%z")).unwrap().as_str(), "+0800");
}

#[test]
fn naive_instants_format_like_zoned_ones() {
    let naive = at(2020, 11, 17, 8, 5, 9, 0);
    assert_eq!(
        format_instant(&naive, Some(DATETIME_FORMAT)).unwrap().as_str(),
        "2020-11-17 08:05:09"
    );
    assert_eq!(
        format_instant(&naive, None),
        format_instant(&utc(2020, 11, 17, 8, 5, 9), None)
    );
}

#[test]
fn daylight_saving_zone_formats_local_offset() {
    let summer = new_york(2021, 7, 1, 12, 0);
    assert_eq!(format_instant(&summer, Some("%H:%M %z")).unwrap().as_str(), "12:00 -0400");
    let winter = new_york(2021, 1, 1, 12, 0);
    assert_eq!(format_instant(&winter, Some("%H:%M %z")).unwrap().as_str(), "12:00 -0500");
}

#[test]
fn offset_specifier_without_offset_is_rejected_as_unrenderable() {
    let naive = at(2020, 11, 17, 8, 5, 9, 0);
    assert_eq!(
        format_instant(&naive, Some("%z")),
        Err(CalendarError::InvalidArgument(
            "pattern cannot be rendered for this instant"
        ))
    );
}

#[test]
fn literal_text_passes_through() {
    let dt = utc(2020, 2, 29, 0, 0, 0);
    let out = format_instant(&dt, Some("day %d of %B")).unwrap();
    assert_eq!(out.as_str(), "day 29 of February");
}

#[test]
fn output_over_capacity_is_rejected() {
    let dt = utc(2020, 2, 29, 0, 0, 0);
    let mut pattern = String::new();
    while pattern.len() <= FORMATTED_CAPACITY {
        pattern.push_str("%Y");
    }
    let result = format_instant(&dt, Some(&pattern));
    assert_eq!(
        result,
        Err(CalendarError::InvalidArgument("formatted output exceeds capacity"))
    );
}
