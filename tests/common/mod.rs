#![allow(dead_code)]

use approx::assert_relative_eq;
use astrolabe::time::Moment;
use astrolabe::units::{Degrees, SexagesimalAngle};

/// Install `env_logger` once for the whole test binary; `RUST_LOG=debug` shows solver traces.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Degrees from signed sexagesimal components.
pub fn dms(degrees: i32, minutes: i32, seconds: f64) -> Degrees {
    SexagesimalAngle::new(degrees, minutes, seconds)
        .unwrap()
        .to_degrees()
}

/// Assert that two instants agree within `seconds`.
pub fn assert_moment_close(actual: &Moment, expected: &Moment, seconds: f64) {
    assert_relative_eq!(
        actual.jde(),
        expected.jde(),
        epsilon = seconds / 86_400.0
    );
}

/// Moment from "YYYY-MM-DD HH:MM:SS.mmm".
pub fn moment(text: &str) -> Moment {
    let (date, time) = text.split_once(' ').unwrap();
    let date: Vec<i32> = date.split('-').map(|v| v.parse().unwrap()).collect();
    let (hms, ms) = time.split_once('.').unwrap_or((time, "0"));
    let hms: Vec<u32> = hms.split(':').map(|v| v.parse().unwrap()).collect();
    Moment::new(
        date[0],
        date[1] as u32,
        date[2] as u32,
        hms[0],
        hms[1],
        hms[2],
        ms.parse().unwrap(),
    )
    .unwrap()
}
