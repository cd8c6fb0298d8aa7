mod common;

use approx::assert_relative_eq;
use astrolabe::ref_system::{EquatorialCoordinates, Observer};
use astrolabe::units::{Degrees, RightAscension};
use astrolabe::{Astrolabe, Moment};
use common::{dms, init_logger};

#[test]
fn test_nutation_and_obliquity() {
    init_logger();
    let astrolabe = Astrolabe::new();
    let nutation = astrolabe.nutation(&Moment::from_date(1987, 4, 10).unwrap());

    assert_relative_eq!(nutation.delta_psi, -3.8408, epsilon = 1e-3);
    assert_relative_eq!(nutation.delta_epsilon, 9.4936, epsilon = 1e-3);
    assert_relative_eq!(
        nutation.true_obliquity.value(),
        nutation.mean_obliquity.value() + nutation.delta_epsilon / 3600.0,
        epsilon = 1e-12
    );
    let eps = nutation.true_obliquity.to_sexagesimal().unwrap();
    assert_eq!((eps.degrees(), eps.minutes()), (23, 26));
    assert_relative_eq!(eps.seconds(), 36.9003, epsilon = 1e-3);
}

#[test]
fn test_sidereal_time() {
    let astrolabe = Astrolabe::new();

    let midnight = astrolabe.sidereal_time(&Moment::from_date(1987, 4, 10).unwrap());
    let hms = midnight.greenwich_mean.to_right_ascension().unwrap();
    assert_eq!((hms.hours(), hms.minutes()), (13, 10));
    assert_relative_eq!(hms.seconds(), 46.3668, epsilon = 1e-3);

    let evening = astrolabe.sidereal_time(&Moment::new(1987, 4, 10, 19, 21, 0, 0).unwrap());
    assert_relative_eq!(evening.greenwich_mean.value(), 128.73787324433215, epsilon = 1e-7);
    // equation of the equinoxes is about a quarter of a second of time
    let equation = (evening.greenwich_apparent - evening.greenwich_mean).to_hours() * 3600.0;
    assert!((equation + 0.2418).abs() < 5e-3, "{equation}");
}

#[test]
fn test_horizontal_coordinates_at_usno() {
    let astrolabe = Astrolabe::new();
    let observer = Observer::new(dms(38, 55, 17.0), dms(77, 3, 56.0)).unwrap();
    let moment = Moment::new(1987, 4, 10, 19, 21, 0, 0).unwrap();
    let venus = EquatorialCoordinates::from_right_ascension(
        RightAscension::new(23, 9, 16.641).unwrap(),
        dms(-6, 43, 11.61),
    );

    let horizontal = astrolabe.horizontal(&venus, &observer, &moment);
    assert_relative_eq!(horizontal.azimuth.value(), 68.0342926, epsilon = 1e-5);
    assert_relative_eq!(horizontal.altitude.value(), 15.1242627, epsilon = 1e-5);

    let back = astrolabe.equatorial(&horizontal, &observer, &moment);
    assert_relative_eq!(
        back.right_ascension.value(),
        venus.right_ascension.value(),
        epsilon = 1e-9
    );
    assert_relative_eq!(back.declination.value(), venus.declination.value(), epsilon = 1e-9);
}

#[test]
fn test_pollux_round_trip() {
    let pollux = EquatorialCoordinates::from_right_ascension(
        RightAscension::new(7, 45, 18.946).unwrap(),
        dms(28, 1, 34.26),
    );
    let obliquity = Degrees::new(23.4392911);

    let ecliptic = pollux.to_ecliptic(obliquity);
    assert_relative_eq!(ecliptic.longitude.value(), 113.215630, epsilon = 1e-5);
    assert_relative_eq!(ecliptic.latitude.value(), 6.684170, epsilon = 1e-5);

    let back = ecliptic.to_equatorial(obliquity);
    assert_relative_eq!(
        back.right_ascension.value(),
        pollux.right_ascension.value(),
        epsilon = 1e-10
    );
    assert_relative_eq!(back.declination.value(), pollux.declination.value(), epsilon = 1e-10);
}

#[test]
fn test_observer_rejects_bad_latitude() {
    let err = Observer::new(Degrees::new(-90.5), Degrees::new(10.0)).unwrap_err();
    assert_eq!(err.to_string(), "Latitude must lie in [-90, 90] degrees, got -90.5");
}
