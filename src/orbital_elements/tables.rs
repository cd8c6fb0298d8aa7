//! Mean orbital elements of the planets referred to the mean equinox of date
//! (Meeus, *Astronomical Algorithms*, table 31.A).
//!
//! Every element is a cubic polynomial in T (Julian centuries from J2000.0), coefficients listed in
//! increasing powers of T. Angles are in degrees, the semi-major axis in AU.

use crate::body::Body;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ElementTable {
    /// Sidereal orbital period, in Julian years.
    pub period: f64,
    pub mean_longitude: [f64; 4],
    pub semi_major_axis: [f64; 4],
    pub eccentricity: [f64; 4],
    pub inclination: [f64; 4],
    pub ascending_node: [f64; 4],
    pub perihelion: [f64; 4],
}

static MERCURY: ElementTable = ElementTable {
    period: 0.240847,
    mean_longitude: [252.250906, 149474.0722491, 0.00030350, 0.000000018],
    semi_major_axis: [0.387098310, 0.0, 0.0, 0.0],
    eccentricity: [0.20563175, 0.000020407, -0.0000000283, -0.00000000018],
    inclination: [7.004986, 0.0018215, -0.00001810, 0.000000056],
    ascending_node: [48.330893, 1.1861883, 0.00017542, 0.000000215],
    perihelion: [77.456119, 1.5564776, 0.00029544, 0.000000009],
};

static VENUS: ElementTable = ElementTable {
    period: 0.615197,
    mean_longitude: [181.979801, 58519.2130302, 0.00031014, 0.000000015],
    semi_major_axis: [0.723329820, 0.0, 0.0, 0.0],
    eccentricity: [0.00677192, -0.000047765, 0.0000000981, 0.00000000046],
    inclination: [3.394662, 0.0010037, -0.00000088, -0.000000007],
    ascending_node: [76.679920, 0.9011206, 0.00040618, -0.000000093],
    perihelion: [131.563703, 1.4022288, -0.00107618, -0.000005678],
};

static EARTH: ElementTable = ElementTable {
    period: 1.000017,
    mean_longitude: [100.466457, 36000.7698278, 0.00030322, 0.000000020],
    semi_major_axis: [1.000001018, 0.0, 0.0, 0.0],
    eccentricity: [0.01670863, -0.000042037, -0.0000001267, 0.00000000014],
    inclination: [0.0; 4],
    ascending_node: [0.0; 4],
    perihelion: [102.937348, 1.7195366, 0.00045688, -0.000000018],
};

static MARS: ElementTable = ElementTable {
    period: 1.880848,
    mean_longitude: [355.433000, 19141.6964471, 0.00031052, 0.000000016],
    semi_major_axis: [1.523679342, 0.0, 0.0, 0.0],
    eccentricity: [0.09340065, 0.000090484, -0.0000000806, -0.00000000025],
    inclination: [1.849726, -0.0006011, 0.00001276, -0.000000007],
    ascending_node: [49.558093, 0.7720959, 0.00001557, 0.000002267],
    perihelion: [336.060234, 1.8410449, 0.00013477, 0.000000536],
};

static JUPITER: ElementTable = ElementTable {
    period: 11.862615,
    mean_longitude: [34.351519, 3036.3027748, 0.00022330, 0.000000037],
    semi_major_axis: [5.202603209, 0.0000001913, 0.0, 0.0],
    eccentricity: [0.04849793, 0.000163225, -0.0000004714, -0.00000000201],
    inclination: [1.303267, -0.0054965, 0.00000466, -0.000000002],
    ascending_node: [100.464407, 1.0209774, 0.00040315, 0.000000404],
    perihelion: [14.331207, 1.6126352, 0.00103042, 0.000004464],
};

static SATURN: ElementTable = ElementTable {
    period: 29.447498,
    mean_longitude: [50.077444, 1223.5110686, 0.00051908, -0.000000030],
    semi_major_axis: [9.554909192, -0.0000021390, 0.000000004, 0.0],
    eccentricity: [0.05554814, -0.000346641, -0.0000006436, 0.00000000340],
    inclination: [2.488879, -0.0037362, -0.00001519, 0.000000087],
    ascending_node: [113.665503, 0.8770880, -0.00012176, -0.000002249],
    perihelion: [93.057237, 1.9637613, 0.00083753, 0.000004928],
};

static URANUS: ElementTable = ElementTable {
    period: 84.016846,
    mean_longitude: [314.055005, 429.8640561, 0.00030390, 0.000000026],
    semi_major_axis: [19.218446062, -0.0000000372, 0.00000000098, 0.0],
    eccentricity: [0.04638122, -0.000027293, 0.0000000789, 0.00000000024],
    inclination: [0.773197, 0.0007744, 0.00003749, -0.000000092],
    ascending_node: [74.005957, 0.5211278, 0.00133947, 0.000018484],
    perihelion: [173.005291, 1.4863790, 0.00021406, 0.000000434],
};

static NEPTUNE: ElementTable = ElementTable {
    period: 164.79132,
    mean_longitude: [304.348665, 219.8833092, 0.00030882, 0.000000018],
    semi_major_axis: [30.110386869, -0.0000001663, 0.00000000069, 0.0],
    eccentricity: [0.00945575, 0.000006033, 0.0, -0.00000000005],
    inclination: [1.769953, -0.0093082, -0.00000708, 0.000000027],
    ascending_node: [131.784057, 1.1022039, 0.00025952, -0.000000637],
    perihelion: [48.120276, 1.4262957, 0.00038434, 0.000000020],
};

/// Element table of a planet, `None` for the Sun and the Moon.
pub(crate) fn element_table(body: Body) -> Option<&'static ElementTable> {
    match body {
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Earth => Some(&EARTH),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        Body::Uranus => Some(&URANUS),
        Body::Neptune => Some(&NEPTUNE),
        Body::Sun | Body::Moon => None,
    }
}
