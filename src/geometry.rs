//! Pure functions over axis-aligned rectangles and points on the longitude-wrapped sphere.
//!
//! Longitude lies in `[-180, 180]` and wraps modulo 360; latitude lies in `[-90, 90]` and never
//! wraps. This module has no dependencies on the rest of the crate and no dependents feed back
//! into it — everything above builds on top of [`point_in_box`] and [`BBox::relate`].

/// A longitude/latitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// The four possible outcomes of relating two rectangles to each other.
///
/// `relate(a, b) == Contains` iff `relate(b, a) == Within`; `Disjoint` and `Intersects` are each
/// their own mirror image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Disjoint,
    Intersects,
    Contains,
    Within,
}

/// An axis-aligned bounding box, expressed as an upper (max lon/lat) and lower (min lon/lat)
/// corner.
///
/// `upper.lat >= lower.lat` always holds for a box built from real data. `upper.lon < lower.lon`
/// is legal and denotes a box crossing the antimeridian: the longitude interval is then
/// `[lower.lon, 180] ∪ [-180, upper.lon]`. A raw width (`upper.lon - lower.lon`) of exactly 360
/// denotes the full longitude range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub upper: LonLat,
    pub lower: LonLat,
}

impl BBox {
    pub const fn new(upper: LonLat, lower: LonLat) -> Self {
        Self { upper, lower }
    }

    /// Componentwise union of two boxes. Both inputs are assumed non-wrapping (`upper.lon >=
    /// lower.lon`), which always holds for boxes built by scanning a cluster of real points —
    /// wraparound only ever appears in a *query* box, never in a constructed node's bounds.
    pub(crate) fn union(a: &BBox, b: &BBox) -> BBox {
        BBox {
            upper: LonLat {
                lon: a.upper.lon.max(b.upper.lon),
                lat: a.upper.lat.max(b.upper.lat),
            },
            lower: LonLat {
                lon: a.lower.lon.min(b.lower.lon),
                lat: a.lower.lat.min(b.lower.lat),
            },
        }
    }

    /// `check_box` from the data model: both corners must be valid coordinates, and latitude
    /// must not be inverted. Checks both corners' latitude explicitly — a known bug in one
    /// variant of the source this was distilled from checked the lower corner's latitude twice.
    pub fn check(&self) -> bool {
        check_longitude(self.upper.lon)
            && check_longitude(self.lower.lon)
            && check_latitude(self.upper.lat)
            && check_latitude(self.lower.lat)
            && self.upper.lat >= self.lower.lat
    }

    /// Whether `p` lies inside this box, honoring antimeridian wraparound.
    pub fn point_in_box(&self, p: &LonLat) -> bool {
        if p.lat < self.lower.lat || p.lat > self.upper.lat {
            return false;
        }

        let min_x = self.lower.lon;
        let mut max_x = self.upper.lon;
        let mut p_x = p.lon;
        let raw = max_x - min_x;
        if raw < 0.0 {
            max_x = min_x + raw + 360.0;
        }

        if p_x < min_x {
            p_x += 360.0;
        } else if p_x <= max_x {
            return true;
        } else {
            p_x -= 360.0;
        }

        min_x <= p_x && p_x <= max_x
    }

    /// Relate this box (`A`) to `other` (`B`): `Contains` means `A` entirely covers `B`, `Within`
    /// means `A` lies entirely inside `B`.
    pub fn relate(&self, other: &BBox) -> Relation {
        let lat_rel = relate1d(
            self.lower.lat,
            self.upper.lat,
            other.lower.lat,
            other.upper.lat,
        );
        if lat_rel == Relation::Disjoint {
            return Relation::Disjoint;
        }

        let lon_rel = relate_longitude(self, other);
        if lon_rel == Relation::Disjoint {
            return Relation::Disjoint;
        }

        if lat_rel == lon_rel {
            return lat_rel;
        }

        let same_lat_span =
            self.lower.lat == other.lower.lat && self.upper.lat == other.upper.lat;
        if same_lat_span {
            return lon_rel;
        }
        let same_lon_span =
            self.lower.lon == other.lower.lon && self.upper.lon == other.upper.lon;
        if same_lon_span {
            return lat_rel;
        }

        Relation::Intersects
    }
}

pub fn check_longitude(x: f64) -> bool {
    (-180.0..=180.0).contains(&x)
}

pub fn check_latitude(y: f64) -> bool {
    (-90.0..=90.0).contains(&y)
}

/// The 1-D relation between non-wrapping interval `[aMin, aMax]` (`A`) and `[bMin, bMax]` (`B`).
fn relate1d(a_min: f64, a_max: f64, b_min: f64, b_max: f64) -> Relation {
    if b_min > a_max || b_max < a_min {
        return Relation::Disjoint;
    }
    if b_min >= a_min && b_max <= a_max {
        return Relation::Contains;
    }
    if b_min <= a_min && b_max >= a_max {
        return Relation::Within;
    }
    Relation::Intersects
}

/// The 1-D relation between the two boxes' longitude spans, handling antimeridian wraparound and
/// the full-longitude-range (raw width 360) special case.
fn relate_longitude(a: &BBox, b: &BBox) -> Relation {
    let a_raw = a.upper.lon - a.lower.lon;
    let b_raw = b.upper.lon - b.lower.lon;
    let a_full = a_raw == 360.0;
    let b_full = b_raw == 360.0;

    if a_full && b_full {
        return Relation::Contains;
    }
    if a_full {
        return Relation::Contains;
    }
    if b_full {
        return Relation::Within;
    }

    let (a_min, mut a_max) = (a.lower.lon, a.upper.lon);
    if a_max < a_min {
        a_max += 360.0;
    }
    let (b_min, mut b_max) = (b.lower.lon, b.upper.lon);
    if b_max < b_min {
        b_max += 360.0;
    }

    let rel = relate1d(a_min, a_max, b_min, b_max);
    if rel != Relation::Disjoint {
        return rel;
    }

    if a_max < b_min {
        relate1d(a_min + 360.0, a_max + 360.0, b_min, b_max)
    } else if b_max < a_min {
        relate1d(a_min, a_max, b_min + 360.0, b_max + 360.0)
    } else {
        rel
    }
}
