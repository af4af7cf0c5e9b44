/// A single indexed point: an opaque caller-supplied identifier plus its coordinates.
///
/// `lon` and `lat` follow the data model's convention of `(longitude, latitude)`, not the
/// `(lat, lon)` order points-files are written in. Equality is data-plus-coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<Id> {
    pub id: Id,
    pub lon: f64,
    pub lat: f64,
}

impl<Id> Point<Id> {
    pub fn new(id: Id, lon: f64, lat: f64) -> Self {
        Self { id, lon, lat }
    }

    #[inline]
    pub(crate) fn lon_lat(&self) -> crate::geometry::LonLat {
        crate::geometry::LonLat {
            lon: self.lon,
            lat: self.lat,
        }
    }
}
