use crate::geo::MapPoint;

/// A geocoded candidate offered to the user while searching for an origin.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceResult {
    /// Short label, e.g. `"Masjid Negara, Kuala Lumpur"`.
    pub label: String,
    pub display_name: String,
    pub position: MapPoint,
}
