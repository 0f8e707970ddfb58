//! Searching places to use as origin.

use radius_boundary::NominatimPlace;
use radius_entities::{geo::MapPoint, place::PlaceResult};

/// Queries with less characters are not sent to the geocoder.
pub const MIN_QUERY_LEN: usize = 3;

/// Maximum number of results requested from the geocoder.
pub const RESULT_LIMIT: usize = 5;

/// A free-text query that is long enough to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceQuery(String);

impl PlaceQuery {
    pub fn new(text: &str) -> Option<Self> {
        let text = text.trim();
        (text.chars().count() >= MIN_QUERY_LEN).then(|| Self(text.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Converts a raw geocoder record into a [`PlaceResult`].
///
/// The label consists of the first part of the display name and the city.
/// Without a city (or if it equals the name) the second part of the display
/// name is taken instead.
/// Records without parsable coordinates are skipped.
pub fn project_place(place: &NominatimPlace) -> Option<PlaceResult> {
    let NominatimPlace {
        display_name,
        lat,
        lon,
        address,
        ..
    } = place;
    let position = match MapPoint::parse_lat_lng_deg(lat, lon) {
        Ok(position) => position,
        Err(err) => {
            log::warn!("Skip place '{display_name}': {err}");
            return None;
        }
    };
    let mut parts = display_name.split(',').map(str::trim);
    let name = parts.next().unwrap_or_default();
    // A city that only repeats the name is skipped.
    let distinct = |city: &&str| !city.is_empty() && *city != name;
    let city = address
        .as_ref()
        .and_then(|a| a.city.as_ref().or(a.town.as_ref()).or(a.village.as_ref()))
        .map(String::as_str)
        .filter(distinct)
        .or_else(|| parts.next().filter(distinct));
    let label = match city {
        Some(city) => format!("{name}, {city}"),
        None => name.to_owned(),
    };
    Some(PlaceResult {
        label,
        display_name: display_name.clone(),
        position,
    })
}

pub fn project_places(places: &[NominatimPlace]) -> Vec<PlaceResult> {
    places
        .iter()
        .take(RESULT_LIMIT)
        .filter_map(project_place)
        .collect()
}

/// Ticket of a search request, see [`SearchSequencer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// Keeps track of in-flight search requests so that a slow response
/// of an older request never replaces the results of a newer one.
#[derive(Debug, Default)]
pub struct SearchSequencer {
    latest: u64,
}

impl SearchSequencer {
    pub fn next_ticket(&mut self) -> SearchTicket {
        self.latest += 1;
        SearchTicket(self.latest)
    }

    /// Invalidates all outstanding tickets, e.g. after a result was selected.
    pub fn cancel(&mut self) {
        self.latest += 1;
    }

    pub fn is_latest(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use radius_boundary::NominatimAddress;

    use super::*;

    fn place(display_name: &str, lat: &str, lon: &str, city: Option<&str>) -> NominatimPlace {
        NominatimPlace {
            place_id: None,
            display_name: display_name.to_owned(),
            lat: lat.to_owned(),
            lon: lon.to_owned(),
            address: city.map(|city| NominatimAddress {
                city: Some(city.to_owned()),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn minimum_query_length() {
        assert_eq!(PlaceQuery::new("ab"), None);
        assert_eq!(PlaceQuery::new("  ab   "), None);
        assert_eq!(PlaceQuery::new("abc").unwrap().as_str(), "abc");
        assert_eq!(PlaceQuery::new(" KLCC ").unwrap().as_str(), "KLCC");
        assert!(PlaceQuery::new("東京都").is_some());
    }

    #[test]
    fn label_with_city_from_address() {
        let p = place(
            "Masjid Negara, Jalan Perdana, Kuala Lumpur, 50480, Malaysia",
            "3.1423839",
            "101.6917954",
            Some("Kuala Lumpur"),
        );
        let result = project_place(&p).unwrap();
        assert_eq!(result.label, "Masjid Negara, Kuala Lumpur");
        assert_eq!(result.display_name, p.display_name);
        assert_eq!(
            result.position,
            MapPoint::from_lat_lng_deg(3.142_383_9, 101.691_795_4)
        );
    }

    #[test]
    fn label_falls_back_to_second_segment() {
        let p = place("Petronas Towers, Jalan Ampang, Malaysia", "3.15", "101.71", None);
        assert_eq!(
            project_place(&p).unwrap().label,
            "Petronas Towers, Jalan Ampang"
        );
        let p = place("Malaysia", "4.0", "109.0", None);
        assert_eq!(project_place(&p).unwrap().label, "Malaysia");
    }

    #[test]
    fn city_equal_to_name_falls_back_to_second_segment() {
        let p = place(
            "Kuala Lumpur, Federal Territory of Kuala Lumpur, Malaysia",
            "3.15",
            "101.7",
            Some("Kuala Lumpur"),
        );
        assert_eq!(
            project_place(&p).unwrap().label,
            "Kuala Lumpur, Federal Territory of Kuala Lumpur"
        );
        let p = place("Ipoh, Ipoh, Malaysia", "4.6", "101.1", Some("Ipoh"));
        assert_eq!(project_place(&p).unwrap().label, "Ipoh");
    }

    #[test]
    fn skip_invalid_coordinates() {
        let places = vec![
            place("A", "not a number", "1.0", None),
            place("B", "1.0", "2.0", None),
            place("C", "100.0", "2.0", None),
        ];
        let results = project_places(&places);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].label, "B");
    }

    #[test]
    fn limit_results() {
        let places: Vec<_> = (0..8)
            .map(|i| place(&format!("P{i}"), "1.0", "1.0", None))
            .collect();
        assert_eq!(project_places(&places).len(), RESULT_LIMIT);
    }

    #[test]
    fn only_the_latest_response_is_accepted() {
        let mut sequencer = SearchSequencer::default();
        let first = sequencer.next_ticket();
        let second = sequencer.next_ticket();
        // the response of the first request arrives late
        assert!(sequencer.is_latest(second));
        assert!(!sequencer.is_latest(first));
        sequencer.cancel();
        assert!(!sequencer.is_latest(second));
    }
}
