use std::{fmt, str::FromStr};

use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use thiserror::Error;

const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
const CARTO_ATTRIBUTION: &str =
    "&copy; OpenStreetMap contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>";
const STAMEN_ATTRIBUTION: &str =
    "Map tiles by <a href=\"http://stamen.com\">Stamen Design</a>, data &copy; OpenStreetMap contributors";
const ESRI_ATTRIBUTION: &str = "Tiles &copy; Esri";
const STADIA_ATTRIBUTION: &str =
    "&copy; <a href=\"https://stadiamaps.com/\">Stadia Maps</a> &copy; OpenStreetMap contributors";

/// Tile provider of the map.
///
/// The string representation is the numeric id used in the URL path.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
pub enum MapStyle {
    #[default]
    #[strum(serialize = "1")]
    OpenStreetMap,
    #[strum(serialize = "2")]
    CartoLight,
    #[strum(serialize = "3")]
    CartoDark,
    #[strum(serialize = "4")]
    StamenToner,
    #[strum(serialize = "5")]
    EsriWorldStreet,
    #[strum(serialize = "6")]
    StadiaOsmBright,
    #[strum(serialize = "7")]
    StamenTonerLite,
    #[strum(serialize = "8")]
    EsriWorldTopo,
    #[strum(serialize = "9")]
    EsriWorldImagery,
    #[strum(serialize = "10")]
    CartoVoyager,
    #[strum(serialize = "11")]
    HikeBike,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown map style '{0}'")]
pub struct UnknownMapStyle(pub String);

impl MapStyle {
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Tile URL template in the `{z}/{x}/{y}` convention of Leaflet.
    pub const fn tile_url(self) -> &'static str {
        match self {
            Self::OpenStreetMap => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            Self::CartoLight => "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png",
            Self::CartoDark => "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}.png",
            Self::StamenToner => "https://tile.stamen.com/toner/{z}/{x}/{y}.png",
            Self::EsriWorldStreet => "https://services.arcgisonline.com/arcgis/rest/services/World_Street_Map/MapServer/tile/{z}/{y}/{x}",
            Self::StadiaOsmBright => "https://tiles.stadiamaps.com/tiles/osm_bright/{z}/{x}/{y}{r}.png",
            Self::StamenTonerLite => "https://stamen-tiles-{s}.a.ssl.fastly.net/toner-lite/{z}/{x}/{y}{r}.png",
            Self::EsriWorldTopo => "https://server.arcgisonline.com/ArcGIS/rest/services/World_Topo_Map/MapServer/tile/{z}/{y}/{x}",
            Self::EsriWorldImagery => "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
            Self::CartoVoyager => "https://{s}.basemaps.cartocdn.com/rastertiles/voyager/{z}/{x}/{y}{r}.png",
            Self::HikeBike => "https://tiles.wmflabs.org/hikebike/{z}/{x}/{y}.png",
        }
    }

    pub const fn attribution(self) -> &'static str {
        match self {
            Self::OpenStreetMap | Self::HikeBike => OSM_ATTRIBUTION,
            Self::CartoLight | Self::CartoDark | Self::CartoVoyager => CARTO_ATTRIBUTION,
            Self::StamenToner | Self::StamenTonerLite => STAMEN_ATTRIBUTION,
            Self::EsriWorldStreet | Self::EsriWorldTopo | Self::EsriWorldImagery => {
                ESRI_ATTRIBUTION
            }
            Self::StadiaOsmBright => STADIA_ATTRIBUTION,
        }
    }

    /// Human readable name for the style picker.
    pub const fn label(self) -> &'static str {
        match self {
            Self::OpenStreetMap => "OpenStreetMap",
            Self::CartoLight => "Light",
            Self::CartoDark => "Dark",
            Self::StamenToner => "Toner",
            Self::EsriWorldStreet => "Streets",
            Self::StadiaOsmBright => "Bright",
            Self::StamenTonerLite => "Toner Lite",
            Self::EsriWorldTopo => "Topographic",
            Self::EsriWorldImagery => "Satellite",
            Self::CartoVoyager => "Voyager",
            Self::HikeBike => "Hike & Bike",
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn parse_id(id: &str) -> Result<Self, UnknownMapStyle> {
        Self::from_str(id.trim()).map_err(|_| UnknownMapStyle(id.to_owned()))
    }
}

impl fmt::Display for MapStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.id())
    }
}
