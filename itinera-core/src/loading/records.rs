use serde::Deserialize;

/// One row of a network CSV, header
/// `city,node_type,node_name,lat,lon`. Everything is kept as text and
/// parsed later so one bad field only drops its own row.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawNodeRecord {
    pub city: String,
    pub node_type: String,
    pub node_name: String,
    pub lat: String,
    pub lon: String,
}
