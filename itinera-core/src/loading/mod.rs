//! Building a [`TransportNetwork`] from a CSV file or the built-in
//! dataset

mod builtin;
mod records;

pub use builtin::{builtin_network, builtin_network_with_costing};

use std::fs::File;
use std::path::Path;

use log::{info, warn};

use crate::costing::CostModel;
use crate::error::Error;
use crate::model::{NetworkBuilder, NodeKind, TransportNetwork};
use records::RawNodeRecord;

/// Load a network from a CSV file with the default cost model.
pub fn load_network(path: impl AsRef<Path>) -> Result<TransportNetwork, Error> {
    load_network_with_costing(path, CostModel::default())
}

/// Load a network from a CSV file.
///
/// Expected header: `city,node_type,node_name,lat,lon`. Lines starting
/// with `#` are comments; fields are trimmed. Rows that fail to parse
/// are skipped with a warning instead of failing the whole load.
pub fn load_network_with_costing(
    path: impl AsRef<Path>,
    costing: CostModel,
) -> Result<TransportNetwork, Error> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut builder = NetworkBuilder::with_costing(costing);
    let mut loaded = 0_usize;
    let mut skipped = 0_usize;

    for record in reader.deserialize::<RawNodeRecord>() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                warn!("Skipping malformed row in {}: {err}", path.display());
                skipped += 1;
                continue;
            }
        };
        match parse_record(&record) {
            Some((kind, lat, lon)) => {
                builder.add_node(&record.city, kind, &record.node_name, lat, lon);
                loaded += 1;
            }
            None => {
                warn!(
                    "Skipping row for node {:?} in {}: bad type or coordinates",
                    record.node_name,
                    path.display()
                );
                skipped += 1;
            }
        }
    }

    info!(
        "Loaded {loaded} nodes from {} ({skipped} rows skipped)",
        path.display()
    );
    Ok(builder.build())
}

/// Load from `path` when given and openable, otherwise fall back to
/// the built-in dataset.
pub fn network_or_builtin(path: Option<&Path>) -> Result<TransportNetwork, Error> {
    match path {
        Some(path) => match load_network(path) {
            Ok(network) => Ok(network),
            Err(Error::Io(err)) => {
                info!(
                    "Could not open {} ({err}), using the built-in dataset",
                    path.display()
                );
                Ok(builtin_network())
            }
            Err(err) => Err(err),
        },
        None => Ok(builtin_network()),
    }
}

fn parse_record(record: &RawNodeRecord) -> Option<(NodeKind, f64, f64)> {
    if record.city.is_empty() || record.node_name.is_empty() {
        return None;
    }
    let kind = NodeKind::from_tag(&record.node_type.to_lowercase())?;
    let lat: f64 = record.lat.parse().ok()?;
    let lon: f64 = record.lon.parse().ok()?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return None;
    }
    Some((kind, lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_small_csv() {
        let file = write_csv(
            "city,node_type,node_name,lat,lon\n\
             # comment line\n\
             Aville, landmark , Aville Square ,0.0,0.0\n\
             Aville,airport,Aville Intl,0.1,0.2\n\
             Btown,railway,Btown East,1.0,1.0\n",
        );

        let network = load_network(file.path()).unwrap();
        assert_eq!(network.city_count(), 2);
        assert_eq!(network.node_count(), 3);

        let intl = network.find_node_by_name("Aville Intl").unwrap();
        assert_eq!(network.node(intl).unwrap().kind, NodeKind::Airport);
        // "railway" maps onto the HSR kind
        let east = network.find_node_by_name("Btown East").unwrap();
        assert_eq!(network.node(east).unwrap().kind, NodeKind::HsrStation);
    }

    #[test]
    fn bad_rows_are_skipped_not_fatal() {
        let file = write_csv(
            "city,node_type,node_name,lat,lon\n\
             Aville,landmark,Aville Square,0.0,0.0\n\
             Btown,harbor,Btown Docks,1.0,1.0\n\
             Cburg,landmark,Cburg Square,not-a-number,2.0\n\
             Dtown,landmark,Dtown Square,95.0,2.0\n",
        );

        let network = load_network(file.path()).unwrap();
        assert_eq!(network.node_count(), 1);
        assert_eq!(network.find_node_by_name("Btown Docks"), None);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_network("/definitely/not/here.csv");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn fallback_kicks_in_when_the_file_is_absent() {
        let network = network_or_builtin(Some(Path::new("/definitely/not/here.csv"))).unwrap();
        assert!(network.node_count() > 0);
        assert!(network.find_city_by_name("Beijing").is_some());
    }
}
