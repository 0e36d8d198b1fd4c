//! Self-contained Leaflet map of a computed route
//!
//! One HTML file, no server required: the route GeoJSON is embedded in
//! the page and styled by the per-mode colors carried in its feature
//! properties.

use std::path::Path;

use log::info;

use crate::error::Error;
use crate::model::{TransportMode, TransportNetwork};
use crate::output::to_geojson::{mode_color, route_to_geojson_string};
use crate::routing::RoutePath;

const MAP_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Route map</title>
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <style>
        body { margin: 0; padding: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif; }
        #map { height: 100vh; width: 100vw; }
        .summary-box { position: absolute; top: 10px; left: 10px; z-index: 1000; background: rgba(255,255,255,0.9); padding: 10px 15px; border-radius: 8px; box-shadow: 0 1px 7px rgba(0,0,0,0.3); max-width: 350px; max-height: 90vh; overflow-y: auto; }
        .summary-box h4 { margin: 0 0 10px; text-align: center; font-weight: bold; color: #000; border-bottom: 1px solid #ccc; padding-bottom: 8px; }
        .summary-box p { margin: 4px 0; font-size: 13px; color: #333; line-height: 1.4; }
        .summary-box p b { min-width: 70px; display: inline-block; font-weight: bold; }
        .summary-box .segment { border-top: 1px dashed #ddd; padding-top: 8px; margin-top: 8px; }
        .summary-box .total { font-weight: bold; border-top: 2px solid #333; padding-top: 8px; margin-top: 8px; }
        .legend { padding: 10px; font-size: 14px; background: rgba(255,255,255,0.85); box-shadow: 0 0 15px rgba(0,0,0,0.2); border-radius: 5px; line-height: 1.5; color: #333; }
        .legend h4 { margin: 0 0 8px; color: #000; text-align: center; font-weight: bold; }
        .legend .legend-item { display: flex; align-items: center; height: 22px; margin-bottom: 2px; }
        .legend .legend-item i { width: 18px; height: 18px; margin-right: 8px; opacity: 0.9; flex-shrink: 0; border: 1px solid rgba(0,0,0,0.2); }
        .leaflet-popup-content-wrapper { border-radius: 5px; }
        .leaflet-popup-content b { color: #333; }
        .leaflet-popup-content p { margin: 5px 0; }
    </style>
</head>
<body>

__SUMMARY__

<div id="map"></div>

<script>
    const map = L.map('map').setView([35.8617, 104.1954], 5);
    L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
        attribution: '&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors'
    }).addTo(map);

    const route = __GEOJSON__;
    const layer = L.geoJSON(route, {
        style: feature => ({ color: feature.properties.color || '#9B9B9B', weight: 5, opacity: 0.8 }),
        pointToLayer: (feature, latlng) => L.circleMarker(latlng, { radius: 6, color: '#333', weight: 1, fillColor: '#fff', fillOpacity: 1 }),
        onEachFeature: (feature, lyr) => {
            const p = feature.properties;
            if (p.mode) {
                lyr.bindPopup('<b>' + p.from_name + ' to ' + p.to_name + '</b>'
                    + '<p>Mode: ' + p.mode + '</p>'
                    + '<p>Distance: ' + p.distance_km.toFixed(1) + ' km</p>'
                    + '<p>Time: ' + p.time_hours.toFixed(2) + ' h</p>'
                    + '<p>Cost: ' + p.cost.toFixed(2) + '</p>');
            } else if (p.name) {
                lyr.bindTooltip(p.name);
            }
        }
    }).addTo(map);

    const bounds = layer.getBounds();
    if (bounds.isValid()) { map.fitBounds(bounds, { padding: [50, 50] }); }

    const legend = L.control({ position: 'bottomright' });
    legend.onAdd = function () {
        const div = L.DomUtil.create('div', 'legend');
        const modes = [__LEGEND_ITEMS__];
        div.innerHTML = '<h4>Legend</h4>';
        for (const entry of modes) {
            div.innerHTML += '<div class="legend-item"><i style="background:' + entry.color + '"></i>' + entry.mode + '</div>';
        }
        return div;
    };
    legend.addTo(map);
</script>

</body>
</html>
"##;

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn summary_box(network: &TransportNetwork, path: &RoutePath) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"summary-box\">\n");
    out.push_str("    <h4>Itinerary</h4>\n");

    for segment in path.segments() {
        let from = network
            .node(segment.from)
            .map(|node| html_escape(&node.name))
            .unwrap_or_default();
        let to = network
            .node(segment.to)
            .map(|node| html_escape(&node.name))
            .unwrap_or_default();
        out.push_str("    <div class=\"segment\">\n");
        out.push_str(&format!("        <p><b>From:</b> {from}</p>\n"));
        out.push_str(&format!("        <p><b>To:</b> {to}</p>\n"));
        out.push_str(&format!(
            "        <p><b>Mode:</b> {}</p>\n",
            segment.mode.display_name()
        ));
        out.push_str(&format!(
            "        <p><b>Details:</b> {:.1} km, {:.2} h, {:.2}</p>\n",
            segment.distance_km, segment.time_hours, segment.cost
        ));
        out.push_str("    </div>\n");
    }

    out.push_str("    <div class=\"total\">\n");
    out.push_str(&format!(
        "        <p><b>Total distance:</b> {:.1} km</p>\n",
        path.total_distance_km()
    ));
    out.push_str(&format!(
        "        <p><b>Total time:</b> {:.2} h</p>\n",
        path.total_time_hours()
    ));
    out.push_str(&format!(
        "        <p><b>Total cost:</b> {:.2}</p>\n",
        path.total_cost()
    ));
    out.push_str("    </div>\n</div>");
    out
}

fn legend_items() -> String {
    TransportMode::ALL
        .iter()
        .map(|&mode| {
            format!(
                "{{ mode: '{}', color: '{}' }}",
                mode.display_name(),
                mode_color(mode)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// The complete HTML page as a string.
pub fn render_leaflet_map(network: &TransportNetwork, path: &RoutePath) -> String {
    MAP_TEMPLATE
        .replace("__SUMMARY__", &summary_box(network, path))
        .replace("__GEOJSON__", &route_to_geojson_string(network, path))
        .replace("__LEGEND_ITEMS__", &legend_items())
}

/// Write the map page to `file`. An empty route produces no file.
pub fn write_leaflet_map(
    network: &TransportNetwork,
    path: &RoutePath,
    file: impl AsRef<Path>,
) -> Result<(), Error> {
    if path.is_empty() {
        info!("Route is empty, skipping map generation");
        return Ok(());
    }
    std::fs::write(file, render_leaflet_map(network, path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NetworkBuilder, NodeKind};
    use crate::routing::shortest_path;

    fn network() -> TransportNetwork {
        let mut builder = NetworkBuilder::new();
        builder.add_node("Aville", NodeKind::Landmark, "Aville Square", 10.0, 10.0);
        builder.add_node("Btown", NodeKind::Landmark, "Btown Square", 15.0, 15.0);
        builder.build()
    }

    #[test]
    fn page_embeds_route_and_legend() {
        let network = network();
        let path = shortest_path(&network, 0, 1, 1.0, 0.0).unwrap().unwrap();
        let html = render_leaflet_map(&network, &path);

        assert!(html.contains("FeatureCollection"));
        assert!(html.contains("Aville Square"));
        assert!(html.contains("#4A90E2"));
        assert!(html.contains("fitBounds"));
        assert!(!html.contains("__GEOJSON__"));
    }

    #[test]
    fn writes_a_file_for_a_real_route() {
        let network = network();
        let path = shortest_path(&network, 0, 1, 1.0, 0.0).unwrap().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("route.html");
        write_leaflet_map(&network, &path, &file).unwrap();
        assert!(file.exists());
    }

    #[test]
    fn empty_route_writes_nothing() {
        let network = network();
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("route.html");
        write_leaflet_map(&network, &RoutePath::empty(), &file).unwrap();
        assert!(!file.exists());
    }
}
