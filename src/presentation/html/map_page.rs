use std::fmt::Write;

use crate::application::generate_map::dto::LocationMap;

pub const DEFAULT_ZOOM: u8 = 11;
pub const POPUP_MAX_WIDTH: u32 = 300;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Location Map</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/leaflet@1.9.4/dist/leaflet.css" />
  <script src="https://cdn.jsdelivr.net/npm/leaflet@1.9.4/dist/leaflet.js"></script>
  <link rel="stylesheet" href="https://stackpath.bootstrapcdn.com/bootstrap/4.5.2/css/bootstrap.min.css" />
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.15.4/css/all.min.css" />
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.css" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.js"></script>
  <style>
    html, body { width: 100%; height: 100%; margin: 0; padding: 0; }
    #map { position: absolute; top: 0; bottom: 0; left: 0; right: 0; }
    #sidebar {
      position: absolute;
      top: 10px;
      right: 10px;
      width: 350px;
      height: 90%;
      background: white;
      z-index: 9999;
      overflow: auto;
      padding: 20px;
      border-radius: 8px;
      box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
      font-family: Arial, sans-serif;
    }
  </style>
</head>
<body>
"#;

const SIDEBAR: &str = r#"  <div id="map"></div>
  <div id="sidebar">
    <div id="sidebar-header">
      <h3><i class="fa fa-info-circle"></i> Location Details</h3>
      <p><i class="fa fa-mouse-pointer"></i> Click on a marker to see details</p>
      <div style="margin-top: 15px;">
        <p><i class="fa fa-map-marker" style="color: blue;"></i> Prime Location</p>
        <p><i class="fa fa-map-marker" style="color: orange;"></i> Non-prime Location</p>
      </div>
      <hr>
    </div>
    <div id="sidebar-content"></div>
  </div>
"#;

const SIDEBAR_SCRIPT: &str = r#"
    function escapeHtml(value) {
      return String(value === undefined || value === null ? '' : value)
        .replace(/&/g, '&amp;')
        .replace(/</g, '&lt;')
        .replace(/>/g, '&gt;')
        .replace(/"/g, '&quot;')
        .replace(/'/g, '&#39;');
    }

    function updateSidebar(idx) {
      var loc = locations[idx];
      if (!loc) { return; }
      var details = loc.details || {};
      var content =
        '<h3 style="color: #2c3e50;"><i class="fa fa-building"></i> ' + escapeHtml(loc.place_name) + '</h3>' +
        '<p style="color: #34495e;"><i class="fa fa-map-marker"></i> ' + escapeHtml(loc.address) + '</p>' +
        '<hr style="border-top: 2px solid #eee;">' +
        '<div class="details">' +
        '<p class="text-muted">Details in ' + escapeHtml(detailLanguage) + ':</p>' +
        '<p><b><i class="fa fa-school"></i> School Districts:</b><br>' + escapeHtml(details.school_districts) + '</p>' +
        '<p><b><i class="fa fa-bus"></i> Public Transportation:</b><br>' + escapeHtml(details.public_transport) + '</p>' +
        '<p><b><i class="fa fa-store"></i> Local Amenities:</b><br>' + escapeHtml(details.local_amenities) + '</p>' +
        '<p><b><i class="fa fa-building"></i> Zoning Information:</b><br>' + escapeHtml(details.zoning_info) + '</p>' +
        '<p><b><i class="fa fa-star"></i> Area Type:</b> ' + escapeHtml(loc.area_type) + '</p>' +
        '</div>';
      document.getElementById('sidebar-content').innerHTML = content;
    }
"#;

/// Serializes `value` for embedding inside a `<script>` element.
fn script_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn popup_html(idx: usize, place_name: &str, address: &str) -> String {
    format!(
        r#"<div><h4>{}</h4><p>{}</p><button onclick="updateSidebar({})" class="btn btn-primary btn-sm">Show Details</button></div>"#,
        html_escape::encode_text(place_name),
        html_escape::encode_text(address),
        idx
    )
}

/// Renders the complete map page: one colored marker per record, the records
/// inlined as `locations`, and a client-side `updateSidebar(idx)` that fills the
/// detail panel without another request.
///
/// `locations` is the typed records serialized back to JSON, not the model's
/// raw objects: `area_type` carries the normalized `prime` / `non-prime` label,
/// missing fields carry their defaults, and keys outside [`LocationRecord`]
/// are dropped.
///
/// [`LocationRecord`]: crate::domain::location::entity::LocationRecord
pub fn render_map_page(map: &LocationMap, language: &str) -> Result<String, serde_json::Error> {
    let mut page = String::with_capacity(8 * 1024 + map.records.len() * 512);
    page.push_str(PAGE_HEAD);
    page.push_str(SIDEBAR);
    page.push_str("  <script>\n");

    let _ = writeln!(
        page,
        "    var map = L.map('map').setView([{}, {}], {});",
        map.center.lat, map.center.lon, DEFAULT_ZOOM
    );
    page.push_str(
        "    L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {\n      maxZoom: 19,\n      attribution: '&copy; OpenStreetMap contributors'\n    }).addTo(map);\n",
    );

    let _ = writeln!(page, "    var locations = {};", script_json(&map.records)?);
    let _ = writeln!(page, "    var detailLanguage = {};", script_json(language)?);

    for (idx, record) in map.records.iter().enumerate() {
        let popup = script_json(&popup_html(idx, &record.place_name, &record.address))?;
        let _ = writeln!(
            page,
            "    L.marker([{}, {}], {{icon: L.AwesomeMarkers.icon({{icon: 'map-marker', prefix: 'fa', markerColor: '{}'}})}}).addTo(map).bindPopup({}, {{maxWidth: {}}});",
            record.lat,
            record.lon,
            record.area_type.marker_color().as_str(),
            popup,
            POPUP_MAX_WIDTH
        );
    }

    page.push_str(SIDEBAR_SCRIPT);
    page.push_str("  </script>\n</body>\n</html>\n");
    Ok(page)
}
