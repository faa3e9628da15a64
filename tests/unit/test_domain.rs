use locality_map::domain::location::{
    entity::{AreaType, LocationDetails, LocationRecord},
    errors::LocationError,
    repair::{parse_locations, repair_json},
    value_objects::{LocationQuery, MarkerColor, map_center},
};

fn has_trailing_comma(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars.iter().enumerate().any(|(i, c)| {
        *c == ','
            && chars[i + 1..]
                .iter()
                .find(|n| !n.is_whitespace())
                .is_some_and(|n| *n == '}' || *n == ']')
    })
}

#[test]
fn repaired_text_never_keeps_trailing_commas() {
    let inputs = [
        "[1,2,]",
        "[{\"a\":1,},]",
        "[{\"a\": [1, 2 ,\n ], },\n]",
        "prefix [ {'a': 'b' , } , ] suffix",
        "[1,,,]",
        "[{},\t\r\n}]",
    ];
    for input in inputs {
        let repaired = repair_json(input);
        assert!(!has_trailing_comma(&repaired), "{:?} -> {:?}", input, repaired);
    }
}

#[test]
fn single_quoted_records_parse() {
    let raw = "[{'place_name': 'Phoenix-Marketcity', 'address': 'LBS-Marg Kurla-West Mumbai', 'lat': 19.0865, 'lon': 72.8888, 'area_type': 'non-prime', 'details': {'school_districts': 'Several', 'public_transport': 'Kurla station', 'local_amenities': 'Mall', 'zoning_info': 'Commercial'}}, {'place_name': 'One-BKC', 'address': 'G-Block BKC Mumbai', 'lat': 19.0606, 'lon': 72.8656, 'area_type': 'prime', 'details': {}}]";
    let records = parse_locations(raw).expect("single quoted reply should parse");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].area_type, AreaType::NonPrime);
    assert_eq!(records[1].area_type, AreaType::Prime);
    assert_eq!(records[1].details.zoning_info, "");
}

#[test]
fn apostrophes_are_a_known_limitation() {
    let raw = "[{'place_name': 'St. Xavier's School', 'lat': 19.1, 'lon': 72.8}]";
    assert!(parse_locations(raw).is_err());
}

#[test]
fn marker_color_is_blue_only_for_prime() {
    let cases = [
        ("prime", MarkerColor::Blue),
        (" Prime ", MarkerColor::Blue),
        ("PRIME", MarkerColor::Blue),
        ("non-prime", MarkerColor::Orange),
        ("nonprime", MarkerColor::Orange),
        ("primary", MarkerColor::Orange),
        ("", MarkerColor::Orange),
    ];
    for (raw, expected) in cases {
        assert_eq!(AreaType::parse(raw).marker_color(), expected, "area_type {:?}", raw);
    }
}

#[test]
fn missing_area_type_is_orange() {
    let records = parse_locations(r#"[{"lat": 19.1, "lon": 72.8}]"#).unwrap();
    assert_eq!(records[0].area_type.marker_color(), MarkerColor::Orange);
}

#[test]
fn map_center_is_order_independent_mean() {
    let make = |lat: f64, lon: f64| LocationRecord {
        place_name: "P".into(),
        address: String::new(),
        lat,
        lon,
        area_type: AreaType::NonPrime,
        details: LocationDetails::default(),
    };
    let records = vec![make(19.0, 72.8), make(19.2, 72.9), make(19.1, 72.85), make(18.9, 72.75)];
    let mut shuffled = records.clone();
    shuffled.swap(0, 3);
    shuffled.swap(1, 2);

    let a = map_center(&records).unwrap();
    let b = map_center(&shuffled).unwrap();
    assert!((a.lat - 19.05).abs() < 1e-9);
    assert!((a.lon - 72.825).abs() < 1e-9);
    assert!((a.lat - b.lat).abs() < 1e-12);
    assert!((a.lon - b.lon).abs() < 1e-12);
}

#[test]
fn location_query_enforces_length_bounds() {
    assert!(LocationQuery::new("Andheri West".into(), "Mumbai".into(), "English".into()).is_ok());
    assert!(LocationQuery::new("a".into(), "Mumbai".into(), "English".into()).is_err());
    assert!(LocationQuery::new("a".repeat(101), "Mumbai".into(), "English".into()).is_err());
}

#[test]
fn unusable_coordinates_fail_the_whole_reply() {
    let replies = [
        r#"[{"place_name": "A", "lat": "NaN", "lon": "inf"}]"#,
        r#"[{"place_name": "A", "lat": 19.1, "lon": 72.8}, {"place_name": "B", "lat": 999.0, "lon": -500}]"#,
    ];
    for raw in replies {
        assert!(
            matches!(parse_locations(raw), Err(LocationError::Parse(_))),
            "{}",
            raw
        );
    }
}
