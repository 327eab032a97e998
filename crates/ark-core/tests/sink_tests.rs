use ark_core::latlon::round_to_tenth;
use ark_core::{
    Creature, DefaultAttributeNames, EncodeOpts, Item, ItemCatalog, ItemCatalogData, JsonSink,
    LatLonCalculator, LatLonProjector, Location, Lookups, NoCatalog, RecordSet, TextSink,
    ValueSink, encode_float, records_to_value, resolve_name, write_records,
};
use serde_json::json;

fn sample_records() -> RecordSet {
    let mut egg = Item::new("Egg_Fertilized_Rex_C", 2);
    egg.egg_levelups = vec![0, 4];
    egg.egg_colors = vec![7];
    egg.rating = f32::INFINITY;
    RecordSet {
        game_time: Some(9000.0),
        creatures: vec![
            Creature {
                location: Some(Location {
                    x: 1.5,
                    y: -2.25,
                    z: 3.0,
                }),
                dino_id: 1,
                tamed: true,
                tamed_name: "Quote \"q\" and\nnewline".into(),
                tamed_at_time: 100.0,
                base_character_level: 2,
                ..Creature::default()
            },
            Creature {
                dino_id: 2,
                base_character_level: 1,
                extra_character_level: 4,
                ..Creature::default()
            },
        ],
        items: vec![egg, Item::new("Stone_C", 40)],
    }
}

#[test]
fn text_sink_matches_value_sink() {
    let records = sample_records();
    let island = LatLonCalculator::default();
    let lookups = Lookups {
        attributes: &DefaultAttributeNames,
        catalog: &NoCatalog,
        projector: Some(&island),
    };
    for opts in [
        EncodeOpts::default(),
        EncodeOpts {
            write_all_fields: true,
            include_blueprint_status: true,
            summary: false,
        },
        EncodeOpts {
            summary: true,
            ..EncodeOpts::default()
        },
    ] {
        let mut text = TextSink::new();
        write_records(&mut text, &records, lookups, opts, None);
        let parsed: serde_json::Value = serde_json::from_str(text.as_str()).expect("valid json");
        assert_eq!(parsed, records_to_value(&records, lookups, opts));
    }
}

#[test]
fn records_layout() {
    let lookups = Lookups {
        attributes: &DefaultAttributeNames,
        catalog: &NoCatalog,
        projector: None,
    };
    let v = records_to_value(&sample_records(), lookups, EncodeOpts::default());
    assert_eq!(v["creatures"].as_array().unwrap().len(), 2);
    assert_eq!(v["creatures"][0]["tamedTime"], json!(8900.0));
    assert_eq!(v["creatures"][1]["tamedLevels"], json!({}));
    assert_eq!(v["inventory"][0]["name"], json!("Egg_Fertilized_Rex_C"));
    assert_eq!(v["inventory"][0]["rating"], json!("Infinity"));
    assert_eq!(v["inventory"][0]["eggAttributes"], json!({"stamina": 4}));
    assert_eq!(v["inventory"][0]["eggColors"], json!({"0": 7}));
    assert_eq!(v["inventory"][1], json!({"name": "Stone_C", "quantity": 40}));

    let opts = EncodeOpts {
        summary: true,
        ..EncodeOpts::default()
    };
    let v = records_to_value(&sample_records(), lookups, opts);
    assert_eq!(
        v["inventory"],
        json!([{"name": "Stone_C", "count": 40}, {"name": "Egg_Fertilized_Rex_C", "count": 2}])
    );
}

#[test]
fn text_sink_escapes_and_separates() {
    let mut sink = TextSink::new();
    sink.begin_object(None);
    sink.write_str("a\"b", "line\nbreak\t\u{1}");
    sink.begin_array(Some("list"));
    sink.begin_object(None);
    sink.write_i64("n", -3);
    sink.end();
    sink.begin_object(None);
    sink.write_bool("ok", true);
    sink.write_f64("bad", f64::NAN);
    sink.end();
    sink.end();
    sink.write_f64("f", 0.5);
    sink.end();
    assert_eq!(
        sink.into_string(),
        r#"{"a\"b":"line\nbreak\t\u0001","list":[{"n":-3},{"ok":true,"bad":null}],"f":0.5}"#
    );
}

#[test]
fn value_sink_closes_open_containers() {
    let mut sink = ValueSink::new();
    sink.begin_object(None);
    sink.begin_array(Some("xs"));
    sink.write_i64("ignored", 1);
    assert_eq!(sink.into_value(), json!({"xs": [1]}));
    assert_eq!(ValueSink::new().into_value(), serde_json::Value::Null);
}

#[test]
fn float_encoding() {
    assert_eq!(encode_float(1.25), json!(1.25));
    assert_eq!(encode_float(-0.0), json!(-0.0));
    assert_eq!(encode_float(f64::NAN), json!("NaN"));
    assert_eq!(encode_float(f64::INFINITY), json!("Infinity"));
    assert_eq!(encode_float(f64::NEG_INFINITY), json!("-Infinity"));
    assert_eq!(encode_float(f64::from(f32::INFINITY)), json!("Infinity"));
}

#[test]
fn lat_lon_maps() {
    let center = LatLonCalculator::for_map("thecenter").expect("known map");
    assert!((center.lat(0.0) - 30.34223747253418).abs() < 1e-12);
    assert!((center.lon(9600.0) - 56.10416793823242).abs() < 1e-12);
    let rag = LatLonCalculator::for_map("Ragnarok").unwrap();
    assert_eq!(rag.lat(13100.0), 51.0);
    assert!(LatLonCalculator::for_map("Atlantis").is_none());
    assert_eq!(LatLonCalculator::known_maps().next(), Some("TheIsland"));
}

#[test]
fn rounding_is_half_up() {
    assert_eq!(round_to_tenth(12.25), 12.3);
    assert_eq!(round_to_tenth(-12.25), -12.2);
    assert_eq!(round_to_tenth(49.94), 49.9);
    assert_eq!(round_to_tenth(50.0), 50.0);
}

#[test]
fn catalog_from_data_file() {
    let data = r#"{
        "items": [
            {"name": "Stone", "class": "PrimalItemResource_Stone_C", "blueprint": "Blueprint'/Game/Stone'"},
            {"name": "Wood", "class": "PrimalItemResource_Wood_C"}
        ],
        "creatures": []
    }"#;
    let catalog = ItemCatalogData::from_json_str(data).expect("catalog");
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.display_name("PrimalItemResource_Stone_C"),
        Some("Stone")
    );
    assert_eq!(resolve_name(&catalog, "Missing_C"), "Missing_C");
    assert!(ItemCatalogData::from_json_str(r#"{"items": 5}"#).is_err());
    assert!(ItemCatalogData::from_json_str("{}").unwrap().is_empty());
}
