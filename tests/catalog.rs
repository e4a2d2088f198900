// tests/catalog.rs
use std::collections::HashSet;

use fastener_gallery::{Catalog, Error, FastenerRecord, SpecTable};

fn rec(id: &str) -> FastenerRecord {
    FastenerRecord {
        id: id.into(),
        name: format!("Name {id}"),
        description: "desc".into(),
        applications: vec!["a".into()],
        materials: vec!["m".into()],
        specs: [("Thread", "M6")].into_iter().collect::<SpecTable>(),
        image: format!("assets/fasteners/{id}.svg"),
        script: format!("python/python_fastener_export.py --fastener {id}"),
    }
}

#[test]
fn builtin_ids_are_pairwise_distinct() {
    let catalog = Catalog::builtin();
    let ids: HashSet<&str> = catalog.ids().collect();
    assert_eq!(ids.len(), catalog.len());
}

#[test]
fn builtin_has_five_records_in_gallery_order() {
    let ids: Vec<&str> = Catalog::builtin().ids().collect();
    assert_eq!(ids, vec!["hex-bolt", "socket-cap-screw", "hex-nut", "flat-washer", "blind-rivet"]);
    assert_eq!(Catalog::builtin().first().name, "Hex Bolt");
}

#[test]
fn builtin_specs_keep_source_order() {
    let nut = Catalog::builtin().find("hex-nut").unwrap();
    let labels: Vec<&str> = nut.specs.labels().collect();
    assert_eq!(labels, vec!["Thread", "Height", "Standard", "Finish"]);
    assert_eq!(nut.specs.get("Thread"), Some("Metric M6–M30 or UNC 1/4\"–1-1/4\""));

    let washer = Catalog::builtin().find("flat-washer").unwrap();
    assert_eq!(washer.specs.labels().next(), Some("Standard"));
}

#[test]
fn builtin_images_follow_asset_layout() {
    for r in Catalog::builtin() {
        assert_eq!(r.image, format!("assets/fasteners/{}.svg", r.id));
    }
}

#[test]
fn rejects_empty_catalog() {
    assert!(matches!(Catalog::from_records(Vec::new()), Err(Error::EmptyCatalog)));
}

#[test]
fn rejects_duplicate_ids() {
    let err = Catalog::from_records(vec![rec("a"), rec("b"), rec("a")]).unwrap_err();
    match err {
        Error::DuplicateId(id) => assert_eq!(id, "a"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn find_misses_unknown_id() {
    let catalog = Catalog::from_records(vec![rec("a"), rec("b")]).unwrap();
    assert_eq!(catalog.find("b").map(|r| r.id.as_str()), Some("b"));
    assert!(catalog.find("c").is_none());
}

#[test]
fn json_catalog_keeps_spec_order_and_validates() {
    let text = r#"[
        {"id":"pin","name":"Dowel Pin","description":"Locating pin.",
         "applications":["Jigs"],"materials":["Steel"],
         "specs":{"Tolerance":"m6","Diameter":"2–20 mm","Standard":"ISO 8734"},
         "image":"assets/fasteners/pin.svg","script":"echo pin"}
    ]"#;
    let catalog = Catalog::from_json_str(text).unwrap();
    let pin = catalog.first();
    assert_eq!(pin.specs.labels().collect::<Vec<_>>(), vec!["Tolerance", "Diameter", "Standard"]);

    assert!(matches!(Catalog::from_json_str("[]"), Err(Error::EmptyCatalog)));
    assert!(matches!(Catalog::from_json_str("{"), Err(Error::Json(_))));
}

#[test]
fn builtin_survives_json_round_trip() {
    let json = serde_json::to_string(Catalog::builtin()).unwrap();
    let back = Catalog::from_json_str(&json).unwrap();
    assert_eq!(&back, Catalog::builtin());
}

#[test]
fn rejects_ids_that_are_not_a_single_path_segment() {
    for bad in ["", "../escaped", "nested/id", "back\\slash", "a..b"] {
        let err = Catalog::from_records(vec![rec("ok"), rec(bad)]).unwrap_err();
        match err {
            Error::InvalidId(id) => assert_eq!(id, bad),
            other => panic!("unexpected error for {bad:?}: {other}"),
        }
    }
    assert!(Catalog::from_records(vec![rec("hex-bolt"), rec("m6_nut.v2")]).is_ok());
}
