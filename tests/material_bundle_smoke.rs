use matflow_engine::domain::catalog::MaterialCatalog;
use matflow_engine::domain::material::{batch_size, CAT_BULK, CAT_GRANULAR};

const BUNDLE_JSON: &str = r#"{
    "formatVersion": 1,
    "materials": [
        {"id": 0, "key": "pack:ore", "name": "Ore", "category": "bulk",
         "color": 4285355578, "density": 2.4, "friction": 0.94,
         "elasticity": 0.25, "size": 4.0, "tags": ["mineral"], "confidence": 0.85},
        {"id": 1, "key": "pack:grain", "name": "Grain", "category": "granular",
         "color": 4292256833, "density": 0.8, "friction": 0.98,
         "elasticity": 0.35, "size": 2.0, "tags": ["organic", "food"]},
        {"id": 2, "key": "pack:crate", "name": "Crate", "category": "piece",
         "color": 4287723114, "density": 0.6, "friction": 0.9,
         "elasticity": 0.2, "size": 6.0}
    ],
    "materialKeyToId": {"pack:ore": 0, "pack:grain": 1, "pack:crate": 2}
}"#;

#[test]
fn material_bundle_smoke_parses_and_has_core_invariants() {
    let catalog = MaterialCatalog::from_bundle_json(BUNDLE_JSON).expect("bundle should parse");

    assert_eq!(catalog.material_count(), 3);
    assert!(catalog.is_valid_material_id(0));
    assert!(!catalog.is_valid_material_id(3));

    // Basic key lookup should work for the pack.
    assert_eq!(catalog.id_by_key("pack:ore"), Some(0));
    assert_eq!(catalog.id_by_key("pack:grain"), Some(1));
    assert_eq!(catalog.id_by_key("missing:key"), None);

    let ore = catalog.props(0).expect("ore props");
    assert_eq!(ore.category, CAT_BULK);
    assert_eq!(catalog.batch_size_for(0), Some(batch_size(CAT_BULK)));

    let grain = catalog.props(1).expect("grain props");
    assert_eq!(grain.category, CAT_GRANULAR);
    assert_eq!(catalog.batch_size_for(1), Some(300));

    // Piece goods fall under the default batch size.
    assert_eq!(catalog.batch_size_for(2), Some(100));

    // Defaulted fields: confidence and tags are optional in the bundle.
    let crate_mat = catalog.material(2).expect("crate record");
    assert_eq!(crate_mat.confidence, 1.0);
    assert!(crate_mat.tags.is_empty());
}

#[test]
fn manifest_round_trips_the_bundle() {
    let catalog = MaterialCatalog::from_bundle_json(BUNDLE_JSON).expect("bundle should parse");
    let manifest: serde_json::Value =
        serde_json::from_str(&catalog.manifest_json()).expect("manifest should be valid JSON");

    assert_eq!(manifest["formatVersion"], 1);
    let materials = manifest["materials"].as_array().expect("materials array");
    assert_eq!(materials.len(), 3);
    assert_eq!(materials[0]["key"], "pack:ore");
    assert_eq!(materials[0]["category"], "bulk");
    assert_eq!(materials[2]["category"], "piece");
}

#[test]
fn malformed_bundles_are_rejected() {
    assert!(MaterialCatalog::from_bundle_json("not json").is_err());
    assert!(MaterialCatalog::from_bundle_json(r#"{"materials": []}"#).is_err());
}
