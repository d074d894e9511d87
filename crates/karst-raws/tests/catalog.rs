use karst_raws::materials::MaterialCatalog;
use karst_raws::buildings::BuildingCatalog;
use karst_raws::plants::PlantCatalog;
use karst_raws::types::{MaterialId, VegLifecycle};

const MATERIALS: &str = r#"
[materials.granite]
name = "Granite"
floor = 4
floor_constructed = 5
wall = 10
wall_constructed = 11

[materials.soil]
floor = 16
wall = 17
"#;

#[test]
fn material_ids_assigned_by_sorted_key() {
    let cat = MaterialCatalog::from_toml_str(MATERIALS).expect("parse");
    assert_eq!(cat.len(), 2);
    // "granite" < "soil" lexicographically
    assert_eq!(cat.get_id("granite"), Some(MaterialId(0)));
    assert_eq!(cat.get_id("soil"), Some(MaterialId(1)));
    let granite = cat.get(MaterialId(0)).unwrap();
    assert_eq!(granite.name, "Granite");
    assert_eq!(granite.floor_texture, 4);
    assert_eq!(granite.constructed_floor_texture, 5);
    assert_eq!(granite.wall_texture, 10);
    assert_eq!(granite.constructed_wall_texture, 11);
}

#[test]
fn constructed_textures_default_to_natural() {
    let cat = MaterialCatalog::from_toml_str(MATERIALS).expect("parse");
    let soil = cat.get(cat.get_id("soil").unwrap()).unwrap();
    // No explicit name: falls back to the key.
    assert_eq!(soil.name, "soil");
    assert_eq!(soil.constructed_floor_texture, soil.floor_texture);
    assert_eq!(soil.constructed_wall_texture, soil.wall_texture);
}

#[test]
fn unknown_material_lookups_return_none() {
    let cat = MaterialCatalog::from_toml_str(MATERIALS).expect("parse");
    assert!(cat.get_id("obsidian").is_none());
    assert!(cat.get(MaterialId(99)).is_none());
}

#[test]
fn building_provides_parse_in_order() {
    let cat = BuildingCatalog::from_toml_str(
        r#"
[buildings.ornate_door]
name = "Ornate Door"
model = 128

[[buildings.ornate_door.provides]]
ability = "door"

[[buildings.ornate_door.provides]]
ability = "door"
alternate_model = 130
"#,
    )
    .expect("parse");
    let def = cat.get("ornate_door").expect("def");
    assert_eq!(def.model, 128);
    assert_eq!(def.provides.len(), 2);
    assert_eq!(def.provides[0].alternate_model, 0);
    assert_eq!(def.provides[1].alternate_model, 130);
    assert!(cat.get("missing").is_none());
}

#[test]
fn plant_stage_labels_fill_missing_slots() {
    let cat = PlantCatalog::from_toml_str(
        r#"
[plants.wheat]
name = "Wheat"
stages = ["seed", "shoots"]
harvest = "wheat_sheaf"
"#,
    )
    .expect("parse");
    let wheat = cat.get(cat.get_id("wheat").unwrap()).unwrap();
    assert_eq!(wheat.stage_label(VegLifecycle::Germinating), "seed");
    assert_eq!(wheat.stage_label(VegLifecycle::Sprouting), "shoots");
    // Unspecified stages keep the generic labels.
    assert_eq!(wheat.stage_label(VegLifecycle::Growing), "growing");
    assert_eq!(wheat.stage_label(VegLifecycle::Flowering), "flowering");
    assert_eq!(wheat.harvest.as_deref(), Some("wheat_sheaf"));
}

#[test]
fn lifecycle_index_roundtrip() {
    for stage in [
        VegLifecycle::Germinating,
        VegLifecycle::Sprouting,
        VegLifecycle::Growing,
        VegLifecycle::Flowering,
    ] {
        assert_eq!(VegLifecycle::from_index(stage.index()), stage);
    }
    assert_eq!(VegLifecycle::from_index(17), VegLifecycle::Growing);
}
