use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::builtin::builtin_materials;
use crate::domain::material::{
    batch_size, category_from_str, category_name, Material, MaterialId, MaterialProps,
};

/// Runtime material catalog.
///
/// Materials are static, read-only inputs to particle creation; the catalog
/// is replaced wholesale when the host loads a new bundle.
#[derive(Clone, Debug)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
    key_to_id: HashMap<String, MaterialId>,
}

impl MaterialCatalog {
    pub fn from_bundle_json(json: &str) -> Result<Self, String> {
        let bundle: BundleRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_bundle(bundle)
    }

    /// The hard-coded demo set
    pub fn from_builtin() -> Self {
        let materials = builtin_materials();
        let key_to_id = materials
            .iter()
            .map(|m| (m.key.clone(), m.id))
            .collect();
        Self {
            materials,
            key_to_id,
        }
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn is_valid_material_id(&self, id: MaterialId) -> bool {
        (id as usize) < self.materials.len()
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id as usize)
    }

    pub fn props(&self, id: MaterialId) -> Option<&MaterialProps> {
        self.materials.get(id as usize).map(|m| &m.props)
    }

    pub fn id_by_key(&self, key: &str) -> Option<MaterialId> {
        self.key_to_id.get(key).copied()
    }

    /// Particle count when a simulation starts on this material
    pub fn batch_size_for(&self, id: MaterialId) -> Option<u32> {
        self.props(id).map(|p| batch_size(p.category))
    }

    pub fn manifest_json(&self) -> String {
        let entries: Vec<ManifestMaterial<'_>> = self
            .materials
            .iter()
            .map(|m| ManifestMaterial {
                id: m.id,
                key: &m.key,
                name: &m.name,
                category: category_name(m.props.category),
                color: m.props.color,
                density: m.props.density,
                friction: m.props.friction,
                elasticity: m.props.elasticity,
                size: m.props.size,
                tags: &m.tags,
                confidence: m.confidence,
                hidden: m.hidden,
            })
            .collect();

        let out = MaterialManifest {
            format_version: 1,
            materials: entries,
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    /// Deterministic per-particle color jitter.
    ///
    /// Input is ARGB; output is canvas byte order (RGBA little-endian), so
    /// the render buffer can be blitted into ImageData without per-pixel
    /// conversion on the JS side.
    pub fn color_with_variation(&self, id: MaterialId, seed: u8) -> Option<u32> {
        let base = self.props(id)?.color;
        let i = (seed & 31) as i32;
        let variation = (i - 16) * 2;

        let a = (base >> 24) & 0xFF;
        let r = (((base >> 16) & 0xFF) as i32 + variation).clamp(0, 255) as u32;
        let g = (((base >> 8) & 0xFF) as i32 + variation).clamp(0, 255) as u32;
        let b = ((base & 0xFF) as i32 + variation).clamp(0, 255) as u32;

        Some((a << 24) | (b << 16) | (g << 8) | r)
    }

    fn from_bundle(bundle: BundleRoot) -> Result<Self, String> {
        let mut max_id: u16 = 0;
        for m in bundle.materials.iter() {
            if m.id > max_id {
                max_id = m.id;
            }
        }

        if max_id > (u8::MAX as u16) {
            return Err(format!("too many materials for u8 ids: max_id={}", max_id));
        }
        if bundle.materials.is_empty() {
            return Err("bundle contains no materials".to_string());
        }

        let len = (max_id as usize) + 1;
        let mut by_id: Vec<Option<Material>> = vec![None; len];
        let mut key_to_id = HashMap::new();

        for m in bundle.materials.into_iter() {
            let id = m.id as MaterialId;
            let idx = id as usize;

            if by_id[idx].is_some() {
                return Err(format!("duplicate material id: {}", idx));
            }

            let category = category_from_str(&m.category)?;

            if !(m.density > 0.0) {
                return Err(format!(
                    "material {} ({}) has non-positive density",
                    id, &m.key
                ));
            }
            if !(m.size > 0.0) {
                return Err(format!("material {} ({}) has non-positive size", id, &m.key));
            }

            let props = MaterialProps {
                category,
                color: m.color,
                density: m.density as f32,
                friction: (m.friction as f32).clamp(0.0, 1.0),
                elasticity: (m.elasticity as f32).clamp(0.0, 1.0),
                size: m.size as f32,
            };

            key_to_id.insert(m.key.clone(), id);

            by_id[idx] = Some(Material {
                id,
                key: m.key,
                name: m.name.unwrap_or_default(),
                props,
                tags: m.tags,
                confidence: (m.confidence as f32).clamp(0.0, 1.0),
                hidden: m.hidden,
            });
        }

        for (k, v) in bundle.material_key_to_id.into_iter() {
            if v > (u8::MAX as u16) {
                return Err(format!("materialKeyToId contains unsupported id: {}", v));
            }
            let id8 = v as MaterialId;
            match key_to_id.get(&k) {
                Some(existing) if *existing == id8 => {}
                Some(existing) => {
                    return Err(format!(
                        "materialKeyToId mismatch for key {}: map={} materials={}",
                        k, id8, existing
                    ));
                }
                None => {
                    key_to_id.insert(k, id8);
                }
            }
        }

        let mut materials = Vec::with_capacity(by_id.len());
        for (idx, slot) in by_id.into_iter().enumerate() {
            let m = slot.ok_or_else(|| format!("missing material id {}", idx))?;
            materials.push(m);
        }

        Ok(Self {
            materials,
            key_to_id,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MaterialManifest<'a> {
    format_version: u32,
    materials: Vec<ManifestMaterial<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestMaterial<'a> {
    id: MaterialId,
    key: &'a str,
    name: &'a str,
    category: &'static str,
    color: u32,
    density: f32,
    friction: f32,
    elasticity: f32,
    size: f32,
    tags: &'a [String],
    confidence: f32,
    hidden: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    materials: Vec<BundleMaterial>,
    #[serde(default)]
    material_key_to_id: HashMap<String, u16>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleMaterial {
    id: u16,
    key: String,
    #[serde(default)]
    name: Option<String>,
    category: String,
    color: u32,
    density: f64,
    friction: f64,
    elasticity: f64,
    size: f64,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default = "default_confidence")]
    confidence: f64,
    #[serde(default)]
    hidden: bool,
}

fn default_confidence() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::material::{CAT_BULK, CAT_GRANULAR};

    #[test]
    fn builtin_catalog_is_consistent() {
        let catalog = MaterialCatalog::from_builtin();
        assert!(catalog.material_count() > 0);

        for id in 0..catalog.material_count() as MaterialId {
            let m = catalog.material(id).unwrap();
            assert_eq!(m.id, id);
            assert_eq!(catalog.id_by_key(&m.key), Some(id));
            assert!(m.props.friction > 0.0 && m.props.friction <= 1.0);
        }
    }

    #[test]
    fn batch_sizes_by_category() {
        let catalog = MaterialCatalog::from_builtin();
        let gravel = catalog.id_by_key("base:gravel").unwrap();
        let sand = catalog.id_by_key("base:sand").unwrap();
        let bolts = catalog.id_by_key("base:bolts").unwrap();

        assert_eq!(catalog.props(gravel).unwrap().category, CAT_BULK);
        assert_eq!(catalog.batch_size_for(gravel), Some(500));
        assert_eq!(catalog.props(sand).unwrap().category, CAT_GRANULAR);
        assert_eq!(catalog.batch_size_for(sand), Some(300));
        assert_eq!(catalog.batch_size_for(bolts), Some(100));
    }

    #[test]
    fn bundle_rejects_duplicate_ids() {
        let json = r#"{
            "materials": [
                {"id": 0, "key": "a", "category": "bulk", "color": 0,
                 "density": 1.0, "friction": 0.9, "elasticity": 0.5, "size": 2.0},
                {"id": 0, "key": "b", "category": "bulk", "color": 0,
                 "density": 1.0, "friction": 0.9, "elasticity": 0.5, "size": 2.0}
            ]
        }"#;
        let err = MaterialCatalog::from_bundle_json(json).unwrap_err();
        assert!(err.contains("duplicate material id"), "got: {}", err);
    }

    #[test]
    fn bundle_rejects_sparse_ids() {
        let json = r#"{
            "materials": [
                {"id": 1, "key": "a", "category": "bulk", "color": 0,
                 "density": 1.0, "friction": 0.9, "elasticity": 0.5, "size": 2.0}
            ]
        }"#;
        let err = MaterialCatalog::from_bundle_json(json).unwrap_err();
        assert!(err.contains("missing material id 0"), "got: {}", err);
    }

    #[test]
    fn bundle_rejects_unknown_category() {
        let json = r#"{
            "materials": [
                {"id": 0, "key": "a", "category": "gasiform", "color": 0,
                 "density": 1.0, "friction": 0.9, "elasticity": 0.5, "size": 2.0}
            ]
        }"#;
        let err = MaterialCatalog::from_bundle_json(json).unwrap_err();
        assert!(err.contains("unknown category"), "got: {}", err);
    }

    #[test]
    fn bundle_rejects_key_map_mismatch() {
        let json = r#"{
            "materials": [
                {"id": 0, "key": "a", "category": "bulk", "color": 0,
                 "density": 1.0, "friction": 0.9, "elasticity": 0.5, "size": 2.0}
            ],
            "materialKeyToId": {"a": 7}
        }"#;
        let err = MaterialCatalog::from_bundle_json(json).unwrap_err();
        assert!(err.contains("mismatch"), "got: {}", err);
    }

    #[test]
    fn color_variation_stays_in_range_and_is_deterministic() {
        let catalog = MaterialCatalog::from_builtin();
        let a = catalog.color_with_variation(0, 7).unwrap();
        let b = catalog.color_with_variation(0, 7).unwrap();
        assert_eq!(a, b);
        // Alpha channel is preserved
        assert_eq!(a >> 24, catalog.props(0).unwrap().color >> 24);
    }

    #[test]
    fn manifest_includes_every_material() {
        let catalog = MaterialCatalog::from_builtin();
        let manifest = catalog.manifest_json();
        let parsed: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        assert_eq!(parsed["formatVersion"], 1);
        assert_eq!(
            parsed["materials"].as_array().unwrap().len(),
            catalog.material_count()
        );
        assert_eq!(parsed["materials"][0]["key"], "base:sand");
        assert_eq!(parsed["materials"][1]["category"], "bulk");
    }
}
