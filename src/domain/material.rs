//! Material definitions: ids, categories, physical properties.

/// Material id. Bundle loading rejects catalogs that overflow u8.
pub type MaterialId = u8;

/// Category id, indexes into the category table below.
pub type CategoryId = u8;

pub const CAT_BULK: CategoryId = 0;
pub const CAT_GRANULAR: CategoryId = 1;
pub const CAT_POWDER: CategoryId = 2;
pub const CAT_PIECE: CategoryId = 3;
pub const CAT_LIQUID: CategoryId = 4;

/// Physical properties driving particle behavior.
///
/// `color` is ARGB (0xAARRGGBB); render buffers convert to canvas byte
/// order via `MaterialCatalog::color_with_variation`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialProps {
    pub category: CategoryId,
    pub color: u32,
    pub density: f32,
    pub friction: f32,
    pub elasticity: f32,
    /// Base particle radius in canvas pixels
    pub size: f32,
}

/// A full material record as supplied by the bundle or the built-in set.
#[derive(Clone, Debug)]
pub struct Material {
    pub id: MaterialId,
    pub key: String,
    pub name: String,
    pub props: MaterialProps,
    pub tags: Vec<String>,
    /// Scan confidence reported for this material by the demo host
    pub confidence: f32,
    pub hidden: bool,
}

/// Particle batch size when a simulation starts on a material of the
/// given category.
#[inline]
pub fn batch_size(category: CategoryId) -> u32 {
    match category {
        CAT_BULK => 500,
        CAT_GRANULAR => 300,
        _ => 100,
    }
}

pub fn category_from_str(s: &str) -> Result<CategoryId, String> {
    match s {
        "bulk" => Ok(CAT_BULK),
        "granular" => Ok(CAT_GRANULAR),
        "powder" => Ok(CAT_POWDER),
        "piece" => Ok(CAT_PIECE),
        "liquid" => Ok(CAT_LIQUID),
        _ => Err(format!("unknown category: {}", s)),
    }
}

pub fn category_name(category: CategoryId) -> &'static str {
    match category {
        CAT_BULK => "bulk",
        CAT_GRANULAR => "granular",
        CAT_POWDER => "powder",
        CAT_PIECE => "piece",
        CAT_LIQUID => "liquid",
        _ => "unknown",
    }
}

#[inline]
pub fn is_bulk(props: &MaterialProps) -> bool {
    props.category == CAT_BULK
}

#[inline]
pub fn is_granular(props: &MaterialProps) -> bool {
    props.category == CAT_GRANULAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_size_follows_category_scoping_rule() {
        assert_eq!(batch_size(CAT_BULK), 500);
        assert_eq!(batch_size(CAT_GRANULAR), 300);
        assert_eq!(batch_size(CAT_POWDER), 100);
        assert_eq!(batch_size(CAT_PIECE), 100);
        assert_eq!(batch_size(CAT_LIQUID), 100);
    }

    #[test]
    fn category_predicates_match_props() {
        let props = MaterialProps {
            category: CAT_BULK,
            color: 0xFF000000,
            density: 1.0,
            friction: 0.9,
            elasticity: 0.5,
            size: 2.0,
        };
        assert!(is_bulk(&props));
        assert!(!is_granular(&props));
    }

    #[test]
    fn category_round_trips_through_names() {
        for s in ["bulk", "granular", "powder", "piece", "liquid"] {
            let id = category_from_str(s).unwrap();
            assert_eq!(category_name(id), s);
        }
        assert!(category_from_str("gasiform").is_err());
    }
}
