//! Built-in demo material set.
//!
//! The demo host ships this catalog so the engine works without a bundle;
//! `load_material_bundle` replaces it at runtime.

use crate::domain::material::{
    Material, MaterialProps, CAT_BULK, CAT_GRANULAR, CAT_LIQUID, CAT_PIECE, CAT_POWDER,
};

pub(crate) fn builtin_materials() -> Vec<Material> {
    let mut id = 0u8;
    let mut next = || {
        let v = id;
        id += 1;
        v
    };

    vec![
        Material {
            id: next(),
            key: "base:sand".to_string(),
            name: "Sand".to_string(),
            props: MaterialProps {
                category: CAT_GRANULAR,
                color: 0xFFDEC183,
                density: 1.6,
                friction: 0.97,
                elasticity: 0.3,
                size: 2.5,
            },
            tags: vec!["mineral".to_string(), "abrasive".to_string()],
            confidence: 0.92,
            hidden: false,
        },
        Material {
            id: next(),
            key: "base:gravel".to_string(),
            name: "Gravel".to_string(),
            props: MaterialProps {
                category: CAT_BULK,
                color: 0xFF8E8E93,
                density: 1.8,
                friction: 0.95,
                elasticity: 0.45,
                size: 4.0,
            },
            tags: vec!["mineral".to_string(), "coarse".to_string()],
            confidence: 0.88,
            hidden: false,
        },
        Material {
            id: next(),
            key: "base:iron-ore".to_string(),
            name: "Iron Ore".to_string(),
            props: MaterialProps {
                category: CAT_BULK,
                color: 0xFF6B4A3A,
                density: 2.5,
                friction: 0.94,
                elasticity: 0.25,
                size: 4.5,
            },
            tags: vec!["mineral".to_string(), "heavy".to_string()],
            confidence: 0.85,
            hidden: false,
        },
        Material {
            id: next(),
            key: "base:coal".to_string(),
            name: "Coal".to_string(),
            props: MaterialProps {
                category: CAT_BULK,
                color: 0xFF2B2B2E,
                density: 0.9,
                friction: 0.96,
                elasticity: 0.2,
                size: 4.0,
            },
            tags: vec!["combustible".to_string()],
            confidence: 0.9,
            hidden: false,
        },
        Material {
            id: next(),
            key: "base:wheat".to_string(),
            name: "Wheat Grain".to_string(),
            props: MaterialProps {
                category: CAT_GRANULAR,
                color: 0xFFD9A441,
                density: 0.78,
                friction: 0.98,
                elasticity: 0.35,
                size: 2.0,
            },
            tags: vec!["organic".to_string(), "food".to_string()],
            confidence: 0.87,
            hidden: false,
        },
        Material {
            id: next(),
            key: "base:cement".to_string(),
            name: "Cement".to_string(),
            props: MaterialProps {
                category: CAT_POWDER,
                color: 0xFFB9B2A7,
                density: 1.2,
                friction: 0.985,
                elasticity: 0.1,
                size: 1.5,
            },
            tags: vec!["mineral".to_string(), "fine".to_string()],
            confidence: 0.8,
            hidden: false,
        },
        Material {
            id: next(),
            key: "base:bolts".to_string(),
            name: "Steel Bolts".to_string(),
            props: MaterialProps {
                category: CAT_PIECE,
                color: 0xFF9FA6AD,
                density: 7.85,
                friction: 0.93,
                elasticity: 0.15,
                size: 3.0,
            },
            tags: vec!["metal".to_string(), "fastener".to_string()],
            confidence: 0.8,
            hidden: false,
        },
        Material {
            id: next(),
            key: "base:water".to_string(),
            name: "Water".to_string(),
            props: MaterialProps {
                category: CAT_LIQUID,
                color: 0xFF3A7BD5,
                density: 1.0,
                friction: 0.995,
                elasticity: 0.05,
                size: 1.8,
            },
            tags: vec!["fluid".to_string()],
            confidence: 0.75,
            hidden: false,
        },
    ]
}
