//! Recipe catalog
//!
//! Registry of construction recipes keyed by object type. The built-in
//! tables are assembled once into `Catalog::standard()`; catalogs read from
//! disk are validated before use so a bad file cannot produce orphan parts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{tables, PartSpec, Recipe};
use crate::error::FactoryError;
use crate::math::Vec3;
use crate::object::ObjectType;

/// Limits applied to catalogs loaded from files
pub mod limits {
    /// Maximum parts in one recipe
    pub const MAX_PARTS: usize = 64;
    /// Maximum crash spheres in one recipe
    pub const MAX_SPHERES: usize = 64;
    /// Maximum mesh name length
    pub const MAX_MESH_NAME: usize = 64;
    /// Maximum sparkle particles per object
    pub const MAX_SPARKLES: u32 = 32;
    /// Maximum local coordinate or radius
    pub const MAX_COORD: f32 = 10_000.0;
}

lazy_static::lazy_static! {
    static ref STANDARD: Catalog = {
        let mut catalog = Catalog::new();
        tables::register_all(&mut catalog);
        catalog
    };
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    recipes: BTreeMap<ObjectType, Recipe>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in recipes.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    /// Add or replace the recipe of `object_type`.
    pub fn insert(&mut self, object_type: ObjectType, recipe: Recipe) {
        self.recipes.insert(object_type, recipe);
    }

    pub fn get(&self, object_type: ObjectType) -> Option<&Recipe> {
        self.recipes.get(&object_type)
    }

    pub fn contains(&self, object_type: ObjectType) -> bool {
        self.recipes.contains_key(&object_type)
    }

    /// Overlay `other` on top of this catalog, replacing shared types.
    pub fn merge(&mut self, other: Catalog) {
        self.recipes.extend(other.recipes);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectType, &Recipe)> {
        self.recipes.iter().map(|(t, r)| (*t, r))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Check every recipe's structure and numeric ranges.
    pub fn validate(&self) -> Result<(), FactoryError> {
        for (object_type, recipe) in &self.recipes {
            validate_recipe(recipe, &format!("{:?}", object_type)).map_err(FactoryError::Validation)?;
        }
        Ok(())
    }
}

fn is_valid_float(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

fn validate_vec(v: Vec3, context: &str) -> Result<(), String> {
    if !is_valid_float(v.x) || !is_valid_float(v.y) || !is_valid_float(v.z) {
        return Err(format!("{}: invalid vector ({}, {}, {})", context, v.x, v.y, v.z));
    }
    Ok(())
}

fn validate_radius(radius: f32, context: &str) -> Result<(), String> {
    if !is_valid_float(radius) || radius <= 0.0 {
        return Err(format!("{}: invalid radius {}", context, radius));
    }
    Ok(())
}

fn validate_part(part: &PartSpec, context: &str) -> Result<(), String> {
    if part.mesh.is_empty() {
        return Err(format!("{}: empty mesh name", context));
    }
    if part.mesh.len() > limits::MAX_MESH_NAME {
        return Err(format!("{}: mesh name too long ({} > {})",
            context, part.mesh.len(), limits::MAX_MESH_NAME));
    }
    validate_vec(part.position, &format!("{} position", context))?;
    validate_vec(part.angles, &format!("{} angles", context))?;
    validate_vec(part.scale, &format!("{} scale", context))?;
    Ok(())
}

/// Validate the part tree: the root comes first, ranks are unique and every
/// parent is declared before its children.
fn validate_tree(parts: &[PartSpec], context: &str) -> Result<(), String> {
    let Some(first) = parts.first() else {
        return Err(format!("{}: no parts", context));
    };
    if first.rank != 0 || first.parent.is_some() {
        return Err(format!("{}: first part must be the root (rank 0, no parent)", context));
    }

    let mut seen = Vec::with_capacity(parts.len());
    for part in parts {
        let part_context = format!("{} part[{}]", context, part.rank);
        if seen.contains(&part.rank) {
            return Err(format!("{}: duplicate rank", part_context));
        }
        match part.parent {
            None if part.rank != 0 => {
                return Err(format!("{}: only the root may have no parent", part_context));
            }
            Some(parent) if !seen.contains(&parent) => {
                return Err(format!("{}: parent {} is not declared before it", part_context, parent));
            }
            _ => {}
        }
        validate_part(part, &part_context)?;
        seen.push(part.rank);
    }
    Ok(())
}

fn validate_recipe(recipe: &Recipe, context: &str) -> Result<(), String> {
    if recipe.parts.len() > limits::MAX_PARTS {
        return Err(format!("{}: too many parts ({} > {})",
            context, recipe.parts.len(), limits::MAX_PARTS));
    }
    if recipe.crash_spheres.len() > limits::MAX_SPHERES {
        return Err(format!("{}: too many crash spheres ({} > {})",
            context, recipe.crash_spheres.len(), limits::MAX_SPHERES));
    }
    validate_tree(&recipe.parts, context)?;

    for (i, crash) in recipe.crash_spheres.iter().enumerate() {
        let sphere_context = format!("{} crash_spheres[{}]", context, i);
        validate_vec(crash.sphere.center, &sphere_context)?;
        validate_radius(crash.sphere.radius, &sphere_context)?;
        if !(0.0..=1.0).contains(&crash.hardness) {
            return Err(format!("{}: hardness {} out of 0..1", sphere_context, crash.hardness));
        }
    }
    for (name, sphere) in [("camera_sphere", &recipe.camera_sphere), ("jostling_sphere", &recipe.jostling_sphere)] {
        if let Some(sphere) = sphere {
            let sphere_context = format!("{} {}", context, name);
            validate_vec(sphere.center, &sphere_context)?;
            validate_radius(sphere.radius, &sphere_context)?;
        }
    }
    if let Some(shadow) = &recipe.shadow {
        validate_radius(shadow.radius, &format!("{} shadow", context))?;
    }
    if let Some(sparkle) = &recipe.sparkle {
        if sparkle.count > limits::MAX_SPARKLES {
            return Err(format!("{}: too many sparkles ({} > {})",
                context, sparkle.count, limits::MAX_SPARKLES));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Category;

    #[test]
    fn test_standard_covers_every_buildable_type() {
        let catalog = Catalog::standard();
        for &object_type in ObjectType::ALL {
            assert_eq!(
                catalog.contains(object_type),
                object_type.is_buildable(),
                "{:?}",
                object_type
            );
        }
    }

    #[test]
    fn test_standard_is_valid() {
        Catalog::standard().validate().unwrap();
    }

    #[test]
    fn test_rejects_forward_parent() {
        let mut catalog = Catalog::new();
        catalog.insert(
            ObjectType::Derrick,
            Recipe::single("derrick1")
                .part(PartSpec::child(1, 2, "derrick2"))
                .part(PartSpec::child(2, 0, "derrick3")),
        );
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("parent 2"), "{}", err);
    }

    #[test]
    fn test_rejects_missing_root() {
        let mut catalog = Catalog::new();
        catalog.insert(ObjectType::Stone, Recipe::default().part(PartSpec::child(1, 0, "stone")));
        assert!(matches!(catalog.validate(), Err(FactoryError::Validation(_))));

        let mut catalog = Catalog::new();
        catalog.insert(ObjectType::Stone, Recipe::default());
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let mut catalog = Catalog::new();
        catalog.insert(ObjectType::Stone, Recipe::single("stone").crash(0.0, f32::NAN, 0.0, 1.0));
        assert!(catalog.validate().is_err());

        let mut catalog = Catalog::new();
        catalog.insert(ObjectType::Stone, Recipe::single("stone").camera(0.0, 0.0, 0.0, -1.0));
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_merge_replaces_entries() {
        let mut catalog = Catalog::standard().clone();
        let count = catalog.len();

        let mut overlay = Catalog::new();
        overlay.insert(ObjectType::Stone, Recipe::single("bigstone").floor_adjusted());
        catalog.merge(overlay);

        assert_eq!(catalog.len(), count);
        assert_eq!(catalog.get(ObjectType::Stone).unwrap().parts[0].mesh, "bigstone");
    }

    #[test]
    fn test_animate_recipes_use_vehicle_slots() {
        for (object_type, recipe) in Catalog::standard().iter() {
            if object_type.category().is_some_and(Category::is_animate) {
                assert_eq!(recipe.root_kind, crate::engine::SlotKind::Vehicle, "{:?}", object_type);
            }
        }
    }
}
