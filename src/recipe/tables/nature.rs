//! Flags, barriers and vegetation
//!
//! Flags and barriers snap to the floor. Plants, mushrooms, crystals, roots
//! and the home are placed at the requested position and only raised by the
//! requested height.

use crate::engine::SlotKind;
use crate::math::{deg, Vec3};
use crate::object::{CrashSphere, ObjectType, ShadowCircle, Sound};
use crate::recipe::{Catalog, HeightRule, PartSpec, Recipe};

pub fn register(catalog: &mut Catalog) {
    register_flags(catalog);
    register_barriers(catalog);
    register_plants(catalog);
    register_mushrooms(catalog);
    register_quartz(catalog);
    register_roots(catalog);

    catalog.insert(
        ObjectType::Home1,
        Recipe::default()
            .part(PartSpec::root("home1").zoom(1.3))
            .sphere(wood(0.0, 5.0, 0.0, 10.0, 0.25))
            .shadow(ShadowCircle::new(16.0, 0.5)),
    );
}

fn soft(x: f32, y: f32, z: f32, radius: f32) -> CrashSphere {
    CrashSphere::new(Vec3::new(x, y, z), radius, Sound::Boum, 0.10)
}

fn wood(x: f32, y: f32, z: f32, radius: f32, hardness: f32) -> CrashSphere {
    CrashSphere::new(Vec3::new(x, y, z), radius, Sound::BoumS, hardness)
}

fn vegetal(x: f32, y: f32, z: f32, radius: f32) -> CrashSphere {
    CrashSphere::new(Vec3::new(x, y, z), radius, Sound::BoumV, 0.15)
}

fn with_spheres(mut recipe: Recipe, spheres: &[CrashSphere]) -> Recipe {
    recipe.crash_spheres.extend_from_slice(spheres);
    recipe
}

// =============================================================================
// Flags
// =============================================================================

fn register_flags(catalog: &mut Catalog) {
    let colors = [
        (ObjectType::FlagB, 'b'),
        (ObjectType::FlagR, 'r'),
        (ObjectType::FlagG, 'g'),
        (ObjectType::FlagY, 'y'),
        (ObjectType::FlagV, 'v'),
    ];
    for (object_type, color) in colors {
        catalog.insert(object_type, flag(color));
    }
}

/// Pole plus a cloth of four segments, each hanging off the previous one.
fn flag(color: char) -> Recipe {
    let cloth = format!("flag2{}", color);
    let mut recipe = Recipe::single(&format!("flag1{}", color)).kind(SlotKind::Fixed);
    for i in 0..4 {
        let segment = PartSpec::child(1 + i, i, &cloth);
        let segment = if i == 0 { segment.at(0.15, 5.0, 0.0) } else { segment.at(0.79, 0.0, 0.0) };
        recipe = recipe.part(segment);
    }
    recipe
        .jostle(0.0, 4.0, 0.0, 1.0)
        .shadow(ShadowCircle::new(2.0, 0.3))
        .floor_adjusted()
        .height(HeightRule::None)
}

// =============================================================================
// Barriers
// =============================================================================

fn register_barriers(catalog: &mut Catalog) {
    let long = [8.5, 3.5, 0.0, -3.5, -8.5];

    let mut barrier0 = barrier("barrier0", ShadowCircle::worm(6.0, 0.5));
    for x in [3.5, 0.0, -3.5] {
        barrier0 = barrier0.crash(x, 3.0, 0.0, 0.7);
    }
    catalog.insert(ObjectType::Barrier0, barrier0);

    let shaped = [
        (ObjectType::Barrier1, "barrier1", ShadowCircle::worm(12.0, 0.5)),
        (ObjectType::Barrier2, "barrier2", ShadowCircle::worm(12.0, 0.8)),
        (ObjectType::Barrier3, "barrier3", ShadowCircle::worm(10.0, 0.5)),
    ];
    for (object_type, mesh, shadow) in shaped {
        let mut recipe = barrier(mesh, shadow);
        for x in long {
            recipe = recipe.crash(x, 3.0, 0.0, 0.7);
        }
        catalog.insert(object_type, recipe);
    }
}

fn barrier(mesh: &str, shadow: ShadowCircle) -> Recipe {
    Recipe::single(mesh).shadow(shadow).floor_adjusted()
}

// =============================================================================
// Plants
// =============================================================================

fn register_plants(catalog: &mut Catalog) {
    use ObjectType::*;

    // Standard plants are sunk a little into the ground
    for (t, mesh) in [(Plant0, "plant0"), (Plant1, "plant1"), (Plant2, "plant2"), (Plant3, "plant3"), (Plant4, "plant4")] {
        let recipe = Recipe::single(mesh)
            .height(HeightRule::Params { extra: -2.0 })
            .sphere(soft(0.0, 0.0, 0.0, 4.0))
            .camera(0.0, 3.0, 0.0, 6.0)
            .jostle(0.0, 0.0, 0.0, 8.0)
            .shadow(ShadowCircle::new(8.0, 0.5));
        catalog.insert(t, recipe);
    }

    // Clover
    for (t, mesh) in [(Plant5, "plant5"), (Plant6, "plant6"), (Plant7, "plant7")] {
        let recipe = Recipe::single(mesh)
            .jostle(0.0, 0.0, 0.0, 4.0)
            .shadow(ShadowCircle::new(5.0, 0.3));
        catalog.insert(t, recipe);
    }

    // Squash
    for (t, mesh) in [(Plant8, "plant8"), (Plant9, "plant9")] {
        let recipe = Recipe::single(mesh)
            .sphere(soft(0.0, 2.0, 0.0, 4.0))
            .sphere(soft(0.0, 10.0, 0.0, 4.0))
            .shadow(ShadowCircle::new(10.0, 0.5));
        catalog.insert(t, recipe);
    }

    // Succulents
    for (t, mesh) in [(Plant10, "plant10"), (Plant11, "plant11"), (Plant12, "plant12"), (Plant13, "plant13"), (Plant14, "plant14")] {
        let recipe = Recipe::single(mesh)
            .sphere(soft(0.0, 12.0, 0.0, 5.0))
            .camera(0.0, 6.0, 0.0, 6.0)
            .jostle(0.0, 4.0, 0.0, 8.0)
            .shadow(ShadowCircle::new(8.0, 0.3));
        catalog.insert(t, recipe);
    }

    // Ferns; the tallest one can be walked through
    for (t, mesh) in [(Plant15, "plant15"), (Plant16, "plant16"), (Plant17, "plant17"), (Plant18, "plant18"), (Plant19, "plant19")] {
        let mut recipe = Recipe::single(mesh);
        if t != Plant19 {
            recipe = recipe.sphere(soft(0.0, 0.0, 0.0, 4.0)).camera(0.0, 3.0, 0.0, 6.0);
        }
        let recipe = recipe.jostle(0.0, 0.0, 0.0, 8.0).shadow(ShadowCircle::new(8.0, 0.5));
        catalog.insert(t, recipe);
    }

    let tree = |mesh: &str, spheres: &[CrashSphere], shadow: f32| {
        with_spheres(Recipe::single(mesh), spheres).shadow(ShadowCircle::new(shadow, 0.5))
    };

    catalog.insert(Tree1, tree("tree1", &[
        wood(0.0, 3.0, 2.0, 3.0, 0.20),
        wood(-2.0, 11.0, 1.0, 2.0, 0.20),
        wood(-2.0, 19.0, 2.0, 2.0, 0.20),
        wood(2.0, 26.0, 0.0, 2.0, 0.20),
        wood(2.0, 34.0, -2.0, 2.0, 0.20),
    ], 8.0));
    catalog.insert(Tree2, tree("tree2", &[
        wood(0.0, 3.0, 1.0, 3.0, 0.20),
        wood(-2.0, 10.0, 1.0, 2.0, 0.20),
        wood(-2.0, 19.0, 2.0, 2.0, 0.20),
        wood(2.0, 25.0, 0.0, 2.0, 0.20),
        wood(3.0, 32.0, -2.0, 2.0, 0.20),
    ], 8.0));
    catalog.insert(Tree3, tree("tree3", &[
        wood(-2.0, 3.0, 2.0, 3.0, 0.20),
        wood(-3.0, 9.0, 1.0, 2.0, 0.20),
        wood(0.0, 18.0, 0.0, 2.0, 0.20),
        wood(0.0, 27.0, 7.0, 2.0, 0.20),
    ], 8.0));
    catalog.insert(Tree4, tree("tree4", &[
        wood(0.0, 10.0, 0.0, 10.0, 0.20),
        wood(0.0, 21.0, 0.0, 8.0, 0.20),
        wood(0.0, 32.0, 0.0, 7.0, 0.20),
    ], 8.0));
    catalog.insert(Tree5, tree("tree5", &[
        wood(0.0, 5.0, -10.0, 25.0, 0.20),
        wood(-65.0, 5.0, 65.0, 20.0, 0.20),
        wood(38.0, 5.0, 21.0, 18.0, 0.20),
    ], 50.0));
}

// =============================================================================
// Mushrooms & crystals
// =============================================================================

fn register_mushrooms(catalog: &mut Catalog) {
    catalog.insert(
        ObjectType::Mushroom1,
        Recipe::single("mush1")
            .sphere(soft(0.0, 4.0, 0.0, 3.0))
            .camera(0.0, 3.0, 0.0, 5.5)
            .jostle(0.0, 3.0, 0.0, 5.5)
            .shadow(ShadowCircle::new(6.0, 0.5)),
    );
    catalog.insert(
        ObjectType::Mushroom2,
        Recipe::single("mush2")
            .sphere(soft(0.0, 5.0, 0.0, 3.0))
            .camera(0.0, 4.0, 0.0, 5.5)
            .jostle(0.0, 4.0, 0.0, 5.5)
            .shadow(ShadowCircle::new(5.0, 0.5)),
    );
}

fn register_quartz(catalog: &mut Catalog) {
    // (type, mesh, sphere height, sphere radius, shadow, sparkle height, sparkle radius)
    let crystals = [
        (ObjectType::Quartz0, "quartz0", 2.0, 3.5, 4.0, 4.0, 2.0),
        (ObjectType::Quartz1, "quartz1", 4.0, 5.0, 5.0, 6.0, 4.0),
        (ObjectType::Quartz2, "quartz2", 6.0, 6.0, 6.0, 10.0, 5.0),
        (ObjectType::Quartz3, "quartz3", 10.0, 10.0, 10.0, 16.0, 8.0),
    ];
    for (object_type, mesh, y, radius, shadow, sparkle_y, sparkle_radius) in crystals {
        let recipe = Recipe::single(mesh)
            .kind(SlotKind::Quartz)
            .crash(0.0, y, 0.0, radius)
            .camera(0.0, y, 0.0, radius)
            .shadow(ShadowCircle::new(shadow, 0.5))
            .sparkle(sparkle_y, sparkle_radius, 2);
        catalog.insert(object_type, recipe);
    }
}

// =============================================================================
// Roots
// =============================================================================

fn register_roots(catalog: &mut Catalog) {
    let root = |mesh: &str, spheres: &[CrashSphere], shadow: f32| {
        with_spheres(Recipe::default().part(PartSpec::root(mesh).zoom(2.0)), spheres)
            .shadow(ShadowCircle::new(shadow, 0.5))
    };

    let big = [
        vegetal(-7.0, 2.0, 3.0, 4.0),
        vegetal(5.0, 2.0, -6.0, 4.0),
        vegetal(6.0, 2.0, 6.0, 3.0),
        vegetal(-11.0, 1.0, -2.0, 2.0),
        vegetal(1.0, 1.0, -7.0, 2.0),
        vegetal(-4.0, 10.0, 3.0, 2.0),
        vegetal(1.0, 11.0, 7.0, 2.0),
        vegetal(3.0, 11.0, -3.0, 2.0),
        vegetal(-3.0, 17.0, 1.0, 2.0),
        vegetal(-3.0, 23.0, -1.0, 2.0),
    ];

    catalog.insert(ObjectType::Root0, root("root0", &[
        vegetal(-5.0, 1.0, 0.0, 2.0),
        vegetal(4.0, 1.0, 2.0, 2.0),
        vegetal(4.0, 1.0, -3.0, 2.0),
        vegetal(2.0, 5.0, -1.0, 1.5),
        vegetal(-4.0, 5.0, -1.0, 1.0),
        vegetal(-2.0, 8.0, -0.5, 1.0),
        vegetal(0.0, 10.0, -0.5, 1.0),
    ], 16.0));
    catalog.insert(ObjectType::Root1, root("root1", &[
        vegetal(-4.0, 1.0, 1.0, 2.0),
        vegetal(0.0, 1.0, 2.0, 1.5),
        vegetal(3.0, 1.0, -2.0, 2.0),
        vegetal(-2.0, 5.0, 1.0, 1.0),
        vegetal(2.0, 5.0, 0.0, 1.0),
        vegetal(0.0, 8.0, 1.0, 1.0),
        vegetal(0.0, 12.0, 1.0, 1.0),
    ], 16.0));
    catalog.insert(ObjectType::Root2, root("root2", &[
        vegetal(-3.0, 1.0, 0.5, 2.0),
        vegetal(3.0, 1.0, -1.0, 2.0),
        vegetal(-1.0, 4.5, 0.0, 1.0),
        vegetal(3.0, 7.0, 1.0, 1.0),
        vegetal(0.0, 7.0, -1.0, 1.0),
        vegetal(4.0, 11.0, 1.0, 1.0),
    ], 16.0));
    catalog.insert(ObjectType::Root3, root("root3", &[
        vegetal(-4.0, 1.0, 1.0, 3.0),
        vegetal(4.0, 1.0, -3.0, 3.0),
        vegetal(6.0, 1.0, 4.0, 3.0),
        vegetal(-2.5, 7.0, 2.0, 2.0),
        vegetal(4.0, 7.0, 2.0, 2.0),
        vegetal(3.0, 6.0, -1.0, 1.0),
        vegetal(0.0, 12.0, 0.0, 2.0),
        vegetal(1.0, 16.0, 0.0, 1.0),
    ], 22.0));
    catalog.insert(ObjectType::Root4, root("root4", &big, 30.0));

    // The gravity root reuses the big trunk and adds its floating bulb
    let root5 = root("root4", &big, 30.0).part(
        PartSpec::child(1, 0, "root5")
            .at(-5.0, 28.0, -4.0)
            .angles(deg(-30.0), 0.0, deg(20.0)),
    );
    catalog.insert(ObjectType::Root5, root5);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Catalog {
        let mut catalog = Catalog::new();
        register(&mut catalog);
        catalog
    }

    #[test]
    fn test_flag_cloth_is_a_chain() {
        let catalog = table();
        let flag = catalog.get(ObjectType::FlagY).unwrap();
        assert_eq!(flag.parts.len(), 5);
        for (i, part) in flag.parts.iter().enumerate().skip(1) {
            assert_eq!(part.parent, Some(i - 1));
            assert_eq!(part.mesh, "flag2y");
        }
        assert!(flag.floor_adjust);
        assert_eq!(flag.height, HeightRule::None);
    }

    #[test]
    fn test_barriers_use_worm_shadow() {
        let catalog = table();
        for t in [ObjectType::Barrier0, ObjectType::Barrier1, ObjectType::Barrier2, ObjectType::Barrier3] {
            let recipe = catalog.get(t).unwrap();
            assert_eq!(recipe.shadow.unwrap().kind, crate::object::ShadowKind::Worm);
            assert!(recipe.floor_adjust);
        }
        assert_eq!(catalog.get(ObjectType::Barrier0).unwrap().crash_spheres.len(), 3);
        assert_eq!(catalog.get(ObjectType::Barrier2).unwrap().crash_spheres.len(), 5);
    }

    #[test]
    fn test_tall_fern_has_no_collision() {
        let catalog = table();
        let fern = catalog.get(ObjectType::Plant19).unwrap();
        assert!(fern.crash_spheres.is_empty());
        assert!(fern.camera_sphere.is_none());
        assert!(fern.jostling_sphere.is_some());

        let other = catalog.get(ObjectType::Plant18).unwrap();
        assert_eq!(other.crash_spheres.len(), 1);
    }

    #[test]
    fn test_quartz_sparkles() {
        let catalog = table();
        let quartz = catalog.get(ObjectType::Quartz2).unwrap();
        assert_eq!(quartz.root_kind, SlotKind::Quartz);
        let sparkle = quartz.sparkle.unwrap();
        assert_eq!(sparkle.height, 10.0);
        assert_eq!(sparkle.radius, 5.0);
        assert_eq!(sparkle.count, 2);
        assert_eq!(quartz.shadow.unwrap().radius, 6.0);
    }

    #[test]
    fn test_root5_has_bulb() {
        let catalog = table();
        let root = catalog.get(ObjectType::Root5).unwrap();
        assert_eq!(root.parts.len(), 2);
        assert_eq!(root.parts[0].mesh, "root4");
        assert_eq!(root.parts[1].mesh, "root5");
        assert_eq!(root.crash_spheres.len(), 10);
        assert!(root.crash_spheres.iter().all(|s| s.sound == Sound::BoumV));
    }

    #[test]
    fn test_vegetation_is_not_snapped() {
        let catalog = table();
        for t in [ObjectType::Plant3, ObjectType::Tree4, ObjectType::Mushroom2, ObjectType::Quartz0, ObjectType::Root1, ObjectType::Home1] {
            assert!(!catalog.get(t).unwrap().floor_adjust, "{:?}", t);
        }
    }
}
