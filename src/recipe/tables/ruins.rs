//! Ruins and lunar gadgets
//!
//! Wrecks settle into the ground after placement: each carries a tilt that
//! lowers or raises the root and rolls it a little. The Apollo gadgets are
//! left exactly where they are put.

use std::f32::consts::PI;

use crate::engine::{BuildingLevel, SlotKind};
use crate::math::{deg, Vec3};
use crate::object::{CrashSphere, ObjectType, ShadowCircle, Sound};
use crate::recipe::{Catalog, HeightRule, Joint, PartSpec, Recipe};

pub fn register(catalog: &mut Catalog) {
    register_ruins(catalog);
    register_apollo(catalog);
}

fn ruin(mesh: &str) -> Recipe {
    Recipe::single(mesh).kind(SlotKind::Fixed)
}

fn wreck_wheel(rank: usize) -> PartSpec {
    PartSpec::child(rank, 0, "ruin1w")
}

fn register_ruins(catalog: &mut Catalog) {
    use ObjectType::*;

    catalog.insert(
        RuinMobileW1,
        ruin("ruin1")
            .part(wreck_wheel(6).at(-3.0, 1.8, -4.0).angles(-PI / 2.0, 0.0, 0.0))
            .part(wreck_wheel(7).at(-3.0, 1.0, 3.0).angles(-0.3, PI - 0.3, 0.0))
            .part(wreck_wheel(8).at(2.0, 1.6, -3.0).angles(0.0, 0.3, 0.0))
            .part(wreck_wheel(9).at(2.0, 1.0, 3.0).angles(0.2, PI - 0.2, 0.0))
            .crash(0.0, 2.8, 0.0, 3.0)
            .shadow(ShadowCircle::new(4.0, 1.0))
            .floor_adjusted()
            .tilt(-0.5, -0.1, 0.0),
    );

    // Two wheels were lost
    catalog.insert(
        RuinMobileW2,
        ruin("ruin1")
            .part(wreck_wheel(7).at(-3.0, 1.0, 3.0).angles(0.4, PI + 0.3, 0.0))
            .part(wreck_wheel(9).at(2.0, 1.0, 3.0).angles(-0.3, PI + 0.3, 0.0))
            .crash(0.0, 2.8, 0.0, 3.0)
            .shadow(ShadowCircle::new(4.0, 1.0))
            .floor_adjusted()
            .tilt(-1.5, -0.9, -0.1),
    );

    catalog.insert(
        RuinMobileT1,
        ruin("ruin2")
            .part(
                PartSpec::child(1, 0, "ruin2c")
                    .at(3.0, 5.0, -2.5)
                    .angles(-PI * 0.85, -0.4, -0.1),
            )
            .crash(1.0, 2.8, -1.0, 5.0)
            .shadow(ShadowCircle::new(5.0, 1.0))
            .floor_adjusted()
            .tilt(-0.9, -0.3, 0.0),
    );

    catalog.insert(
        RuinMobileT2,
        ruin("ruin2")
            .crash(0.0, 2.8, 0.0, 5.0)
            .shadow(ShadowCircle::new(5.0, 1.0))
            .floor_adjusted()
            .tilt(-1.5, -0.3, 0.8),
    );

    // Flipped on its back
    catalog.insert(
        RuinMobileR1,
        ruin("ruin3")
            .crash(1.0, 2.8, -1.0, 5.0)
            .camera(1.0, 5.0, -1.0, 10.0)
            .shadow(ShadowCircle::new(5.0, 1.0))
            .floor_adjusted()
            .tilt(4.0, -PI * 0.6, -0.2),
    );

    catalog.insert(
        RuinMobileR2,
        ruin("ruin3")
            .crash(0.0, 1.0, 0.0, 5.0)
            .camera(0.0, 5.0, 0.0, 10.0)
            .shadow(ShadowCircle::new(6.0, 1.0))
            .floor_adjusted()
            .tilt(2.0, -0.1, -0.3),
    );

    let factory = [
        (9.0, 1.0, -11.0, 5.0),
        (0.0, 2.0, -11.0, 4.0),
        (-10.0, 4.0, -10.0, 5.0),
        (-12.0, 11.0, -4.0, 3.0),
        (-10.0, 4.0, -2.0, 3.0),
        (-11.0, 8.0, 3.0, 3.0),
        (-11.0, 2.0, 4.0, 3.0),
        (-11.0, 2.0, 10.0, 3.0),
        (-4.0, 0.0, 10.0, 3.0),
    ];
    catalog.insert(
        RuinFactory,
        with_metal(ruin("ruin4"), &factory)
            .camera(0.0, 0.0, 0.0, 18.0)
            .shadow(ShadowCircle::new(20.0, 0.7)),
    );

    catalog.insert(
        RuinDoor,
        ruin("ruin5")
            .crash(0.0, 0.0, 0.0, 5.0)
            .shadow(ShadowCircle::new(6.0, 1.0))
            .floor_adjusted()
            .tilt(-0.5, 0.0, -0.1),
    );

    catalog.insert(
        RuinSupport,
        ruin("ruin6")
            .crash(0.0, 0.0, 0.0, 3.0)
            .shadow(ShadowCircle::new(3.0, 1.0))
            .floor_adjusted()
            .tilt(0.5, 0.1, 0.1),
    );

    catalog.insert(
        RuinRadar,
        ruin("ruin7")
            .crash(0.0, 0.0, 0.0, 5.0)
            .shadow(ShadowCircle::new(6.0, 1.0))
            .floor_adjusted()
            .tilt(-0.5, 0.15, 0.1),
    );

    catalog.insert(
        RuinConvert,
        ruin("ruin8")
            .level(BuildingLevel::STANDARD)
            .crash(-10.0, 0.0, 4.0, 5.0)
            .crash(-10.0, 0.0, -4.0, 5.0)
            .tilt(-1.0, 0.0, 0.0),
    );

    let base = [
        (0.0, 15.0, 0.0, 28.0),
        (17.0, 6.0, 42.0, 6.0),
        (17.0, 17.0, 42.0, 4.0),
        (-17.0, 6.0, 42.0, 6.0),
        (-17.0, 17.0, 42.0, 4.0),
        (-42.0, 6.0, 17.0, 6.0),
        (-42.0, 17.0, 17.0, 4.0),
        (-42.0, 6.0, -17.0, 6.0),
        (-42.0, 17.0, -17.0, 4.0),
        (-17.0, 6.0, -42.0, 6.0),
        (-17.0, 10.0, -42.0, 4.0),
        (15.0, 13.0, -34.0, 3.0),
        (31.0, 15.0, -13.0, 3.0),
        (21.0, 8.0, -39.0, 5.0),
        (26.0, 8.0, -33.0, 5.0),
    ];
    catalog.insert(
        RuinBase,
        with_metal(ruin("ruin9"), &base)
            .camera(0.0, 0.0, 0.0, 48.0)
            .shadow(ShadowCircle::new(40.0, 1.0))
            .tilt(-1.0, 0.15, 0.0),
    );

    // The spaceship head lies half buried with its fins sticking out
    let mut head = with_metal(
        ruin("ruin10"),
        &[
            (0.0, 13.0, 0.0, 20.0),
            (0.0, -8.0, 0.0, 5.0),
            (0.0, -16.0, 0.0, 3.0),
            (0.0, -22.0, 0.0, 3.0),
        ],
    );
    for (sx, sz) in [(1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)] {
        head = head
            .crash(21.0 * sx, 7.0, 9.0 * sz, 8.0)
            .crash(9.0 * sx, 7.0, 21.0 * sz, 8.0);
    }
    catalog.insert(
        RuinHead,
        head.camera(0.0, 0.0, 0.0, 35.0)
            .shadow(ShadowCircle::new(30.0, 1.0))
            .floor_adjusted()
            .tilt(8.0, PI * 0.4, 0.0),
    );
}

fn with_metal(recipe: Recipe, spheres: &[(f32, f32, f32, f32)]) -> Recipe {
    spheres
        .iter()
        .fold(recipe, |recipe, &(x, y, z, r)| recipe.crash(x, y, z, r))
}

fn register_apollo(catalog: &mut Catalog) {
    use ObjectType::*;

    // Lunar module: descent stage with four legs and a ladder
    let mut module = Recipe::single("apollol1").height(HeightRule::None);
    module.parts[0] = PartSpec::root("apollol1").zoom(1.2);
    for i in 0..4 {
        module = module.part(PartSpec::child(1 + i, 0, "apollol2").angles(0.0, PI / 2.0 * i as f32, 0.0));
    }
    catalog.insert(
        Apollo1,
        with_metal(
            module.part(PartSpec::child(5, 0, "apollol3")),
            &[
                (0.0, 4.0, 0.0, 9.0),
                (11.0, 5.0, 0.0, 3.0),
                (-11.0, 5.0, 0.0, 3.0),
                (0.0, 5.0, -11.0, 3.0),
                (0.0, 5.0, 11.0, 3.0),
            ],
        )
        .camera(0.0, 4.0, 0.0, 9.0)
        .shadow(ShadowCircle::new(16.0, 0.5)),
    );

    let mut jeep = Recipe::single("apolloj1").kind(SlotKind::Vehicle).height(HeightRule::None);
    for (i, (sx, sz)) in [(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)].into_iter().enumerate() {
        jeep = jeep.part(
            PartSpec::child(1 + i, 0, "apolloj4")
                .at(5.75 * sx, 1.65, 5.0 * sz)
                .joint(Joint::Wheel),
        );
    }
    catalog.insert(
        Apollo2,
        jeep.part(
            PartSpec::child(5, 0, "apolloj2")
                .at(5.5, 8.8, 2.0)
                .angles(0.0, deg(-120.0), deg(45.0)),
        )
        .part(PartSpec::child(6, 0, "apolloj3").at(5.5, 2.8, -2.0).angles(0.0, deg(30.0), 0.0))
        .crash(3.0, 2.0, 0.0, 5.0)
        .crash(-3.0, 2.0, 0.0, 5.0)
        .sphere(CrashSphere::new(Vec3::new(7.0, 9.0, 2.0), 2.0, Sound::BoumM, 0.20))
        .shadow(ShadowCircle::new(7.0, 0.8))
        .floor_adjusted(),
    );

    // Flag planted next to the module
    catalog.insert(
        Apollo3,
        Recipe::single("apollof")
            .height(HeightRule::None)
            .jostle(0.0, 4.0, 0.0, 1.0)
            .shadow(ShadowCircle::new(2.0, 0.3)),
    );

    catalog.insert(
        Apollo4,
        Recipe::single("apollom")
            .height(HeightRule::None)
            .crash(0.0, 2.0, 0.0, 2.0)
            .shadow(ShadowCircle::new(5.0, 0.8))
            .floor_adjusted(),
    );

    catalog.insert(
        Apollo5,
        Recipe::single("apolloa")
            .height(HeightRule::None)
            .part(PartSpec::child(1, 0, "apolloj2").at(0.0, 5.0, 0.0).angles(0.0, deg(-120.0), deg(45.0)))
            .sphere(CrashSphere::new(Vec3::new(0.0, 4.0, 0.0), 3.0, Sound::BoumM, 0.35))
            .shadow(ShadowCircle::new(3.0, 0.7)),
    );
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
    fn test_wreck_wheels_leave_gaps() {
        let catalog = table();
        let w1 = catalog.get(ObjectType::RuinMobileW1).unwrap();
        let ranks: Vec<usize> = w1.parts.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![0, 6, 7, 8, 9]);

        let w2 = catalog.get(ObjectType::RuinMobileW2).unwrap();
        let ranks: Vec<usize> = w2.parts.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![0, 7, 9]);
    }

    #[test]
    fn test_large_ruins_stay_unsnapped() {
        let catalog = table();
        for t in [ObjectType::RuinFactory, ObjectType::RuinConvert, ObjectType::RuinBase] {
            assert!(!catalog.get(t).unwrap().floor_adjust, "{:?}", t);
        }
        assert!(catalog.get(ObjectType::RuinHead).unwrap().floor_adjust);
        assert!(catalog.get(ObjectType::RuinFactory).unwrap().tilt.is_none());
    }

    #[test]
    fn test_head_spheres() {
        let catalog = table();
        let head = catalog.get(ObjectType::RuinHead).unwrap();
        assert_eq!(head.crash_spheres.len(), 12);
        let fins = head.crash_spheres.iter().filter(|s| s.sphere.radius == 8.0).count();
        assert_eq!(fins, 8);
        assert_eq!(head.vertical_offset(0.0), 8.0);
    }

    #[test]
    fn test_apollo_ignores_height() {
        let catalog = table();
        for t in [
            ObjectType::Apollo1,
            ObjectType::Apollo2,
            ObjectType::Apollo3,
            ObjectType::Apollo4,
            ObjectType::Apollo5,
        ] {
            assert_eq!(catalog.get(t).unwrap().height.offset(12.0), 0.0, "{:?}", t);
        }
    }

    #[test]
    fn test_jeep_has_four_wheels() {
        let catalog = table();
        let jeep = catalog.get(ObjectType::Apollo2).unwrap();
        let wheels = jeep.parts.iter().filter(|p| p.joint == Joint::Wheel).count();
        assert_eq!(wheels, 4);
        assert_eq!(jeep.crash_spheres[2].hardness, 0.20);
    }
}
