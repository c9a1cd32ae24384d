//! Buildings
//!
//! Stationary structures. None of them snap to the floor; the wide ones
//! flatten the terrain around their footprint instead.

use std::f32::consts::PI;

use crate::engine::{BuildingLevel, SlotKind};
use crate::math::{deg, rotate_point};
use crate::object::{ObjectType, ShadowCircle};
use crate::recipe::{Catalog, HeightRule, PartSpec, Recipe, ShowLimit};

pub fn register(catalog: &mut Catalog) {
    catalog.insert(ObjectType::Portico, portico());
    catalog.insert(ObjectType::Base, base());
    catalog.insert(ObjectType::Derrick, derrick());
    catalog.insert(ObjectType::Research, research());
    catalog.insert(ObjectType::Radar, radar());
    catalog.insert(ObjectType::Energy, energy());
    catalog.insert(ObjectType::Labo, labo());
    catalog.insert(ObjectType::Factory, factory());
    catalog.insert(ObjectType::Repair, repair());
    catalog.insert(ObjectType::Destroyer, destroyer());
    catalog.insert(ObjectType::Station, station());
    catalog.insert(ObjectType::Convert, convert());
    catalog.insert(ObjectType::Tower, tower());
    catalog.insert(ObjectType::Nuclear, nuclear());
    catalog.insert(ObjectType::Para, para());
    catalog.insert(ObjectType::Safe, safe());
    catalog.insert(ObjectType::Huston, huston());
    catalog.insert(ObjectType::Target1, target1());
    catalog.insert(ObjectType::Target2, target2());
    catalog.insert(ObjectType::Nest, nest());
    catalog.insert(ObjectType::Start, Recipe::single("start").level(BuildingLevel::STANDARD));
    catalog.insert(ObjectType::End, Recipe::single("end").level(BuildingLevel::STANDARD));
}

fn building(mesh: &str) -> Recipe {
    Recipe::single(mesh).kind(SlotKind::Fixed)
}

fn portico() -> Recipe {
    building("portico1")
        .part(PartSpec::child(1, 0, "portico2").at(0.0, 67.0, 0.0))
        .part(PartSpec::child(2, 1, "portico3").at(0.0, 0.0, -33.0).angles(0.0, deg(45.0), 0.0))
        .part(PartSpec::child(3, 2, "portico4").at(50.0, 0.0, 0.0).angles(0.0, deg(-60.0), 0.0))
        .part(PartSpec::child(4, 3, "portico5").at(35.0, 0.0, 0.0).angles(0.0, deg(-55.0), 0.0))
        .part(PartSpec::child(5, 1, "portico3").at(0.0, 0.0, 33.0).angles(0.0, deg(-45.0), 0.0))
        .part(PartSpec::child(6, 5, "portico4").at(50.0, 0.0, 0.0).angles(0.0, deg(60.0), 0.0))
        .part(PartSpec::child(7, 6, "portico5").at(35.0, 0.0, 0.0).angles(0.0, deg(55.0), 0.0))
        .part(PartSpec::child(8, 0, "portico6").at(-35.0, 50.0, -35.0).angles(0.0, -PI / 2.0, 0.0).zoom(2.0))
        .part(PartSpec::child(9, 8, "portico7").at(0.0, 4.5, 1.9))
        .part(PartSpec::child(10, 0, "portico6").at(-35.0, 50.0, 35.0).angles(0.0, -PI / 2.0, 0.0).zoom(2.0))
        .part(PartSpec::child(11, 10, "portico7").at(0.0, 4.5, 1.9))
        .crash(0.0, 28.0, 0.0, 45.5)
        .crash(27.0, 10.0, -42.0, 15.0)
        .crash(0.0, 10.0, -42.0, 15.0)
        .crash(-27.0, 10.0, -42.0, 15.0)
        .crash(27.0, 10.0, 42.0, 15.0)
        .crash(0.0, 10.0, 42.0, 15.0)
        .crash(-27.0, 10.0, 42.0, 15.0)
        .crash(-32.0, 45.0, -32.0, 10.0)
        .crash(-32.0, 45.0, 32.0, 10.0)
        .crash(32.0, 45.0, -32.0, 10.0)
        .crash(32.0, 45.0, 32.0, 10.0)
        .camera(0.0, 35.0, 0.0, 50.0)
        .shadow(ShadowCircle::new(50.0, 1.0))
}

fn base() -> Recipe {
    let mut recipe = building("base1");

    // Eight arms around the central pillar, each carrying two doors
    for i in 0..8 {
        let fi = i as f32;
        let p = rotate_point(-PI / 4.0 * fi, 27.8);
        recipe = recipe
            .part(PartSpec::child(1 + i, 0, "base2")
                .at(p.x, 30.0, p.y)
                .angles(0.0, PI / 4.0 * fi, PI / 2.0))
            .part(PartSpec::child(10 + i, 1 + i, "base4").at(23.5, 0.0, 7.0))
            .part(PartSpec::child(18 + i, 1 + i, "base4").at(23.5, 0.0, -7.0).mirrored());
    }

    recipe = recipe.part(PartSpec::child(9, 0, "base3"));

    for y in [33.0, 39.0, 45.0, 51.0, 57.0, 63.0, 69.0] {
        recipe = recipe.crash(0.0, y, 0.0, 2.5);
    }

    recipe
        .crash(0.0, 82.0, 0.0, 8.0)
        .crash(18.0, 94.0, 0.0, 10.0)
        .crash(-18.0, 94.0, 0.0, 10.0)
        .crash(0.0, 94.0, 18.0, 10.0)
        .crash(0.0, 94.0, -18.0, 10.0)
        .crash(13.0, 94.0, 13.0, 10.0)
        .crash(-13.0, 94.0, 13.0, 10.0)
        .crash(13.0, 94.0, -13.0, 10.0)
        .crash(-13.0, 94.0, -13.0, 10.0)
        .crash(0.0, 104.0, 0.0, 14.0)
        .camera(0.0, 45.0, 0.0, 10.0)
        .shadow(ShadowCircle::new(60.0, 1.0))
        .show_limit(ShowLimit::Base)
        .level(BuildingLevel::new(28.6, 73.4, 30.0, 0.4))
}

fn derrick() -> Recipe {
    building("derrick1")
        .part(PartSpec::child(1, 0, "derrick2"))
        .crash(0.0, 0.0, 0.0, 6.0)
        .crash(0.0, 10.0, 0.0, 5.0)
        .crash(0.0, 17.0, 0.0, 6.0)
        .crash(0.0, 26.0, 0.0, 3.0)
        .crash(7.0, 17.0, 0.0, 3.0)
        .camera(0.0, 10.0, 0.0, 10.0)
        .shadow(ShadowCircle::new(10.0, 0.4))
}

fn research() -> Recipe {
    building("search1")
        .part(PartSpec::child(1, 0, "search2").at(0.0, 13.0, 0.0))
        .part(PartSpec::child(2, 1, "search3").at(0.0, 4.0, 0.0).angles(0.0, 0.0, deg(35.0)))
        .crash(0.0, 0.0, 0.0, 9.0)
        .crash(0.0, 6.0, 0.0, 9.0)
        .crash(0.0, 14.0, 0.0, 7.0)
        .camera(0.0, 8.0, 0.0, 12.0)
        .power_at(7.5, 3.0, 0.0)
        .shadow(ShadowCircle::new(12.0, 1.0))
}

fn radar() -> Recipe {
    building("radar1")
        .part(PartSpec::child(1, 0, "radar2").at(0.0, 5.0, 0.0))
        .part(PartSpec::child(2, 0, "radar3").at(0.0, 11.0, 0.0).angles(0.0, -PI / 2.0, 0.0))
        .part(PartSpec::child(3, 2, "radar4").at(0.0, 4.5, 1.9))
        .crash(0.0, 3.0, 0.0, 6.0)
        .crash(0.0, 11.0, 0.0, 6.0)
        .camera(0.0, 7.0, 0.0, 7.0)
        .shadow(ShadowCircle::new(8.0, 1.0))
}

fn energy() -> Recipe {
    Recipe::default()
        .part(PartSpec::root("energy").copied())
        .crash(-2.0, 13.0, 0.0, 6.0)
        .crash(-7.0, 3.0, 0.0, 5.0)
        .crash(0.0, 1.0, 0.0, 1.5)
        .camera(-7.0, 5.0, 0.0, 5.0)
        .power_at(0.0, 3.0, 0.0)
        .stores_energy()
        .shadow(ShadowCircle::new(6.0, 0.5))
}

fn labo() -> Recipe {
    building("labo1")
        .part(PartSpec::child(1, 0, "labo2").at(-9.0, 3.0, 0.0).angles(0.0, 0.0, PI / 2.0))
        .part(PartSpec::child(2, 1, "labo3").at(9.0, -1.0, 0.0))
        .part(PartSpec::child(3, 2, "labo4").angles(0.0, 0.0, deg(80.0)))
        .part(PartSpec::child(4, 2, "labo4").angles(0.0, PI * 2.0 / 3.0, deg(80.0)))
        .part(PartSpec::child(5, 2, "labo4").angles(0.0, -PI * 2.0 / 3.0, deg(80.0)))
        .crash(0.0, 1.0, 0.0, 1.5)
        .crash(0.0, 11.0, 0.0, 4.0)
        .crash(-10.0, 10.0, 0.0, 4.0)
        .crash(-12.0, 3.0, 3.0, 4.0)
        .crash(-12.0, 3.0, -3.0, 4.0)
        .camera(-10.0, 5.0, 0.0, 7.0)
        .power_at(0.0, 3.0, 0.0)
        .shadow(ShadowCircle::new(7.0, 0.5))
}

fn factory() -> Recipe {
    let mut recipe = building("factory1");

    // Sliding doors on both sides
    for i in 0..9 {
        let y = 2.0 * i as f32;
        recipe = recipe
            .part(PartSpec::child(1 + i, 0, "factory2")
                .at(10.0, y, 10.0)
                .angles(0.0, 0.0, PI / 2.0)
                .zoom_xyz(1.0, 1.0, 0.30))
            .part(PartSpec::child(10 + i, 0, "factory2")
                .at(10.0, y, -10.0)
                .angles(0.0, PI, -PI / 2.0)
                .zoom_xyz(1.0, 1.0, 0.30));
    }

    for s in [-1.0, 1.0] {
        for y in [2.0, 9.0, 16.0] {
            for x in [-10.0, -3.0, 3.0, 10.0] {
                recipe = recipe.crash(x, y, 11.0 * s, 4.0);
            }
        }
        for x in [-10.0, -3.0, 3.0, 10.0] {
            recipe = recipe.crash(x, 16.0, 4.0 * s, 4.0);
        }
        recipe = recipe
            .crash(-10.0, 2.0, 4.0 * s, 4.0)
            .crash(-10.0, 9.0, 4.0 * s, 4.0);
    }

    recipe
        .crash(-10.0, 21.0, -4.0, 3.0)
        .camera(0.0, 10.0, 0.0, 18.0)
        .shadow(ShadowCircle::new(24.0, 0.3))
}

fn repair() -> Recipe {
    building("repair1")
        .part(PartSpec::child(1, 0, "repair2").at(-11.0, 13.5, 0.0).angles(0.0, 0.0, PI / 2.0))
        .level(BuildingLevel::STANDARD)
        .crash(-11.0, 0.0, 4.0, 5.0)
        .crash(-11.0, 0.0, 0.0, 5.0)
        .crash(-11.0, 0.0, -4.0, 5.0)
        .crash(-11.0, 10.0, 0.0, 5.0)
        .camera(-11.0, 13.0, 0.0, 15.0)
}

fn destroyer() -> Recipe {
    building("destroy1")
        .part(PartSpec::child(1, 0, "destroy2"))
        .level(BuildingLevel::STANDARD)
        .crash(-3.5, 0.0, -13.5, 4.0)
        .crash(3.5, 0.0, -13.5, 4.0)
        .crash(-3.5, 0.0, 13.5, 4.0)
        .crash(3.5, 0.0, 13.5, 4.0)
        .shadow(ShadowCircle::new(19.0, 1.0))
}

fn station() -> Recipe {
    Recipe::default()
        .part(PartSpec::root("station").copied())
        .level(BuildingLevel::STANDARD)
        .crash(-15.0, 2.0, 0.0, 5.0)
        .crash(-15.0, 6.0, 0.0, 4.0)
        .camera(-15.0, 5.0, 0.0, 6.0)
        .stores_energy()
}

fn convert() -> Recipe {
    building("convert1")
        .part(PartSpec::child(1, 0, "convert2").at(0.0, 14.0, 0.0))
        .part(PartSpec::child(2, 0, "convert3").at(0.0, 11.5, 0.0).angles(-PI * 0.35, 0.0, 0.0))
        .part(PartSpec::child(3, 0, "convert3").at(0.0, 11.5, 0.0).angles(-PI * 0.35, PI, 0.0))
        .level(BuildingLevel::STANDARD)
        .crash(-10.0, 2.0, 4.0, 5.0)
        .crash(-10.0, 2.0, -4.0, 5.0)
        .crash(-10.0, 9.0, 0.0, 6.0)
        .crash(0.0, 14.0, 0.0, 1.5)
        .camera(-3.0, 8.0, 0.0, 14.0)
}

fn tower() -> Recipe {
    building("tower")
        .part(PartSpec::child(1, 0, "roller2c").at(0.0, 20.0, 0.0).angles(0.0, 0.0, PI / 2.0))
        .part(PartSpec::child(2, 1, "roller3c").at(4.5, 0.0, 0.0))
        .crash(0.0, 0.0, 0.0, 6.5)
        .crash(0.0, 8.0, 0.0, 4.0)
        .crash(0.0, 15.0, 0.0, 5.0)
        .crash(0.0, 24.0, 0.0, 5.0)
        .camera(0.0, 5.0, 0.0, 7.0)
        .power_at(5.0, 3.0, 0.0)
        .shadow(ShadowCircle::new(6.0, 1.0))
        .show_limit(ShowLimit::LightningProtection)
}

fn nuclear() -> Recipe {
    building("nuclear1")
        .part(PartSpec::child(1, 0, "nuclear2").at(20.0, 10.0, 0.0).angles(0.0, 0.0, deg(135.0)))
        .crash(0.0, 0.0, 0.0, 19.0)
        .crash(0.0, 24.0, 0.0, 15.0)
        .crash(22.0, 1.0, 0.0, 1.5)
        .camera(0.0, 17.0, 0.0, 26.0)
        .power_at(22.0, 3.0, 0.0)
        .shadow(ShadowCircle::new(21.0, 1.0))
}

fn para() -> Recipe {
    building("para")
        .level(BuildingLevel::new(16.0, 18.0, 1.0, 0.5))
        .crash(13.0, 3.0, 13.0, 3.0)
        .crash(11.0, 15.0, 11.0, 2.0)
        .crash(-13.0, 3.0, 13.0, 3.0)
        .crash(-11.0, 15.0, -11.0, 2.0)
        .crash(13.0, 3.0, -13.0, 3.0)
        .crash(11.0, 15.0, -11.0, 2.0)
        .crash(-13.0, 3.0, -13.0, 3.0)
        .crash(-11.0, 15.0, -11.0, 2.0)
        .crash(0.0, 26.0, 0.0, 9.0)
        .crash(0.0, 54.0, 0.0, 14.0)
        .camera(0.0, 10.0, 0.0, 20.0)
        .shadow(ShadowCircle::new(21.0, 1.0))
        .show_limit(ShowLimit::LightningProtection)
}

fn safe() -> Recipe {
    building("safe1")
        .part(PartSpec::child(1, 0, "safe2").zoom(1.05))
        .part(PartSpec::child(2, 0, "safe3").zoom(1.05))
        .level(BuildingLevel::new(18.0, 20.0, 1.0, 0.5))
        .crash(0.0, 1.0, 0.0, 13.0)
        .camera(0.0, 1.0, 0.0, 13.0)
        .shadow(ShadowCircle::new(23.0, 1.0))
}

fn huston() -> Recipe {
    let mut recipe = building("huston1")
        .part(PartSpec::child(1, 0, "huston2").at(0.0, 39.0, 30.0).angles(0.0, -PI / 2.0, 0.0).zoom(3.0))
        .part(PartSpec::child(2, 1, "huston3").at(0.0, 4.5, 1.9));

    for z in [-53.0, -26.0, 0.0, 26.0, 53.0] {
        recipe = recipe.crash(15.0, 6.0, z, 16.0).crash(-15.0, 6.0, z, 16.0);
    }

    recipe
        .crash(0.0, 27.0, 30.0, 12.0)
        .crash(0.0, 45.0, 30.0, 14.0)
        .crash(26.0, 4.0, -61.0, 5.0)
        .crash(-26.0, 4.0, -61.0, 5.0)
        .crash(26.0, 4.0, 61.0, 5.0)
        .crash(-26.0, 4.0, 61.0, 5.0)
}

fn target1() -> Recipe {
    let mut recipe = Recipe::default().part(PartSpec::root("target1").zoom(1.5));

    // Ring of the target, 50 units up
    let ring = [
        (0.0, 14.0), (-7.0, 12.0), (7.0, 12.0), (-12.0, 7.0), (12.0, 7.0), (-14.0, 0.0),
        (14.0, 0.0), (-12.0, -7.0), (12.0, -7.0), (-7.0, -12.0), (7.0, -12.0), (0.0, -14.0),
    ];
    for (x, dy) in ring {
        recipe = recipe.crash(x, 50.0 + dy, 0.0, 3.0);
    }

    recipe
        .crash(0.0, 30.0, 0.0, 2.0)
        .crash(0.0, 24.0, 0.0, 3.0)
        .crash(0.0, 16.0, 0.0, 4.0)
        .crash(0.0, 4.0, 0.0, 8.0)
        .shadow(ShadowCircle::new(15.0, 1.0))
}

fn target2() -> Recipe {
    building("target2").height(HeightRule::Params { extra: 50.0 * 1.5 })
}

fn nest() -> Recipe {
    building("nest")
        .level(BuildingLevel::new(3.0, 5.0, 1.0, 0.5))
        .shadow(ShadowCircle::new(4.0, 1.0))
}
