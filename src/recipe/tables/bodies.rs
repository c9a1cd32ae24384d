//! Bodies of animate objects, plus the exchange post and static decor
//!
//! Robot names encode their chassis and tool: `MobileWa` is a wheeled
//! grabber, `MobileIc` a legged shooter. A body is the chassis parts
//! followed by the tool parts, so one chassis table serves every tool.

use crate::engine::SlotKind;
use crate::math::{rotate_point, Vec3};
use crate::object::{CrashSphere, ObjectType, ShadowCircle, Sound};
use crate::recipe::{Catalog, HeightRule, Joint, PartSpec, Recipe, ShowLimit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chassis {
    Flying,
    Tracked,
    Wheeled,
    Legged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tool {
    Grabber,
    Cannon,
    OrgaCannon,
    Sniffer,
    /// Practice robot, no tool at all
    None,
}

pub fn register(catalog: &mut Catalog) {
    register_robots(catalog);
    register_special_robots(catalog);
    register_characters(catalog);
    register_insects(catalog);

    // Exchange post: a mast with three antenna rings
    let mut info = Recipe::single("info1")
        .part(PartSpec::child(1, 0, "info2").at(0.0, 5.0, 0.0))
        .crash(0.0, 3.0, 0.0, 6.0)
        .camera(0.0, 5.0, 0.0, 6.0)
        .shadow(ShadowCircle::new(8.0, 0.5))
        .floor_adjusted();
    for i in 0..3 {
        let p = rotate_point(i as f32 * std::f32::consts::PI * 2.0 / 3.0, 1.8);
        info = info.part(PartSpec::child(2 + i, 1, "info3").at(p.x, 1.5, p.y));
    }
    catalog.insert(ObjectType::Info, info);

    // Tree0 goes through the static path, only the root mesh is used
    catalog.insert(ObjectType::Tree0, Recipe::single("tree0").floor_adjusted());
}

fn register_robots(catalog: &mut Catalog) {
    use ObjectType::*;

    let robots = [
        (MobileFa, Chassis::Flying, Tool::Grabber),
        (MobileTa, Chassis::Tracked, Tool::Grabber),
        (MobileWa, Chassis::Wheeled, Tool::Grabber),
        (MobileIa, Chassis::Legged, Tool::Grabber),
        (MobileFc, Chassis::Flying, Tool::Cannon),
        (MobileTc, Chassis::Tracked, Tool::Cannon),
        (MobileWc, Chassis::Wheeled, Tool::Cannon),
        (MobileIc, Chassis::Legged, Tool::Cannon),
        (MobileFi, Chassis::Flying, Tool::OrgaCannon),
        (MobileTi, Chassis::Tracked, Tool::OrgaCannon),
        (MobileWi, Chassis::Wheeled, Tool::OrgaCannon),
        (MobileIi, Chassis::Legged, Tool::OrgaCannon),
        (MobileFs, Chassis::Flying, Tool::Sniffer),
        (MobileTs, Chassis::Tracked, Tool::Sniffer),
        (MobileWs, Chassis::Wheeled, Tool::Sniffer),
        (MobileIs, Chassis::Legged, Tool::Sniffer),
        (MobileFt, Chassis::Flying, Tool::None),
        (MobileTt, Chassis::Tracked, Tool::None),
        (MobileWt, Chassis::Wheeled, Tool::None),
        (MobileIt, Chassis::Legged, Tool::None),
    ];

    for (object_type, chassis, tool) in robots {
        catalog.insert(object_type, robot(chassis, tool));
    }
}

/// Standard robot body with its power cell socket at the back.
fn robot(chassis: Chassis, tool: Tool) -> Recipe {
    let (body, next) = chassis_parts(chassis);
    let mut recipe = Recipe::default()
        .kind(SlotKind::Vehicle)
        .height(HeightRule::None)
        .floor_adjusted()
        .power_at(-5.0, 3.0, 0.0)
        .crash(0.0, 2.5, 0.0, 4.0)
        .shadow(ShadowCircle::new(4.0, 1.0));
    for part in body.into_iter().chain(tool_parts(tool, next)) {
        recipe = recipe.part(part);
    }
    if chassis == Chassis::Flying {
        recipe.shadow = Some(ShadowCircle::new(4.0, 0.6));
    }
    recipe
}

/// Chassis parts and the first free rank after them.
fn chassis_parts(chassis: Chassis) -> (Vec<PartSpec>, usize) {
    let mut parts = Vec::new();
    match chassis {
        Chassis::Wheeled => {
            parts.push(PartSpec::root("car"));
            let wheels = [(-3.0, -3.0), (-3.0, 3.0), (3.0, -3.0), (3.0, 3.0)];
            for (i, (x, z)) in wheels.into_iter().enumerate() {
                let wheel = PartSpec::child(1 + i, 0, "wheel").at(x, 1.0, z).joint(Joint::Wheel);
                parts.push(if z > 0.0 { wheel.mirrored() } else { wheel });
            }
        }
        Chassis::Tracked => {
            parts.push(PartSpec::root("car"));
            parts.push(PartSpec::child(1, 0, "track").at(0.0, 1.0, -3.0).joint(Joint::Wheel));
            parts.push(
                PartSpec::child(2, 0, "track")
                    .at(0.0, 1.0, 3.0)
                    .mirrored()
                    .joint(Joint::Wheel),
            );
        }
        Chassis::Flying => {
            parts.push(PartSpec::root("flyer"));
            for (i, z) in [-3.0, 3.0].into_iter().enumerate() {
                parts.push(PartSpec::child(1 + i, 0, "jet").at(0.0, 2.0, z));
            }
        }
        Chassis::Legged => {
            parts.push(PartSpec::root("car"));
            for i in 0..6 {
                let x = -3.0 + (i / 2) as f32 * 3.0;
                let z = if i % 2 == 0 { -2.5 } else { 2.5 };
                let leg = PartSpec::child(1 + i, 0, "leg").at(x, 1.5, z).joint(Joint::Leg);
                parts.push(if z > 0.0 { leg.mirrored() } else { leg });
            }
        }
    }
    let next = parts.len();
    (parts, next)
}

fn tool_parts(tool: Tool, first: usize) -> Vec<PartSpec> {
    match tool {
        Tool::Grabber => vec![
            PartSpec::child(first, 0, "arm1").at(4.0, 3.5, 0.0),
            PartSpec::child(first + 1, first, "arm2").at(2.5, 0.0, 0.0),
            PartSpec::child(first + 2, first + 1, "arm3").at(3.0, 0.0, 0.0),
        ],
        Tool::Cannon => vec![PartSpec::child(first, 0, "canon").at(0.0, 5.3, 0.0)],
        Tool::OrgaCannon => vec![PartSpec::child(first, 0, "canoni").at(0.0, 5.3, 0.0)],
        Tool::Sniffer => vec![
            PartSpec::child(first, 0, "sensor").at(3.0, 3.0, 0.0),
            PartSpec::child(first + 1, first, "drill").at(1.0, -1.0, 0.0),
        ],
        Tool::None => Vec::new(),
    }
}

fn register_special_robots(catalog: &mut Catalog) {
    use ObjectType::*;

    let tracked = |mesh: &str| {
        let (mut parts, next) = chassis_parts(Chassis::Tracked);
        parts.push(PartSpec::child(next, 0, mesh).at(0.0, 4.0, 0.0));
        parts
    };
    let with_parts = |recipe: Recipe, parts: Vec<PartSpec>| {
        parts.into_iter().fold(recipe, |recipe, part| recipe.part(part))
    };
    let base = || {
        Recipe::default()
            .kind(SlotKind::Vehicle)
            .height(HeightRule::None)
            .floor_adjusted()
            .power_at(-5.0, 3.0, 0.0)
            .crash(0.0, 2.5, 0.0, 4.5)
            .shadow(ShadowCircle::new(5.0, 1.0))
    };

    catalog.insert(
        MobileRt,
        with_parts(base(), tracked("thumper")).show_limit(ShowLimit::Thumper),
    );
    catalog.insert(MobileRc, with_parts(base(), tracked("phazer")));
    catalog.insert(MobileRr, with_parts(base(), tracked("recycler")));
    catalog.insert(MobileRs, with_parts(base(), tracked("shield")));
    catalog.insert(
        MobileDr,
        with_parts(base(), tracked("drawer")).part(PartSpec::child(4, 3, "pencil").at(1.0, -2.0, 0.0)),
    );

    catalog.insert(
        MobileSa,
        Recipe::single("subm")
            .kind(SlotKind::Vehicle)
            .height(HeightRule::None)
            .floor_adjusted()
            .power_at(-5.0, 3.0, 0.0)
            .part(PartSpec::child(1, 0, "subm2").at(2.0, 2.5, -1.5))
            .part(PartSpec::child(2, 0, "subm2").at(2.0, 2.5, 1.5).mirrored())
            .part(PartSpec::child(3, 0, "subm3").at(5.0, 1.0, 0.0))
            .crash(0.0, 2.0, 0.0, 4.5)
            .shadow(ShadowCircle::new(5.0, 1.0)),
    );

    // Flying target, hovers a fixed distance above the ground
    catalog.insert(
        MobileTg,
        Recipe::single("target")
            .kind(SlotKind::Vehicle)
            .height(HeightRule::None)
            .floor_adjusted()
            .sphere(CrashSphere::new(Vec3::new(0.0, 3.0, 0.0), 2.0, Sound::BoumM, 0.20))
            .shadow(ShadowCircle::new(2.0, 0.5)),
    );

    // Invisible scripted controller: a root slot with nothing else
    catalog.insert(
        Controller,
        Recipe::single("controller")
            .kind(SlotKind::Vehicle)
            .height(HeightRule::None),
    );
}

fn register_characters(catalog: &mut Catalog) {
    use ObjectType::*;

    for (object_type, mesh) in [(Human, "human"), (Tech, "tech")] {
        let recipe = Recipe::single(mesh)
            .kind(SlotKind::Vehicle)
            .height(HeightRule::None)
            .floor_adjusted()
            .part(PartSpec::child(1, 0, "head").at(0.0, 2.7, 0.0))
            .part(PartSpec::child(2, 0, "arm").at(0.0, 2.3, -0.7))
            .part(PartSpec::child(3, 0, "arm").at(0.0, 2.3, 0.7).mirrored())
            .part(PartSpec::child(4, 0, "thigh").at(0.0, 1.2, -0.3).joint(Joint::Leg))
            .part(
                PartSpec::child(5, 0, "thigh")
                    .at(0.0, 1.2, 0.3)
                    .mirrored()
                    .joint(Joint::Leg),
            )
            .sphere(CrashSphere::new(Vec3::new(0.0, 0.5, 0.0), 0.65, Sound::Boum, 0.20))
            .camera(0.0, 1.0, 0.0, 1.0)
            .shadow(ShadowCircle::new(1.0, 1.0));
        catalog.insert(object_type, recipe);
    }

    catalog.insert(
        Toto,
        Recipe::single("toto1")
            .kind(SlotKind::Vehicle)
            .height(HeightRule::None)
            .part(PartSpec::child(1, 0, "toto2").at(1.0, 0.0, 0.0))
            .part(PartSpec::child(2, 1, "toto3").at(0.0, 1.0, -0.5).joint(Joint::Wing))
            .part(PartSpec::child(3, 1, "toto3").at(0.0, 1.0, 0.5).mirrored().joint(Joint::Wing))
            .shadow(ShadowCircle::new(1.5, 0.5)),
    );
}

fn register_insects(catalog: &mut Catalog) {
    use ObjectType::*;

    catalog.insert(
        Mother,
        insect("mother1", "mother2", 6, 2.5, 3.0)
            .crash(-2.0, 6.0, 0.0, 8.0)
            .crash(6.0, 5.0, 0.0, 4.0)
            .shadow(ShadowCircle::new(18.0, 0.8)),
    );
    catalog.insert(
        Ant,
        insect("ant1", "ant2", 6, 1.0, 1.2)
            .sphere(CrashSphere::new(Vec3::new(0.0, 2.0, 0.0), 2.0, Sound::Boum, 0.20))
            .shadow(ShadowCircle::new(4.0, 0.5)),
    );
    catalog.insert(
        Spider,
        insect("spider1", "spider2", 8, 1.0, 1.5)
            .sphere(CrashSphere::new(Vec3::new(0.0, 1.0, 0.0), 4.0, Sound::Boum, 0.20))
            .shadow(ShadowCircle::new(6.0, 0.5)),
    );

    let mut bee = insect("bee1", "bee2", 6, 0.8, 0.8)
        .sphere(CrashSphere::new(Vec3::new(0.0, 0.0, 0.0), 2.0, Sound::Boum, 0.20))
        .shadow(ShadowCircle::new(4.0, 0.5));
    let next = bee.parts.len();
    bee = bee
        .part(PartSpec::child(next, 0, "bee3").at(0.0, 1.0, -0.5).joint(Joint::Wing))
        .part(
            PartSpec::child(next + 1, 0, "bee3")
                .at(0.0, 1.0, 0.5)
                .mirrored()
                .joint(Joint::Wing),
        );
    catalog.insert(Bee, bee);

    // Worms are a chain of segments crawling under the ground
    let mut worm = Recipe::single("worm0").kind(SlotKind::Vehicle).height(HeightRule::None);
    for i in 1..6 {
        worm = worm.part(PartSpec::child(i, i - 1, "worm1").at(-1.0, 0.0, 0.0));
    }
    catalog.insert(
        Worm,
        worm.part(PartSpec::child(6, 5, "worm2").at(-1.0, 0.0, 0.0))
            .sphere(CrashSphere::new(Vec3::ZERO, 4.0, Sound::Boum, 0.0))
            .shadow(ShadowCircle::worm(6.0, 0.5)),
    );
}

/// Insect with a head and `legs` legs spread along the abdomen.
fn insect(body: &str, head: &str, legs: usize, spacing: f32, side: f32) -> Recipe {
    let mut recipe = Recipe::single(body)
        .kind(SlotKind::Vehicle)
        .height(HeightRule::None)
        .floor_adjusted()
        .part(PartSpec::child(1, 0, head).at(spacing * 2.0, 0.5, 0.0));
    for i in 0..legs {
        let x = spacing * ((i / 2) as f32 - (legs / 4) as f32);
        let z = if i % 2 == 0 { -side } else { side };
        let leg = PartSpec::child(2 + i, 0, "insect_leg").at(x, 0.0, z).joint(Joint::Leg);
        recipe = recipe.part(if z > 0.0 { leg.mirrored() } else { leg });
    }
    recipe
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Catalog {
        let mut catalog = Catalog::new();
        register(&mut catalog);
        catalog
    }

    fn joints(recipe: &Recipe, joint: Joint) -> usize {
        recipe.parts.iter().filter(|p| p.joint == joint).count()
    }

    #[test]
    fn test_chassis_articulation() {
        let catalog = table();
        assert_eq!(joints(catalog.get(ObjectType::MobileWa).unwrap(), Joint::Wheel), 4);
        assert_eq!(joints(catalog.get(ObjectType::MobileTc).unwrap(), Joint::Wheel), 2);
        assert_eq!(joints(catalog.get(ObjectType::MobileIs).unwrap(), Joint::Leg), 6);
        assert_eq!(joints(catalog.get(ObjectType::MobileFi).unwrap(), Joint::Leg), 0);
    }

    #[test]
    fn test_grabber_arm_is_a_chain() {
        let catalog = table();
        let robot = catalog.get(ObjectType::MobileWa).unwrap();
        let arm2 = robot.parts.iter().find(|p| p.mesh == "arm2").unwrap();
        let arm1 = robot.parts.iter().find(|p| p.mesh == "arm1").unwrap();
        assert_eq!(arm2.parent, Some(arm1.rank));
    }

    #[test]
    fn test_ranks_are_dense_and_ordered() {
        let catalog = table();
        for (object_type, recipe) in catalog.iter() {
            for (i, part) in recipe.parts.iter().enumerate() {
                assert_eq!(part.rank, i, "{:?}", object_type);
                if let Some(parent) = part.parent {
                    assert!(parent < part.rank, "{:?} rank {}", object_type, part.rank);
                }
            }
        }
    }

    #[test]
    fn test_thumper_reveals_the_map() {
        let catalog = table();
        assert_eq!(catalog.get(ObjectType::MobileRt).unwrap().show_limit, ShowLimit::Thumper);
        assert_eq!(catalog.get(ObjectType::MobileRc).unwrap().show_limit, ShowLimit::None);
    }

    #[test]
    fn test_bee_has_wings() {
        let catalog = table();
        let bee = catalog.get(ObjectType::Bee).unwrap();
        assert_eq!(joints(bee, Joint::Wing), 2);
        assert_eq!(joints(bee, Joint::Leg), 6);
        assert_eq!(catalog.get(ObjectType::Worm).unwrap().parts.len(), 7);
    }
}
