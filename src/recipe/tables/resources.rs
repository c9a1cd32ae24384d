//! Resources
//!
//! Carriable items and ground markers. All of them store the caller's power
//! level, snap to the floor and ignore the requested height.

use crate::engine::SlotKind;
use crate::object::{ObjectType, ShadowCircle};
use crate::recipe::{Catalog, HeightRule, PartSpec, Recipe};

pub fn register(catalog: &mut Catalog) {
    use ObjectType::*;

    let items = [
        (Fret, "fret"),
        (Stone, "stone"),
        (Uranium, "uranium"),
        (Metal, "metal"),
        (Power, "power"),
        (Atomic, "atomic"),
        (Bullet, "bullet"),
        (Bbox, "bbox"),
        (KeyA, "keya"),
        (KeyB, "keyb"),
        (KeyC, "keyc"),
        (KeyD, "keyd"),
        (Tnt, "tnt"),
        (Scrap1, "scrap1"),
        (Scrap2, "scrap2"),
        (Scrap3, "scrap3"),
        (Scrap4, "scrap4"),
        (Scrap5, "scrap5"),
        (Bomb, "bomb"),
        (Waypoint, "waypoint"),
        (Show, "show"),
        (WinFire, "winfire"),
        (Bag, "bag"),
        (MarkStone, "cross1"),
        (MarkUranium, "cross3"),
        (MarkPower, "cross2"),
        (MarkKeyA, "crossa"),
        (MarkKeyB, "crossb"),
        (MarkKeyC, "crossc"),
        (MarkKeyD, "crossd"),
        (Egg, "egg"),
    ];

    for (object_type, mesh) in items {
        catalog.insert(object_type, resource(object_type, mesh));
    }
}

fn resource(object_type: ObjectType, mesh: &str) -> Recipe {
    use ObjectType::*;

    // Cells get their own mesh so their charge can be tinted
    let root = match object_type {
        Power | Atomic => PartSpec::root(mesh).copied(),
        _ => PartSpec::root(mesh),
    };
    let recipe = Recipe::default().kind(SlotKind::Fixed).part(root).stores_energy();

    if object_type == Show {
        return recipe.transient();
    }

    let recipe = recipe.floor_adjusted().height(HeightRule::Fixed(0.0));

    match object_type {
        MarkStone | MarkUranium | MarkKeyA | MarkKeyB | MarkKeyC | MarkKeyD | MarkPower | Waypoint => {
            recipe.shadow(ShadowCircle::new(1.5, 1.0))
        }
        Egg => recipe
            .crash(-1.0, 2.8, 0.0, 3.0)
            .camera(0.0, 5.0, 0.0, 10.0)
            .shadow(ShadowCircle::new(3.0, 1.0)),
        Bomb => recipe
            .crash(0.0, 0.0, 0.0, 3.0)
            .camera(0.0, 0.0, 0.0, 3.0)
            .shadow(ShadowCircle::new(3.0, 1.0)),
        Bag => {
            let mut recipe = recipe
                .crash(0.0, 0.0, 0.0, 4.0)
                .camera(0.0, 0.0, 0.0, 4.0)
                .shadow(ShadowCircle::new(5.0, 1.0))
                .height(HeightRule::Fixed(-1.4));
            recipe.parts[0] = PartSpec::root(mesh).zoom(1.5);
            recipe
        }
        _ => recipe
            .crash(0.0, 1.0, 0.0, 1.0)
            .camera(0.0, 1.0, 0.0, 1.5)
            .shadow(ShadowCircle::new(1.5, 1.0)),
    }
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
    fn test_show_is_transient() {
        let catalog = table();
        let show = catalog.get(ObjectType::Show).unwrap();
        assert!(show.transient);
        assert!(show.crash_spheres.is_empty());
        assert!(show.shadow.is_none());
        assert!(!show.floor_adjust);
    }

    #[test]
    fn test_markers_have_no_collision() {
        let catalog = table();
        let mark = catalog.get(ObjectType::MarkKeyC).unwrap();
        assert!(mark.crash_spheres.is_empty());
        assert!(mark.camera_sphere.is_none());
        assert_eq!(mark.parts[0].mesh, "crossc");
    }

    #[test]
    fn test_bag_sits_lower() {
        let catalog = table();
        let bag = catalog.get(ObjectType::Bag).unwrap();
        assert_eq!(bag.height.offset(10.0), -1.4);
        assert_eq!(bag.parts[0].scale.x, 1.5);

        // Requested height never applies to resources
        let stone = catalog.get(ObjectType::Stone).unwrap();
        assert_eq!(stone.height.offset(10.0), 0.0);
    }

    #[test]
    fn test_cells_are_copies() {
        let catalog = table();
        assert!(catalog.get(ObjectType::Power).unwrap().parts[0].copy);
        assert!(catalog.get(ObjectType::Atomic).unwrap().parts[0].copy);
        assert!(!catalog.get(ObjectType::Uranium).unwrap().parts[0].copy);
    }
}
