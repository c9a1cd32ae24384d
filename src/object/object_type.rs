//! Object Types
//!
//! Every kind of object the factory knows about, and the coarse category
//! that decides which construction path builds it.

use serde::{Deserialize, Serialize};

/// Semantic object-type identifier.
///
/// Serialized by variant name, so catalog and config files read `Factory`
/// or `Plant3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ObjectType {
    /// No object; never constructed
    Null,
    /// Placeholder without a construction recipe
    Fix,
    /// Editor frame marker without a construction recipe
    Frame,

    // Static decor
    Tree0,

    // Exchange post
    Info,

    // Buildings
    Portico,
    Base,
    Derrick,
    Factory,
    Station,
    Convert,
    Repair,
    Destroyer,
    Tower,
    Nest,
    Research,
    Radar,
    Energy,
    Labo,
    Nuclear,
    Para,
    Safe,
    Huston,
    Target1,
    Target2,
    Start,
    End,

    // Resources
    Fret,
    Stone,
    Uranium,
    Metal,
    Power,
    Atomic,
    Bullet,
    Bbox,
    KeyA,
    KeyB,
    KeyC,
    KeyD,
    Tnt,
    Scrap1,
    Scrap2,
    Scrap3,
    Scrap4,
    Scrap5,
    Bomb,
    Waypoint,
    Show,
    WinFire,
    Bag,
    MarkPower,
    MarkStone,
    MarkUranium,
    MarkKeyA,
    MarkKeyB,
    MarkKeyC,
    MarkKeyD,
    Egg,

    // Flags
    FlagB,
    FlagR,
    FlagG,
    FlagY,
    FlagV,

    // Barriers
    Barrier0,
    Barrier1,
    Barrier2,
    Barrier3,

    // Plants
    Plant0,
    Plant1,
    Plant2,
    Plant3,
    Plant4,
    Plant5,
    Plant6,
    Plant7,
    Plant8,
    Plant9,
    Plant10,
    Plant11,
    Plant12,
    Plant13,
    Plant14,
    Plant15,
    Plant16,
    Plant17,
    Plant18,
    Plant19,
    Tree1,
    Tree2,
    Tree3,
    Tree4,
    Tree5,

    // Mushrooms
    Mushroom1,
    Mushroom2,

    // Crystals
    Quartz0,
    Quartz1,
    Quartz2,
    Quartz3,

    // Roots
    Root0,
    Root1,
    Root2,
    Root3,
    Root4,
    Root5,

    Home1,

    // Ruins
    RuinMobileW1,
    RuinMobileW2,
    RuinMobileT1,
    RuinMobileT2,
    RuinMobileR1,
    RuinMobileR2,
    RuinFactory,
    RuinDoor,
    RuinSupport,
    RuinRadar,
    RuinConvert,
    RuinBase,
    RuinHead,

    // Apollo gadgets
    Apollo1,
    Apollo2,
    Apollo3,
    Apollo4,
    Apollo5,

    // Insects
    Mother,
    Ant,
    Spider,
    Bee,
    Worm,

    // Vehicles
    Human,
    Tech,
    Toto,
    MobileFa,
    MobileTa,
    MobileWa,
    MobileIa,
    MobileFc,
    MobileTc,
    MobileWc,
    MobileIc,
    MobileFi,
    MobileTi,
    MobileWi,
    MobileIi,
    MobileFs,
    MobileTs,
    MobileWs,
    MobileIs,
    MobileRt,
    MobileRc,
    MobileRr,
    MobileRs,
    MobileSa,
    MobileTg,
    MobileFt,
    MobileTt,
    MobileWt,
    MobileIt,
    MobileDr,
    Controller,
}

/// Construction path an object type goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Static,
    Info,
    Building,
    Resource,
    Flag,
    Barrier,
    Plant,
    Mushroom,
    Quartz,
    Root,
    Home,
    Ruin,
    Apollo,
    Insect,
    Vehicle,
}

impl Category {
    /// Whether builders of this category finish by attaching automation.
    pub fn hosts_automation(self) -> bool {
        !matches!(self, Category::Static | Category::Insect | Category::Vehicle)
    }

    /// Whether entities of this category carry a behavior triad.
    pub fn is_animate(self) -> bool {
        matches!(self, Category::Insect | Category::Vehicle)
    }
}

impl ObjectType {
    /// Every object type, in declaration order.
    pub const ALL: &'static [ObjectType] = &[
        ObjectType::Null, ObjectType::Fix, ObjectType::Frame, ObjectType::Tree0, ObjectType::Info,
        ObjectType::Portico, ObjectType::Base, ObjectType::Derrick, ObjectType::Factory,
        ObjectType::Station, ObjectType::Convert, ObjectType::Repair, ObjectType::Destroyer,
        ObjectType::Tower, ObjectType::Nest, ObjectType::Research, ObjectType::Radar,
        ObjectType::Energy, ObjectType::Labo, ObjectType::Nuclear, ObjectType::Para,
        ObjectType::Safe, ObjectType::Huston, ObjectType::Target1, ObjectType::Target2,
        ObjectType::Start, ObjectType::End,
        ObjectType::Fret, ObjectType::Stone, ObjectType::Uranium, ObjectType::Metal,
        ObjectType::Power, ObjectType::Atomic, ObjectType::Bullet, ObjectType::Bbox,
        ObjectType::KeyA, ObjectType::KeyB, ObjectType::KeyC, ObjectType::KeyD, ObjectType::Tnt,
        ObjectType::Scrap1, ObjectType::Scrap2, ObjectType::Scrap3, ObjectType::Scrap4,
        ObjectType::Scrap5, ObjectType::Bomb, ObjectType::Waypoint, ObjectType::Show,
        ObjectType::WinFire, ObjectType::Bag, ObjectType::MarkPower, ObjectType::MarkStone,
        ObjectType::MarkUranium, ObjectType::MarkKeyA, ObjectType::MarkKeyB,
        ObjectType::MarkKeyC, ObjectType::MarkKeyD, ObjectType::Egg,
        ObjectType::FlagB, ObjectType::FlagR, ObjectType::FlagG, ObjectType::FlagY,
        ObjectType::FlagV,
        ObjectType::Barrier0, ObjectType::Barrier1, ObjectType::Barrier2, ObjectType::Barrier3,
        ObjectType::Plant0, ObjectType::Plant1, ObjectType::Plant2, ObjectType::Plant3,
        ObjectType::Plant4, ObjectType::Plant5, ObjectType::Plant6, ObjectType::Plant7,
        ObjectType::Plant8, ObjectType::Plant9, ObjectType::Plant10, ObjectType::Plant11,
        ObjectType::Plant12, ObjectType::Plant13, ObjectType::Plant14, ObjectType::Plant15,
        ObjectType::Plant16, ObjectType::Plant17, ObjectType::Plant18, ObjectType::Plant19,
        ObjectType::Tree1, ObjectType::Tree2, ObjectType::Tree3, ObjectType::Tree4,
        ObjectType::Tree5,
        ObjectType::Mushroom1, ObjectType::Mushroom2,
        ObjectType::Quartz0, ObjectType::Quartz1, ObjectType::Quartz2, ObjectType::Quartz3,
        ObjectType::Root0, ObjectType::Root1, ObjectType::Root2, ObjectType::Root3,
        ObjectType::Root4, ObjectType::Root5,
        ObjectType::Home1,
        ObjectType::RuinMobileW1, ObjectType::RuinMobileW2, ObjectType::RuinMobileT1,
        ObjectType::RuinMobileT2, ObjectType::RuinMobileR1, ObjectType::RuinMobileR2,
        ObjectType::RuinFactory, ObjectType::RuinDoor, ObjectType::RuinSupport,
        ObjectType::RuinRadar, ObjectType::RuinConvert, ObjectType::RuinBase,
        ObjectType::RuinHead,
        ObjectType::Apollo1, ObjectType::Apollo2, ObjectType::Apollo3, ObjectType::Apollo4,
        ObjectType::Apollo5,
        ObjectType::Mother, ObjectType::Ant, ObjectType::Spider, ObjectType::Bee,
        ObjectType::Worm,
        ObjectType::Human, ObjectType::Tech, ObjectType::Toto,
        ObjectType::MobileFa, ObjectType::MobileTa, ObjectType::MobileWa, ObjectType::MobileIa,
        ObjectType::MobileFc, ObjectType::MobileTc, ObjectType::MobileWc, ObjectType::MobileIc,
        ObjectType::MobileFi, ObjectType::MobileTi, ObjectType::MobileWi, ObjectType::MobileIi,
        ObjectType::MobileFs, ObjectType::MobileTs, ObjectType::MobileWs, ObjectType::MobileIs,
        ObjectType::MobileRt, ObjectType::MobileRc, ObjectType::MobileRr, ObjectType::MobileRs,
        ObjectType::MobileSa, ObjectType::MobileTg, ObjectType::MobileFt, ObjectType::MobileTt,
        ObjectType::MobileWt, ObjectType::MobileIt, ObjectType::MobileDr,
        ObjectType::Controller,
    ];

    /// Construction path for this type, or `None` if the factory cannot
    /// build it.
    pub fn category(self) -> Option<Category> {
        use ObjectType::*;
        let category = match self {
            Null | Fix | Frame => return None,

            Tree0 => Category::Static,
            Info => Category::Info,

            Portico | Base | Derrick | Factory | Station | Convert | Repair | Destroyer
            | Tower | Nest | Research | Radar | Energy | Labo | Nuclear | Para | Safe
            | Huston | Target1 | Target2 | Start | End => Category::Building,

            Fret | Stone | Uranium | Metal | Power | Atomic | Bullet | Bbox | KeyA | KeyB
            | KeyC | KeyD | Tnt | Scrap1 | Scrap2 | Scrap3 | Scrap4 | Scrap5 | Bomb
            | Waypoint | Show | WinFire | Bag | MarkPower | MarkStone | MarkUranium
            | MarkKeyA | MarkKeyB | MarkKeyC | MarkKeyD | Egg => Category::Resource,

            FlagB | FlagR | FlagG | FlagY | FlagV => Category::Flag,

            Barrier0 | Barrier1 | Barrier2 | Barrier3 => Category::Barrier,

            Plant0 | Plant1 | Plant2 | Plant3 | Plant4 | Plant5 | Plant6 | Plant7 | Plant8
            | Plant9 | Plant10 | Plant11 | Plant12 | Plant13 | Plant14 | Plant15 | Plant16
            | Plant17 | Plant18 | Plant19 | Tree1 | Tree2 | Tree3 | Tree4 | Tree5 => Category::Plant,

            Mushroom1 | Mushroom2 => Category::Mushroom,

            Quartz0 | Quartz1 | Quartz2 | Quartz3 => Category::Quartz,

            Root0 | Root1 | Root2 | Root3 | Root4 | Root5 => Category::Root,

            Home1 => Category::Home,

            RuinMobileW1 | RuinMobileW2 | RuinMobileT1 | RuinMobileT2 | RuinMobileR1
            | RuinMobileR2 | RuinFactory | RuinDoor | RuinSupport | RuinRadar | RuinConvert
            | RuinBase | RuinHead => Category::Ruin,

            Apollo1 | Apollo3 | Apollo4 | Apollo5 => Category::Apollo,

            Mother | Ant | Spider | Bee | Worm => Category::Insect,

            // The jeep drives like a vehicle even though its body is an apollo recipe
            Apollo2 | Human | Tech | Toto | MobileFa | MobileTa | MobileWa | MobileIa
            | MobileFc | MobileTc | MobileWc | MobileIc | MobileFi | MobileTi | MobileWi
            | MobileIi | MobileFs | MobileTs | MobileWs | MobileIs | MobileRt | MobileRc
            | MobileRr | MobileRs | MobileSa | MobileTg | MobileFt | MobileTt | MobileWt
            | MobileIt | MobileDr | Controller => Category::Vehicle,
        };
        Some(category)
    }

    /// Whether the factory can build this type at all.
    pub fn is_buildable(self) -> bool {
        self.category().is_some()
    }

    /// Lower-case name, used for log lines and generated mesh keys.
    pub fn key(self) -> String {
        format!("{:?}", self).to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_is_unique() {
        let unique: HashSet<_> = ObjectType::ALL.iter().collect();
        assert_eq!(unique.len(), ObjectType::ALL.len());
    }

    #[test]
    fn test_unbuildable_types() {
        assert_eq!(ObjectType::Null.category(), None);
        assert_eq!(ObjectType::Fix.category(), None);
        assert_eq!(ObjectType::Frame.category(), None);
        assert!(ObjectType::Factory.is_buildable());
    }

    #[test]
    fn test_jeep_is_a_vehicle() {
        assert_eq!(ObjectType::Apollo2.category(), Some(Category::Vehicle));
        assert_eq!(ObjectType::Apollo1.category(), Some(Category::Apollo));
    }

    #[test]
    fn test_category_flags() {
        assert!(Category::Building.hosts_automation());
        assert!(Category::Flag.hosts_automation());
        assert!(!Category::Vehicle.hosts_automation());
        assert!(Category::Insect.is_animate());
        assert!(!Category::Ruin.is_animate());
    }

    #[test]
    fn test_key_is_lowercase() {
        assert_eq!(ObjectType::MobileWa.key(), "mobilewa");
        assert_eq!(ObjectType::RuinHead.key(), "ruinhead");
    }
}
