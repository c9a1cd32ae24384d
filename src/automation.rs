//! Automation controllers
//!
//! Stationary objects that do something on their own (factories, power
//! stations, nests, waving flags) get one `Automation`. The kind is chosen
//! one-to-one from the object type; each kind loops through a fixed cycle
//! of timed phases.

use serde::{Deserialize, Serialize};

use crate::object::{ObjectId, ObjectType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutomationKind {
    Base,
    Portico,
    Derrick,
    Factory,
    Repair,
    Destroyer,
    PowerStation,
    Convert,
    Tower,
    Research,
    Radar,
    PowerPlant,
    Labo,
    NuclearPlant,
    PowerCaptor,
    Vault,
    Houston,
    Egg,
    Nest,
    Root,
    Mush,
    Flag,
    Info,
}

impl AutomationKind {
    /// Automation hosted by `object_type`, if any.
    pub fn for_type(object_type: ObjectType) -> Option<AutomationKind> {
        use ObjectType::*;
        let kind = match object_type {
            Base => AutomationKind::Base,
            Portico => AutomationKind::Portico,
            Derrick => AutomationKind::Derrick,
            Factory => AutomationKind::Factory,
            Repair => AutomationKind::Repair,
            Destroyer => AutomationKind::Destroyer,
            Station => AutomationKind::PowerStation,
            Convert => AutomationKind::Convert,
            Tower => AutomationKind::Tower,
            Research => AutomationKind::Research,
            Radar => AutomationKind::Radar,
            Energy => AutomationKind::PowerPlant,
            Labo => AutomationKind::Labo,
            Nuclear => AutomationKind::NuclearPlant,
            Para => AutomationKind::PowerCaptor,
            Safe => AutomationKind::Vault,
            Huston => AutomationKind::Houston,
            Egg => AutomationKind::Egg,
            Nest => AutomationKind::Nest,
            Root5 => AutomationKind::Root,
            Mushroom2 => AutomationKind::Mush,
            FlagB | FlagR | FlagG | FlagY | FlagV => AutomationKind::Flag,
            Info => AutomationKind::Info,
            _ => return None,
        };
        Some(kind)
    }

    /// Phases the kind loops through, with their durations in seconds.
    pub fn cycle(self) -> &'static [(Phase, f32)] {
        use Phase::*;
        match self {
            AutomationKind::Base => &[(Idle, 10.0), (Scanning, 2.0)],
            AutomationKind::Portico => &[(Idle, 5.0), (Assembling, 20.0)],
            AutomationKind::Derrick => &[(Idle, 2.0), (Extracting, 8.0), (Ejecting, 2.0)],
            AutomationKind::Factory => &[(Idle, 3.0), (Assembling, 15.0), (Ejecting, 3.0)],
            AutomationKind::Repair => &[(Idle, 2.0), (Repairing, 6.0)],
            AutomationKind::Destroyer => &[(Idle, 3.0), (Destroying, 5.0)],
            AutomationKind::PowerStation => &[(Idle, 1.0), (Charging, 4.0), (Discharged, 2.0)],
            AutomationKind::Convert => &[(Idle, 2.0), (Converting, 10.0), (Ejecting, 2.0)],
            AutomationKind::Tower => &[(Idle, 2.0), (Scanning, 1.0), (Firing, 0.5)],
            AutomationKind::Research => &[(Idle, 2.0), (Researching, 30.0)],
            AutomationKind::Radar => &[(Scanning, 4.0)],
            AutomationKind::PowerPlant => &[(Idle, 1.0), (Converting, 10.0), (Ejecting, 1.0)],
            AutomationKind::Labo => &[(Idle, 2.0), (Researching, 20.0)],
            AutomationKind::NuclearPlant => &[(Idle, 2.0), (Converting, 20.0), (Ejecting, 2.0)],
            AutomationKind::PowerCaptor => &[(Idle, 5.0), (Charging, 5.0)],
            AutomationKind::Vault => &[(Idle, 1.0)],
            AutomationKind::Houston => &[(Broadcasting, 3.0), (Idle, 1.0)],
            AutomationKind::Egg => &[(Idle, 20.0), (Hatching, 5.0)],
            AutomationKind::Nest => &[(Growing, 30.0), (Idle, 5.0)],
            AutomationKind::Root => &[(Pulsing, 2.0)],
            AutomationKind::Mush => &[(Idle, 4.0), (Spitting, 1.5)],
            AutomationKind::Flag => &[(Waving, 1.0)],
            AutomationKind::Info => &[(Idle, 5.0), (Broadcasting, 2.0)],
        }
    }
}

/// What an automation is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Assembling,
    Ejecting,
    Charging,
    Discharged,
    Converting,
    Extracting,
    Researching,
    Scanning,
    Repairing,
    Destroying,
    Firing,
    Broadcasting,
    Hatching,
    Growing,
    Pulsing,
    Spitting,
    Waving,
}

#[derive(Debug)]
pub struct Automation {
    kind: AutomationKind,
    owner: ObjectId,
    /// Index into the kind's cycle
    step: usize,
    /// Time spent in the current phase
    elapsed: f32,
    init_count: u32,
}

impl Automation {
    pub fn new(kind: AutomationKind, owner: ObjectId) -> Self {
        Self {
            kind,
            owner,
            step: 0,
            elapsed: 0.0,
            init_count: 0,
        }
    }

    pub fn kind(&self) -> AutomationKind {
        self.kind
    }

    pub fn owner(&self) -> ObjectId {
        self.owner
    }

    /// Reset to the first phase of the cycle.
    pub fn init(&mut self) {
        self.step = 0;
        self.elapsed = 0.0;
        self.init_count += 1;
    }

    /// Number of `init` calls so far.
    pub fn init_count(&self) -> u32 {
        self.init_count
    }

    pub fn phase(&self) -> Phase {
        self.kind.cycle().get(self.step).map(|&(phase, _)| phase).unwrap_or(Phase::Idle)
    }

    /// Fraction of the current phase completed, 0..1.
    pub fn progress(&self) -> f32 {
        match self.kind.cycle().get(self.step) {
            Some(&(_, duration)) if duration > 0.0 => (self.elapsed / duration).min(1.0),
            _ => 0.0,
        }
    }

    /// Advance by `dt` seconds, wrapping around the cycle. Negative or
    /// non-finite steps are ignored.
    pub fn step(&mut self, dt: f32) {
        let cycle = self.kind.cycle();
        if cycle.is_empty() || !dt.is_finite() || dt < 0.0 {
            return;
        }
        self.elapsed += dt;

        // Whole cycles change nothing, drop them before walking the phases
        let total: f32 = cycle.iter().map(|&(_, duration)| duration.max(0.0)).sum();
        if total > 0.0 && self.elapsed >= total {
            self.elapsed %= total;
        }
        while let Some(&(phase, duration)) = cycle.get(self.step) {
            if self.elapsed < duration || duration <= 0.0 {
                break;
            }
            self.elapsed -= duration;
            self.step = (self.step + 1) % cycle.len();
            log::trace!("{:?} automation of {:?} leaves {:?}", self.kind, self.owner, phase);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping() {
        assert_eq!(AutomationKind::for_type(ObjectType::Station), Some(AutomationKind::PowerStation));
        assert_eq!(AutomationKind::for_type(ObjectType::Energy), Some(AutomationKind::PowerPlant));
        assert_eq!(AutomationKind::for_type(ObjectType::Safe), Some(AutomationKind::Vault));
        assert_eq!(AutomationKind::for_type(ObjectType::Root5), Some(AutomationKind::Root));
        assert_eq!(AutomationKind::for_type(ObjectType::FlagV), Some(AutomationKind::Flag));
        assert_eq!(AutomationKind::for_type(ObjectType::Root4), None);
        assert_eq!(AutomationKind::for_type(ObjectType::Mushroom1), None);
        assert_eq!(AutomationKind::for_type(ObjectType::MobileWa), None);
    }

    #[test]
    fn test_init_counts() {
        let mut automation = Automation::new(AutomationKind::Factory, ObjectId(4));
        assert_eq!(automation.init_count(), 0);
        automation.init();
        assert_eq!(automation.init_count(), 1);
        assert_eq!(automation.owner(), ObjectId(4));
    }

    #[test]
    fn test_factory_cycle() {
        let mut automation = Automation::new(AutomationKind::Factory, ObjectId(1));
        automation.init();
        assert_eq!(automation.phase(), Phase::Idle);

        automation.step(3.5);
        assert_eq!(automation.phase(), Phase::Assembling);
        assert!(automation.progress() > 0.0 && automation.progress() < 0.1);

        automation.step(15.0);
        assert_eq!(automation.phase(), Phase::Ejecting);

        automation.step(3.0);
        assert_eq!(automation.phase(), Phase::Idle);
    }

    #[test]
    fn test_large_step_wraps() {
        let mut automation = Automation::new(AutomationKind::PowerStation, ObjectId(1));
        automation.init();
        // Two full cycles of 7s plus 1.5s
        automation.step(15.5);
        assert_eq!(automation.phase(), Phase::Charging);
    }

    #[test]
    fn test_bad_frame_times_are_ignored() {
        let mut automation = Automation::new(AutomationKind::Flag, ObjectId(1));
        automation.step(0.5);
        automation.step(f32::NAN);
        automation.step(f32::INFINITY);
        automation.step(-3.0);
        assert_eq!(automation.phase(), Phase::Waving);
        assert!((automation.progress() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_huge_step_wraps_in_bounded_time() {
        let mut automation = Automation::new(AutomationKind::Factory, ObjectId(1));
        automation.step(1e9);
        assert!(automation.progress() >= 0.0 && automation.progress() <= 1.0);

        // Still advances normally afterwards
        let before = automation.phase();
        automation.step(21.0);
        assert_eq!(automation.phase(), before);
    }

    #[test]
    fn test_single_phase_cycle() {
        let mut automation = Automation::new(AutomationKind::Flag, ObjectId(1));
        automation.step(10.25);
        assert_eq!(automation.phase(), Phase::Waving);
        assert!((automation.progress() - 0.25).abs() < 1e-4);
    }
}
