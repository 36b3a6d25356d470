//! Canonical projectile stat prototypes.
//!
//! One prototype per projectile kind. Instances copy these stats on
//! activation, and the upgrade propagator mutates them in place so every
//! later shot reflects the upgrade.

use overrun_core::components::ProjectileProto;
use overrun_core::constants::*;
use overrun_core::enums::{HitPolicy, ProjectileKind};

pub struct Prototypes {
    standard: ProjectileProto,
    explosive: ProjectileProto,
    frozen: ProjectileProto,
}

impl Default for Prototypes {
    fn default() -> Self {
        Self {
            standard: ProjectileProto {
                damage: STANDARD_DAMAGE,
                speed: STANDARD_SPEED,
                life_secs: STANDARD_LIFE_SECS,
                hit_policy: HitPolicy::Single,
            },
            explosive: ProjectileProto {
                damage: EXPLOSIVE_DAMAGE,
                speed: EXPLOSIVE_SPEED,
                life_secs: EXPLOSIVE_LIFE_SECS,
                hit_policy: HitPolicy::Area {
                    radius: EXPLOSIVE_RADIUS,
                    full_damage: false,
                },
            },
            frozen: ProjectileProto {
                damage: FROZEN_DAMAGE,
                speed: FROZEN_SPEED,
                life_secs: FROZEN_LIFE_SECS,
                hit_policy: HitPolicy::AreaSlow {
                    radius: FROZEN_RADIUS,
                    slow_percent: FROZEN_SLOW_PERCENT,
                    slow_secs: FROZEN_SLOW_SECS,
                },
            },
        }
    }
}

impl Prototypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: ProjectileKind) -> &ProjectileProto {
        match kind {
            ProjectileKind::Standard => &self.standard,
            ProjectileKind::Explosive => &self.explosive,
            ProjectileKind::Frozen => &self.frozen,
        }
    }

    pub fn get_mut(&mut self, kind: ProjectileKind) -> &mut ProjectileProto {
        match kind {
            ProjectileKind::Standard => &mut self.standard,
            ProjectileKind::Explosive => &mut self.explosive,
            ProjectileKind::Frozen => &mut self.frozen,
        }
    }
}
