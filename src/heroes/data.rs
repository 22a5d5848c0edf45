//! Hero catalog definitions.

use super::{BonusDamage, Hero, PostCastEffect, PreCastEffect, SkillEffects, SkillShape};
use crate::board::Gem;
use crate::constants::{MAX_RANDOM_CONVERSIONS, SWEEP_DAMAGE_PER_GEM};

fn shape(width: usize, height: usize) -> SkillShape {
    SkillShape { width, height }
}

/// Returns the full hero roster.
pub fn get_all_heroes() -> Vec<Hero> {
    vec![
        Hero {
            id: 0,
            name: "Fire Warrior",
            attribute: Gem::Fire,
            shape: shape(1, 4),
            effects: SkillEffects {
                post_cast: Some(PostCastEffect::ConvertRandom {
                    target: Gem::Fire,
                    max_cells: MAX_RANDOM_CONVERSIONS,
                }),
                ..Default::default()
            },
        },
        Hero {
            id: 1,
            name: "Water Mage",
            attribute: Gem::Water,
            shape: shape(2, 3),
            effects: SkillEffects::default(),
        },
        Hero {
            id: 2,
            name: "Wood Druid",
            attribute: Gem::Wood,
            shape: shape(2, 4),
            effects: SkillEffects::default(),
        },
        Hero {
            id: 3,
            name: "Light Paladin",
            attribute: Gem::Light,
            shape: shape(3, 3),
            effects: SkillEffects::default(),
        },
        Hero {
            id: 4,
            name: "Dark Assassin",
            attribute: Gem::Dark,
            shape: shape(4, 1),
            effects: SkillEffects::default(),
        },
        Hero {
            id: 5,
            name: "Fire Mage",
            attribute: Gem::Fire,
            shape: shape(2, 1),
            effects: SkillEffects {
                pre_cast: Some(PreCastEffect::SpreadAdjacent { source: Gem::Fire }),
                ..Default::default()
            },
        },
        Hero {
            id: 6,
            name: "Fire Sorcerer",
            attribute: Gem::Fire,
            shape: shape(2, 2),
            effects: SkillEffects {
                post_cast: Some(PostCastEffect::SpawnFlame),
                ..Default::default()
            },
        },
        Hero {
            id: 7,
            name: "Fire Dragon",
            attribute: Gem::Fire,
            shape: shape(3, 2),
            effects: SkillEffects {
                bonus: Some(BonusDamage::BoardSweep {
                    gem: Gem::Fire,
                    per_gem: SWEEP_DAMAGE_PER_GEM,
                }),
                ..Default::default()
            },
        },
    ]
}
