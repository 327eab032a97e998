use crate::attributes::ATTRIBUTE_COUNT;
use serde::Deserialize;

/// Number of dye regions on a creature.
pub const COLOR_REGION_COUNT: usize = 6;
/// Number of stat slots stored on an item.
pub const ITEM_STAT_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Location {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A creature as materialized by the save decoder.
///
/// Zero, `false` and the empty string mean "unset" for every optional field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Creature {
    pub location: Option<Location>,
    pub dino_id: i64,
    pub tamed: bool,
    pub targeting_team: i32,
    pub owning_player_id: i32,
    pub is_female: bool,
    pub color_set_indices: [u8; COLOR_REGION_COUNT],
    pub tamed_at_time: f64,
    pub tribe_name: String,
    pub tamer_string: String,
    pub owning_player_name: String,
    pub tamed_name: String,
    pub imprinter_name: String,
    pub base_character_level: i32,
    pub number_of_level_up_points_applied: [u8; ATTRIBUTE_COUNT],
    pub extra_character_level: i16,
    pub number_of_level_up_points_applied_tamed: [u8; ATTRIBUTE_COUNT],
    pub experience_points: f32,
    pub dino_imprinting_quality: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    pub class_name: String,
    pub quantity: i32,
    pub is_blueprint: bool,
    pub custom_name: String,
    pub custom_description: String,
    pub durability: f32,
    pub rating: f32,
    pub quality: i32,
    pub item_stat_values: [u16; ITEM_STAT_COUNT],
    pub egg_levelups: Vec<u8>,
    pub egg_colors: Vec<u8>,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            class_name: String::new(),
            quantity: 1,
            is_blueprint: false,
            custom_name: String::new(),
            custom_description: String::new(),
            durability: 0.0,
            rating: 0.0,
            quality: 0,
            item_stat_values: [0; ITEM_STAT_COUNT],
            egg_levelups: Vec::new(),
            egg_colors: Vec::new(),
        }
    }
}

impl Item {
    pub fn new(class_name: impl Into<String>, quantity: i32) -> Self {
        Self {
            class_name: class_name.into(),
            quantity,
            ..Self::default()
        }
    }
}

/// Save-wide state the encoders may consult.
pub trait SaveContext {
    /// Current game time in seconds, when the save carries one.
    /// Cluster and profile files do not.
    fn game_time(&self) -> Option<f64>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SaveInfo {
    pub game_time: Option<f64>,
}

impl SaveContext for SaveInfo {
    fn game_time(&self) -> Option<f64> {
        self.game_time
    }
}

/// One decoded record file: optional game time plus creatures and items.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordSet {
    pub game_time: Option<f64>,
    pub creatures: Vec<Creature>,
    pub items: Vec<Item>,
}

impl SaveContext for RecordSet {
    fn game_time(&self) -> Option<f64> {
        self.game_time
    }
}
