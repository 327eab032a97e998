//! Creature info objects.
//!
//! Optional fields are written only when they differ from their unset value
//! (0, 0.0, `false`, empty string) unless `write_all_fields` is set. The
//! position, `id`, `baseLevel` and `fullLevel` are always written.
use crate::attributes::{AttributeNames, write_attribute_levels};
use crate::latlon::{LatLonProjector, round_to_tenth};
use crate::model::{Creature, SaveContext};
use crate::numeric::write_float;
use crate::sink::JsonSink;

/// Writes one creature as a JSON object.
///
/// With `field_name` the object becomes that member of the enclosing object;
/// without it the object is written as an anonymous value (array element or
/// document root). `lat`/`lon` are added next to the position when a
/// projector is given, and `tamedTime` next to `tamedAtTime` when the save
/// context knows the current game time.
pub fn write_creature_info(
    sink: &mut dyn JsonSink,
    creature: &Creature,
    ctx: &dyn SaveContext,
    attrs: &dyn AttributeNames,
    projector: Option<&dyn LatLonProjector>,
    write_all_fields: bool,
    field_name: Option<&str>,
) {
    let all = write_all_fields;
    sink.begin_object(field_name);

    if let Some(loc) = &creature.location {
        write_float(sink, "x", f64::from(loc.x));
        write_float(sink, "y", f64::from(loc.y));
        write_float(sink, "z", f64::from(loc.z));
        if let Some(p) = projector {
            write_float(sink, "lat", round_to_tenth(p.lat(loc.y)));
            write_float(sink, "lon", round_to_tenth(p.lon(loc.x)));
        }
    }

    sink.write_i64("id", creature.dino_id);

    if all || creature.tamed {
        sink.write_bool("tamed", creature.tamed);
    }
    if all || creature.targeting_team != 0 {
        sink.write_i64("team", i64::from(creature.targeting_team));
    }
    if all || creature.owning_player_id != 0 {
        sink.write_i64("playerId", i64::from(creature.owning_player_id));
    }
    if all || creature.is_female {
        sink.write_bool("female", creature.is_female);
    }

    for (i, &color) in creature.color_set_indices.iter().enumerate() {
        if all || color != 0 {
            sink.write_i64(&format!("color{}", i), i64::from(color));
        }
    }

    if all || creature.tamed_at_time != 0.0 {
        write_float(sink, "tamedAtTime", creature.tamed_at_time);
        if let Some(now) = ctx.game_time() {
            write_float(sink, "tamedTime", now - creature.tamed_at_time);
        }
    }

    for (name, value) in [
        ("tribe", &creature.tribe_name),
        ("tamer", &creature.tamer_string),
        ("ownerName", &creature.owning_player_name),
        ("name", &creature.tamed_name),
        ("imprinter", &creature.imprinter_name),
    ] {
        if all || !value.is_empty() {
            sink.write_str(name, value);
        }
    }

    sink.write_i64("baseLevel", i64::from(creature.base_character_level));

    if all || creature.base_character_level > 1 {
        write_attribute_levels(
            sink,
            "wildLevels",
            &creature.number_of_level_up_points_applied,
            attrs,
            all,
        );
    }

    if all || creature.extra_character_level != 0 {
        sink.write_i64("extraLevel", i64::from(creature.extra_character_level));
    }

    let full_level =
        i64::from(creature.base_character_level) + i64::from(creature.extra_character_level);
    sink.write_i64("fullLevel", full_level);

    // Gated on the extra level, not on the tamed points themselves.
    if all || creature.extra_character_level != 0 {
        write_attribute_levels(
            sink,
            "tamedLevels",
            &creature.number_of_level_up_points_applied_tamed,
            attrs,
            all,
        );
    }

    if all || creature.experience_points != 0.0 {
        write_float(sink, "experience", f64::from(creature.experience_points));
    }
    if all || creature.dino_imprinting_quality != 0.0 {
        write_float(
            sink,
            "imprintingQuality",
            f64::from(creature.dino_imprinting_quality),
        );
    }

    sink.end();
    tracing::trace!(id = creature.dino_id, all, "creature info written");
}
