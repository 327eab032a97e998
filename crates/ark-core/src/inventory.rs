//! Inventory listings: grouped summaries and per-item detail.
use crate::attributes::{AttributeNames, write_attribute_levels};
use crate::catalog::{ItemCatalog, resolve_name};
use crate::model::Item;
use crate::numeric::write_float;
use crate::sink::JsonSink;
use std::collections::HashMap;

/// Class name substring marking a fertilized egg.
pub const FERTILIZED_EGG_MARKER: &str = "_Fertilized_";

/// Stat slot, output field and step per stat point (in tenths of a percent).
const STAT_MULTIPLIERS: [(usize, &str, f64); 5] = [
    (1, "armorMultiplier", 0.2),
    (2, "durabilityMultiplier", 0.25),
    (3, "damageMultiplier", 0.1),
    (5, "hypoMultiplier", 0.2),
    (7, "hyperMultiplier", 0.2),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryGroup<'a> {
    pub class_name: &'a str,
    pub name: &'a str,
    pub count: i64,
}

/// Groups `items` by class name and sums their quantities.
///
/// Sorted by count descending, then display name, then class name, so the
/// result does not depend on input order.
pub fn summarize_inventory<'a>(
    items: &'a [Item],
    catalog: &'a dyn ItemCatalog,
) -> Vec<InventoryGroup<'a>> {
    let mut totals: HashMap<&'a str, i64> = HashMap::new();
    for item in items {
        *totals.entry(item.class_name.as_str()).or_insert(0) += i64::from(item.quantity);
    }

    let mut groups: Vec<InventoryGroup<'a>> = totals
        .into_iter()
        .map(|(class_name, count)| InventoryGroup {
            class_name,
            name: resolve_name(catalog, class_name),
            count,
        })
        .collect();
    groups.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.name.cmp(b.name))
            .then_with(|| a.class_name.cmp(b.class_name))
    });
    groups
}

/// Writes an array of `{"name", "count"}` objects, one per item class.
pub fn write_inventory_summary(
    sink: &mut dyn JsonSink,
    items: &[Item],
    catalog: &dyn ItemCatalog,
    field_name: Option<&str>,
) {
    let groups = summarize_inventory(items, catalog);

    sink.begin_array(field_name);
    for group in &groups {
        sink.begin_object(None);
        sink.write_str("name", group.name);
        sink.write_i64("count", group.count);
        sink.end();
    }
    sink.end();

    tracing::debug!(
        items = items.len(),
        groups = groups.len(),
        "inventory summary written"
    );
}

/// Value of a stat multiplier for a raw slot value.
pub fn stat_multiplier(raw: u16, step: f64) -> f64 {
    1.0 + f64::from(raw) * step * 0.001
}

/// Writes one object per item, ordered by display name.
///
/// The sort is stable: items sharing a display name keep their input order.
pub fn write_inventory_long(
    sink: &mut dyn JsonSink,
    items: &[Item],
    catalog: &dyn ItemCatalog,
    attrs: &dyn AttributeNames,
    include_blueprint_status: bool,
    field_name: Option<&str>,
) {
    let mut sorted: Vec<(&str, &Item)> = items
        .iter()
        .map(|item| (resolve_name(catalog, &item.class_name), item))
        .collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    sink.begin_array(field_name);
    for (name, item) in sorted {
        write_item(sink, name, item, attrs, include_blueprint_status);
    }
    sink.end();

    tracing::debug!(items = items.len(), "inventory listing written");
}

fn write_item(
    sink: &mut dyn JsonSink,
    name: &str,
    item: &Item,
    attrs: &dyn AttributeNames,
    include_blueprint_status: bool,
) {
    sink.begin_object(None);
    sink.write_str("name", name);

    if include_blueprint_status {
        sink.write_bool("isBlueprint", item.is_blueprint);
    }
    if item.quantity > 1 {
        sink.write_i64("quantity", i64::from(item.quantity));
    }
    if !item.custom_name.is_empty() {
        sink.write_str("customName", &item.custom_name);
    }
    if !item.custom_description.is_empty() {
        sink.write_str("customDescription", &item.custom_description);
    }
    if !item.is_blueprint && item.durability > 0.0 {
        write_float(sink, "durability", f64::from(item.durability));
    }
    if item.rating > 0.0 {
        write_float(sink, "rating", f64::from(item.rating));
    }
    if item.quality > 0 {
        sink.write_i64("quality", i64::from(item.quality));
    }

    for (slot, field, step) in STAT_MULTIPLIERS {
        let raw = item.item_stat_values[slot];
        if raw != 0 {
            write_float(sink, field, stat_multiplier(raw, step));
        }
    }

    if item.class_name.contains(FERTILIZED_EGG_MARKER) {
        write_attribute_levels(sink, "eggAttributes", &item.egg_levelups, attrs, false);

        sink.begin_object(Some("eggColors"));
        for (i, &color) in item.egg_colors.iter().enumerate() {
            if color != 0 {
                sink.write_i64(&i.to_string(), i64::from(color));
            }
        }
        sink.end();
    }

    sink.end();
}
