//! Whole record files: every creature plus the inventory, in one object.
use crate::attributes::AttributeNames;
use crate::catalog::ItemCatalog;
use crate::creature::write_creature_info;
use crate::inventory::{write_inventory_long, write_inventory_summary};
use crate::latlon::LatLonProjector;
use crate::model::RecordSet;
use crate::sink::{JsonSink, ValueSink};
use crate::EncodeOpts;

/// The collaborators an export needs, bundled for passing around.
#[derive(Clone, Copy)]
pub struct Lookups<'a> {
    pub attributes: &'a dyn AttributeNames,
    pub catalog: &'a dyn ItemCatalog,
    pub projector: Option<&'a dyn LatLonProjector>,
}

/// Writes `{"creatures": [...], "inventory": [...]}` for one record set.
pub fn write_records(
    sink: &mut dyn JsonSink,
    records: &RecordSet,
    lookups: Lookups<'_>,
    opts: EncodeOpts,
    field_name: Option<&str>,
) {
    sink.begin_object(field_name);

    sink.begin_array(Some("creatures"));
    for creature in &records.creatures {
        write_creature_info(
            sink,
            creature,
            records,
            lookups.attributes,
            lookups.projector,
            opts.write_all_fields,
            None,
        );
    }
    sink.end();

    if opts.summary {
        write_inventory_summary(sink, &records.items, lookups.catalog, Some("inventory"));
    } else {
        write_inventory_long(
            sink,
            &records.items,
            lookups.catalog,
            lookups.attributes,
            opts.include_blueprint_status,
            Some("inventory"),
        );
    }

    sink.end();
    tracing::debug!(
        creatures = records.creatures.len(),
        items = records.items.len(),
        "record set written"
    );
}

pub fn records_to_value(
    records: &RecordSet,
    lookups: Lookups<'_>,
    opts: EncodeOpts,
) -> serde_json::Value {
    let mut sink = ValueSink::new();
    write_records(&mut sink, records, lookups, opts, None);
    sink.into_value()
}
