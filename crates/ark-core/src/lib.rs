//! ark-core: Field selection and value encoding for ARK save exports
//!
//! This crate turns already-decoded save records into JSON:
//! - Creature info objects (full dump or diff-from-default)
//! - Inventory summaries (grouped counts) and detailed item listings
//! - A small `JsonSink` writer interface with tree and text implementations
//! - Default collaborators: attribute names, item catalog, lat/lon maps
//!
//! Encoders never do I/O and never fail; loading files is left to callers.
pub mod attributes;
pub mod catalog;
pub mod creature;
pub mod export;
pub mod inventory;
pub mod latlon;
pub mod model;
pub mod numeric;
pub mod sink;

pub use attributes::{ATTRIBUTE_COUNT, AttributeNames, DefaultAttributeNames};
pub use catalog::{ItemCatalog, ItemCatalogData, NoCatalog, resolve_name};
pub use creature::write_creature_info;
pub use export::{Lookups, records_to_value, write_records};
pub use inventory::{
    FERTILIZED_EGG_MARKER, InventoryGroup, summarize_inventory, write_inventory_long,
    write_inventory_summary,
};
pub use latlon::{LatLonCalculator, LatLonProjector};
pub use model::{Creature, Item, Location, RecordSet, SaveContext, SaveInfo};
pub use numeric::{encode_float, write_float};
pub use sink::{JsonSink, TextSink, ValueSink};

/// Mode flags shared by the encoders.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeOpts {
    /// Emit every creature field, not only the ones that differ from their default.
    pub write_all_fields: bool,
    /// Add `isBlueprint` to detailed inventory entries.
    pub include_blueprint_status: bool,
    /// Write inventories as grouped counts instead of one entry per item.
    pub summary: bool,
}
