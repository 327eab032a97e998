//! Attribute (character stat) names, addressed by a stable index.
use crate::sink::JsonSink;

/// Number of character attributes stored per creature.
pub const ATTRIBUTE_COUNT: usize = 12;

/// Maps an attribute index to its display name.
///
/// Indices run `0..len()` and encoders walk them in that order, so the
/// order of the table is the order of the emitted members.
pub trait AttributeNames {
    fn len(&self) -> usize;
    fn name(&self, index: usize) -> Option<&str>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultAttributeNames;

impl DefaultAttributeNames {
    pub const NAMES: [&'static str; ATTRIBUTE_COUNT] = [
        "health",
        "stamina",
        "torpidity",
        "oxygen",
        "food",
        "water",
        "temperature",
        "weight",
        "melee",
        "speed",
        "fortitude",
        "crafting",
    ];
}

impl AttributeNames for DefaultAttributeNames {
    fn len(&self) -> usize {
        Self::NAMES.len()
    }

    fn name(&self, index: usize) -> Option<&str> {
        Self::NAMES.get(index).copied()
    }
}

impl<S: AsRef<str>> AttributeNames for [S] {
    fn len(&self) -> usize {
        <[S]>::len(self)
    }

    fn name(&self, index: usize) -> Option<&str> {
        self.get(index).map(AsRef::as_ref)
    }
}

impl<S: AsRef<str>> AttributeNames for Vec<S> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn name(&self, index: usize) -> Option<&str> {
        self.get(index).map(AsRef::as_ref)
    }
}

/// Writes `levels` as an object keyed by attribute name, in attribute order.
/// Zero entries are skipped unless `write_all`; indices missing on either
/// side are skipped.
pub(crate) fn write_attribute_levels(
    sink: &mut dyn JsonSink,
    field_name: &str,
    levels: &[u8],
    attrs: &dyn AttributeNames,
    write_all: bool,
) {
    sink.begin_object(Some(field_name));
    for index in 0..attrs.len() {
        let (Some(name), Some(&points)) = (attrs.name(index), levels.get(index)) else {
            continue;
        };
        if write_all || points != 0 {
            sink.write_i64(name, i64::from(points));
        }
    }
    sink.end();
}
