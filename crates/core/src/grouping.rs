//! Grouping of raw objects into cutlist parts.
//!
//! Objects merge when their sorted dimensions, rounded to two decimals, and
//! their stock key are equal. There is no tolerance beyond the rounding.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::part::{Part, RawPart};
use crate::stock::{StockKey, StockSheet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options controlling which raw objects enter the cutlist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupingOptions {
    /// Keep objects whose name contains "sketch".
    #[cfg_attr(feature = "serde", serde(default))]
    pub include_sketches: bool,
}

impl GroupingOptions {
    /// Creates the default options (sketch objects skipped).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether sketch objects are kept.
    pub fn with_sketches(mut self, include: bool) -> Self {
        self.include_sketches = include;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GroupKey {
    length: i64,
    width: i64,
    thickness: i64,
    stock_key: StockKey,
}

/// Integer hundredths of an already rounded dimension.
fn hundredths(rounded: f64) -> i64 {
    (rounded * 100.0).round() as i64
}

/// Groups raw objects with the default options.
pub fn group_parts(raw: &[RawPart]) -> Vec<Part> {
    group_parts_with(raw, &GroupingOptions::default())
}

/// Groups raw objects into parts, preserving first-seen order.
///
/// The name, comment, orientation and collection of a group come from its
/// first member.
pub fn group_parts_with(raw: &[RawPart], options: &GroupingOptions) -> Vec<Part> {
    let mut parts: Vec<Part> = Vec::new();
    let mut index: HashMap<GroupKey, usize> = HashMap::new();

    for item in raw {
        if !options.include_sketches && item.is_sketch() {
            log::debug!("skipping sketch object '{}'", item.name);
            continue;
        }

        let [length, width, thickness] = item.sorted_dimensions();
        let key = GroupKey {
            length: hundredths(length),
            width: hundredths(width),
            thickness: hundredths(thickness),
            stock_key: item.stock_key.clone(),
        };

        match index.entry(key) {
            Entry::Occupied(slot) => parts[*slot.get()].quantity += 1,
            Entry::Vacant(slot) => {
                slot.insert(parts.len());
                parts.push(Part {
                    name: item.name.clone(),
                    length,
                    width,
                    thickness,
                    quantity: 1,
                    stock_key: item.stock_key.clone(),
                    comment: item.comment.clone(),
                    orientation: item.orientation,
                    collection: item.collection.clone(),
                });
            }
        }
    }

    parts
}

/// One part per raw object, in input order, each with quantity 1.
///
/// Nesting diagrams draw physical objects rather than cutlist lines, so every
/// object keeps its own name and its position in the input.
pub fn unit_parts_with(raw: &[RawPart], options: &GroupingOptions) -> Vec<Part> {
    raw.iter()
        .filter(|item| options.include_sketches || !item.is_sketch())
        .map(|item| {
            let [length, width, thickness] = item.sorted_dimensions();
            Part {
                name: item.name.clone(),
                length,
                width,
                thickness,
                quantity: 1,
                stock_key: item.stock_key.clone(),
                comment: item.comment.clone(),
                orientation: item.orientation,
                collection: item.collection.clone(),
            }
        })
        .collect()
}

/// Replaces each part's orientation tag with that of the stock it targets.
///
/// Parts whose key matches no catalog entry keep their own tag.
pub fn resolve_orientations(parts: &[Part], catalog: &[StockSheet]) -> Vec<Part> {
    let by_key: HashMap<StockKey, &StockSheet> =
        catalog.iter().map(|sheet| (sheet.key(), sheet)).collect();

    parts
        .iter()
        .map(|part| {
            let mut resolved = part.clone();
            if let Some(sheet) = by_key.get(&part.stock_key) {
                resolved.orientation = sheet.orientation;
            }
            resolved
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stock::Orientation;

    const KEY: &str = "Platte_18mm_2800x2070";

    #[test]
    fn test_merges_after_rounding() {
        let raw = vec![
            RawPart::new("a", [700.001, 500.0, 18.0]).with_stock_key(KEY),
            RawPart::new("b", [699.999, 500.0, 18.0]).with_stock_key(KEY),
        ];
        let parts = group_parts(&raw);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].name, "a");
        assert_eq!(parts[0].quantity, 2);
        assert_eq!(parts[0].length, 700.0);
    }

    #[test]
    fn test_rounding_ties_go_to_even() {
        let raw = vec![
            RawPart::new("tie", [700.125, 500.0, 18.0]).with_stock_key(KEY),
            RawPart::new("up", [700.13, 500.0, 18.0]).with_stock_key(KEY),
        ];
        let parts = group_parts(&raw);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].length, 700.12);
        assert_eq!(parts[1].length, 700.13);
    }

    #[test]
    fn test_unit_parts_keep_input_order() {
        let raw = vec![
            RawPart::new("a1", [700.0, 500.0, 18.0]).with_stock_key(KEY),
            RawPart::new("b", [300.0, 600.0, 18.0]).with_stock_key(KEY),
            RawPart::new("sketch_a", [10.0, 10.0, 1.0]).with_stock_key(KEY),
            RawPart::new("a2", [18.0, 500.0, 700.0]).with_stock_key(KEY),
        ];
        let units = unit_parts_with(&raw, &GroupingOptions::default());
        let names: Vec<&str> = units.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a1", "b", "a2"]);
        assert!(units.iter().all(|p| p.quantity == 1));
        assert_eq!((units[1].length, units[1].width), (600.0, 300.0));
        assert_eq!((units[2].length, units[2].width), (700.0, 500.0));

        let with_sketches = unit_parts_with(&raw, &GroupingOptions::new().with_sketches(true));
        assert_eq!(with_sketches.len(), 4);
    }

    #[test]
    fn test_axis_order_does_not_matter() {
        let raw = vec![
            RawPart::new("a", [700.0, 500.0, 18.0]).with_stock_key(KEY),
            RawPart::new("b", [18.0, 700.0, 500.0]).with_stock_key(KEY),
        ];
        let parts = group_parts(&raw);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].quantity, 2);
    }

    #[test]
    fn test_distinct_stock_keys_stay_apart() {
        let raw = vec![
            RawPart::new("a", [700.0, 500.0, 18.0]).with_stock_key(KEY),
            RawPart::new("b", [700.0, 500.0, 18.0]).with_stock_key("Oak_18mm_2000x1000"),
            RawPart::new("c", [700.0, 500.0, 18.0]),
        ];
        let parts = group_parts(&raw);
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.quantity == 1));
    }

    #[test]
    fn test_thickness_is_part_of_key() {
        let raw = vec![
            RawPart::new("a", [700.0, 500.0, 18.0]).with_stock_key(KEY),
            RawPart::new("b", [700.0, 500.0, 19.0]).with_stock_key(KEY),
        ];
        assert_eq!(group_parts(&raw).len(), 2);
    }

    #[test]
    fn test_sketch_filter() {
        let raw = vec![
            RawPart::new("shelf", [700.0, 500.0, 18.0]),
            RawPart::new("Sketch_outline", [700.0, 500.0, 18.0]),
        ];
        assert_eq!(group_parts(&raw)[0].quantity, 1);

        let with_sketches = GroupingOptions::new().with_sketches(true);
        assert_eq!(group_parts_with(&raw, &with_sketches)[0].quantity, 2);
    }

    #[test]
    fn test_first_member_metadata_wins() {
        let raw = vec![
            RawPart::new("front", [400.0, 300.0, 18.0])
                .with_comment("edge banded")
                .with_collection("Kitchen"),
            RawPart::new("back", [400.0, 300.0, 18.0]).with_comment("raw"),
        ];
        let parts = group_parts(&raw);
        assert_eq!(parts[0].name, "front");
        assert_eq!(parts[0].comment, "edge banded");
        assert_eq!(parts[0].collection.as_deref(), Some("Kitchen"));
    }

    #[test]
    fn test_resolve_orientations() {
        let sheet = StockSheet::new("Platte", 2800.0, 2070.0, 18.0)
            .with_orientation(Orientation::Crosswise);
        let parts = vec![
            Part::new("matched", 700.0, 500.0).with_stock_key(KEY),
            Part::new("orphan", 700.0, 500.0).with_stock_key("Nope_1mm_1x1"),
        ];
        let resolved = resolve_orientations(&parts, &[sheet]);
        assert_eq!(resolved[0].orientation, Orientation::Crosswise);
        assert_eq!(resolved[1].orientation, Orientation::Lengthwise);
    }
}
