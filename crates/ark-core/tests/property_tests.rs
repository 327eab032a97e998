//! Property tests for float encoding, level arithmetic and inventory ordering.

use ark_core::{
    Creature, DefaultAttributeNames, Item, NoCatalog, SaveInfo, ValueSink, encode_float,
    summarize_inventory, write_creature_info, write_inventory_long, write_inventory_summary,
};
use proptest::prelude::*;
use std::collections::HashMap;

fn item_strategy() -> impl Strategy<Value = Item> {
    (prop::sample::select(vec!["A_C", "B_C", "C_C", "D_C"]), 1..500i32)
        .prop_map(|(class, qty)| Item::new(class, qty))
}

proptest! {
    #[test]
    fn prop_finite_floats_stay_numbers(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        prop_assert_eq!(encode_float(f).as_f64(), Some(f));
    }

    #[test]
    fn prop_f32_widening_is_exact(f in any::<f32>().prop_filter("finite", |f| f.is_finite())) {
        let widened = encode_float(f64::from(f)).as_f64().unwrap();
        prop_assert_eq!(widened as f32, f);
    }

    #[test]
    fn prop_full_level_is_sum(base in any::<i32>(), extra in any::<i16>(), all in any::<bool>()) {
        let c = Creature { base_character_level: base, extra_character_level: extra, ..Creature::default() };
        let mut sink = ValueSink::new();
        write_creature_info(&mut sink, &c, &SaveInfo::default(), &DefaultAttributeNames, None, all, None);
        let v = sink.into_value();
        prop_assert_eq!(v["fullLevel"].as_i64(), Some(i64::from(base) + i64::from(extra)));
        prop_assert_eq!(v["baseLevel"].as_i64(), Some(i64::from(base)));
    }

    #[test]
    fn prop_summary_counts_and_order(items in prop::collection::vec(item_strategy(), 0..40)) {
        let groups = summarize_inventory(&items, &NoCatalog);

        let mut expected: HashMap<&str, i64> = HashMap::new();
        for item in &items {
            *expected.entry(item.class_name.as_str()).or_default() += i64::from(item.quantity);
        }
        prop_assert_eq!(groups.len(), expected.len());
        for g in &groups {
            prop_assert_eq!(Some(&g.count), expected.get(g.class_name));
        }
        for pair in groups.windows(2) {
            let ordered = pair[0].count > pair[1].count
                || (pair[0].count == pair[1].count && pair[0].name <= pair[1].name);
            prop_assert!(ordered);
        }
    }

    #[test]
    fn prop_summary_ignores_input_order(items in prop::collection::vec(item_strategy(), 0..40)) {
        let mut reversed = items.clone();
        reversed.reverse();

        let mut a = ValueSink::new();
        write_inventory_summary(&mut a, &items, &NoCatalog, None);
        let mut b = ValueSink::new();
        write_inventory_summary(&mut b, &reversed, &NoCatalog, None);
        prop_assert_eq!(a.into_value(), b.into_value());
    }

    #[test]
    fn prop_long_listing_sorted_and_complete(items in prop::collection::vec(item_strategy(), 0..40)) {
        let mut sink = ValueSink::new();
        write_inventory_long(&mut sink, &items, &NoCatalog, &DefaultAttributeNames, false, None);
        let v = sink.into_value();
        let arr = v.as_array().unwrap();
        prop_assert_eq!(arr.len(), items.len());
        let names: Vec<&str> = arr.iter().map(|o| o["name"].as_str().unwrap()).collect();
        prop_assert!(names.windows(2).all(|w| w[0] <= w[1]));

        // stable: quantities per name keep their input order
        for class in ["A_C", "B_C", "C_C", "D_C"] {
            let input: Vec<i64> = items
                .iter()
                .filter(|i| i.class_name == class)
                .map(|i| i64::from(i.quantity))
                .collect();
            let output: Vec<i64> = arr
                .iter()
                .filter(|o| o["name"] == class)
                .map(|o| o.get("quantity").and_then(|q| q.as_i64()).unwrap_or(1))
                .collect();
            prop_assert_eq!(input, output);
        }
    }
}
