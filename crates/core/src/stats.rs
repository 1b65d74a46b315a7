//! Aggregate statistics over the full product collection.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::product::Product;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Collection-wide statistics. Always computed over the whole store
/// snapshot; filters never apply here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
    pub categories: BTreeMap<String, usize>,
    pub average_price: f64,
    pub price_range: PriceRange,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Single pass over the collection: counts, per-category histogram,
/// average price (2 decimals), min/max price. All zeros when empty.
pub fn stats(products: &[Product]) -> Stats {
    let total = products.len();
    let in_stock = products.iter().filter(|p| p.in_stock).count();

    let mut categories = BTreeMap::new();
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in products {
        *categories.entry(p.category.clone()).or_insert(0) += 1;
        sum += p.price;
        min = min.min(p.price);
        max = max.max(p.price);
    }

    Stats {
        total,
        in_stock,
        out_of_stock: total - in_stock,
        categories,
        average_price: if total == 0 { 0.0 } else { round2(sum / total as f64) },
        price_range: if total == 0 {
            PriceRange { min: 0.0, max: 0.0 }
        } else {
            PriceRange { min, max }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductId;

    fn product(name: &str, price: f64, category: &str, in_stock: bool) -> Product {
        Product {
            id: ProductId::from(name),
            name: name.to_string(),
            description: String::from("desc"),
            price,
            category: category.to_string(),
            in_stock,
        }
    }

    #[test]
    fn empty_collection_yields_zeroed_stats() {
        let s = stats(&[]);
        assert_eq!(s.total, 0);
        assert_eq!(s.in_stock, 0);
        assert_eq!(s.out_of_stock, 0);
        assert!(s.categories.is_empty());
        assert_eq!(s.average_price, 0.0);
        assert_eq!(s.price_range, PriceRange { min: 0.0, max: 0.0 });
    }

    #[test]
    fn seed_scenario_aggregates_correctly() {
        let products = vec![
            product("Laptop", 1200.0, "electronics", true),
            product("Smartphone", 800.0, "electronics", true),
            product("Coffee Maker", 50.0, "kitchen", false),
        ];
        let s = stats(&products);

        assert_eq!(s.total, 3);
        assert_eq!(s.in_stock, 2);
        assert_eq!(s.out_of_stock, 1);
        assert_eq!(s.categories.get("electronics"), Some(&2));
        assert_eq!(s.categories.get("kitchen"), Some(&1));
        assert_eq!(s.average_price, 683.33);
        assert_eq!(s.price_range, PriceRange { min: 50.0, max: 1200.0 });
    }

    #[test]
    fn partitions_and_histogram_sum_to_total() {
        let products = vec![
            product("A", 1.0, "a", true),
            product("B", 2.0, "b", false),
            product("C", 3.0, "a", false),
            product("D", 4.0, "c", true),
        ];
        let s = stats(&products);

        assert_eq!(s.in_stock + s.out_of_stock, s.total);
        assert_eq!(s.categories.values().sum::<usize>(), s.total);
    }

    #[test]
    fn average_is_rounded_to_two_decimals() {
        let products = vec![
            product("A", 1.0, "a", true),
            product("B", 2.0, "a", true),
            product("C", 2.0, "a", true),
        ];
        // 5/3 = 1.666...
        assert_eq!(stats(&products).average_price, 1.67);
    }

    #[test]
    fn single_product_range_collapses() {
        let s = stats(&[product("A", 9.99, "a", true)]);
        assert_eq!(s.price_range, PriceRange { min: 9.99, max: 9.99 });
        assert_eq!(s.average_price, 9.99);
    }
}
