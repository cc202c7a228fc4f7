//! Catalogue filter/sort engine.
//!
//! A pure, synchronous transform: products in, filtered and ordered
//! products out. Callers pre-scope the input to the correct product kind
//! and active status; the engine only applies the user-selected filters
//! and sort order.

use crate::catalog::{AttributeDefinition, Brand, Product};
use crate::listing::{Facet, FilterCriteria, SortKey};
use std::cmp::Ordering;

/// Filter a product list by the given criteria and sort the survivors.
///
/// Returns a new list; the input is never mutated. Malformed criteria
/// degrade gracefully (an inverted price range yields zero results, empty
/// sets impose no constraint), so the function is total.
///
/// Sorting is stable: products with an equal sort key keep their relative
/// input order.
pub fn apply_filters_and_sort(
    products: &[Product],
    criteria: &FilterCriteria,
    sort: SortKey,
) -> Vec<Product> {
    let mut matched: Vec<Product> = products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect();

    // Vec::sort_by is stable, which gives the tie-preservation guarantee
    // for free.
    matched.sort_by(|a, b| compare(a, b, sort));
    matched
}

fn compare(a: &Product, b: &Product, sort: SortKey) -> Ordering {
    match sort {
        SortKey::NameAsc => case_insensitive(&a.name, &b.name),
        SortKey::PriceAsc => a.price.amount_cents.cmp(&b.price.amount_cents),
        SortKey::PriceDesc => b.price.amount_cents.cmp(&a.price.amount_cents),
    }
}

/// Case-insensitive comparison using Unicode lowercasing, so accented
/// product names compare the same regardless of letter case.
fn case_insensitive(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Build the brand facet for a product slice.
///
/// Counts reflect the scoped (pre-filter) set; `selected` flags come from
/// the active criteria. Brands with no products in the slice are omitted.
pub fn brand_facet(products: &[Product], brands: &[Brand], criteria: &FilterCriteria) -> Facet {
    let mut facet = Facet::new("Brand", "brand");
    for brand in brands {
        let count = products
            .iter()
            .filter(|p| p.brand_id.as_ref() == Some(&brand.id))
            .count() as i64;
        if count > 0 {
            facet.add_value(&brand.name, count, criteria.brands.contains(&brand.id));
        }
    }
    facet
}

/// Build one facet per filterable attribute definition.
///
/// Values follow the definition's controlled order; values carried by no
/// product in the slice are omitted.
pub fn attribute_facets(
    products: &[Product],
    definitions: &[AttributeDefinition],
    criteria: &FilterCriteria,
) -> Vec<Facet> {
    definitions
        .iter()
        .filter(|def| def.filterable)
        .map(|def| {
            let mut facet = Facet::new(&def.name, def.id.as_str());
            let selected = criteria.attributes.get(&def.id);
            for value in &def.values {
                let count = products
                    .iter()
                    .filter(|p| p.attribute(&def.id) == Some(value.as_str()))
                    .count() as i64;
                if count > 0 {
                    let is_selected = selected.map(|s| s.contains(value)).unwrap_or(false);
                    facet.add_value(value, count, is_selected);
                }
            }
            facet
        })
        .filter(|facet| !facet.values.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductKind;
    use crate::ids::{AttributeId, BrandId, CategoryId};
    use crate::money::{Currency, Money};

    fn product(name: &str, price_cents: i64) -> Product {
        Product::new(
            format!("SKU-{name}"),
            name,
            name.to_lowercase(),
            CategoryId::new("cat-laptops"),
            ProductKind::Sale,
            Money::new(price_cents, Currency::EUR),
        )
    }

    fn eur(cents: i64) -> Money {
        Money::new(cents, Currency::EUR)
    }

    #[test]
    fn test_empty_criteria_returns_all_sorted_by_name() {
        let products = vec![product("Zebra", 100), product("alpha", 300), product("Mango", 200)];
        let result = apply_filters_and_sort(&products, &FilterCriteria::new(), SortKey::NameAsc);

        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "Mango", "Zebra"]);
        assert_eq!(result.len(), products.len());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let products = vec![product("B", 200), product("A", 100)];
        let before = products.clone();
        let _ = apply_filters_and_sort(&products, &FilterCriteria::new(), SortKey::PriceAsc);
        assert_eq!(products, before);
    }

    #[test]
    fn test_brand_filter_returns_exact_subset() {
        let lenovo = BrandId::new("brand-lenovo");
        let hp = BrandId::new("brand-hp");

        let mut a = product("A", 100);
        a.set_brand(lenovo.clone());
        let mut b = product("B", 200);
        b.set_brand(hp.clone());
        let mut c = product("C", 300);
        c.set_brand(lenovo.clone());
        let products = vec![a, b, c];

        let criteria = FilterCriteria::new().with_brand(lenovo.clone());
        let result = apply_filters_and_sort(&products, &criteria, SortKey::NameAsc);

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|p| p.brand_id.as_ref() == Some(&lenovo)));

        // Filtering its own output again changes nothing.
        let again = apply_filters_and_sort(&result, &criteria, SortKey::NameAsc);
        assert_eq!(again, result);
    }

    #[test]
    fn test_inverted_price_range_yields_empty() {
        let products = vec![product("A", 100), product("B", 200)];
        let criteria = FilterCriteria::new().with_price_range(eur(2000), eur(1000));

        let result = apply_filters_and_sort(&products, &criteria, SortKey::NameAsc);
        assert!(result.is_empty());
    }

    #[test]
    fn test_price_sort_is_stable_on_ties() {
        // B and C share a price; B precedes C in the input and must keep
        // that position after sorting.
        let products = vec![product("B", 200), product("A", 100), product("C", 200)];
        let result = apply_filters_and_sort(&products, &FilterCriteria::new(), SortKey::PriceAsc);

        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_price_desc() {
        let products = vec![product("A", 100), product("B", 300), product("C", 200)];
        let result = apply_filters_and_sort(&products, &FilterCriteria::new(), SortKey::PriceDesc);

        let prices: Vec<i64> = result.iter().map(|p| p.price.amount_cents).collect();
        assert_eq!(prices, vec![300, 200, 100]);
    }

    #[test]
    fn test_in_stock_filter_preserves_order() {
        let mut products = vec![
            product("A", 100),
            product("B", 100),
            product("C", 100),
            product("D", 100),
        ];
        products[0].stock_quantity = 0;
        products[1].stock_quantity = 3;
        products[2].stock_quantity = 0;
        products[3].stock_quantity = 5;

        let criteria = FilterCriteria::new().in_stock();
        let result = apply_filters_and_sort(&products, &criteria, SortKey::PriceAsc);

        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "D"]);
    }

    #[test]
    fn test_attribute_filter_excludes_missing_attribute() {
        let ram = AttributeId::new("attr-ram");
        let mut a = product("A", 100);
        a.set_attribute(ram.clone(), "16 Go");
        let b = product("B", 100);
        let products = vec![a, b];

        let criteria = FilterCriteria::new().with_attribute_value(ram, "16 Go");
        let result = apply_filters_and_sort(&products, &criteria, SortKey::NameAsc);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "A");
    }

    #[test]
    fn test_all_filters_disabled_is_identity_up_to_sorting() {
        let products = vec![product("C", 300), product("A", 100), product("B", 200)];
        let result = apply_filters_and_sort(&products, &FilterCriteria::new(), SortKey::PriceAsc);

        assert_eq!(result.len(), products.len());
        for p in &products {
            assert!(result.iter().any(|r| r.id == p.id));
        }
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let products = vec![product("banana", 1), product("Apple", 2), product("cherry", 3)];
        let result = apply_filters_and_sort(&products, &FilterCriteria::new(), SortKey::NameAsc);

        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_brand_facet_counts() {
        let mut lenovo = Brand::new("Lenovo", "lenovo");
        lenovo.id = BrandId::new("brand-lenovo");
        let mut hp = Brand::new("HP", "hp");
        hp.id = BrandId::new("brand-hp");
        let mut dell = Brand::new("Dell", "dell");
        dell.id = BrandId::new("brand-dell");

        let mut a = product("A", 100);
        a.set_brand(lenovo.id.clone());
        let mut b = product("B", 200);
        b.set_brand(lenovo.id.clone());
        let mut c = product("C", 300);
        c.set_brand(hp.id.clone());
        let products = vec![a, b, c];

        let criteria = FilterCriteria::new().with_brand(hp.id.clone());
        let facet = brand_facet(&products, &[lenovo, hp, dell], &criteria);

        assert_eq!(facet.values.len(), 2); // Dell omitted, no products
        assert_eq!(facet.values[0].value, "Lenovo");
        assert_eq!(facet.values[0].count, 2);
        assert!(!facet.values[0].selected);
        assert_eq!(facet.values[1].value, "HP");
        assert_eq!(facet.values[1].count, 1);
        assert!(facet.values[1].selected);
    }

    #[test]
    fn test_attribute_facets_follow_definition_order() {
        let category = CategoryId::new("cat-laptops");
        let mut ram = AttributeDefinition::new(
            category.clone(),
            "RAM",
            vec!["8 Go".to_string(), "16 Go".to_string(), "32 Go".to_string()],
        );
        ram.id = AttributeId::new("attr-ram");

        let mut a = product("A", 100);
        a.set_attribute(ram.id.clone(), "16 Go");
        let mut b = product("B", 200);
        b.set_attribute(ram.id.clone(), "8 Go");
        let products = vec![a, b];

        let facets = attribute_facets(&products, &[ram], &FilterCriteria::new());
        assert_eq!(facets.len(), 1);
        let values: Vec<&str> = facets[0].values.iter().map(|v| v.value.as_str()).collect();
        assert_eq!(values, vec!["8 Go", "16 Go"]); // 32 Go omitted, no products
    }

    #[test]
    fn test_non_filterable_attributes_produce_no_facet() {
        let category = CategoryId::new("cat-laptops");
        let mut weight = AttributeDefinition::new(category, "Weight", vec!["1.4 kg".to_string()]);
        weight.filterable = false;

        let mut a = product("A", 100);
        a.set_attribute(weight.id.clone(), "1.4 kg");

        let facets = attribute_facets(&[a], &[weight], &FilterCriteria::new());
        assert!(facets.is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            proptest::collection::vec(
                ("[a-zA-Z]{1,12}", 0i64..100_000, 0i64..10),
                0..40,
            )
            .prop_map(|rows| {
                rows
                    .into_iter()
                    .map(|(name, cents, stock)| {
                        let mut p = product(&name, cents);
                        p.stock_quantity = stock;
                        p
                    })
                    .collect()
            })
        }

        proptest! {
            /// Property: the engine is idempotent. Running the same
            /// criteria and sort on its own output is a fixed point.
            #[test]
            fn engine_is_idempotent(products in arb_products()) {
                let criteria = FilterCriteria::new()
                    .with_price_range(eur(10_000), eur(90_000))
                    .in_stock();
                let once = apply_filters_and_sort(&products, &criteria, SortKey::PriceAsc);
                let twice = apply_filters_and_sort(&once, &criteria, SortKey::PriceAsc);
                prop_assert_eq!(once, twice);
            }

            /// Property: filtering never invents products and every
            /// survivor passes the criteria.
            #[test]
            fn output_is_a_matching_subset(products in arb_products()) {
                let criteria = FilterCriteria::new().in_stock();
                let result = apply_filters_and_sort(&products, &criteria, SortKey::NameAsc);

                prop_assert!(result.len() <= products.len());
                for p in &result {
                    prop_assert!(criteria.matches(p));
                    prop_assert!(products.iter().any(|orig| orig.id == p.id));
                }
            }

            /// Property: price sort output is ordered.
            #[test]
            fn price_sort_orders_output(products in arb_products()) {
                let result = apply_filters_and_sort(
                    &products,
                    &FilterCriteria::new(),
                    SortKey::PriceAsc,
                );
                for pair in result.windows(2) {
                    prop_assert!(pair[0].price.amount_cents <= pair[1].price.amount_cents);
                }
            }

            /// Property: equal-price products keep their input order.
            #[test]
            fn price_sort_is_stable(products in arb_products()) {
                let result = apply_filters_and_sort(
                    &products,
                    &FilterCriteria::new(),
                    SortKey::PriceAsc,
                );
                for pair in result.windows(2) {
                    if pair[0].price.amount_cents == pair[1].price.amount_cents {
                        let i = products.iter().position(|o| o.id == pair[0].id).unwrap();
                        let j = products.iter().position(|o| o.id == pair[1].id).unwrap();
                        prop_assert!(i < j);
                    }
                }
            }
        }
    }
}
