//! Category → assortiment → product join used by the overview section.
//!
//! All functions borrow from the fetched lists and keep input order.
//! References that point nowhere simply produce empty groups.

use crate::domain::model::{
    Assortiment, AssortimentOverviewItem, CatalogAssortiment, CatalogCategory, CatalogProduct,
    Category, CategoryOverview, Product,
};

/// Assortiments whose category link points at `category_id`.
pub fn assortiments_by_category<'a>(
    category_id: &str,
    assortiments: &'a [Assortiment],
) -> Vec<&'a Assortiment> {
    assortiments
        .iter()
        .filter(|assortiment| assortiment.category_id() == Some(category_id))
        .collect()
}

/// One item per assortiment, holding the products linked to it.
pub fn products_by_assortiment<'a>(
    assortiments: &[&'a Assortiment],
    products: &'a [Product],
) -> Vec<AssortimentOverviewItem<'a>> {
    assortiments
        .iter()
        .map(|&assortiment| AssortimentOverviewItem {
            title: assortiment.name(),
            products: products
                .iter()
                .filter(|product| product.assortiment_id() == Some(assortiment.id.as_str()))
                .collect(),
        })
        .collect()
}

pub fn build_overview<'a>(
    categories: &'a [Category],
    assortiments: &'a [Assortiment],
    products: &'a [Product],
) -> Vec<CategoryOverview<'a>> {
    categories
        .iter()
        .map(|category| {
            let in_category = assortiments_by_category(&category.id, assortiments);
            CategoryOverview {
                category,
                items: products_by_assortiment(&in_category, products),
            }
        })
        .collect()
}

/// Owned copy of the overview for the JSON and CSV exports.
pub fn to_catalog(overview: &[CategoryOverview<'_>]) -> Vec<CatalogCategory> {
    overview
        .iter()
        .map(|section| CatalogCategory {
            id: section.category.id.clone(),
            name: section.category.name().to_string(),
            assortiments: section
                .items
                .iter()
                .map(|item| CatalogAssortiment {
                    title: item.title.to_string(),
                    products: item
                        .products
                        .iter()
                        .map(|product| CatalogProduct {
                            id: product.id.clone(),
                            name: product.name().to_string(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}
