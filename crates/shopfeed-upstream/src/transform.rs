//! Reshaping from raw upstream records to the output catalog schema.
//!
//! Everything in this module is a pure function over already-fetched data:
//! no network, no framework types, no shared state. The HTTP layer fetches
//! and deserializes the feed, then hands it to one of the entry points here
//! and serializes whatever comes back.

use shopfeed_core::{Image, InventoryEntry, Product, Variant, Weight};

use crate::types::{UpstreamProduct, UpstreamVariant};

/// Normalizes a possibly absent or negative stock quantity.
///
/// Absent means "unknown", treated as zero. Negative upstream values are
/// clamped to zero, never propagated.
fn normalized_quantity(quantity: Option<i64>) -> i64 {
    quantity.map_or(0, |q| q.max(0))
}

fn transform_variant(variant: &UpstreamVariant) -> Variant {
    let quantity = normalized_quantity(variant.inventory_quantity);
    Variant {
        id: variant.id,
        title: variant.title.clone(),
        sku: variant.sku.clone(),
        inventory_quantity: quantity,
        available: quantity > 0,
        weight: Weight {
            value: variant.weight,
            unit: variant.weight_unit.clone(),
        },
    }
}

/// Transforms one upstream product into the output schema.
///
/// Variants keep their upstream order. Images are expanded into a single flat
/// list at the product level — variant order first, then image order within
/// each variant — with each image tagged with the id of the variant it came
/// from.
#[must_use]
pub fn transform_product(product: &UpstreamProduct) -> Product {
    let mut variants = Vec::with_capacity(product.variants.len());
    let mut images = Vec::new();

    for variant in &product.variants {
        variants.push(transform_variant(variant));
        for image in &variant.images {
            images.push(Image {
                source: image.src.clone(),
                variant_id: variant.id,
            });
        }
    }

    Product {
        code: product.id,
        title: product.title.clone(),
        vendor: product.vendor.clone(),
        body_html: product.body_html.clone(),
        variants,
        images,
    }
}

/// Scans `products` in order for the first record whose id equals `target_id`
/// and returns it transformed. Upstream ids are unique, so first match is the
/// only match under normal data.
///
/// `None` is the explicit not-found value; the HTTP layer maps it to the
/// "Invalid ID supplied" client error.
#[must_use]
pub fn find_product(target_id: i64, products: &[UpstreamProduct]) -> Option<Product> {
    products
        .iter()
        .find(|p| p.id == target_id)
        .map(transform_product)
}

/// Transforms the full upstream list, one output product per input product,
/// input order preserved. Each product is transformed independently of its
/// siblings.
#[must_use]
pub fn transform_products(products: &[UpstreamProduct]) -> Vec<Product> {
    products.iter().map(transform_product).collect()
}

/// Projects the upstream list down to a flat inventory listing: one entry per
/// variant with normalized stock, ordered by product then by variant within
/// each product. Images play no part in inventory.
#[must_use]
pub fn transform_inventory(products: &[UpstreamProduct]) -> Vec<InventoryEntry> {
    products
        .iter()
        .flat_map(|product| {
            product.variants.iter().map(|variant| InventoryEntry {
                product_id: product.id,
                variant_id: variant.id,
                stock: normalized_quantity(variant.inventory_quantity),
            })
        })
        .collect()
}
