use serde::{Deserialize, Serialize};

/// A catalog product reshaped for API consumers.
///
/// Field names on the wire are fixed by the output schema: `code` carries the
/// upstream product id, `bodyHtml` is camel-cased, and `images` is a single
/// flat list across all variants rather than nested per variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Upstream product id.
    pub code: i64,
    pub title: String,
    pub vendor: String,
    /// Raw HTML description, passed through from upstream `body_html`.
    #[serde(rename = "bodyHtml")]
    pub body_html: String,
    /// One entry per upstream variant, upstream order preserved.
    pub variants: Vec<Variant>,
    /// All variant images flattened to the product level, ordered by variant
    /// then by image position within the variant.
    pub images: Vec<Image>,
}

/// A single purchasable variant of a [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: i64,
    pub title: String,
    pub sku: String,
    /// Stock on hand, clamped to `>= 0`. Absent upstream quantities become 0.
    pub inventory_quantity: i64,
    /// `true` iff `inventory_quantity > 0`.
    pub available: bool,
    pub weight: Weight,
}

/// A weight value paired with its unit label (e.g. `1.5` + `"kg"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub value: f64,
    pub unit: String,
}

/// A product image tagged with the variant it came from.
///
/// `variant_id` is a back-reference, not ownership: after flattening it is
/// the only record of which variant the image belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Image URL, from upstream `src`.
    pub source: String,
    #[serde(rename = "variantId")]
    pub variant_id: i64,
}

/// One row of the store-wide inventory projection: product, variant, stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    #[serde(rename = "productId")]
    pub product_id: i64,
    #[serde(rename = "variantId")]
    pub variant_id: i64,
    /// Normalized (non-negative) stock quantity.
    pub stock: i64,
}

impl Product {
    /// Returns the total number of variants for this product.
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Returns `true` if at least one variant has stock on hand.
    #[must_use]
    pub fn has_available_variants(&self) -> bool {
        self.variants.iter().any(|v| v.available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_variant(id: i64, quantity: i64) -> Variant {
        Variant {
            id,
            title: "Small".to_string(),
            sku: "SKU-001".to_string(),
            inventory_quantity: quantity,
            available: quantity > 0,
            weight: Weight {
                value: 1.5,
                unit: "kg".to_string(),
            },
        }
    }

    fn make_product(variants: Vec<Variant>, images: Vec<Image>) -> Product {
        Product {
            code: 1,
            title: "Test Product".to_string(),
            vendor: "Test Vendor".to_string(),
            body_html: "<p>desc</p>".to_string(),
            variants,
            images,
        }
    }

    #[test]
    fn variant_count_matches_variants_len() {
        let product = make_product(vec![make_variant(1, 3), make_variant(2, 0)], vec![]);
        assert_eq!(product.variant_count(), 2);
    }

    #[test]
    fn has_available_variants_false_when_all_out_of_stock() {
        let product = make_product(vec![make_variant(1, 0), make_variant(2, 0)], vec![]);
        assert!(!product.has_available_variants());
    }

    #[test]
    fn has_available_variants_true_when_any_in_stock() {
        let product = make_product(vec![make_variant(1, 0), make_variant(2, 7)], vec![]);
        assert!(product.has_available_variants());
    }

    #[test]
    fn product_serializes_with_schema_field_names() {
        let product = make_product(
            vec![make_variant(10, 2)],
            vec![Image {
                source: "http://x/1.png".to_string(),
                variant_id: 10,
            }],
        );
        let json = serde_json::to_value(&product).expect("serialize Product");
        assert_eq!(json["code"].as_i64(), Some(1));
        assert!(json["bodyHtml"].is_string(), "bodyHtml must be camel-cased");
        assert!(
            json.get("body_html").is_none(),
            "snake_case body_html must not appear on the wire"
        );
        assert_eq!(json["images"][0]["variantId"].as_i64(), Some(10));
        assert!(json["images"][0].get("variant_id").is_none());
    }

    #[test]
    fn inventory_entry_serializes_with_schema_field_names() {
        let entry = InventoryEntry {
            product_id: 1,
            variant_id: 10,
            stock: 5,
        };
        let json = serde_json::to_value(&entry).expect("serialize InventoryEntry");
        assert_eq!(json["productId"].as_i64(), Some(1));
        assert_eq!(json["variantId"].as_i64(), Some(10));
        assert_eq!(json["stock"].as_i64(), Some(5));
    }

    #[test]
    fn serde_roundtrip_product() {
        let product = make_product(
            vec![make_variant(10, 2)],
            vec![Image {
                source: "http://x/1.png".to_string(),
                variant_id: 10,
            }],
        );
        let json = serde_json::to_string(&product).expect("serialization failed");
        let decoded: Product = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded, product);
    }
}
