//! Raw upstream types for the product feed endpoint.
//!
//! The feed is a plain JSON array of products in a loosely Shopify-shaped
//! format. Structural fields (`title`, `variants`, `images`, ...) are treated
//! as required: a record missing them fails deserialization of the whole
//! response rather than being silently dropped, so upstream contract
//! violations surface instead of producing partial data.
//!
//! The one documented exception is `inventory_quantity`, which upstream may
//! omit entirely; absence means "unknown", normalized to zero stock.

use serde::Deserialize;

/// A single product record as returned by the upstream feed.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamProduct {
    /// Numeric product id, unique per product.
    pub id: i64,
    pub title: String,
    pub vendor: String,
    /// Raw HTML product description.
    pub body_html: String,
    /// All purchasable variants, in upstream order.
    pub variants: Vec<UpstreamVariant>,
}

/// A single purchasable variant of an [`UpstreamProduct`].
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamVariant {
    /// Numeric variant id, unique across the whole upstream dataset.
    pub id: i64,
    pub title: String,
    pub sku: String,
    /// Stock on hand. May be absent (meaning unknown) or negative; both are
    /// normalized to non-negative values during transformation.
    #[serde(default)]
    pub inventory_quantity: Option<i64>,
    /// Numeric weight value; `weight_unit` carries the unit label.
    pub weight: f64,
    pub weight_unit: String,
    /// Images attached to this variant, in upstream order.
    pub images: Vec<UpstreamImage>,
}

/// An image attached to an [`UpstreamVariant`].
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamImage {
    /// Image URL.
    pub src: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_product_with_all_fields() {
        let json = r#"{
            "id": 1,
            "title": "T",
            "vendor": "V",
            "body_html": "<p>x</p>",
            "variants": [{
                "id": 10,
                "title": "S",
                "sku": "sku1",
                "inventory_quantity": -1,
                "weight": 1.5,
                "weight_unit": "kg",
                "images": [{"src": "http://x/1.png"}]
            }]
        }"#;
        let product: UpstreamProduct = serde_json::from_str(json).expect("deserialize");
        assert_eq!(product.id, 1);
        assert_eq!(product.variants[0].inventory_quantity, Some(-1));
        assert_eq!(product.variants[0].images[0].src, "http://x/1.png");
    }

    #[test]
    fn deserialize_variant_without_inventory_quantity() {
        let json = r#"{
            "id": 10,
            "title": "S",
            "sku": "sku1",
            "weight": 0.2,
            "weight_unit": "g",
            "images": []
        }"#;
        let variant: UpstreamVariant = serde_json::from_str(json).expect("deserialize");
        assert_eq!(variant.inventory_quantity, None);
    }

    #[test]
    fn deserialize_fails_when_variants_missing() {
        let json = r#"{"id": 1, "title": "T", "vendor": "V", "body_html": ""}"#;
        let result = serde_json::from_str::<UpstreamProduct>(json);
        assert!(result.is_err(), "missing variants must fail fast");
    }

    #[test]
    fn deserialize_fails_when_variant_images_missing() {
        let json = r#"{
            "id": 10,
            "title": "S",
            "sku": "sku1",
            "weight": 0.2,
            "weight_unit": "g"
        }"#;
        let result = serde_json::from_str::<UpstreamVariant>(json);
        assert!(result.is_err(), "missing images must fail fast");
    }
}
