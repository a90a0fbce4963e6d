//! Serde models for the Magento entities these repositories move.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::attributes::MagentoCustomAttributeCollection;
use crate::image::ImageContent;

/// Binds a serde model to its Magento REST resource.
pub trait MagentoEntity: Serialize + DeserializeOwned + Send + Sync {
    /// Resource path segment, e.g. `products`.
    const RESOURCE: &'static str;

    /// Key wrapping the entity in request bodies, e.g.
    /// `{"product": {...}}`.
    const WRAPPER: &'static str;

    /// The identifier as it appears in the resource path, when the entity
    /// has one. Products are addressed by SKU, customers by numeric id.
    fn entity_id(&self) -> Option<String>;
}

/// Search response envelope returned by every Magento list endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct SearchResults<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub sku: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// 1 = enabled, 2 = disabled (Magento status codes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(default, skip_serializing_if = "MagentoCustomAttributeCollection::is_empty")]
    pub custom_attributes: MagentoCustomAttributeCollection,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media_gallery_entries: Vec<MediaGalleryEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MediaGalleryEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub media_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Inline payload, present when uploading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ImageContent>,
}

impl MagentoEntity for Product {
    const RESOURCE: &'static str = "products";
    const WRAPPER: &'static str = "product";

    fn entity_id(&self) -> Option<String> {
        if self.sku.is_empty() {
            None
        } else {
            Some(self.sku.clone())
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<u32>,
    #[serde(default, skip_serializing_if = "MagentoCustomAttributeCollection::is_empty")]
    pub custom_attributes: MagentoCustomAttributeCollection,
}

impl MagentoEntity for Customer {
    const RESOURCE: &'static str = "customers";
    const WRAPPER: &'static str = "customer";

    fn entity_id(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_round_trips_with_custom_attributes() {
        let json = serde_json::json!({
            "id": 42,
            "sku": "WS-01",
            "name": "Shirt",
            "price": 19.99,
            "status": 1,
            "custom_attributes": [
                {"attribute_code": "color", "value": "red"},
            ],
        });
        let product: Product = serde_json::from_value(json).unwrap();
        assert_eq!(product.custom_attributes.get("Color"), Some("red"));
        assert_eq!(product.entity_id(), Some("WS-01".to_owned()));

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back["custom_attributes"][0]["attribute_code"], "color");
    }

    #[test]
    fn empty_bags_are_omitted_from_serialization() {
        let product = Product {
            id: None,
            sku: "WS-01".to_owned(),
            name: "Shirt".to_owned(),
            price: None,
            status: None,
            custom_attributes: MagentoCustomAttributeCollection::new(),
            media_gallery_entries: Vec::new(),
        };
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("custom_attributes").is_none());
        assert!(json.get("media_gallery_entries").is_none());
    }

    #[test]
    fn customer_id_renders_into_the_path() {
        let customer = Customer {
            id: Some(17),
            email: "a@example.com".to_owned(),
            firstname: "Ada".to_owned(),
            lastname: "Lovelace".to_owned(),
            store_id: None,
            custom_attributes: MagentoCustomAttributeCollection::new(),
        };
        assert_eq!(customer.entity_id(), Some("17".to_owned()));
    }

    #[test]
    fn search_results_envelope_deserializes() {
        let json = serde_json::json!({
            "items": [{"sku": "WS-01", "name": "Shirt"}],
            "total_count": 1,
        });
        let results: SearchResults<Product> = serde_json::from_value(json).unwrap();
        assert_eq!(results.total_count, 1);
        assert_eq!(results.items[0].sku, "WS-01");
    }
}
