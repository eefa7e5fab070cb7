use serde::Deserialize;

/// One certified product from the HACCP listing service.
#[derive(Debug, Clone, Deserialize)]
pub struct CertProduct {
    #[serde(rename = "prdlstNm", default)]
    pub product_name: Option<String>,
    #[serde(rename = "rawmtrl", default)]
    pub raw_materials: Option<String>,
    #[serde(rename = "prdlstReportNo", default)]
    pub report_no: Option<String>,
    #[serde(rename = "manufacture", default)]
    pub manufacturer: Option<String>,
}

/// Response envelope for `getCertImgListServiceV3`.
///
/// The service omits `body` on some error paths and renders `items` as an
/// object when exactly one product matches, so every level is optional and
/// the item list is coerced to a `Vec` right after parsing.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub body: Option<Body>,
}

#[derive(Debug, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub items: Option<Items>,
}

/// `items` is sometimes a list, sometimes a single object, and sometimes
/// an empty string. Anything unrecognized coerces to an empty list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Items {
    Many(Vec<ItemEntry>),
    One(Box<ItemEntry>),
    Other(serde_json::Value),
}

/// A list entry may wrap the product in an extra `item` object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ItemEntry {
    Wrapped { item: CertProduct },
    Plain(CertProduct),
}

impl ItemEntry {
    fn into_product(self) -> CertProduct {
        match self {
            Self::Wrapped { item } => item,
            Self::Plain(product) => product,
        }
    }
}

impl Envelope {
    /// Coerce the envelope into a flat product list.
    pub fn into_products(self) -> Vec<CertProduct> {
        let items = match self.body.and_then(|body| body.items) {
            Some(items) => items,
            None => return Vec::new(),
        };
        match items {
            Items::Many(entries) => entries.into_iter().map(ItemEntry::into_product).collect(),
            Items::One(entry) => vec![entry.into_product()],
            Items::Other(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_shaped_items() {
        let json = r#"{
            "header": {"resultCode": "00"},
            "body": {
                "items": [
                    {"item": {"prdlstNm": "Test Snack", "rawmtrl": "우유, 밀가루", "prdlstReportNo": "12345"}},
                    {"item": {"prdlstNm": "Other", "rawmtrl": ""}}
                ],
                "totalCount": 2
            }
        }"#;

        let envelope: Envelope = serde_json::from_str(json).unwrap();
        let products = envelope.into_products();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].product_name.as_deref(), Some("Test Snack"));
        assert_eq!(products[0].raw_materials.as_deref(), Some("우유, 밀가루"));
        assert_eq!(products[0].report_no.as_deref(), Some("12345"));
    }

    #[test]
    fn parses_object_shaped_items() {
        let json = r#"{
            "body": {"items": {"item": {"prdlstNm": "Single", "rawmtrl": "대두"}}}
        }"#;

        let envelope: Envelope = serde_json::from_str(json).unwrap();
        let products = envelope.into_products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].product_name.as_deref(), Some("Single"));
    }

    #[test]
    fn parses_unwrapped_items() {
        let json = r#"{
            "body": {"items": [{"prdlstNm": "Bare", "rawmtrl": "콩"}]}
        }"#;

        let envelope: Envelope = serde_json::from_str(json).unwrap();
        let products = envelope.into_products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].product_name.as_deref(), Some("Bare"));
    }

    #[test]
    fn empty_or_malformed_items_coerce_to_no_products() {
        for json in [
            r#"{"body": {"items": ""}}"#,
            r#"{"body": {"items": null}}"#,
            r#"{"body": {}}"#,
            r#"{}"#,
        ] {
            let envelope: Envelope = serde_json::from_str(json).unwrap();
            assert!(envelope.into_products().is_empty(), "expected miss for {json}");
        }
    }
}
