use std::fmt;

use serde::Deserialize;

/// Which identifier field a FoodQR lookup was keyed on. The service does
/// not document which identifier a caller holds, so both are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMethod {
    /// Regulatory report number (`imrptNo`).
    ReportNo,
    /// Retail barcode (`brcdNo`).
    Barcode,
}

impl SearchMethod {
    pub(crate) fn param(self) -> &'static str {
        match self {
            Self::ReportNo => "imrptNo",
            Self::Barcode => "brcdNo",
        }
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReportNo => write!(f, "product report number (imrptNo)"),
            Self::Barcode => write!(f, "barcode (brcdNo)"),
        }
    }
}

/// One e-label product record.
#[derive(Debug, Clone, Deserialize)]
pub struct QrProduct {
    #[serde(rename = "prdctNm", default)]
    pub product_name: Option<String>,
    /// Raw-material statement; HTML fragment, not plain text.
    #[serde(rename = "prvwCn", default)]
    pub preview_html: Option<String>,
}

/// Response envelope: `{"response": {"body": {"items": ...}}}`, with the
/// same object-or-array `items` ambiguity as the other registries.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub response: Option<ResponseBody>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseBody {
    #[serde(default)]
    pub body: Option<Body>,
}

#[derive(Debug, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub items: Option<Items>,
}

/// Object-shaped `items` counts only when the `item` wrapper is present;
/// a bare object (e.g. `{}` or a stray metadata map) is not a product.
/// List entries are laxer and may omit the wrapper.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Items {
    Many(Vec<ItemEntry>),
    One { item: QrProduct },
    Other(serde_json::Value),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ItemEntry {
    Wrapped { item: QrProduct },
    Plain(QrProduct),
}

impl ItemEntry {
    fn into_product(self) -> QrProduct {
        match self {
            Self::Wrapped { item } => item,
            Self::Plain(product) => product,
        }
    }
}

impl Envelope {
    /// Coerce the envelope into a flat product list.
    pub fn into_products(self) -> Vec<QrProduct> {
        let items = match self
            .response
            .and_then(|response| response.body)
            .and_then(|body| body.items)
        {
            Some(items) => items,
            None => return Vec::new(),
        };
        match items {
            Items::Many(entries) => entries.into_iter().map(ItemEntry::into_product).collect(),
            Items::One { item } => vec![item],
            Items::Other(_) => Vec::new(),
        }
    }
}
