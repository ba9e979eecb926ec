//! Manufacturer catalog and wire types shared across the app.
//!
//! The catalog is fixed at build time: each manufacturer maps a single-letter
//! code to a backing table on the products endpoint plus the ordered column
//! schema its rows are rendered against.

use serde::Deserialize;

/// An opaque product record as returned by the products endpoint.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// One column of a manufacturer's table schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

const fn col(key: &'static str, label: &'static str) -> Column {
    Column { key, label }
}

/// A fixed upstream data source with its own backing table and column schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Manufacturer {
    pub code: char,
    pub name: &'static str,
    pub table: &'static str,
    pub columns: &'static [Column],
}

impl Manufacturer {
    /// Heading for the results card.
    pub fn card_title(&self) -> String {
        match self.code {
            'F' => "Shopify Cart Products".to_string(),
            'G' => "Massiano Inventory".to_string(),
            'H' => "Universal Products".to_string(),
            _ => format!("{} Products", self.name),
        }
    }
}

/// The eight fixed manufacturer entries, keyed by codes A through H.
pub static MANUFACTURERS: [Manufacturer; 8] = [
    Manufacturer {
        code: 'A',
        name: "Bernhardt",
        table: "bernhardt_products",
        columns: &[
            col("id", "ID"),
            col("name", "Product Name"),
            col("sku", "SKU"),
            col("msrp", "MSRP"),
            col("price", "Price"),
            col("status", "Status"),
            col("quantity", "Qty"),
            col("next_availability_date", "Next Available"),
            col("last_updated", "Updated"),
        ],
    },
    Manufacturer {
        code: 'B',
        name: "Ashley",
        table: "ashley_products",
        columns: &[
            col("product_name", "Name"),
            col("product_sku", "SKU"),
            col("product_status", "Status"),
            col("inventory_qtyvalue", "Qty"),
            col("last_updated", "Updated"),
        ],
    },
    Manufacturer {
        code: 'C',
        name: "Coaster",
        table: "coaster_products",
        columns: &[
            col("product_sku", "SKU"),
            col("product_status", "Status"),
            col("inventory_qtyvalue", "Qty"),
            col("last_updated", "Updated"),
        ],
    },
    Manufacturer {
        code: 'D',
        name: "Luonto",
        table: "luonto_products",
        columns: &[
            col("id", "ID"),
            col("productname", "Name"),
            col("productsku", "SKU"),
            col("availability", "Availability"),
            col("last_updated", "Updated"),
        ],
    },
    Manufacturer {
        code: 'E',
        name: "BH",
        table: "bh_products",
        columns: &[
            col("id", "ID"),
            col("vendor_sku", "Vendor SKU"),
            col("description", "Description"),
            col("quantity", "Qty"),
            col("last_updated", "Updated"),
        ],
    },
    Manufacturer {
        code: 'F',
        name: "Shopify Carts",
        table: "shopify_carts",
        columns: &[
            col("id", "ID"),
            col("store_domain", "Store"),
            col("cart_token", "Cart Token"),
            col("product_id", "Product ID"),
            col("sku", "SKU"),
            col("product_title", "Title"),
            col("vendor", "Vendor"),
            col("amount", "Amount"),
            col("quantity", "Qty"),
            col("received_at", "Received At"),
        ],
    },
    Manufacturer {
        code: 'G',
        name: "Massiano Inventory",
        table: "massiano_inventory",
        columns: &[
            col("sku", "SKU"),
            col("name", "Product Name"),
            col("po_number", "PO Number"),
            col("received_qty", "Received Qty"),
            col("pending_qty", "Pending Qty"),
            col("total_qty", "Total Qty"),
            col("weight_per_unit", "Weight/Unit"),
            col("cube_per_unit", "Cube/Unit"),
            col("fulfilled_cube", "Fulfilled Cube"),
            col("vendor", "Vendor"),
            col("status", "Status"),
            col("last_updated", "Updated"),
        ],
    },
    Manufacturer {
        code: 'H',
        name: "Universal Products",
        table: "universal_newproducts_modified",
        columns: &[
            col("id", "ID"),
            col("name", "Product Name"),
            col("sku", "SKU"),
            col("quantity", "Quantity"),
            col("retail_price", "Retail Price"),
            col("your_price", "Your Price"),
            col("availability_date", "Availability Date"),
            col("last_updated", "Updated"),
        ],
    },
];

pub fn manufacturer_by_code(code: char) -> Option<&'static Manufacturer> {
    MANUFACTURERS.iter().find(|m| m.code == code)
}

/// One table's slice of the products response: the current page of rows plus
/// the total number of matching records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TableSlice {
    #[serde(default)]
    pub data: Vec<Record>,
    #[serde(default)]
    pub count: u64,
}
