//! # Seed Data
//!
//! Sample collections for development and tests.
//!
//! These are plain functions returning fresh vectors, not module-level
//! statics: every store instance gets its own copy injected through its
//! constructor, so tests never share mutable state.

use chrono::NaiveDate;

use bodega_core::money::Money;
use bodega_core::types::{
    Debt, DebtStatus, LineItem, PaymentType, Product, Sale, SaleStatus, Supplier, SupplierStatus,
    Unit,
};

/// Stock image references used by the sample products.
pub const SAMPLE_PRODUCT_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.0.3",
    "https://images.unsplash.com/photo-1514963629718-4f9795ee8c27?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.0.3",
    "https://images.unsplash.com/photo-1517081719645-0456073ca84d?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.0.3",
];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Literal dates in this file are always valid
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn item(name: &str, quantity: i64, unit: Unit, price_cents: i64) -> LineItem {
    LineItem::new(name, quantity, unit, Money::from_cents(price_cents))
        .expect("valid seed line item")
}

/// Sample customer debts (normally derived from credit sales).
pub fn sample_debts() -> Vec<Debt> {
    vec![
        Debt {
            id: 1,
            customer_name: "John Doe".to_string(),
            amount_cents: 3500,
            created_date: date(2023, 4, 10),
            due_date: date(2023, 4, 20),
            items: vec![item("Rice", 10, Unit::Kg, 350)],
            status: DebtStatus::Pending,
            notified: false,
        },
        Debt {
            id: 2,
            customer_name: "Sarah Williams".to_string(),
            amount_cents: 4550,
            created_date: date(2023, 4, 5),
            due_date: date(2023, 4, 15),
            items: vec![
                item("Sugar", 5, Unit::Kg, 250),
                item("Beans", 5, Unit::Kg, 450),
                item("Salt", 2, Unit::Kg, 525),
            ],
            status: DebtStatus::Pending,
            notified: true,
        },
        Debt {
            id: 3,
            customer_name: "Michael Johnson".to_string(),
            amount_cents: 6725,
            created_date: date(2023, 3, 28),
            due_date: date(2023, 4, 7),
            items: vec![
                item("Rice", 15, Unit::Kg, 350),
                item("Sugar", 3, Unit::Kg, 250),
                item("Salt", 1, Unit::Kg, 725),
            ],
            status: DebtStatus::Overdue,
            notified: true,
        },
        Debt {
            id: 4,
            customer_name: "Linda Brown".to_string(),
            amount_cents: 2375,
            created_date: date(2023, 4, 1),
            due_date: date(2023, 4, 8),
            items: vec![
                item("Beans", 3, Unit::Kg, 450),
                item("Sugar", 2, Unit::Kg, 250),
                item("Salt", 1, Unit::Kg, 525),
            ],
            status: DebtStatus::Overdue,
            notified: false,
        },
    ]
}

/// Sample inventory products.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Rice".to_string(),
            category: "Grains".to_string(),
            quantity: 50,
            unit: Unit::Kg,
            cost_price_cents: 250,
            selling_price_cents: 350,
            supplier: "Global Foods Inc.".to_string(),
            stock_alert: 10,
            last_restocked: date(2023, 4, 1),
            image: Some(SAMPLE_PRODUCT_IMAGES[0].to_string()),
        },
        Product {
            id: 2,
            name: "Sugar".to_string(),
            category: "Sweeteners".to_string(),
            quantity: 30,
            unit: Unit::Kg,
            cost_price_cents: 180,
            selling_price_cents: 250,
            supplier: "Global Foods Inc.".to_string(),
            stock_alert: 5,
            last_restocked: date(2023, 4, 5),
            image: Some(SAMPLE_PRODUCT_IMAGES[1].to_string()),
        },
        Product {
            id: 3,
            name: "Beans".to_string(),
            category: "Legumes".to_string(),
            quantity: 25,
            unit: Unit::Kg,
            cost_price_cents: 320,
            selling_price_cents: 450,
            supplier: "Global Foods Inc.".to_string(),
            stock_alert: 8,
            last_restocked: date(2023, 4, 10),
            image: Some(SAMPLE_PRODUCT_IMAGES[2].to_string()),
        },
    ]
}

/// Sample recorded sales, newest first.
pub fn sample_sales() -> Vec<Sale> {
    vec![
        Sale {
            id: 1,
            date: date(2023, 4, 12),
            items: vec![item("Rice", 5, Unit::Kg, 350)],
            total_amount_cents: 1750,
            payment_type: PaymentType::Cash,
            status: SaleStatus::Completed,
            customer_name: None,
            due_date: None,
        },
        Sale {
            id: 2,
            date: date(2023, 4, 11),
            items: vec![
                item("Sugar", 2, Unit::Kg, 250),
                item("Beans", 3, Unit::Kg, 450),
            ],
            total_amount_cents: 1850,
            payment_type: PaymentType::Cash,
            status: SaleStatus::Completed,
            customer_name: None,
            due_date: None,
        },
        Sale {
            id: 3,
            date: date(2023, 4, 10),
            items: vec![item("Rice", 10, Unit::Kg, 350)],
            total_amount_cents: 3500,
            payment_type: PaymentType::Credit,
            status: SaleStatus::Pending,
            customer_name: Some("John Doe".to_string()),
            due_date: Some(date(2023, 4, 20)),
        },
    ]
}

/// Sample supplier records.
pub fn sample_suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: 1,
            name: "Global Foods Inc.".to_string(),
            category: "Food".to_string(),
            contact: "John Smith".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            email: "john@globalfoods.com".to_string(),
            street: "123 Main Street".to_string(),
            city: "Cityville".to_string(),
            state: "State".to_string(),
            postal_code: "12345".to_string(),
            country: "USA".to_string(),
            status: SupplierStatus::Active,
        },
        Supplier {
            id: 2,
            name: "Tech Solutions Ltd.".to_string(),
            category: "Electronics".to_string(),
            contact: "Sarah Johnson".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            email: "sarah@techsolutions.com".to_string(),
            street: "456 Tech Avenue".to_string(),
            city: "Innovation City".to_string(),
            state: "State".to_string(),
            postal_code: "67890".to_string(),
            country: "Canada".to_string(),
            status: SupplierStatus::Active,
        },
        Supplier {
            id: 3,
            name: "Fashion World".to_string(),
            category: "Clothing".to_string(),
            contact: "Michael Brown".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
            email: "michael@fashionworld.com".to_string(),
            street: "789 Style Street".to_string(),
            city: "Trendville".to_string(),
            state: "State".to_string(),
            postal_code: "34567".to_string(),
            country: "UK".to_string(),
            status: SupplierStatus::Inactive,
        },
    ]
}
