//! Fixtures for filtering unit tests

use rust_decimal::Decimal;
use shared::models::{CategoryNode, DEFAULT_BRAND, Product};

/// Men → {T-Shirts → {Round Neck, Polo}, Jeans}; Women → {Kurtas, Footwear → {Jeans}}
pub fn sample_tree() -> Vec<CategoryNode> {
    vec![
        CategoryNode::branch(
            "1",
            "Men",
            vec![
                CategoryNode::branch(
                    "11",
                    "T-Shirts",
                    vec![
                        CategoryNode::leaf("111", "Round Neck"),
                        CategoryNode::leaf("112", "Polo"),
                    ],
                ),
                CategoryNode::leaf("12", "Jeans"),
            ],
        ),
        CategoryNode::branch(
            "2",
            "Women",
            vec![
                CategoryNode::leaf("21", "Kurtas"),
                CategoryNode::branch("22", "Footwear", vec![CategoryNode::leaf("221", "Jeans")]),
            ],
        ),
    ]
}

/// Product filed under `category` with the given price and no optional fields
pub fn product(id: &str, category: &str, price: i64) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        price: Decimal::from(price),
        original_price: None,
        discount: 0.0,
        rating: 0.0,
        category_path: String::new(),
        deepest_category_name: category.to_string(),
        subtitle: None,
        brand: DEFAULT_BRAND.to_string(),
        images: Vec::new(),
    }
}

pub fn branded(mut p: Product, brand: &str) -> Product {
    p.subtitle = Some(brand.to_string());
    p.brand = brand.to_uppercase();
    p
}

pub fn rated(mut p: Product, rating: f64) -> Product {
    p.rating = rating;
    p
}

pub fn discounted(mut p: Product, discount: f64) -> Product {
    p.discount = discount;
    p
}

pub fn ids(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.id.clone()).collect()
}
