//! Deterministic mock data for the in-memory storefront

use chrono::{Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Account, Order, OrderLine, OrderStatus, Product, Role};

const SEED: u64 = 0x5702_EF20;

const ADJECTIVES: [&str; 8] = [
    "Classic", "Organic", "Premium", "Rustic", "Golden", "Spicy", "Smoked", "Fresh",
];
const NOUNS: [&str; 12] = [
    "Coffee Beans", "Olive Oil", "Flour", "Tomato Sauce", "Cheddar", "Napkins", "Paper Cups",
    "Green Tea", "Honey", "Sea Salt", "Pasta", "Chocolate",
];
const CATEGORIES: [&str; 4] = ["Beverages", "Pantry", "Dairy", "Supplies"];
const STREETS: [&str; 5] = ["Main St", "Market Ave", "River Rd", "Station Sq", "Harbor Blvd"];

/// Accounts, catalog and order book generated from a fixed seed.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub accounts: Vec<Account>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
}

impl SeedData {
    pub fn generate(product_count: usize, order_count: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(SEED);
        let accounts = seed_accounts();
        let products = seed_products(&mut rng, &accounts, product_count);
        let orders = seed_orders(&mut rng, &accounts, &products, order_count);
        Self {
            accounts,
            products,
            orders,
        }
    }
}

fn account(id: u32, username: &str, display_name: &str, role: Role, is_active: bool) -> Account {
    Account {
        id: format!("u-{id}"),
        username: username.to_string(),
        display_name: display_name.to_string(),
        email: format!("{username}@storefront.local"),
        role,
        is_active,
    }
}

fn seed_accounts() -> Vec<Account> {
    vec![
        account(1, "admin", "Store Administrator", Role::Admin, true),
        account(2, "acme-supplies", "Acme Supplies", Role::Supplier, true),
        account(3, "fresh-farms", "Fresh Farms Co.", Role::Supplier, true),
        account(4, "downtown", "Downtown Franchise", Role::Franchisee, true),
        account(5, "riverside", "Riverside Franchise", Role::Franchisee, true),
        account(6, "uptown", "Uptown Franchise", Role::Franchisee, true),
        account(7, "closed-store", "Closed Store", Role::Franchisee, false),
    ]
}

fn ids_with_role(accounts: &[Account], role: Role) -> Vec<String> {
    accounts
        .iter()
        .filter(|a| a.role == role && a.is_active)
        .map(|a| a.id.clone())
        .collect()
}

fn seed_products(rng: &mut StdRng, accounts: &[Account], count: usize) -> Vec<Product> {
    let suppliers = ids_with_role(accounts, Role::Supplier);
    (0..count)
        .map(|i| {
            let adjective = ADJECTIVES[i % ADJECTIVES.len()];
            let noun = NOUNS[(i / ADJECTIVES.len()) % NOUNS.len()];
            let id = i as u32 + 1;
            Product {
                id,
                sku: format!("SKU-{id:05}"),
                name: format!("{adjective} {noun}"),
                category: CATEGORIES[i % CATEGORIES.len()].to_string(),
                price: rng.gen_range(199..=9_999),
                currency: "USD".to_string(),
                stock: rng.gen_range(0..=200),
                supplier_id: suppliers[i % suppliers.len()].clone(),
            }
        })
        .collect()
}

fn seed_orders(
    rng: &mut StdRng,
    accounts: &[Account],
    products: &[Product],
    count: usize,
) -> Vec<Order> {
    if products.is_empty() {
        return Vec::new();
    }
    let franchisees = ids_with_role(accounts, Role::Franchisee);
    let epoch = Utc
        .with_ymd_and_hms(2024, 6, 1, 9, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    (0..count)
        .map(|i| {
            let line_count = rng.gen_range(1..=4);
            let lines = (0..line_count)
                .map(|_| {
                    let product = &products[rng.gen_range(0..products.len())];
                    OrderLine {
                        product_id: product.id,
                        quantity: rng.gen_range(1..=12),
                        unit_price: product.price,
                    }
                })
                .collect();
            Order {
                id: format!("ORD-{:06}", i + 1),
                franchisee_id: franchisees[i % franchisees.len()].clone(),
                status: OrderStatus::ALL[rng.gen_range(0..OrderStatus::ALL.len())],
                lines,
                currency: "USD".to_string(),
                billing_address: format!(
                    "{} {}",
                    rng.gen_range(1..=250),
                    STREETS[i % STREETS.len()]
                ),
                placed_at: epoch + Duration::hours(i as i64 * 7),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic() {
        let a = SeedData::generate(20, 10);
        let b = SeedData::generate(20, 10);
        assert_eq!(a.products, b.products);
        assert_eq!(a.orders, b.orders);
    }

    #[test]
    fn products_belong_to_suppliers() {
        let seed = SeedData::generate(30, 0);
        assert_eq!(seed.products.len(), 30);
        for product in &seed.products {
            let supplier = seed
                .accounts
                .iter()
                .find(|a| a.id == product.supplier_id)
                .unwrap();
            assert_eq!(supplier.role, Role::Supplier);
        }
    }

    #[test]
    fn orders_belong_to_active_franchisees() {
        let seed = SeedData::generate(10, 25);
        assert_eq!(seed.orders.len(), 25);
        for order in &seed.orders {
            let owner = seed.accounts.iter().find(|a| a.id == order.franchisee_id).unwrap();
            assert_eq!(owner.role, Role::Franchisee);
            assert!(owner.is_active);
            assert!(!order.lines.is_empty());
        }
    }

    #[test]
    fn no_products_means_no_orders() {
        assert!(SeedData::generate(0, 10).orders.is_empty());
    }
}
