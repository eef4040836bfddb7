//! Cart store walkthroughs.

use orbit_cafe_core::{MenuItemId, Price};
use orbit_cafe_integration_tests::{CartFixture, latte_only_catalog};
use orbit_cafe_storefront::models::{Cart, Catalog};
use orbit_cafe_storefront::storage::MemoryStorage;

const LATTE: MenuItemId = MenuItemId::new(1);

// =============================================================================
// Single Item Walkthrough
// =============================================================================

#[test]
fn test_add_increment_decrement_remove() {
    let mut f = CartFixture::new(latte_only_catalog());

    f.store.add(LATTE, 1);
    assert_eq!(f.store.cart().len(), 1);
    assert_eq!(f.store.cart().get(LATTE).map(|l| l.quantity), Some(1));
    assert_eq!(f.store.total_price(), Price::from_cents(350));

    f.store.add(LATTE, 2);
    assert_eq!(f.store.cart().get(LATTE).map(|l| l.quantity), Some(3));
    assert_eq!(f.store.total_price(), Price::from_cents(1050));
    assert_eq!(f.store.total_price().display(), "$10.50");

    f.store.decrement(LATTE);
    f.store.decrement(LATTE);
    assert_eq!(f.store.cart().get(LATTE).map(|l| l.quantity), Some(1));

    // Clamped: a third decrement leaves one.
    f.store.decrement(LATTE);
    assert_eq!(f.store.cart().get(LATTE).map(|l| l.quantity), Some(1));

    f.store.remove(LATTE);
    assert!(f.store.cart().is_empty());
    assert_eq!(f.storage.raw("cart").as_deref(), Some("[]"));
}

#[test]
fn test_every_mutation_is_visible_after_restart() {
    let mut f = CartFixture::new(Catalog::orbit_cafe());

    f.store.add(MenuItemId::new(3), 1);
    assert_eq!(f.reopen().cart(), f.store.cart());

    f.store.increment(MenuItemId::new(3));
    assert_eq!(f.reopen().total_count(), 2);

    f.store.add(MenuItemId::new(5), 1);
    f.store.remove(MenuItemId::new(3));
    let reopened = f.reopen();
    assert_eq!(reopened.cart().len(), 1);
    assert_eq!(reopened.total_price(), Price::from_cents(395));

    f.store.clear();
    assert!(f.reopen().cart().is_empty());
}

// =============================================================================
// Snapshots
// =============================================================================

#[test]
fn test_line_keeps_price_snapshot() {
    let stored = r#"[{"id":1,"title":"Cosmic Latte","price":3.25,"qty":1}]"#;
    let mut f = CartFixture::with_storage(
        Catalog::orbit_cafe(),
        MemoryStorage::with_slot("cart", stored),
    );

    // The catalog now says 3.50; the existing line keeps what was stored.
    f.store.add(LATTE, 1);
    let line = f.store.cart().get(LATTE).cloned();
    assert_eq!(line.map(|l| (l.price, l.quantity)), Some((Price::from_cents(325), 2)));
}

#[test]
fn test_lookup_misses_are_silent() {
    let mut f = CartFixture::new(Catalog::orbit_cafe());
    f.store.add(MenuItemId::new(404), 1);
    f.store.increment(MenuItemId::new(404));
    f.store.decrement(MenuItemId::new(404));

    assert!(f.store.cart().is_empty());
    assert!(f.toasts.drain().is_empty());
    assert!(f.storage.raw("cart").is_none());
}

#[test]
fn test_total_price_is_exact() {
    let mut f = CartFixture::new(Catalog::orbit_cafe());
    // 3 x 3.95 + 7 x 2.75 + 1 x 4.25 = 11.85 + 19.25 + 4.25
    f.store.add(MenuItemId::new(5), 3);
    f.store.add(MenuItemId::new(2), 7);
    f.store.add(MenuItemId::new(4), 1);

    assert_eq!(f.store.total_price(), Price::from_cents(3535));
    assert_eq!(f.store.total_count(), 11);
}

#[test]
fn test_restore_tolerates_bad_slot_values() {
    for stored in ["", "null", "{}", "[{\"id\":1}]", "[1,2,3]"] {
        let f = CartFixture::with_storage(
            Catalog::orbit_cafe(),
            MemoryStorage::with_slot("cart", stored),
        );
        assert_eq!(f.store.cart(), &Cart::new(), "stored value {stored:?}");
    }
}
