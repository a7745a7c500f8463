mod common;

use rust_decimal::Decimal;
use uuid::Uuid;

use common::{customer_store, line, memory, tee};
use merch_storefront_api::{
    error::AppError,
    lifecycle::cart::{self, MAX_LINE_QUANTITY},
    store::UserStore,
};

#[tokio::test]
async fn same_variant_merges_into_one_line() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let product = tee("crew", 2999, None);

    cart::add_to_cart(&store, line(&product, 1)).await.unwrap();
    let merged = cart::add_to_cart(&store, line(&product, 2)).await.unwrap();

    let items = cart::get_cart(&store).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(merged.quantity, 3);
    assert_eq!(items[0].quantity, 3);
}

#[tokio::test]
async fn merged_line_keeps_first_captured_price() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let mut product = tee("crew", 2999, None);

    cart::add_to_cart(&store, line(&product, 1)).await.unwrap();
    product.sale_price = Some(Decimal::new(1999, 2));
    cart::add_to_cart(&store, line(&product, 1)).await.unwrap();

    let items = cart::get_cart(&store).await.unwrap();
    assert_eq!(items[0].price, Decimal::new(2999, 2));
}

#[tokio::test]
async fn sale_price_is_captured_when_present() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let product = tee("relaxed", 2799, Some(2299));

    let item = cart::add_to_cart(&store, line(&product, 1)).await.unwrap();
    assert_eq!(item.price, Decimal::new(2299, 2));
}

#[tokio::test]
async fn summary_counts_units_and_sums_lines() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    cart::add_to_cart(&store, line(&tee("a", 1000, None), 2)).await.unwrap();
    cart::add_to_cart(&store, line(&tee("b", 550, None), 1)).await.unwrap();

    let summary = cart::cart_summary(&store).await.unwrap();
    assert_eq!(summary.count, 3);
    assert_eq!(summary.subtotal, Decimal::new(2550, 2));
}

#[tokio::test]
async fn zero_quantity_is_rejected() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let product = tee("crew", 2999, None);

    let err = cart::add_to_cart(&store, line(&product, 0)).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let item = cart::add_to_cart(&store, line(&product, 1)).await.unwrap();
    let err = cart::update_cart_item(&store, item.id, 0).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(cart::get_cart(&store).await.unwrap()[0].quantity, 1);
}

#[tokio::test]
async fn update_and_remove_unknown_line_is_not_found() {
    let storage = memory();
    let (_, store) = customer_store(&storage);

    let err = cart::update_cart_item(&store, Uuid::new_v4(), 2).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    let err = cart::remove_cart_item(&store, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn clear_empties_the_cart() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    cart::add_to_cart(&store, line(&tee("a", 1000, None), 2)).await.unwrap();

    cart::clear_cart(&store).await.unwrap();
    assert!(cart::get_cart(&store).await.unwrap().is_empty());
}

#[tokio::test]
async fn signed_out_cart_is_empty_and_cannot_be_changed() {
    let storage = memory();
    let store = UserStore::anonymous(storage);

    assert!(cart::get_cart(&store).await.unwrap().is_empty());
    let err = cart::add_to_cart(&store, line(&tee("a", 1000, None), 1))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));
}

#[tokio::test]
async fn merged_quantity_cannot_pass_the_line_limit() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let product = tee("crew", 2999, None);

    cart::add_to_cart(&store, line(&product, MAX_LINE_QUANTITY)).await.unwrap();
    let err = cart::add_to_cart(&store, line(&product, 1)).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let items = cart::get_cart(&store).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, MAX_LINE_QUANTITY);
}

#[tokio::test]
async fn huge_quantities_are_rejected_without_touching_the_cart() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let product = tee("crew", 2999, None);

    let item = cart::add_to_cart(&store, line(&product, 2)).await.unwrap();
    let err = cart::add_to_cart(&store, line(&product, i32::MAX)).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let err = cart::update_cart_item(&store, item.id, i32::MAX).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let items = cart::get_cart(&store).await.unwrap();
    assert_eq!(items[0].quantity, 2);
}
