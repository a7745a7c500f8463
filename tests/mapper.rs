mod common;

use rust_decimal::Decimal;
use uuid::Uuid;

use common::{tee, variant};
use merch_storefront_api::{
    entity::{product_images, store_settings},
    error::AppError,
    mapper::{default_settings, map_delivery_settings, map_product, unmap_product},
    models::Size,
};

#[test]
fn stored_row_maps_back_to_the_same_product() {
    let mut product = tee("crew", 2999, Some(2499));
    product.variants.push(variant(Size::Xl, "White", 3));
    product.collections = vec![Uuid::new_v4()];

    let mapped = map_product(unmap_product(&product)).unwrap();
    assert_eq!(mapped, product);
}

#[test]
fn zero_sale_price_means_no_sale() {
    let mut row = unmap_product(&tee("crew", 2999, None));
    row.product.sale_price = Some(Decimal::ZERO);

    let product = map_product(row).unwrap();
    assert!(product.sale_price.is_none());
    assert_eq!(product.effective_price(), Decimal::new(2999, 2));
}

#[test]
fn images_come_back_in_display_order() {
    let product = tee("crew", 2999, None);
    let mut row = unmap_product(&product);
    row.images.insert(
        0,
        product_images::Model {
            id: Uuid::new_v4(),
            product_id: product.id,
            image_url: "https://img.test/back.jpg".into(),
            sort_order: 5,
        },
    );

    let mapped = map_product(row).unwrap();
    let orders: Vec<i32> = mapped.images.iter().map(|img| img.sort_order).collect();
    assert_eq!(orders, vec![0, 5]);
    assert_eq!(mapped.primary_image(), "https://img.test/crew.jpg");
}

#[test]
fn unknown_category_is_an_internal_error() {
    let mut row = unmap_product(&tee("crew", 2999, None));
    row.product.category = "Pets".into();

    let err = map_product(row).unwrap_err();
    assert!(matches!(err, AppError::Internal(_)));
}

#[test]
fn unknown_size_is_an_internal_error() {
    let mut row = unmap_product(&tee("crew", 2999, None));
    row.variants[0].size = "XXXL".into();

    assert!(matches!(map_product(row), Err(AppError::Internal(_))));
}

#[test]
fn non_positive_free_delivery_threshold_is_dropped() {
    let settings = store_settings::Model {
        free_delivery_above: Some(Decimal::ZERO),
        ..default_settings()
    };
    let delivery = map_delivery_settings(&settings);

    assert!(delivery.free_above.is_none());
    assert_eq!(delivery.fee_for(Decimal::new(1000, 0)), Decimal::new(5, 0));
}
