use merch_storefront_api::{
    response::paginate,
    routes::params::{MAX_PAGE, Pagination},
};

#[test]
fn defaults_and_bounds() {
    assert_eq!(Pagination::default().normalize(), (1, 20, 0));
    assert_eq!(Pagination::new(0, 0).normalize(), (1, 1, 0));
    assert_eq!(Pagination::new(3, 500).normalize(), (3, 100, 200));
}

#[test]
fn enormous_page_is_capped() {
    let (page, limit, offset) = Pagination::new(i64::MAX, 20).normalize();
    assert_eq!(page, MAX_PAGE);
    assert_eq!(limit, 20);
    assert_eq!(offset, (MAX_PAGE - 1) * 20);
}

#[test]
fn slicing_past_the_end_is_empty() {
    let (items, meta) = paginate((1..=5).collect::<Vec<i32>>(), i64::MAX, 20);
    assert!(items.is_empty());
    assert_eq!(meta.total, 5);

    let (items, _) = paginate((1..=5).collect::<Vec<i32>>(), 2, 2);
    assert_eq!(items, vec![3, 4]);
}
