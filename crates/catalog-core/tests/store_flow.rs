//! End-to-end store flows
//!
//! Drives the same sequence as the add-product modal: type into each
//! field, pick types in the select, submit, then read the table.

use catalog_core::{
    product_form_specs, product_rows, InputState, ProductDraft, ProductStore, SelectState,
    StoreConfig,
};

struct FillForm<'a> {
    name: &'a str,
    sku: &'a str,
    price: &'a str,
    types: &'a [&'a str],
}

const DEFAULT_PRODUCT: FillForm<'static> = FillForm {
    name: "test",
    sku: "test-1",
    price: "15000.05",
    types: &["Vegetables", "Meat"],
};

/// Type text one character at a time, then leave the field
fn type_and_blur(state: &mut InputState, spec: &catalog_core::InputSpec, text: &str) {
    for ch in text.chars() {
        let next = format!("{}{}", state.value, ch);
        state.update(spec, &next);
    }
    state.blur(spec);
}

/// Click the leaf option with the given label
fn pick(select: &mut SelectState, label: &str) {
    select.open();
    let index = select
        .visible_options()
        .iter()
        .position(|row| !row.is_group && row.label == label)
        .expect("option exists");
    assert!(select.choose(index));
}

fn fill_form(store: &mut ProductStore, form: &FillForm<'_>) {
    let specs = product_form_specs(store.config());
    let mut name = InputState::default();
    let mut sku = InputState::default();
    let mut price = InputState::default();
    let mut select = SelectState::new(store.types().to_vec(), true);

    type_and_blur(&mut name, &specs.name, form.name);
    type_and_blur(&mut price, &specs.price, form.price);
    type_and_blur(&mut sku, &specs.sku, form.sku);
    for label in form.types {
        pick(&mut select, label);
    }

    assert!(name.commit(&specs.name));
    assert!(sku.commit(&specs.sku));
    assert!(price.commit(&specs.price));

    let product = ProductDraft {
        name: name.value,
        sku: sku.value,
        price: price.value,
        types: select.selected_types().to_vec(),
    }
    .into_product(store.config())
    .unwrap();
    store.add_product(product);
}

fn new_store(config: StoreConfig) -> ProductStore {
    ProductStore::with_defaults(config).unwrap()
}

#[test]
fn add_new_product() {
    let mut store = new_store(StoreConfig::default());
    fill_form(&mut store, &DEFAULT_PRODUCT);

    let rows = product_rows(store.products());
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].cells,
        vec!["test-1", "test", "15,000.05", "Vegetables, Meat"]
    );
}

#[test]
fn handles_more_than_one_product() {
    let mut store = new_store(StoreConfig::default());
    fill_form(&mut store, &DEFAULT_PRODUCT);
    fill_form(
        &mut store,
        &FillForm {
            name: "test 2",
            sku: "test-2",
            price: "2",
            types: &["Bakery", "Pet supplies"],
        },
    );

    let rows = product_rows(store.products());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].cells[1], "test");
    assert_eq!(rows[1].cells, vec!["test-2", "test 2", "2.00", "Bakery, Pet supplies"]);
}

#[test]
fn reflects_config_correctly() {
    let mut store = new_store(StoreConfig::default());
    store.set_max_price(9999.0).unwrap();

    fill_form(&mut store, &DEFAULT_PRODUCT);

    let rows = product_rows(store.products());
    assert_eq!(rows[0].cells[2], "9,999.00");
}

#[test]
fn duplicate_skus_are_kept() {
    let mut store = new_store(StoreConfig::default());
    fill_form(&mut store, &DEFAULT_PRODUCT);
    fill_form(&mut store, &DEFAULT_PRODUCT);

    assert_eq!(store.products().len(), 2);
    assert_eq!(store.products()[0], store.products()[1]);
}
