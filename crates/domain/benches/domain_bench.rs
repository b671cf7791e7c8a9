use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{
    Location, LocationKind, Money, Operation, OperationLine, OperationStatus, OperationType,
    Product, moves,
};

fn locations() -> Vec<Location> {
    vec![
        Location::new("loc_vendor", "Vendors", LocationKind::Vendor),
        Location::new("loc_customer", "Customers", LocationKind::Customer),
        Location::new("loc_wh_stock", "WH/Stock", LocationKind::Internal),
        Location::new("loc_wh_pack", "WH/Packing Zone", LocationKind::Internal),
    ]
}

fn catalog(size: usize) -> Vec<Product> {
    (0..size)
        .map(|n| {
            Product::new(
                format!("p{n}"),
                format!("Product {n}"),
                format!("SKU-{n:04}"),
                "Hardware",
                "Units",
                100,
                "loc_wh_stock",
                Money::from_cents(100 * n as i64),
            )
        })
        .collect()
}

fn receipt(lines: Vec<OperationLine>) -> Operation {
    Operation::new(
        "op_bench",
        OperationType::Receipt,
        "WH/IN/9999",
        "loc_vendor",
        "loc_wh_stock",
        OperationStatus::Ready,
        NaiveDate::from_ymd_opt(2023, 11, 1).unwrap(),
        lines,
    )
}

fn bench_validate_single_line(c: &mut Criterion) {
    let locations = locations();
    let products = catalog(5);
    let op = receipt(vec![OperationLine::new("p0", "Product 0", 20)]);

    c.bench_function("moves/validate_single_line", |b| {
        b.iter(|| moves::validate(&op, &products, &locations));
    });
}

fn bench_validate_wide_operation(c: &mut Criterion) {
    let locations = locations();
    let products = catalog(100);
    let lines = (0..100)
        .map(|n| OperationLine::new(format!("p{n}"), format!("Product {n}"), 1))
        .collect();
    let op = receipt(lines);

    c.bench_function("moves/validate_100_lines", |b| {
        b.iter(|| moves::validate(&op, &products, &locations));
    });
}

fn bench_validate_done_no_op(c: &mut Criterion) {
    let locations = locations();
    let products = catalog(100);
    let mut op = receipt(vec![OperationLine::new("p0", "Product 0", 20)]);
    op.status = OperationStatus::Done;

    c.bench_function("moves/validate_done_no_op", |b| {
        b.iter(|| moves::validate(&op, &products, &locations));
    });
}

criterion_group!(
    benches,
    bench_validate_single_line,
    bench_validate_wide_operation,
    bench_validate_done_no_op,
);
criterion_main!(benches);
