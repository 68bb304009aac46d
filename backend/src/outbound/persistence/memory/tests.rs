//! Behaviour coverage for the in-memory invoice store.

use chrono::NaiveDate;
use rstest::rstest;

use super::*;
use crate::domain::invoice::InvoiceStatus;

fn customer(name: &str, email: &str) -> Customer {
    Customer {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        email: email.to_owned(),
    }
}

fn draft(customer_id: Uuid, amount_cents: i64, status: InvoiceStatus) -> InvoiceDraft {
    InvoiceDraft {
        customer_id: customer_id.to_string(),
        amount_cents,
        status,
    }
}

fn invoice_on(customer_id: Uuid, date: NaiveDate, amount_cents: i64) -> Invoice {
    Invoice {
        id: Uuid::new_v4(),
        customer_id,
        amount_cents,
        status: InvoiceStatus::Pending,
        date,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[tokio::test]
async fn insert_assigns_id_and_todays_date() {
    let acme = customer("Acme Corp", "billing@acme.test");
    let store = InMemoryInvoiceStore::with_customers(vec![acme.clone()]);

    let invoice = store
        .insert(&draft(acme.id, 1550, InvoiceStatus::Pending))
        .await
        .expect("insert succeeds");

    assert_eq!(invoice.date, Utc::now().date_naive());
    assert_eq!(invoice.amount_cents, 1550);
    let found = store
        .find_by_id(invoice.id)
        .await
        .expect("lookup succeeds")
        .expect("row present");
    assert_eq!(found, invoice);
    assert_eq!(store.count_matching("").await.expect("count"), 1);
}

#[tokio::test]
async fn insert_rejects_unknown_customer() {
    let store = InMemoryInvoiceStore::with_customers(vec![]);
    let err = store
        .insert(&draft(Uuid::new_v4(), 100, InvoiceStatus::Paid))
        .await
        .expect_err("constraint violation");

    assert!(matches!(err, InvoiceStoreError::Constraint { .. }));
    assert_eq!(store.count_matching("").await.expect("count"), 0);
}

#[tokio::test]
async fn malformed_customer_reference_is_the_same_constraint() {
    let acme = customer("Acme Corp", "billing@acme.test");
    let store = InMemoryInvoiceStore::with_customers(vec![acme]);
    let err = store
        .insert(&InvoiceDraft {
            customer_id: "c1".to_owned(),
            amount_cents: 1550,
            status: InvoiceStatus::Pending,
        })
        .await
        .expect_err("constraint violation");

    assert!(matches!(err, InvoiceStoreError::Constraint { .. }));
    assert_eq!(store.count_matching("").await.expect("count"), 0);
}

#[tokio::test]
async fn update_replaces_mutable_fields_only() {
    let acme = customer("Acme Corp", "billing@acme.test");
    let beta = customer("Beta LLC", "accounts@beta.test");
    let store = InMemoryInvoiceStore::with_customers(vec![acme.clone(), beta.clone()]);
    let original = store
        .insert(&draft(acme.id, 1000, InvoiceStatus::Pending))
        .await
        .expect("insert succeeds");

    store
        .update(original.id, &draft(beta.id, 2500, InvoiceStatus::Paid))
        .await
        .expect("update succeeds");

    let updated = store
        .find_by_id(original.id)
        .await
        .expect("lookup succeeds")
        .expect("row present");
    assert_eq!(updated.customer_id, beta.id);
    assert_eq!(updated.amount_cents, 2500);
    assert_eq!(updated.status, InvoiceStatus::Paid);
    assert_eq!(updated.id, original.id, "identity is immutable");
    assert_eq!(updated.date, original.date, "date is immutable");
}

#[tokio::test]
async fn update_on_missing_id_is_an_error_not_a_no_op() {
    let acme = customer("Acme Corp", "billing@acme.test");
    let store = InMemoryInvoiceStore::with_customers(vec![acme.clone()]);

    let id = Uuid::new_v4();
    let err = store
        .update(id, &draft(acme.id, 100, InvoiceStatus::Paid))
        .await
        .expect_err("missing row");

    assert_eq!(err, InvoiceStoreError::RowMissing { id });
}

#[tokio::test]
async fn delete_is_idempotent() {
    let acme = customer("Acme Corp", "billing@acme.test");
    let store = InMemoryInvoiceStore::with_customers(vec![acme.clone()]);
    let invoice = store
        .insert(&draft(acme.id, 100, InvoiceStatus::Paid))
        .await
        .expect("insert succeeds");

    store.delete(invoice.id).await.expect("first delete");
    store.delete(invoice.id).await.expect("second delete succeeds too");
    store.delete(Uuid::new_v4()).await.expect("unknown id succeeds");

    assert_eq!(store.count_matching("").await.expect("count"), 0);
}

#[rstest]
#[case("acme", 1)]
#[case("ACME", 1)]
#[case("beta.test", 1)]
#[case("paid", 1)]
#[case("pending", 1)]
#[case("1550", 1)]
#[case("no-such-text", 0)]
#[case("", 2)]
#[tokio::test]
async fn matching_covers_name_email_amount_date_and_status(
    #[case] query: &str,
    #[case] expected: u64,
) {
    let acme = customer("Acme Corp", "billing@acme.test");
    let beta = customer("Beta LLC", "accounts@beta.test");
    let store = InMemoryInvoiceStore::with_customers(vec![acme.clone(), beta.clone()]);
    store
        .insert(&draft(acme.id, 1550, InvoiceStatus::Pending))
        .await
        .expect("insert acme");
    store
        .insert(&draft(beta.id, 900, InvoiceStatus::Paid))
        .await
        .expect("insert beta");

    assert_eq!(store.count_matching(query).await.expect("count"), expected);
}

#[tokio::test]
async fn matching_includes_the_invoice_date() {
    let acme = customer("Acme Corp", "billing@acme.test");
    let store = InMemoryInvoiceStore::with_records(
        vec![acme.clone()],
        vec![invoice_on(acme.id, date(2024, 3, 15), 100)],
    );

    assert_eq!(store.count_matching("2024-03").await.expect("count"), 1);
    assert_eq!(store.count_matching("2023").await.expect("count"), 0);
}

#[tokio::test]
async fn rows_order_by_date_descending_with_id_tie_break() {
    let acme = customer("Acme Corp", "billing@acme.test");
    let older = invoice_on(acme.id, date(2024, 1, 1), 100);
    let newer = invoice_on(acme.id, date(2024, 6, 1), 200);
    let mut same_day_a = invoice_on(acme.id, date(2024, 3, 1), 300);
    let mut same_day_b = invoice_on(acme.id, date(2024, 3, 1), 400);
    // Fix the tie-break order regardless of random generation.
    if same_day_b.id < same_day_a.id {
        std::mem::swap(&mut same_day_a.id, &mut same_day_b.id);
    }
    let store = InMemoryInvoiceStore::with_records(
        vec![acme.clone()],
        vec![
            older.clone(),
            same_day_b.clone(),
            newer.clone(),
            same_day_a.clone(),
        ],
    );

    let rows = store.fetch_page("", 1).await.expect("page");
    let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![newer.id, same_day_a.id, same_day_b.id, older.id]);
}

#[tokio::test]
async fn pages_slice_at_six_rows_and_run_out_gracefully() {
    let acme = customer("Acme Corp", "billing@acme.test");
    let store = InMemoryInvoiceStore::with_customers(vec![acme.clone()]);
    for cents in 1..=7 {
        store
            .insert(&draft(acme.id, cents, InvoiceStatus::Pending))
            .await
            .expect("insert succeeds");
    }

    assert_eq!(store.fetch_page("", 1).await.expect("page 1").len(), 6);
    assert_eq!(store.fetch_page("", 2).await.expect("page 2").len(), 1);
    assert!(
        store.fetch_page("", 3).await.expect("page 3").is_empty(),
        "out-of-range page yields an empty slice, not an error"
    );
}

#[tokio::test]
async fn customers_list_is_ordered_by_name() {
    let beta = customer("Beta LLC", "accounts@beta.test");
    let acme = customer("Acme Corp", "billing@acme.test");
    let store = InMemoryInvoiceStore::with_customers(vec![beta, acme]);

    let customers = store.list_customers().await.expect("customers");
    let names: Vec<&str> = customers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Acme Corp", "Beta LLC"]);
}
