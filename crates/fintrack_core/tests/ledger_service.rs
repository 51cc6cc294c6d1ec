use fintrack_core::{
    AllocationOptions, Budget, Category, InMemoryTransactionRepository, LedgerService,
    RecordRequest, RepoError, Transaction, TransactionKind, MS_PER_DAY,
};
use uuid::Uuid;

const DAY_100: i64 = 100 * MS_PER_DAY;

fn request(category: Category, amount: f64, occurred_at_ms: i64) -> RecordRequest {
    RecordRequest {
        category,
        amount,
        description: String::new(),
        occurred_at_ms,
    }
}

fn seeded_service() -> LedgerService<InMemoryTransactionRepository> {
    let service = LedgerService::new(InMemoryTransactionRepository::new());
    service
        .record_income(&request(Category::Salary, 4_000.0, DAY_100))
        .unwrap();
    service
        .record_expense(&request(Category::Housing, 1_500.0, DAY_100 + 3_600_000))
        .unwrap();
    service
        .record_expense(&request(Category::Food, 120.0, DAY_100 + MS_PER_DAY))
        .unwrap();
    service
        .record_expense(&request(Category::Food, 80.0, DAY_100 + 3 * MS_PER_DAY))
        .unwrap();
    service
        .record_investment(&request(Category::Stocks, 600.0, DAY_100 + MS_PER_DAY))
        .unwrap();
    service
        .record_investment(&request(Category::Crypto, 200.0, DAY_100 + 3 * MS_PER_DAY))
        .unwrap();
    service
}

#[test]
fn record_helpers_set_kind_and_preserve_order() {
    let service = seeded_service();
    let kinds = service
        .transactions()
        .unwrap()
        .iter()
        .map(|tx| tx.kind)
        .collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            TransactionKind::Income,
            TransactionKind::Expense,
            TransactionKind::Expense,
            TransactionKind::Expense,
            TransactionKind::Investment,
            TransactionKind::Investment,
        ]
    );
}

#[test]
fn record_rejects_negative_amount() {
    let service = LedgerService::new(InMemoryTransactionRepository::new());
    let err = service
        .record_expense(&request(Category::Food, -10.0, 0))
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(service.transactions().unwrap().is_empty());
}

#[test]
fn delete_removes_and_reports_missing_ids() {
    let service = seeded_service();
    let first = service.transactions().unwrap()[0].id;

    service.delete(first).unwrap();
    assert!(service.get(first).unwrap().is_none());
    assert_eq!(service.transactions().unwrap().len(), 5);

    let missing = Uuid::new_v4();
    assert_eq!(service.delete(missing).unwrap_err(), RepoError::NotFound(missing));
}

#[test]
fn summary_totals_each_kind() {
    let summary = seeded_service().summary().unwrap();
    assert_eq!(summary.income, 4_000.0);
    assert_eq!(summary.expenses, 1_700.0);
    assert_eq!(summary.investments, 800.0);
    assert_eq!(summary.net, 1_500.0);
}

#[test]
fn daily_totals_group_by_day_ascending() {
    let days = seeded_service().daily_totals().unwrap();
    let shape = days
        .iter()
        .map(|day| (day.day, day.income, day.expenses, day.investments))
        .collect::<Vec<_>>();
    assert_eq!(
        shape,
        vec![
            (100, 4_000.0, 1_500.0, 0.0),
            (101, 0.0, 120.0, 600.0),
            (103, 0.0, 80.0, 200.0),
        ]
    );
}

#[test]
fn daily_window_is_zero_filled_and_clipped() {
    let window = seeded_service().daily_totals_window(103, 3).unwrap();
    assert_eq!(window.len(), 3);
    assert_eq!(
        window.iter().map(|day| day.day).collect::<Vec<_>>(),
        vec![101, 102, 103]
    );
    assert_eq!(window[0].expenses, 120.0);
    assert_eq!(window[1].expenses, 0.0);
    assert_eq!(window[2].investments, 200.0);
    assert!(window.iter().all(|day| day.income == 0.0));
}

#[test]
fn category_totals_sum_in_first_seen_order() {
    let totals = seeded_service()
        .category_totals(TransactionKind::Expense)
        .unwrap();
    let shape = totals
        .iter()
        .map(|item| (item.label.as_str(), item.value))
        .collect::<Vec<_>>();
    assert_eq!(shape, vec![("Housing", 1_500.0), ("Food", 200.0)]);
}

#[test]
fn portfolio_allocation_uses_category_colors() {
    let allocation = seeded_service()
        .allocation_by_category(TransactionKind::Investment, &AllocationOptions::default())
        .unwrap();
    assert_eq!(allocation.total_value, 800.0);
    assert_eq!(allocation.slices[0].label, "Stocks");
    assert_eq!(allocation.slices[0].percentage, 75.0);
    assert_eq!(allocation.slices[0].end_angle, 270.0);
    assert_eq!(allocation.slices[0].color, Category::Stocks.color().unwrap());
    assert_eq!(allocation.slices[1].color, Category::Crypto.color().unwrap());
}

#[test]
fn allocation_without_matching_transactions_is_empty() {
    let service = LedgerService::new(InMemoryTransactionRepository::new());
    let allocation = service
        .allocation_by_category(TransactionKind::Investment, &AllocationOptions::default())
        .unwrap();
    assert!(allocation.is_empty());
}

#[test]
fn budget_usage_flags_overspend() {
    let budgets = vec![
        Budget::new(Category::Food, 150.0).unwrap(),
        Budget::new(Category::Housing, 2_000.0).unwrap(),
        Budget::new(Category::Shopping, 0.0).unwrap(),
    ];
    let usage = seeded_service().budget_usage(&budgets).unwrap();

    assert_eq!(usage[0].spent, 200.0);
    assert_eq!(usage[0].remaining, -50.0);
    assert!(usage[0].over_budget);
    assert_eq!(usage[1].percent_used, Some(75.0));
    assert!(!usage[1].over_budget);
    assert_eq!(usage[2].spent, 0.0);
    assert_eq!(usage[2].percent_used, None);
    assert!(!usage[2].over_budget);
}

#[test]
fn record_accepts_prebuilt_transaction() {
    let service = LedgerService::new(InMemoryTransactionRepository::new());
    let tx = Transaction::new(TransactionKind::Income, Category::Freelance, 300.0, 0)
        .unwrap()
        .described("logo design");
    let id = service.record(&tx).unwrap();
    let loaded = service.get(id).unwrap().unwrap();
    assert_eq!(loaded.description, "logo design");
}
