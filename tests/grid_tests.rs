mod common;

use chrono::NaiveDate;
use rtrainer::core::grid::{
    CellValue, ColumnFilter, FilterKind, FilterOp, GridQuery, SortSpec, compare_dates,
    customer_columns, paginate, render_rows, training_columns,
};
use rtrainer::errors::AppError;
use rtrainer::models::{Customer, Training};
use rtrainer::utils::date::parse_timestamp;
use std::cmp::Ordering;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_trainings() -> Vec<Training> {
    vec![
        Training::new(1, "2024-05-10T09:00:00.000+00:00", 60, "Spinning")
            .with_customer(Customer::new("Ann", "Lee")),
        Training::new(2, "2024-05-10T23:59:00.000+00:00", 45, "Morning Yoga")
            .with_customer(Customer::new("John", "Doe")),
        Training::new(3, "2024-05-12T18:00:00.000+00:00", 90, "Gym"),
        Training::new(4, "garbage", 30, "Zumba"),
    ]
}

#[test]
fn test_compare_dates_ignores_time_of_day() {
    let cell = parse_timestamp("2024-05-10T23:59").unwrap();
    assert_eq!(compare_dates(day(2024, 5, 10), Some(&cell)), Ordering::Equal);

    let morning = parse_timestamp("2024-05-10T00:00:01Z").unwrap();
    assert_eq!(compare_dates(day(2024, 5, 10), Some(&morning)), Ordering::Equal);
}

#[test]
fn test_compare_dates_orders_by_day() {
    let cell = parse_timestamp("2024-05-09T23:59:00Z").unwrap();
    assert_eq!(compare_dates(day(2024, 5, 10), Some(&cell)), Ordering::Less);
    assert_eq!(compare_dates(day(2024, 5, 10), Some(&cell)) as i8, -1);

    let later = parse_timestamp("2024-06-01").unwrap();
    assert_eq!(compare_dates(day(2024, 5, 10), Some(&later)), Ordering::Greater);

    let next_year = parse_timestamp("2025-01-01T08:00:00Z").unwrap();
    assert_eq!(compare_dates(day(2024, 12, 31), Some(&next_year)), Ordering::Greater);
}

#[test]
fn test_compare_dates_missing_cell_sorts_before() {
    assert_eq!(compare_dates(day(2024, 5, 10), None), Ordering::Less);
    assert_eq!(compare_dates(day(1970, 1, 1), None) as i8, -1);
}

#[test]
fn test_malformed_date_is_missing_cell() {
    let t = Training::new(9, "10/05/2024", 30, "Gym");
    assert!(t.start().is_none());

    let date_col = &training_columns()[0];
    assert_eq!(date_col.cell(&t), CellValue::Date(None));
    assert_eq!(date_col.cell(&t).display(), "");
}

#[test]
fn test_training_columns_metadata() {
    let cols = training_columns();
    let headers: Vec<&str> = cols.iter().map(|c| c.header).collect();
    assert_eq!(headers, ["Date", "Duration (min)", "Activity", "Customer"]);

    assert_eq!(cols[0].filter, FilterKind::Date);
    assert_eq!(cols[1].filter, FilterKind::Number);
    assert_eq!(cols[2].filter, FilterKind::Text);
    assert_eq!(cols[3].field, None);
    assert_eq!(cols[3].key(), "customer");
}

#[test]
fn test_customer_columns_metadata() {
    let cols = customer_columns();
    let keys: Vec<String> = cols.iter().map(|c| c.key()).collect();
    assert_eq!(
        keys,
        ["firstname", "lastname", "email", "phone", "streetaddress", "postcode", "city"]
    );
    assert!(cols.iter().all(|c| c.filter == FilterKind::Text && c.sortable));
}

#[test]
fn test_derived_customer_column() {
    let trainings = sample_trainings();
    let customer_col = &training_columns()[3];

    assert_eq!(customer_col.cell(&trainings[0]).display(), "Ann Lee");
    // no customer → empty string, record untouched
    assert_eq!(customer_col.cell(&trainings[2]).display(), "");
    assert!(trainings[2].customer.is_none());
}

#[test]
fn test_date_cell_display_format() {
    let trainings = sample_trainings();
    let date_col = &training_columns()[0];
    assert_eq!(date_col.cell(&trainings[0]).display(), "10.05.2024 09:00");
}

#[test]
fn test_filter_expression_parsing() {
    let f: ColumnFilter = "city~hel".parse().unwrap();
    assert_eq!(f.column, "city");
    assert_eq!(f.op, FilterOp::Contains);
    assert_eq!(f.value, "hel");

    let f: ColumnFilter = " Duration > 45 ".parse().unwrap();
    assert_eq!(f.column, "duration");
    assert_eq!(f.op, FilterOp::GreaterThan);
    assert_eq!(f.value, "45");

    let f: ColumnFilter = "lastname!~lee".parse().unwrap();
    assert_eq!(f.op, FilterOp::NotContains);

    assert!(matches!(
        "no operator".parse::<ColumnFilter>(),
        Err(AppError::InvalidFilter(_))
    ));
}

#[test]
fn test_date_filter_matches_whole_day() {
    let trainings = sample_trainings();
    let query = GridQuery {
        filters: vec!["date=2024-05-10".parse().unwrap()],
        sort: None,
    };

    let rows = query.apply(&training_columns(), &trainings).unwrap();
    let ids: Vec<String> = rows.iter().map(|t| t.id_string()).collect();
    assert_eq!(ids, ["1", "2"]);
}

#[test]
fn test_date_filter_before_includes_missing() {
    let trainings = sample_trainings();
    let query = GridQuery {
        filters: vec!["date<2024-05-11".parse().unwrap()],
        sort: None,
    };

    let rows = query.apply(&training_columns(), &trainings).unwrap();
    let ids: Vec<String> = rows.iter().map(|t| t.id_string()).collect();
    // the malformed date counts as "before"
    assert_eq!(ids, ["1", "2", "4"]);
}

#[test]
fn test_text_and_number_filters() {
    let trainings = sample_trainings();
    let cols = training_columns();

    let query = GridQuery {
        filters: vec![
            "customer~ann".parse().unwrap(),
            "duration>30".parse().unwrap(),
        ],
        sort: None,
    };
    let rows = query.apply(&cols, &trainings).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].activity_str(), "Spinning");

    let query = GridQuery {
        filters: vec!["activity!~yoga".parse().unwrap()],
        sort: None,
    };
    assert_eq!(query.apply(&cols, &trainings).unwrap().len(), 3);
}

#[test]
fn test_invalid_filters_are_rejected() {
    let trainings = sample_trainings();
    let cols = training_columns();

    let unknown = GridQuery {
        filters: vec!["coach=Bob".parse().unwrap()],
        sort: None,
    };
    assert!(matches!(
        unknown.apply(&cols, &trainings),
        Err(AppError::UnknownColumn(_))
    ));

    let not_a_number = GridQuery {
        filters: vec!["duration>long".parse().unwrap()],
        sort: None,
    };
    assert!(matches!(
        not_a_number.apply(&cols, &trainings),
        Err(AppError::InvalidFilter(_))
    ));

    let bad_date = GridQuery {
        filters: vec!["date=10.05.2024".parse().unwrap()],
        sort: None,
    };
    assert!(matches!(
        bad_date.apply(&cols, &trainings),
        Err(AppError::InvalidDate(_))
    ));
}

#[test]
fn test_sort_by_date_puts_missing_first() {
    let trainings = sample_trainings();
    let query = GridQuery {
        filters: Vec::new(),
        sort: Some("date".parse().unwrap()),
    };
    let rows = query.apply(&training_columns(), &trainings).unwrap();
    let ids: Vec<String> = rows.iter().map(|t| t.id_string()).collect();
    assert_eq!(ids, ["4", "1", "2", "3"]);

    let query = GridQuery {
        filters: Vec::new(),
        sort: Some("duration:desc".parse().unwrap()),
    };
    let rows = query.apply(&training_columns(), &trainings).unwrap();
    let durations: Vec<i64> = rows.iter().filter_map(|t| t.duration).collect();
    assert_eq!(durations, [90, 60, 45, 30]);
}

#[test]
fn test_sort_spec_parsing() {
    let s: SortSpec = "City:DESC".parse().unwrap();
    assert_eq!(s.column, "city");
    assert!(s.descending);

    assert!(matches!(
        "city:sideways".parse::<SortSpec>(),
        Err(AppError::InvalidSort(_))
    ));
}

#[test]
fn test_customer_sort_is_case_insensitive() {
    let customers = vec![
        Customer::new("bob", "Zed"),
        Customer::new("Alice", "Young"),
        Customer::new("carl", "Xu"),
    ];
    let query = GridQuery {
        filters: Vec::new(),
        sort: Some("firstname".parse().unwrap()),
    };
    let rows = query.apply(&customer_columns(), &customers).unwrap();
    let names: Vec<&str> = rows.iter().map(|c| c.firstname_str()).collect();
    assert_eq!(names, ["Alice", "bob", "carl"]);
}

#[test]
fn test_paginate_and_render() {
    let rows: Vec<u32> = (1..=25).collect();
    let (page, pages) = paginate(&rows, 3, 10);
    assert_eq!(pages, 3);
    assert_eq!(page, &[21, 22, 23, 24, 25]);

    // out-of-range pages clamp
    let (page, _) = paginate(&rows, 99, 10);
    assert_eq!(page.len(), 5);

    let empty: Vec<u32> = Vec::new();
    let (page, pages) = paginate(&empty, 1, 10);
    assert!(page.is_empty());
    assert_eq!(pages, 1);

    let trainings = sample_trainings();
    let refs: Vec<&Training> = trainings.iter().take(1).collect();
    let rendered = render_rows(&training_columns(), &refs);
    assert_eq!(
        rendered,
        vec![vec![
            "10.05.2024 09:00".to_string(),
            "60".to_string(),
            "Spinning".to_string(),
            "Ann Lee".to_string(),
        ]]
    );
}
