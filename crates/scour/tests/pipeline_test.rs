//! End-to-end tests for the validate/correct pipeline.

use scour::{
    correct, validate, Cell, Column, ColumnKind, Corrector, Dataset, Issue, Parser,
    ValidateConfig,
};

fn text(s: &str) -> Cell {
    Cell::Text(s.to_string())
}

fn ints(values: &[i64]) -> Vec<Cell> {
    values.iter().copied().map(Cell::Int).collect()
}

fn sales_dataset() -> Dataset {
    // Typical messy upload: missing cells, a numbers-as-text column, an
    // extreme value, and a duplicated row.
    Dataset::new(vec![
        Column::new(
            "customer",
            vec![text("acme"), text("globex"), text("acme"), text("initech"), text("acme"), text("hooli")],
        ),
        Column::new(
            "units",
            vec![
                Cell::Int(10),
                Cell::Missing,
                Cell::Int(10),
                Cell::Int(12),
                Cell::Int(11),
                Cell::Int(9),
            ],
        ),
        Column::new(
            "revenue",
            vec![text("100"), text("110"), text("100"), text("95"), text("105"), text("9000")],
        ),
    ])
    .unwrap()
}

#[test]
fn validator_reports_issues_in_fixed_order() {
    let ds = sales_dataset();
    let report = validate(&ds, &ValidateConfig::default()).unwrap();
    assert!(report.issues_found());

    // Missing values first, then the non-numeric column; "customer" is
    // exempt by default so only "revenue" is flagged. The revenue column
    // is textual pre-coercion, so no outlier issue appears.
    assert_eq!(report.issues.len(), 2);
    match &report.issues[0] {
        Issue::MissingValues { counts } => {
            assert_eq!(counts.len(), 1);
            assert_eq!(counts.get("units"), Some(&1));
        }
        other => panic!("expected missing-values issue first, got {:?}", other),
    }
    assert_eq!(
        report.issues[1],
        Issue::NonNumericColumn {
            column: "revenue".to_string()
        }
    );
}

#[test]
fn validator_is_pure_and_deterministic() {
    let ds = sales_dataset();
    let before = ds.clone();
    let cfg = ValidateConfig::default();
    let first = validate(&ds, &cfg).unwrap();
    let second = validate(&ds, &cfg).unwrap();
    assert_eq!(first, second);
    assert_eq!(ds, before);
}

#[test]
fn outlier_boundary_matches_iqr_fences() {
    let ds = Dataset::new(vec![Column::new("v", ints(&[1, 2, 3, 4, 5, 100]))]).unwrap();
    let report = validate(&ds, &ValidateConfig::default()).unwrap();
    assert_eq!(
        report.issues,
        vec![Issue::OutlierColumns {
            columns: vec!["v".to_string()]
        }]
    );

    // Values inside the fences alone produce no issue.
    let ds = Dataset::new(vec![Column::new("v", ints(&[1, 2, 3, 4, 5]))]).unwrap();
    assert!(!validate(&ds, &ValidateConfig::default())
        .unwrap()
        .issues_found());
}

#[test]
fn correction_pipeline_end_to_end() {
    let ds = sales_dataset();
    let correction = Corrector::new().run(&ds).unwrap();

    // One duplicate row dropped, revenue coerced, the missing units cell
    // imputed, and the extreme revenue row removed.
    assert_eq!(correction.summary.duplicate_rows_removed, 1);
    assert_eq!(correction.summary.columns_coerced, 1);
    assert_eq!(correction.summary.cells_imputed, 1);
    assert_eq!(correction.summary.outlier_rows_removed, 1);

    let cleaned = &correction.dataset;
    assert_eq!(cleaned.column_names(), ds.column_names());
    assert!(cleaned.row_count() <= ds.row_count());
    assert_eq!(cleaned.column("revenue").unwrap().kind(), ColumnKind::Numeric);
    assert_eq!(cleaned.column("units").unwrap().missing_count(), 0);
    assert!(cleaned
        .column("revenue")
        .unwrap()
        .numeric_values()
        .iter()
        .all(|&v| v < 9000.0));
}

#[test]
fn coercion_is_all_or_nothing() {
    let ds = Dataset::new(vec![
        Column::new("blocked", vec![text("1"), text("2"), text("x")]),
        Column::new("clean", vec![text("1"), text("2"), text("3")]),
    ])
    .unwrap();
    let cleaned = correct(&ds).unwrap();
    assert_eq!(cleaned.column("blocked").unwrap().kind(), ColumnKind::Textual);
    assert_eq!(cleaned.column("clean").unwrap().kind(), ColumnKind::Numeric);
}

#[test]
fn deduplication_preserves_relative_order() {
    let ds = Dataset::new(vec![
        Column::new("k", vec![text("A"), text("B"), text("A")]),
        Column::new("v", ints(&[1, 2, 1])),
    ])
    .unwrap();
    let cleaned = correct(&ds).unwrap();
    assert_eq!(cleaned.row_count(), 2);
    assert_eq!(cleaned.row(0), vec![text("A"), Cell::Int(1)]);
    assert_eq!(cleaned.row(1), vec![text("B"), Cell::Int(2)]);
}

#[test]
fn second_correction_is_a_noop() {
    let once = Corrector::new().run(&sales_dataset()).unwrap().dataset;
    let again = Corrector::new().run(&once).unwrap();
    assert!(again.summary.is_noop());
    assert_eq!(again.dataset, once);

    // A twice-corrected dataset is free of duplicates, missing numeric
    // cells, and outliers by construction.
    let report = validate(&again.dataset, &ValidateConfig::default()).unwrap();
    assert!(report
        .issues
        .iter()
        .all(|i| !matches!(i, Issue::MissingValues { .. } | Issue::OutlierColumns { .. })));
}

#[test]
fn parse_validate_correct_from_csv() {
    let csv = b"customer,units,revenue\n\
acme,10,100\n\
globex,,110\n\
acme,10,100\n\
initech,12,95\n\
acme,11,105\n\
hooli,9,9000\n";
    let parser = Parser::new();
    let ds = parser.parse_bytes(csv, b',').unwrap();

    let report = validate(&ds, &ValidateConfig::default()).unwrap();
    assert!(report.issues_found());

    let cleaned = correct(&ds).unwrap();
    assert!(cleaned.row_count() < ds.row_count());
    assert_eq!(cleaned.column_names(), ds.column_names());
}
