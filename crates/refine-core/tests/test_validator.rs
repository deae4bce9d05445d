use refine_core::{ColumnCheck, Dataset, RecordValidator, RefineError, compile_check};

fn two_column_dataset(column: &str, values: &[&str]) -> Dataset {
    let rows = values
        .iter()
        .enumerate()
        .map(|(i, v)| vec![(i + 1).to_string(), v.to_string()])
        .collect();
    Dataset::new(vec!["Record_Number".to_string(), column.to_string()], rows)
}

#[test]
fn test_integer_range_removes_out_of_range_rows() {
    // Sex in [1, 2]: the row holding "3" is reported and removed.
    let mut validator = RecordValidator::new(two_column_dataset("Sex", &["1", "2", "3"]));
    let check = compile_check(&ColumnCheck::integer("Sex", Some(1), Some(2))).unwrap();

    validator.apply(&check).unwrap();

    assert_eq!(validator.dataset().row_count(), 2);
    let outcome = &validator.report().outcomes()[0];
    assert_eq!(outcome.column, "Sex");
    assert_eq!(outcome.violations, vec!["3".to_string()]);
}

#[test]
fn test_pattern_check_removes_short_region_code() {
    let mut validator =
        RecordValidator::new(two_column_dataset("Region", &["S12345678", "X1234567"]));
    let check = compile_check(&ColumnCheck::pattern("Region", r"^[A-Za-z]\d{8}$")).unwrap();

    validator.apply(&check).unwrap();

    assert_eq!(validator.dataset().row_count(), 1);
    assert_eq!(validator.dataset().rows()[0][1], "S12345678");
    assert_eq!(
        validator.report().outcomes()[0].violations,
        vec!["2".to_string()]
    );
}

#[test]
fn test_sentinel_kept_in_integer_range() {
    let mut validator = RecordValidator::new(two_column_dataset(
        "Economic_Activity",
        &["1", "9", "X", "10"],
    ));
    let check = compile_check(&ColumnCheck::integer_with_x(
        "Economic_Activity",
        Some(1),
        Some(9),
    ))
    .unwrap();

    validator.apply(&check).unwrap();

    assert_eq!(validator.dataset().row_count(), 3);
    assert_eq!(
        validator.report().outcomes()[0].violations,
        vec!["4".to_string()]
    );
}

#[test]
fn test_clean_column_leaves_rows_untouched() {
    let mut validator = RecordValidator::new(two_column_dataset("Student", &["1", "2", "1"]));
    let check = compile_check(&ColumnCheck::integer("Student", Some(1), Some(2))).unwrap();

    validator.apply(&check).unwrap();

    assert_eq!(validator.dataset().row_count(), 3);
    let outcome = &validator.report().outcomes()[0];
    assert!(outcome.is_clean());
    assert!(validator.report().is_clean());
}

#[test]
fn test_unknown_column_fails_fast() {
    let mut validator = RecordValidator::new(two_column_dataset("Sex", &["1"]));
    let check = compile_check(&ColumnCheck::integer("Missing", Some(1), Some(2))).unwrap();

    let err = validator.apply(&check).unwrap_err();
    assert!(matches!(err, RefineError::ColumnNotFound(name) if name == "Missing"));
    // Fail-fast: nothing was removed or recorded.
    assert_eq!(validator.dataset().row_count(), 1);
    assert!(validator.report().outcomes().is_empty());
}

#[test]
fn test_missing_id_column_fails_fast() {
    let dataset = Dataset::new(
        vec!["Id".to_string(), "Sex".to_string()],
        vec![vec!["1".to_string(), "1".to_string()]],
    );
    let mut validator = RecordValidator::new(dataset);
    let check = compile_check(&ColumnCheck::integer("Sex", Some(1), Some(2))).unwrap();
    assert!(matches!(
        validator.apply(&check),
        Err(RefineError::ColumnNotFound(_))
    ));
}

#[test]
fn test_custom_id_column() {
    let dataset = Dataset::new(
        vec!["Id".to_string(), "Sex".to_string()],
        vec![
            vec!["a".to_string(), "1".to_string()],
            vec!["b".to_string(), "9".to_string()],
        ],
    );
    let mut validator = RecordValidator::new(dataset).with_id_column("Id");
    let check = compile_check(&ColumnCheck::integer("Sex", Some(1), Some(2))).unwrap();

    validator.apply(&check).unwrap();
    assert_eq!(
        validator.report().outcomes()[0].violations,
        vec!["b".to_string()]
    );
}

#[test]
fn test_checks_see_already_filtered_rows() {
    // The first check removes row 2; the second check must not see it.
    let dataset = Dataset::new(
        vec![
            "Record_Number".to_string(),
            "Sex".to_string(),
            "Age".to_string(),
        ],
        vec![
            vec!["1".to_string(), "1".to_string(), "3".to_string()],
            vec!["2".to_string(), "9".to_string(), "99".to_string()],
        ],
    );
    let mut validator = RecordValidator::new(dataset);
    let sex = compile_check(&ColumnCheck::integer("Sex", Some(1), Some(2))).unwrap();
    let age = compile_check(&ColumnCheck::integer("Age", Some(1), Some(8))).unwrap();

    validator.run_checks(&[sex, age]).unwrap();

    let outcomes = validator.report().outcomes();
    assert_eq!(outcomes[0].violations, vec!["2".to_string()]);
    assert!(outcomes[1].is_clean());
    assert_eq!(validator.dataset().row_count(), 1);
}

#[test]
fn test_survivors_satisfy_rule() {
    let values = ["0", "1", "2", "3", "X", "01", "abc", ""];
    let mut validator = RecordValidator::new(two_column_dataset("Family_Composition", &values));
    let declared = ColumnCheck::integer_with_x("Family_Composition", Some(0), Some(5));
    let check = compile_check(&declared).unwrap();

    validator.apply(&check).unwrap();

    for row in validator.dataset().rows() {
        assert!(check.rule.is_valid(&row[1]), "survivor {:?} invalid", row[1]);
    }
    // Exact string membership: "01" is a violation even though numerically
    // in range.
    assert!(
        validator.report().outcomes()[0]
            .violations
            .contains(&"6".to_string())
    );
}

#[test]
fn test_drop_exact_duplicates_reports_count() {
    let dataset = Dataset::new(
        vec!["Record_Number".to_string(), "Sex".to_string()],
        vec![
            vec!["1".to_string(), "1".to_string()],
            vec!["2".to_string(), "1".to_string()],
        ],
    );
    let mut validator = RecordValidator::new(dataset);

    let removed = validator.drop_exact_duplicates().unwrap();
    assert_eq!(removed, 1);
    assert_eq!(validator.report().duplicates_removed(), Some(1));

    // Idempotent: a second pass removes nothing further.
    assert_eq!(validator.drop_exact_duplicates().unwrap(), 0);
}

#[test]
fn test_load_failure_is_source_unavailable() {
    let err = RecordValidator::from_path("/nonexistent/census.csv").unwrap_err();
    assert!(matches!(err, RefineError::SourceUnavailable(_)));
}
