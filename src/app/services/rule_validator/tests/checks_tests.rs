//! Tests for the individual validation checks and their ordering

use super::{base_grid, base_schema, blank, grid, num, text};
use crate::app::services::rule_validator::checks::*;
use crate::app::services::rule_validator::report::ValidationReport;
use crate::app::services::rule_validator::validate;
use crate::config::RowAssertion;

// =============================================================================
// Whole-battery behavior
// =============================================================================

#[test]
fn test_well_formed_sheet_is_valid() {
    let report = validate(&base_grid(), &base_schema());
    assert!(report.is_valid, "errors: {:?}", report.errors);
    assert!(report.errors.is_empty());
}

#[test]
fn test_empty_grid_short_circuits() {
    let schema = base_schema();
    let report = validate(&grid(vec![]), &schema);

    assert!(!report.is_valid);
    assert_eq!(report.errors, vec!["Sheet is empty"]);
    // Later checks never ran, so there is nothing else in the report
    assert!(report.warnings.is_empty());
}

#[test]
fn test_all_blank_grid_short_circuits() {
    let report = validate(
        &grid(vec![vec![blank(), blank()], vec![text("  "), blank()]]),
        &base_schema(),
    );

    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("all cells are blank"));
}

#[test]
fn test_failures_accumulate_across_checks() {
    // Wrong company name AND missing audited values AND bad row label
    let g = grid(vec![
        vec![text("Name of the Company"), text("Wrong Inc")],
        vec![blank(), num(2021.0)],
        vec![
            text("Type of accounts (Audited or Management)"),
            text("Management Accounts"),
        ],
        vec![text("Turnover"), num(1.0)],
    ]);
    let report = validate(&g, &base_schema());

    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 3);
    assert!(report.errors[0].contains("Company name mismatch"));
    assert!(report.errors[1].contains("No 'Audited' value"));
    assert!(report.errors[2].contains("Row label mismatch at row 4"));
}

#[test]
fn test_errors_and_validity_are_equivalent() {
    let cases = vec![
        (base_grid(), base_schema()),
        (grid(vec![]), base_schema()),
        (grid(vec![vec![text("x")]]), base_schema()),
    ];

    for (g, schema) in cases {
        let report = validate(&g, &schema);
        assert_eq!(report.is_valid, report.errors.is_empty());
    }
}

// =============================================================================
// Check 2: company name
// =============================================================================

#[test]
fn test_company_name_unset_warns() {
    let mut schema = base_schema();
    schema.expected_company_name = None;

    let mut report = ValidationReport::new();
    check_company_name(&base_grid(), &schema, &mut report);

    assert!(report.is_valid);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("No expected company name"));
}

#[test]
fn test_company_label_row_missing() {
    let g = grid(vec![vec![text("Something else"), text("Acme Corp")]]);

    let mut report = ValidationReport::new();
    check_company_name(&g, &base_schema(), &mut report);

    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("Could not find 'Name of the Company' row"));
}

#[test]
fn test_company_name_cell_blank() {
    let g = grid(vec![vec![text("Name of the Company"), blank()]]);

    let mut report = ValidationReport::new();
    check_company_name(&g, &base_schema(), &mut report);

    assert_eq!(report.errors, vec!["Company name cell is empty"]);
}

#[test]
fn test_company_name_mismatch_cites_both_names() {
    let g = grid(vec![vec![text("Name of the Company"), text("Other Inc")]]);

    let mut report = ValidationReport::new();
    check_company_name(&g, &base_schema(), &mut report);

    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("'Acme Corp'"));
    assert!(report.errors[0].contains("'Other Inc'"));
}

#[test]
fn test_company_name_comparison_trims() {
    let g = grid(vec![vec![
        text("Name of the Company"),
        text("  Acme Corp  "),
    ]]);

    let mut report = ValidationReport::new();
    check_company_name(&g, &base_schema(), &mut report);

    assert!(report.is_valid);
}

// =============================================================================
// Check 3: audited values
// =============================================================================

#[test]
fn test_account_type_row_unset_warns() {
    let mut schema = base_schema();
    schema.account_type_row = None;

    let mut report = ValidationReport::new();
    check_audited_values(&base_grid(), &schema, &mut report);

    assert!(report.is_valid);
    assert!(report.warnings[0].contains("No account type row"));
}

#[test]
fn test_account_type_validation_disabled_skips_check() {
    // The battery only notes the skip; no error or warning from this check
    let mut schema = base_schema();
    schema.validate_account_type = false;

    let g = grid(vec![
        vec![text("Name of the Company"), text("Acme Corp")],
        vec![blank(), num(2021.0), num(2022.0)],
        vec![text("Wrong label"), text("Management Accounts")],
        vec![text("Revenue"), num(150.5), num(200.0)],
    ]);
    let report = validate(&g, &schema);

    assert!(report.is_valid, "errors: {:?}", report.errors);
}

#[test]
fn test_account_type_wrong_row_label() {
    let g = base_grid();
    let mut schema = base_schema();
    schema.account_type_row = Some(1); // points at the company row

    let mut report = ValidationReport::new();
    check_audited_values(&g, &schema, &mut report);

    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("does not contain account type information"));
}

#[test]
fn test_account_type_row_out_of_range() {
    let mut schema = base_schema();
    schema.account_type_row = Some(40);

    let mut report = ValidationReport::new();
    check_audited_values(&base_grid(), &schema, &mut report);

    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("out of range"));
}

#[test]
fn test_no_audited_value_is_an_error() {
    let g = grid(vec![
        vec![blank()],
        vec![blank()],
        vec![
            text("Type of accounts (Audited or Management)"),
            text("Management Accounts"),
            text("Management Accounts"),
        ],
    ]);

    let mut report = ValidationReport::new();
    check_audited_values(&g, &base_schema(), &mut report);

    assert_eq!(report.errors, vec!["No 'Audited' value found in account type row"]);
}

#[test]
fn test_audit_keyword_is_case_insensitive() {
    let g = grid(vec![
        vec![blank()],
        vec![blank()],
        vec![
            text("Type of accounts (Audited or Management)"),
            text("AUDITED"),
        ],
    ]);

    let mut report = ValidationReport::new();
    check_audited_values(&g, &base_schema(), &mut report);

    assert!(report.is_valid);
}

// =============================================================================
// Check 4: years row
// =============================================================================

#[test]
fn test_years_row_unset_warns() {
    let mut schema = base_schema();
    schema.years_row = None;

    let mut report = ValidationReport::new();
    check_years_row(&base_grid(), &schema, &mut report);

    assert!(report.is_valid);
    assert!(report.warnings[0].contains("No years row"));
}

#[test]
fn test_non_numeric_year_warns_but_does_not_fail() {
    let g = grid(vec![
        vec![blank()],
        vec![blank(), text("FY21"), num(2022.0)],
    ]);

    let mut report = ValidationReport::new();
    check_years_row(&g, &base_schema(), &mut report);

    assert!(report.is_valid);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("Non-numeric year value"));
}

#[test]
fn test_out_of_range_year_warns() {
    let g = grid(vec![vec![blank()], vec![blank(), num(1850.0), num(2022.0)]]);

    let mut report = ValidationReport::new();
    check_years_row(&g, &base_schema(), &mut report);

    assert!(report.is_valid);
    assert!(report.warnings[0].contains("Unusual year value in years row: 1850"));
}

#[test]
fn test_zero_valid_years_is_an_error() {
    let g = grid(vec![vec![blank()], vec![blank(), text("n/a"), num(1850.0)]]);

    let mut report = ValidationReport::new();
    check_years_row(&g, &base_schema(), &mut report);

    assert!(!report.is_valid);
    assert!(report.errors[0].contains("No valid years found"));
    assert_eq!(report.warnings.len(), 2);
}

#[test]
fn test_years_parsed_from_text_cells() {
    let g = grid(vec![vec![blank()], vec![blank(), text("2021"), text(" 2022 ")]]);

    let mut report = ValidationReport::new();
    check_years_row(&g, &base_schema(), &mut report);

    assert!(report.is_valid);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_years_row_header_cell_warning() {
    let g = grid(vec![
        vec![blank()],
        vec![text("Period"), num(2021.0)],
    ]);

    let mut report = ValidationReport::new();
    check_years_row(&g, &base_schema(), &mut report);

    assert!(report.is_valid);
    assert!(report.warnings[0].contains("does not mention 'year'"));

    // A header that mentions "Year" passes quietly
    let g = grid(vec![vec![blank()], vec![text("Year"), num(2021.0)]]);
    let mut report = ValidationReport::new();
    check_years_row(&g, &base_schema(), &mut report);
    assert!(report.warnings.is_empty());
}

// =============================================================================
// Checks 5 and 6: row assertions
// =============================================================================

#[test]
fn test_row_label_boundary_first_row() {
    // Row 1 maps to grid index 0
    let g = grid(vec![vec![text("Revenue"), num(1.0)]]);
    let mut schema = base_schema();
    schema.row_assertions = vec![RowAssertion {
        row: 1,
        expected_label: "Revenue".to_string(),
    }];

    let mut report = ValidationReport::new();
    check_row_labels(&g, &schema, &mut report);
    assert!(report.is_valid);
}

#[test]
fn test_row_label_boundary_last_row() {
    let g = grid(vec![
        vec![blank()],
        vec![blank()],
        vec![text("EBITDA"), num(9.0)],
    ]);
    let mut schema = base_schema();
    schema.row_assertions = vec![RowAssertion {
        row: 3,
        expected_label: "EBITDA".to_string(),
    }];

    let mut report = ValidationReport::new();
    check_row_labels(&g, &schema, &mut report);
    assert!(report.is_valid);

    // One past the end is an error
    schema.row_assertions[0].row = 4;
    let mut report = ValidationReport::new();
    check_row_labels(&g, &schema, &mut report);
    assert!(report.errors[0].contains("out of range"));
}

#[test]
fn test_row_label_mismatch_names_row_and_labels() {
    let g = grid(vec![vec![text("Turnover"), num(1.0)]]);
    let mut schema = base_schema();
    schema.row_assertions = vec![RowAssertion {
        row: 1,
        expected_label: "Revenue".to_string(),
    }];

    let mut report = ValidationReport::new();
    check_row_labels(&g, &schema, &mut report);

    assert!(report.errors[0].contains("row 1"));
    assert!(report.errors[0].contains("'Revenue'"));
    assert!(report.errors[0].contains("'Turnover'"));
}

#[test]
fn test_numeric_label_matches_by_string_cast() {
    let g = grid(vec![vec![num(2021.0), num(1.0)]]);
    let mut schema = base_schema();
    schema.row_assertions = vec![RowAssertion {
        row: 1,
        expected_label: "2021".to_string(),
    }];

    let mut report = ValidationReport::new();
    check_row_labels(&g, &schema, &mut report);
    assert!(report.is_valid);
}

#[test]
fn test_all_assertions_evaluated() {
    let g = grid(vec![
        vec![text("Wrong A"), num(1.0)],
        vec![text("Wrong B"), num(2.0)],
    ]);
    let mut schema = base_schema();
    schema.row_assertions = vec![
        RowAssertion {
            row: 1,
            expected_label: "A".to_string(),
        },
        RowAssertion {
            row: 2,
            expected_label: "B".to_string(),
        },
    ];

    let mut report = ValidationReport::new();
    check_row_labels(&g, &schema, &mut report);
    assert_eq!(report.errors.len(), 2);
}

#[test]
fn test_row_without_values_is_an_error() {
    let g = grid(vec![vec![text("Revenue"), blank(), text("  ")]]);
    let mut schema = base_schema();
    schema.row_assertions = vec![RowAssertion {
        row: 1,
        expected_label: "Revenue".to_string(),
    }];

    let mut report = ValidationReport::new();
    check_row_values(&g, &schema, &mut report);

    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("Row 1"));
    assert!(report.errors[0].contains("'Revenue'"));
    assert!(report.errors[0].contains("has no values"));
}

#[test]
fn test_row_with_one_value_passes() {
    let g = grid(vec![vec![text("Revenue"), blank(), num(3.0)]]);
    let mut schema = base_schema();
    schema.row_assertions = vec![RowAssertion {
        row: 1,
        expected_label: "Revenue".to_string(),
    }];

    let mut report = ValidationReport::new();
    check_row_values(&g, &schema, &mut report);
    assert!(report.is_valid);
}

// =============================================================================
// Check 7: year continuity
// =============================================================================

#[test]
fn test_single_gap_produces_single_warning() {
    let g = grid(vec![
        vec![blank()],
        vec![blank(), num(2019.0), num(2020.0), num(2022.0)],
    ]);

    let mut report = ValidationReport::new();
    check_year_continuity(&g, &base_schema(), &mut report);

    assert!(report.is_valid);
    assert_eq!(report.warnings, vec!["Gap in year sequence: 2020 to 2022"]);
}

#[test]
fn test_min_required_years_gate() {
    let g = grid(vec![
        vec![blank()],
        vec![blank(), num(2019.0), num(2020.0), num(2022.0)],
    ]);

    // Three distinct years present; requiring four fails
    let schema = base_schema().with_min_required_years(4);
    let mut report = ValidationReport::new();
    check_year_continuity(&g, &schema, &mut report);
    assert!(!report.is_valid);
    assert!(report.errors[0].contains("Found 3, required 4"));

    // Requiring three passes (gap warnings do not fail)
    let schema = base_schema().with_min_required_years(3);
    let mut report = ValidationReport::new();
    check_year_continuity(&g, &schema, &mut report);
    assert!(report.is_valid);
}

#[test]
fn test_duplicate_years_count_once() {
    let g = grid(vec![
        vec![blank()],
        vec![blank(), num(2021.0), num(2021.0)],
    ]);

    let schema = base_schema().with_min_required_years(2);
    let mut report = ValidationReport::new();
    check_year_continuity(&g, &schema, &mut report);

    assert!(!report.is_valid);
    assert!(report.errors[0].contains("Found 1, required 2"));
}

#[test]
fn test_continuity_silent_without_years_row() {
    let mut schema = base_schema();
    schema.years_row = None;

    let mut report = ValidationReport::new();
    check_year_continuity(&base_grid(), &schema, &mut report);

    assert!(report.is_valid);
    assert!(report.warnings.is_empty());
}
