#![cfg(feature = "dev")]

use lms_rs::internals::primitives::errors::LmsError;

#[test]
fn test_lms_error_display() {
    // EmptyTable
    let err = LmsError::EmptyTable;
    assert_eq!(format!("{}", err), "Reference table is empty");

    // UnsortedTable
    let err = LmsError::UnsortedTable { index: 3 };
    assert_eq!(
        format!("{}", err),
        "Reference table is not strictly increasing at row 3"
    );

    // InvalidNumericValue
    let err = LmsError::InvalidNumericValue("row[2].age=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: row[2].age=NaN");

    // InvalidPercentile
    let err = LmsError::InvalidPercentile(101.0);
    assert_eq!(
        format!("{}", err),
        "Invalid percentile: 101 (must be > 0 and < 100)"
    );

    // InvalidStep
    let err = LmsError::InvalidStep(0.0);
    assert_eq!(format!("{}", err), "Invalid step: 0 (must be > 0 and finite)");

    // InvalidClamp
    let err = LmsError::InvalidClamp(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid clamp bound: -1 (must be > 0 and finite)"
    );

    // InvalidDoseCount
    let err = LmsError::InvalidDoseCount { got: 4, max: 3 };
    assert_eq!(
        format!("{}", err),
        "Invalid dose count: got 4, series has 3 doses"
    );

    // DuplicateParameter
    let err = LmsError::DuplicateParameter { parameter: "clamp_z" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'clamp_z' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_lms_error_properties() {
    let err1 = LmsError::EmptyTable;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, LmsError::UnsortedTable { index: 1 });
}

#[cfg(feature = "std")]
#[test]
fn test_lms_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<LmsError>();
}
