/*!
 * Tests for language utilities
 */

use subalign::language_utils::{
    get_language_name, language_codes_match, normalize_to_task_language,
};

/// Test normalization of 2-letter codes to the aeneas task language
#[test]
fn test_normalize_withPart1Codes_shouldReturn639_3() {
    assert_eq!(normalize_to_task_language("en").unwrap(), "eng");
    assert_eq!(normalize_to_task_language("fr").unwrap(), "fra");
    assert_eq!(normalize_to_task_language("de").unwrap(), "deu");
    // Case and whitespace are tolerated
    assert_eq!(normalize_to_task_language(" EN ").unwrap(), "eng");
}

/// Test that 3-letter terminological codes pass through
#[test]
fn test_normalize_withPart2TCodes_shouldPassThrough() {
    assert_eq!(normalize_to_task_language("eng").unwrap(), "eng");
    assert_eq!(normalize_to_task_language("spa").unwrap(), "spa");
}

/// Test bibliographic code conversion
#[test]
fn test_normalize_withPart2BCodes_shouldConvertToPart2T() {
    assert_eq!(normalize_to_task_language("fre").unwrap(), "fra");
    assert_eq!(normalize_to_task_language("ger").unwrap(), "deu");
    assert_eq!(normalize_to_task_language("chi").unwrap(), "zho");
}

/// Test invalid codes are rejected
#[test]
fn test_normalize_withInvalidCodes_shouldFail() {
    assert!(normalize_to_task_language("xx").is_err());
    assert!(normalize_to_task_language("xyz").is_err());
    assert!(normalize_to_task_language("").is_err());
    assert!(normalize_to_task_language("english").is_err());
}

/// Test language code matching across code forms
#[test]
fn test_language_codes_match_withEquivalentCodes_shouldMatch() {
    assert!(language_codes_match("en", "eng"));
    assert!(language_codes_match("fr", "fre"));
    assert!(language_codes_match("deu", "ger"));

    assert!(!language_codes_match("en", "fr"));
    assert!(!language_codes_match("en", "xyz"));
    assert!(!language_codes_match("", ""));
}

/// Test language name lookup
#[test]
fn test_get_language_name_withValidCodes_shouldReturnName() {
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert_eq!(get_language_name("fra").unwrap(), "French");
    assert!(get_language_name("xyz").is_err());
}
