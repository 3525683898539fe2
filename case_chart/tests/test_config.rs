use case_chart::{render_bar, CaseField, ChartConfig, ChartError, Region};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::io::Write;
use tempfile::NamedTempFile;
use trend_math::VelocityDivisor;

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = ChartConfig::from_toml_str("horizon = 14\nhistory_days = 150\n").unwrap();

    assert_eq!(
        config,
        ChartConfig {
            horizon: 14,
            history_days: Some(150),
            ..ChartConfig::default()
        }
    );
}

#[test]
fn test_full_toml_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "window = 7\nhorizon = 9\nglyph = \"#\"\nvelocity_divisor = \"difference_count\""
    )
    .unwrap();

    let config = ChartConfig::from_toml_file(file.path()).unwrap();
    assert_eq!(config.window, 7);
    assert_eq!(config.horizon, 9);
    assert_eq!(config.glyph, '#');
    assert_eq!(config.velocity_divisor, VelocityDivisor::DifferenceCount);
}

#[rstest]
#[case("window = 0")]
#[case("history_days = 0")]
#[case("glyph = \" \"")]
#[case("horizon = 1000000")]
fn test_invalid_values_rejected(#[case] content: &str) {
    assert!(matches!(
        ChartConfig::from_toml_str(content),
        Err(ChartError::InvalidParameter(_))
    ));
}

#[rstest]
#[case("windw = 15")]
#[case("horizon = \"soon\"")]
fn test_malformed_toml_rejected(#[case] content: &str) {
    assert!(matches!(
        ChartConfig::from_toml_str(content),
        Err(ChartError::ConfigError(_))
    ));
}

#[rstest]
#[case("new", CaseField::NewCases)]
#[case("0", CaseField::NewCases)]
#[case("TOTAL", CaseField::TotalCases)]
#[case("1", CaseField::TotalCases)]
fn test_field_selector(#[case] input: &str, #[case] expected: CaseField) {
    assert_eq!(input.parse::<CaseField>().unwrap(), expected);
}

#[rstest]
#[case("US", true)]
#[case("ny", false)]
#[case("Wy", false)]
#[case("KY", false)]
fn test_region_codes(#[case] input: &str, #[case] national: bool) {
    let region: Region = input.parse().unwrap();
    assert_eq!(region.is_national(), national);
    assert_eq!(region.to_string(), input.to_uppercase());
}

#[rstest]
#[case(60, 20, "|||")]
#[case(19, 20, "")]
#[case(20, 20, "|")]
#[case(3, 1, "|||")]
#[case(-5, 1, "")]
#[case(40, 0, "")]
fn test_render_bar(#[case] value: i64, #[case] scale: u64, #[case] expected: &str) {
    assert_eq!(render_bar(value, scale, '|'), expected);
}
