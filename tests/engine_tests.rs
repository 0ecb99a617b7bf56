//! Library-level tests for the reconstruction engine: extraction,
//! normalization, time conversion and slot classification.

use chrono::NaiveTime;
use std::collections::HashSet;

use dtrlogger::config::rules::NameRules;
use dtrlogger::core::classify::{TimeClassifier, assign_slots};
use dtrlogger::core::extract::{LineExtractor, LineOutcome};
use dtrlogger::core::ingest::LogParser;
use dtrlogger::core::normalize::NameNormalizer;

fn rules_with_vocabulary(words: &[&str]) -> NameRules {
    NameRules {
        vocabulary: words.iter().map(|w| w.to_string()).collect(),
        exceptions: Vec::new(),
        permanent: HashSet::new(),
    }
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

// ---------------------------------------------------------------------------
// Name normalization
// ---------------------------------------------------------------------------

#[test]
fn test_segmentation_splits_unspaced_name() {
    let norm = NameNormalizer::new(rules_with_vocabulary(&["JUAN", "DELA", "CRUZ"]));
    assert_eq!(norm.normalize("JUANDELACRUZ"), "JUAN DELA CRUZ");
}

#[test]
fn test_segmentation_prefers_longest_vocabulary_word() {
    // MARIACRUZ must win over MARIA even though MARIA is listed first
    let norm = NameNormalizer::new(rules_with_vocabulary(&["MARIA", "MARIACRUZ", "JUAN"]));
    assert_eq!(norm.normalize("MARIACRUZJUAN"), "MARIACRUZ JUAN");
}

#[test]
fn test_sanitize_strips_noise_and_uppercases() {
    let norm = NameNormalizer::new(rules_with_vocabulary(&["JUAN", "CRUZ"]));
    assert_eq!(norm.normalize("juan123cruz!!"), "JUAN CRUZ");
}

#[test]
fn test_spaced_input_keeps_word_boundaries() {
    let norm = NameNormalizer::new(rules_with_vocabulary(&["JUAN", "DELA", "CRUZ"]));
    assert_eq!(norm.normalize("Juan Dela Cruz"), "JUAN DELA CRUZ");
}

#[test]
fn test_exception_overrides_segmentation() {
    let mut rules = rules_with_vocabulary(&["MA", "LEONORA", "JIMENEZ", "VALIENTE"]);
    rules.exceptions.push((
        "MA LEONORAJIMENEZ VALIE".to_string(),
        "MA LEONORA JIMENEZ VALIENTE".to_string(),
    ));

    let norm = NameNormalizer::new(rules);
    // space-insensitive match on the exception key, canonical value returned
    assert_eq!(
        norm.normalize("MALEONORAJIMENEZVALIE"),
        "MA LEONORA JIMENEZ VALIENTE"
    );
    assert_eq!(
        norm.normalize("ma leonorajimenez valie"),
        "MA LEONORA JIMENEZ VALIENTE"
    );
}

#[test]
fn test_middle_initial_fallback() {
    let norm = NameNormalizer::new(rules_with_vocabulary(&["CHRISTIAN", "SANTOS"]));
    assert_eq!(norm.normalize("CHRISTIANO.SANTOS"), "CHRISTIAN O. SANTOS");
}

#[test]
fn test_normalization_is_deterministic() {
    let norm = NameNormalizer::new(NameRules::default());
    let a = norm.normalize("danielrabaradomingo");
    let b = norm.normalize("danielrabaradomingo");
    assert_eq!(a, b);
    assert_eq!(a, "DANIEL RABARA DOMINGO");
}

// ---------------------------------------------------------------------------
// Time conversion
// ---------------------------------------------------------------------------

#[test]
fn test_am_pm_conversion() {
    let classifier = TimeClassifier::new();

    let (_, midnight) = classifier.parse_datetime("10/01/2025 12:30 AM").unwrap();
    assert_eq!(midnight, t(0, 30));

    let (_, noon) = classifier.parse_datetime("10/01/2025 12:30 PM").unwrap();
    assert_eq!(noon, t(12, 30));

    let (_, late) = classifier.parse_datetime("10/01/2025 11:59 PM").unwrap();
    assert_eq!(late, t(23, 59));
}

#[test]
fn test_datetime_parse_with_seconds_and_casing() {
    let classifier = TimeClassifier::new();

    let (date, time) = classifier.parse_datetime("10/01/2025 12:26:22 pm").unwrap();
    assert_eq!(date.to_string(), "2025-10-01");
    assert_eq!(time, t(12, 26));
}

#[test]
fn test_twenty_four_hour_input_passes_through() {
    let classifier = TimeClassifier::new();

    let (_, time) = classifier.parse_datetime("10/01/2025 17:45").unwrap();
    assert_eq!(time, t(17, 45));

    // PM on an already-24h hour must not add 12 again
    let (_, time) = classifier.parse_datetime("10/01/2025 17:45 PM").unwrap();
    assert_eq!(time, t(17, 45));
}

#[test]
fn test_invalid_calendar_date_is_rejected() {
    let classifier = TimeClassifier::new();
    assert!(classifier.parse_datetime("02/30/2025 08:00 AM").is_err());
}

// ---------------------------------------------------------------------------
// Slot classification
// ---------------------------------------------------------------------------

#[test]
fn test_full_day_slot_assignment() {
    let slots = assign_slots(&[t(8, 0), t(12, 5), t(12, 45), t(17, 0), t(20, 30)]);

    assert_eq!(slots.check_in, Some(t(8, 0)));
    assert_eq!(slots.break_out, Some(t(12, 5)));
    assert_eq!(slots.break_in, Some(t(12, 45)));
    // last qualifying punch wins for check-out
    assert_eq!(slots.check_out, Some(t(20, 30)));
}

#[test]
fn test_check_out_is_last_fit() {
    let slots = assign_slots(&[t(13, 0), t(18, 0)]);
    assert_eq!(slots.check_out, Some(t(18, 0)));
}

#[test]
fn test_check_in_is_first_fit() {
    let slots = assign_slots(&[t(6, 0), t(9, 0)]);
    assert_eq!(slots.check_in, Some(t(6, 0)));
}

#[test]
fn test_night_hours_fill_no_slot() {
    let slots = assign_slots(&[t(2, 0), t(4, 59), t(22, 0), t(23, 30)]);
    assert_eq!(slots.check_in, None);
    assert_eq!(slots.break_out, None);
    assert_eq!(slots.break_in, None);
    assert_eq!(slots.check_out, None);
}

#[test]
fn test_unsorted_input_is_sorted_before_assignment() {
    let slots = assign_slots(&[t(17, 0), t(8, 0), t(12, 45), t(12, 5)]);
    assert_eq!(slots.check_in, Some(t(8, 0)));
    assert_eq!(slots.break_out, Some(t(12, 5)));
    assert_eq!(slots.break_in, Some(t(12, 45)));
    assert_eq!(slots.check_out, Some(t(17, 0)));
}

// ---------------------------------------------------------------------------
// Line extraction and full parse
// ---------------------------------------------------------------------------

#[test]
fn test_extractor_splits_name_and_datetime() {
    let extractor = LineExtractor::new();

    match extractor.split_line("danielrabaradomingo 10/01/2025 12:26:22 PM") {
        LineOutcome::Matched { name, datetime } => {
            assert_eq!(name, "danielrabaradomingo");
            assert_eq!(datetime, "10/01/2025 12:26:22 PM");
        }
        LineOutcome::Skipped => panic!("line should match"),
    }
}

#[test]
fn test_extractor_skips_blank_and_garbage_lines() {
    let extractor = LineExtractor::new();
    assert_eq!(extractor.split_line(""), LineOutcome::Skipped);
    assert_eq!(extractor.split_line("   "), LineOutcome::Skipped);
    assert_eq!(extractor.split_line("no timestamp here"), LineOutcome::Skipped);
}

#[test]
fn test_parse_is_deterministic_and_order_insensitive_across_employees() {
    let parser = LogParser::new(NameRules::default());

    let raw = "\
jessicagarcia 10/01/2025 08:10:15 AM
danielrabaradomingo 10/01/2025 07:55:02 AM
jessicagarcia 10/01/2025 05:30:44 PM
";

    let first = parser.parse(raw);
    let second = parser.parse(raw);
    assert_eq!(first, second);

    let grouped = first.grouped();
    assert_eq!(grouped.len(), 2);
    assert!(grouped.contains_key("DANIEL RABARA DOMINGO"));
    assert!(grouped.contains_key("JESSICA GARCIA"));
}

#[test]
fn test_parse_counts_matched_and_skipped() {
    let parser = LogParser::new(NameRules::default());

    let raw = "\
danielrabaradomingo 10/01/2025 07:55:02 AM
not a punch line

jessicagarcia 10/01/2025 08:10:15 AM
";

    let parsed = parser.parse(raw);
    assert_eq!(parsed.matched_lines, 2);
    // the blank line is ignored silently, only real garbage is counted
    assert_eq!(parsed.skipped_lines, 1);
    assert_eq!(parsed.punches.len(), 2);
}
