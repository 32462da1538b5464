//! Integration tests for pattern-email-gen

use pattern_email_gen::{
    combine, format, generate, sample, serialize,
    export::{Exporter, FileExporter},
    pattern::{combine_with_mode, parse_template},
    Combinator, EmailGenerator, GenerationConfig, Pattern, PatternEmailError, PatternSet, RangeMode,
    EXPORT_FILE_NAME,
};

fn set(patterns: Vec<Pattern>) -> PatternSet {
    PatternSet::new(patterns).unwrap()
}

/// Expected line count from the legacy product formula
fn legacy_count(patterns: &[Pattern]) -> usize {
    let first = patterns[0].max.max(0) as usize;
    patterns[1..].iter().fold(first, |acc, p| {
        let len = if p.min > p.max { 0 } else { (p.max - p.min + 1) as usize };
        acc * len
    })
}

fn line_count(document: &str) -> usize {
    if document.is_empty() {
        0
    } else {
        document.split('\n').count()
    }
}

#[test]
fn test_single_slot_starts_at_zero() {
    let patterns = set(vec![Pattern::new(3, 1, 5)]);
    assert_eq!(combine(&patterns), vec!["000", "001", "002", "003", "004"]);
}

#[test]
fn test_two_slot_example() {
    let patterns = set(vec![
        Pattern::new(2, 0, 2),
        Pattern::new(1, 1, 2).with_prefix("-"),
    ]);
    let parts = combine(&patterns);
    assert_eq!(parts.len(), 4);
    assert_eq!(parts, vec!["00-1", "00-2", "01-1", "01-2"]);
}

#[test]
fn test_serialize_example() {
    assert_eq!(serialize(["a", "b"], "x.com"), "a@x.com\nb@x.com");
}

#[test]
fn test_degenerate_slot_empties_everything() {
    let patterns = set(vec![Pattern::new(1, 0, 1000), Pattern::new(1, 5, 2)]);
    assert!(combine(&patterns).is_empty());
    assert_eq!(generate(&patterns, "x.com"), "");
}

#[test]
fn test_max_zero_yields_empty_document() {
    let patterns = set(vec![Pattern::new(3, 0, 0)]);
    assert_eq!(generate(&patterns, "x.com"), "");
}

#[test]
fn test_line_count_matches_formula() {
    let cases = vec![
        vec![Pattern::new(3, 1, 17)],
        vec![Pattern::new(2, 50, 6), Pattern::new(1, -3, 4)],
        vec![Pattern::new(1, 0, 3), Pattern::new(2, 10, 14), Pattern::new(0, 7, 8)],
        vec![Pattern::new(1, 0, -4), Pattern::new(2, 10, 14)],
        vec![Pattern::new(1, 0, 4), Pattern::new(2, 3, 3), Pattern::new(0, 9, 8)],
    ];

    for patterns in cases {
        let expected = legacy_count(&patterns);
        let document = generate(&set(patterns.clone()), "example.com");
        assert_eq!(line_count(&document), expected, "patterns: {:?}", patterns);
    }
}

#[test]
fn test_every_line_is_an_address() {
    let patterns = set(vec![
        Pattern::new(3, 1, 12).with_prefix("user"),
        Pattern::new(1, 1, 2).with_prefix("."),
    ]);
    let document = generate(&patterns, "example.com");
    assert!(!document.ends_with('\n'));
    for line in document.lines() {
        assert!(line.starts_with("user"));
        assert!(line.ends_with("@example.com"));
    }
    assert_eq!(document.lines().next(), Some("user000.1@example.com"));
    assert_eq!(document.lines().last(), Some("user011.2@example.com"));
}

#[test]
fn test_format_width_property() {
    for width in 0..6 {
        let pattern = Pattern::new(width, 0, 0);
        for value in [0_i64, 5, 99, 1000, -7] {
            assert!(format(&pattern, value).len() >= width);
        }
    }
}

#[test]
fn test_sample_uses_min_not_iteration_start() {
    let patterns = set(vec![
        Pattern::new(3, 5, 100).with_prefix("u"),
        Pattern::new(2, 1, 9).with_prefix("-"),
    ]);
    assert_eq!(sample(&patterns, "x.com"), "u005-01@x.com");
    assert_eq!(combine(&patterns)[0], "u000-01");
    assert!(sample(&patterns, "").ends_with("@[domain]"));
}

#[test]
fn test_uniform_mode_differs_only_in_first_slot() {
    let patterns = set(vec![Pattern::new(1, 2, 4), Pattern::new(1, 1, 2)]);
    assert_eq!(
        combine_with_mode(&patterns, RangeMode::Uniform),
        vec!["21", "22", "31", "32", "41", "42"]
    );
    assert_eq!(
        combine_with_mode(&patterns, RangeMode::Legacy),
        vec!["01", "02", "11", "12", "21", "22", "31", "32"]
    );
}

#[test]
fn test_lazy_and_eager_agree() {
    let patterns = set(vec![
        parse_template(1, "a{2:0..4}").unwrap(),
        parse_template(2, "b{1:-1..1}").unwrap(),
        parse_template(3, "{0:8..9}c").unwrap(),
    ]);
    let mut combinator = Combinator::new(&patterns, RangeMode::Legacy);
    let mut streamed = Vec::new();
    while !combinator.is_exhausted() {
        streamed.extend(combinator.next_batch(7));
    }
    assert_eq!(streamed, combine(&patterns));
}

#[test]
fn test_generator_and_file_export_agree() {
    let patterns = set(vec![Pattern::new(2, 0, 30).with_prefix("x"), Pattern::new(1, 1, 3)]);
    let config = GenerationConfig::new(patterns.clone(), "example.org");
    let generator = EmailGenerator::new(config);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(EXPORT_FILE_NAME);
    let report = generator.export(&FileExporter::new(&path)).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, generator.generate().unwrap());
    assert_eq!(written, generate(&patterns, "example.org"));
    assert_eq!(report.addresses, 90);
}

#[test]
fn test_range_too_large_before_any_output() {
    let patterns = set(vec![
        Pattern::new(0, 0, 10_000),
        Pattern::new(0, 1, 10_000),
        Pattern::new(0, 1, 10_000),
    ]);
    let config = GenerationConfig::new(patterns, "x.com").with_max_output(Some(10_000_000));
    let generator = EmailGenerator::new(config);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(EXPORT_FILE_NAME);
    let exporter = FileExporter::new(&path);

    match generator.export(&exporter) {
        Err(PatternEmailError::RangeTooLarge { projected, .. }) => {
            assert_eq!(projected, 1_000_000_000_000)
        }
        other => panic!("unexpected result: {:?}", other.map(|r| r.addresses)),
    }
    assert!(!path.exists());
    assert_eq!(exporter.destination(), path.display().to_string());
}

#[test]
fn test_error_handling() {
    let error = PatternEmailError::validation("test error".to_string());
    assert!(error.to_string().contains("test error"));

    let error = PatternEmailError::config("config error".to_string());
    assert!(error.to_string().contains("config error"));

    let error = PatternEmailError::internal("internal error");
    assert!(error.to_string().contains("internal error"));
}

#[test]
fn test_library_initialization() {
    let result = pattern_email_gen::init();
    assert!(result.is_ok());
}
