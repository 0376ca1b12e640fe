use flate2::write::GzEncoder;
use flate2::Compression;
use pprof_replacer::domain::{Replacement, ReplacerError};
use pprof_replacer::profile::proto::{Function, Label, Line, Location, Mapping, Sample, ValueType};
use pprof_replacer::profile::proto::Profile;
use pprof_replacer::replace_symbol;
use prost::Message;
use std::io::Write;
use std::path::Path;

fn cpu_profile() -> Profile {
    Profile {
        sample_type: vec![
            ValueType { r#type: 1, unit: 2 },
            ValueType { r#type: 3, unit: 4 },
        ],
        sample: vec![
            Sample {
                location_id: vec![1, 2],
                value: vec![1, 10_000_000],
                label: vec![Label { key: 9, str: 10, num: 0, num_unit: 0 }],
            },
            Sample { location_id: vec![2], value: vec![3, 30_000_000], label: vec![] },
        ],
        mapping: vec![Mapping {
            id: 1,
            memory_start: 0x40_0000,
            memory_limit: 0x80_0000,
            filename: 8,
            has_functions: true,
            has_line_numbers: true,
            ..Mapping::default()
        }],
        location: vec![
            Location {
                id: 1,
                mapping_id: 1,
                address: 0x40_1000,
                line: vec![Line { function_id: 1, line: 12, column: 0 }],
                is_folded: false,
            },
            Location {
                id: 2,
                mapping_id: 1,
                address: 0x40_2000,
                line: vec![Line { function_id: 2, line: 30, column: 5 }],
                is_folded: false,
            },
        ],
        function: vec![
            Function { id: 1, name: 5, system_name: 5, filename: 7, start_line: 10 },
            Function { id: 2, name: 6, system_name: 6, filename: 7, start_line: 28 },
        ],
        string_table: [
            "",
            "samples",
            "count",
            "cpu",
            "nanoseconds",
            "main.foo",
            "main.bar",
            "/src/main.go",
            "/usr/bin/app",
            "goroutine",
            "main.foo",
        ]
        .iter()
        .map(|s| (*s).to_string())
        .collect(),
        time_nanos: 1_700_000_000_000_000_000,
        duration_nanos: 30_000_000_000,
        period_type: Some(ValueType { r#type: 3, unit: 4 }),
        period: 10_000_000,
        comment: vec![9],
        default_sample_type: 3,
        ..Profile::default()
    }
}

fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn read_profile(path: &Path) -> Profile {
    let bytes = std::fs::read(path).expect("output file should exist");
    Profile::decode(bytes.as_slice()).expect("output should be a valid profile")
}

#[test]
fn test_replace_raw_profile() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("profile.pb");
    let original = cpu_profile();
    std::fs::write(&input, original.encode_to_vec()).unwrap();

    let summary =
        replace_symbol(&input, &Replacement::new("main.foo", "main.renamed"), dir.path()).unwrap();

    assert_eq!(summary.replaced, 2);
    assert_eq!(summary.output, dir.path().join("profile_new.pb"));

    let rewritten = read_profile(&summary.output);
    assert_eq!(rewritten.string_table.len(), original.string_table.len());
    assert_eq!(rewritten.string_table[5], "main.renamed");
    assert_eq!(rewritten.string_table[10], "main.renamed");

    // Everything but the two rewritten slots is unchanged
    let mut expected = original.clone();
    expected.string_table[5] = "main.renamed".to_string();
    expected.string_table[10] = "main.renamed".to_string();
    assert_eq!(rewritten, expected);
}

#[test]
fn test_replace_gzip_profile_writes_uncompressed() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("heap.pb.gz");
    std::fs::write(&input, gzip(&cpu_profile().encode_to_vec())).unwrap();

    let summary =
        replace_symbol(&input, &Replacement::new("main.bar", "main.baz"), dir.path()).unwrap();

    assert_eq!(summary.replaced, 1);
    assert_eq!(summary.output, dir.path().join("heap_new.pb"));

    // Plain protobuf, not gzip
    let bytes = std::fs::read(&summary.output).unwrap();
    assert_ne!(&bytes[..2], &[0x1f, 0x8b]);

    let rewritten = read_profile(&summary.output);
    assert_eq!(rewritten.string_table[6], "main.baz");
    assert_eq!(rewritten.function, cpu_profile().function);
}

#[test]
fn test_no_match_keeps_table() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cpu.pb");
    std::fs::write(&input, cpu_profile().encode_to_vec()).unwrap();

    let summary =
        replace_symbol(&input, &Replacement::new("main.missing", "x"), dir.path()).unwrap();

    assert_eq!(summary.replaced, 0);
    assert_eq!(read_profile(&summary.output), cpu_profile());
}

#[test]
fn test_round_trip_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cpu.pb");
    std::fs::write(&input, cpu_profile().encode_to_vec()).unwrap();

    let first = replace_symbol(&input, &Replacement::new("a", "b"), dir.path()).unwrap();
    let first_bytes = std::fs::read(&first.output).unwrap();

    // Feed the output back in under a new name
    let second_input = dir.path().join("again.pb");
    std::fs::write(&second_input, &first_bytes).unwrap();
    let second = replace_symbol(&second_input, &Replacement::new("a", "b"), dir.path()).unwrap();

    assert_eq!(read_profile(&second.output), read_profile(&first.output));
}

#[test]
fn test_truncated_payload_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.pb");
    let bytes = cpu_profile().encode_to_vec();
    std::fs::write(&input, &bytes[..bytes.len() - 3]).unwrap();

    let err = replace_symbol(&input, &Replacement::new("main.foo", "x"), dir.path()).unwrap_err();

    assert!(matches!(err, ReplacerError::MalformedProfile(_)));
    assert!(!dir.path().join("broken_new.pb").exists());
}

#[test]
fn test_invalid_gzip_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.pb.gz");
    std::fs::write(&input, cpu_profile().encode_to_vec()).unwrap();

    let err = replace_symbol(&input, &Replacement::new("main.foo", "x"), dir.path()).unwrap_err();

    assert!(matches!(err, ReplacerError::Decompression(_)));
    assert!(!dir.path().join("broken_new.pb").exists());
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("profile.txt");
    std::fs::write(&input, cpu_profile().encode_to_vec()).unwrap();

    let err = replace_symbol(&input, &Replacement::new("main.foo", "x"), dir.path()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "unsupported file format. only .pb or .pb.gz is supported"
    );
    assert!(!dir.path().join("profile_new.pb").exists());
}

#[test]
fn test_unknown_fields_pass_through() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("vendor.pb");

    // Sample (field 2) with an unknown field 15, then a top-level unknown field 99
    let mut bytes = vec![0x12, 0x04, 0x08, 0x01, 0x78, 0x09];
    bytes.extend(cpu_profile().encode_to_vec());
    bytes.extend_from_slice(&[0x98, 0x06, 0x05]);
    std::fs::write(&input, &bytes).unwrap();

    let summary =
        replace_symbol(&input, &Replacement::new("main.bar", "main.baz"), dir.path()).unwrap();
    assert_eq!(summary.replaced, 1);

    let written = std::fs::read(&summary.output).unwrap();
    assert!(written.starts_with(&[0x12, 0x04, 0x08, 0x01, 0x78, 0x09]));
    assert!(written.ends_with(&[0x98, 0x06, 0x05]));
    assert_eq!(written.len(), bytes.len());
    assert_eq!(read_profile(&summary.output).string_table[6], "main.baz");
}
