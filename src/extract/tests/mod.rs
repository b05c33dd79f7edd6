//! xray-tool extractor tests module.


use crate::error::Error;
use crate::extract::{run, serialize};
use crate::loader::yaml::YamlSledEntry;
use crate::map::SledKind;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Output which refuses every write.
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn serialize_two_sleds() {
    let sleds = mock::two_sleds();
    let mut output = Vec::<u8>::new();
    let r = serialize(&sleds, |f| (f == mock::FUNCTION_A).then(|| 7), &mut output);
    assert!(r.is_ok());

    //==== do not delete ====================================
    //println!("{}", std::str::from_utf8(&output).unwrap());
    //=======================================================

    assert_eq!(std::str::from_utf8(&output).unwrap(), mock::TWO_SLEDS_YAML);
}

#[test]
fn round_trip() {
    let sleds = mock::two_sleds();
    let mut output = Vec::<u8>::new();
    serialize(&sleds, |f| (f == mock::FUNCTION_A).then(|| 7), &mut output).unwrap();

    let entries: Vec<YamlSledEntry> = serde_yaml::from_slice(&output).unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.id == 7));
    assert!(entries.iter().all(|e| e.function == mock::FUNCTION_A));
    assert_eq!(entries[0].address, 0x1000);
    assert_eq!(entries[0].kind, SledKind::FunctionEnter);
    assert!(entries[0].always_instrument);
    assert_eq!(entries[1].address, 0x1010);
    assert_eq!(entries[1].kind, SledKind::FunctionExit);
    assert!(!entries[1].always_instrument);
}

#[test]
fn order_preserved() {
    let sleds = mock::three_functions();
    let mut output = Vec::<u8>::new();
    let r = serialize(&sleds, |f| Some((f >> 12) as u32 + 10), &mut output);
    assert!(r.is_ok());

    let entries: Vec<YamlSledEntry> = serde_yaml::from_slice(&output).unwrap();
    let addresses: Vec<u64> = entries.iter().map(|e| e.address).collect();
    assert_eq!(addresses, vec![0x2000, 0x3000, 0x1000]);
    let ids: Vec<u32> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![12, 13, 11]);
    assert_eq!(entries[1].kind, SledKind::LogArgsEnter);
    assert_eq!(entries[2].kind, SledKind::TailExit);
}

#[test]
fn serialize_empty() {
    let mut output = Vec::<u8>::new();
    let r = serialize(&[], |_| None, &mut output);
    assert!(r.is_ok());
    assert_eq!(std::str::from_utf8(&output).unwrap(), mock::EMPTY_YAML);

    let entries: Vec<YamlSledEntry> = serde_yaml::from_slice(&output).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn unresolved_writes_nothing() {
    let sleds = mock::three_functions();
    let mut output = Vec::<u8>::new();
    let r = serialize(&sleds, mock::three_functions_ids, &mut output);
    match r {
        Err(Error::Resolution { index, function }) => {
            assert_eq!(index, 2);
            assert_eq!(function, 0x1000);
        }
        _ => panic!("resolution error expected"),
    }
    assert!(output.is_empty());
}

#[test]
fn unresolved_first_writes_nothing() {
    let sleds = mock::two_sleds();
    let mut output = Vec::<u8>::new();
    let r = serialize(&sleds, |_| None, &mut output);
    assert!(matches!(r, Err(Error::Resolution { index: 0, .. })));
    assert!(output.is_empty());
}

#[test]
fn serialize_to_broken_output() {
    let sleds = mock::two_sleds();
    let r = serialize(&sleds, |_| Some(1), BrokenPipe);
    match r {
        Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        _ => panic!("input/output error expected"),
    }
}

#[test]
fn run_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.bin");
    let output = dir.path().join("map.yaml");

    let r = run(&input, &output);
    let err = r.unwrap_err();
    assert!(matches!(err, Error::Load(..)));
    assert!(err.to_string().contains(&input.display().to_string()));
    assert!(!output.exists());
}

#[test]
fn run_yaml_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.yaml");
    let output = dir.path().join("output.yaml");
    fs::write(&input, mock::TWO_SLEDS_YAML).unwrap();

    let r = run(&input, &output);
    assert!(r.is_ok());
    assert_eq!(fs::read_to_string(&output).unwrap(), mock::TWO_SLEDS_YAML);
}

#[test]
fn run_replaces_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.yaml");
    let output = dir.path().join("output.yaml");
    fs::write(&input, mock::EMPTY_YAML).unwrap();
    fs::write(&output, mock::TWO_SLEDS_YAML).unwrap();

    run(&input, &output).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), mock::EMPTY_YAML);
}

#[test]
fn run_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.yaml");
    let output = dir.path().join("no-such-dir").join("output.yaml");
    fs::write(&input, mock::TWO_SLEDS_YAML).unwrap();

    let err = run(&input, &output).unwrap_err();
    assert!(matches!(err, Error::CreateFile(..)));
    assert!(err.to_string().contains(&output.display().to_string()));
}

#[test]
fn stdout_marker() {
    assert!(crate::filebuf::is_stdout(Path::new("-")));
    assert!(!crate::filebuf::is_stdout(Path::new("./-")));
    assert!(!crate::filebuf::is_stdout(Path::new("map.yaml")));
}
