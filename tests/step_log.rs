use std::fs;
use tempfile::tempdir;
use variantpipe::utils::step_log::StepLog;

#[test]
fn record_appends_timestamped_entries_in_order() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("pipeline.log");
    let log = StepLog::new(&log_path);

    log.record("FastQC", "FastQC completed successfully").unwrap();
    log.record("BWA Alignment", "BWA alignment completed successfully")
        .unwrap();

    let content = fs::read_to_string(&log_path).unwrap();
    let fastqc = content.find("FastQC:").expect("first entry present");
    let bwa = content.find("BWA Alignment:").expect("second entry present");

    assert!(fastqc < bwa);
    assert!(content.starts_with('['));
    assert!(content.contains("FastQC completed successfully"));
    // Entries are separated by a blank line.
    assert!(content.contains("successfully\n\n"));
}

#[test]
fn record_never_truncates_an_existing_log() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("pipeline.log");
    fs::write(&log_path, "previous run\n").unwrap();

    let log = StepLog::new(&log_path);
    log.record("Variant Calling", "Variant calling completed successfully")
        .unwrap();

    let content = fs::read_to_string(&log_path).unwrap();
    assert!(content.starts_with("previous run\n"));
    assert!(content.contains("Variant Calling:"));
}

#[test]
fn record_fails_when_log_cannot_be_opened() {
    let dir = tempdir().unwrap();
    let log = StepLog::new(dir.path().join("missing").join("pipeline.log"));

    assert!(log.record("FastQC", "FastQC completed successfully").is_err());
}
