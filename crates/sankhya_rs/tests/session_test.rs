//! Session submissions: all-or-nothing replacement and the last-input cache.

use sankhya_rs::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 19).unwrap()
}

fn cached_session(dir: &tempfile::TempDir) -> Session {
    Session::new(true).with_cache(LastInputCache::new(dir.path().join("last_input.json")))
}

#[test]
fn successful_submit_is_held_and_cached() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = cached_session(&dir);

    let report = session
        .submit(&BirthInput::new(" Asha ", "1990-08-15"), today())
        .unwrap();
    assert_eq!(report.name, "Asha");
    assert_eq!(report.basic_number, 6);

    let cached = session.cache().unwrap().load().unwrap();
    assert_eq!(cached.full_name, "Asha");
    assert_eq!(cached.birth_date, "1990-08-15");
    assert_eq!((cached.day, cached.month, cached.year), (15, 8, 1990));
    assert_eq!(cached.basic_number, 6);
    assert_eq!(cached.destiny_number, 6);
}

#[test]
fn missing_input_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = cached_session(&dir);
    session
        .submit(&BirthInput::new("Asha", "1990-08-15"), today())
        .unwrap();
    let before = session.report().cloned();

    let err = session
        .submit(&BirthInput::new("Ravi", ""), today())
        .unwrap_err();
    assert!(matches!(err, SankhyaError::MissingInput));
    assert_eq!(session.report().cloned(), before);
    assert_eq!(session.cache().unwrap().load().unwrap().full_name, "Asha");
}

#[test]
fn failed_calculation_keeps_previous_report() {
    let mut session = Session::new(true);
    session
        .submit(&BirthInput::new("Asha", "1990-08-15"), today())
        .unwrap();

    // Beyond the representable calendar range.
    let err = session
        .submit(&BirthInput::new("Far", "300000-01-01"), today())
        .unwrap_err();
    assert!(matches!(err, SankhyaError::Calculation(_)));
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    assert_eq!(session.report().unwrap().name, "Asha");
}

#[test]
fn strict_session_rejects_garbage_lenient_accepts() {
    let input = BirthInput::new("X", "abcd-ef-gh");

    let mut strict = Session::new(true);
    assert!(matches!(
        strict.submit(&input, today()),
        Err(SankhyaError::MalformedNumeric(_))
    ));
    assert!(strict.report().is_none());

    let mut lenient = Session::new(false);
    let report = lenient.submit(&input, today()).unwrap();
    assert_eq!(report.basic_number, 9);
    assert_eq!(report.destiny_number, 9);
}

#[test]
fn unwritable_cache_does_not_fail_submit() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be written as a file.
    let mut session = Session::new(true).with_cache(LastInputCache::new(dir.path()));
    assert!(
        session
            .submit(&BirthInput::new("Asha", "1990-08-15"), today())
            .is_ok()
    );
    assert!(session.report().is_some());
}

#[test]
fn corrupt_cache_does_not_block_submit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("last_input.json");
    std::fs::write(&path, "garbage").unwrap();
    let cache = LastInputCache::new(&path);
    assert!(cache.load().is_none());

    let mut session = Session::new(true).with_cache(cache);
    session
        .submit(&BirthInput::new("Asha", "1990-08-15"), today())
        .unwrap();
    assert_eq!(session.cache().unwrap().load().unwrap().full_name, "Asha");
}

#[test]
fn session_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("c.json");
    let toml = format!(
        "[input]\nstrict = false\n[cache]\npath = {:?}\n",
        path.to_string_lossy()
    );
    let config = SankhyaConfig::from_toml_str(&toml).unwrap();
    let mut session = Session::from_config(&config);
    session
        .submit(&BirthInput::new("Q", "1990-xx-15"), today())
        .unwrap();
    assert!(path.exists());
}
