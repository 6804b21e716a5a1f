extern crate crispyr_design;

use crispyr_design::messages::{Level, MessageLog};

fn texts(log: &MessageLog) -> Vec<String> {
    log.iter().map(|m| m.text.clone()).collect()
}

#[test]
fn test_default_capacity() {
    let mut log = MessageLog::default();
    for idx in 0..150 {
        log.verbose(format!("message {}", idx));
    }

    assert_eq!(log.len(), 100);
    assert_eq!(log.iter().next().map(|m| m.text.as_str()), Some("message 50"));
    assert_eq!(log.iter().last().map(|m| m.text.as_str()), Some("message 149"));
}

#[test]
fn test_oldest_messages_are_evicted() {
    let mut log = MessageLog::with_capacity(2);
    log.push(Level::Info, "a".into());
    log.push(Level::Error, "b".into());
    log.push(Level::Verbose, "c".into());

    assert_eq!(texts(&log), vec!["b", "c"]);
    assert_eq!(
        log.iter().map(|m| m.level).collect::<Vec<_>>(),
        vec![Level::Error, Level::Verbose]
    );
}

#[test]
fn test_zero_capacity() {
    let mut log = MessageLog::with_capacity(0);
    log.push(Level::Info, "a".into());

    assert!(log.is_empty());
}

#[test]
fn test_clear() {
    let mut log = MessageLog::default();
    log.verbose("a".into());
    log.clear();

    assert!(log.is_empty());
}

#[test]
fn test_write() {
    let mut log = MessageLog::default();
    log.push(Level::Info, "reading".into());
    log.push(Level::Error, "failed".into());
    log.verbose("details".into());

    let mut out = Vec::new();
    log.write(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "[INFO] reading\n[ERROR] failed\n[VERBOSE] details\n"
    );
}

#[test]
fn test_separate_logs_are_independent() {
    let mut first = MessageLog::default();
    let second = MessageLog::default();
    first.verbose("a".into());

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}
