use forkhandle::Level;

#[test]
fn parses_aliases() {
    assert_eq!("warning".parse::<Level>(), Ok(Level::Warn));
    assert_eq!("ERR".parse::<Level>(), Ok(Level::Error));
    assert_eq!("debug".parse::<Level>(), Ok(Level::Debug));
    assert!("loud".parse::<Level>().is_err());
}

#[test]
fn ordering_follows_severity() {
    assert!(Level::Trace < Level::Debug);
    assert!(Level::Warn < Level::Error);
    assert_eq!(Level::default(), Level::Info);
}
