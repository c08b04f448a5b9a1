//! Command-word parsing and the silent allow-list gate. Dispatch happens
//! strictly behind `is_authorized`, so these cover the unauthorized-caller
//! policy without a live gateway.

use std::str::FromStr;

use serenity::model::id::UserId;

use shopclerk_bot::constants::AUTHORIZED_USER_IDS;
use shopclerk_bot::handler::{Command, Handler};

#[test]
fn known_command_words_parse() {
    assert_eq!(Command::from_str("orders"), Ok(Command::Orders));
    assert_eq!(Command::from_str("order"), Ok(Command::Order));
}

#[test]
fn unknown_words_never_error() {
    assert_eq!(Command::from_str("orderss"), Ok(Command::Unknown));
    assert_eq!(Command::from_str("balance"), Ok(Command::Unknown));
    assert_eq!(Command::from_str(""), Ok(Command::Unknown));
}

#[test]
fn parsing_is_case_sensitive() {
    assert_eq!(Command::from_str("Orders"), Ok(Command::Unknown));
    assert_eq!(Command::from_str("ORDER"), Ok(Command::Unknown));
}

#[test]
fn every_listed_caller_is_authorized() {
    let handler = Handler::new(AUTHORIZED_USER_IDS);
    for id in AUTHORIZED_USER_IDS {
        assert!(handler.is_authorized(UserId::new(*id)));
    }
}

#[test]
fn unlisted_callers_are_not_authorized() {
    let handler = Handler::new(&[42]);

    assert!(handler.is_authorized(UserId::new(42)));
    assert!(!handler.is_authorized(UserId::new(43)));
}
