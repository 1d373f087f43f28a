use super::*;
use crate::foundation::error::ErrorKind;

#[test]
fn direction_parses_letters_and_words() {
    assert_eq!("n".parse::<Direction>().unwrap(), Direction::N);
    assert_eq!(" South ".parse::<Direction>().unwrap(), Direction::S);
    assert_eq!("E".parse::<Direction>().unwrap(), Direction::E);
    assert_eq!("west".parse::<Direction>().unwrap(), Direction::W);
}

#[test]
fn direction_rejects_unknown_with_config_error() {
    let err = "up".parse::<Direction>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn direction_axis_and_sign() {
    assert_eq!(Direction::N.axis(), Axis::Vertical);
    assert_eq!(Direction::W.axis(), Axis::Horizontal);
    assert_eq!(Direction::S.sign(), 1);
    assert_eq!(Direction::E.sign(), 1);
    assert_eq!(Direction::N.sign(), -1);
    assert_eq!(Direction::W.sign(), -1);
}

#[test]
fn direction_serde_uses_letters() {
    let d: Direction = serde_json::from_str("\"north\"").unwrap();
    assert_eq!(d, Direction::N);
    assert_eq!(serde_json::to_string(&Direction::W).unwrap(), "\"W\"");
    assert!(serde_json::from_str::<Direction>("\"sideways\"").is_err());
}

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255(255, 255), 255);
    assert_eq!(mul_div255(255, 0), 0);
    assert_eq!(mul_div255(200, 128), 100);
    assert_eq!(mul_div255(1, 128), 1);
    assert_eq!(mul_div255(1, 127), 0);
}

#[test]
fn lcm_handles_ones_and_zero() {
    assert_eq!(lcm(1, 1), 1);
    assert_eq!(lcm(8, 2), 8);
    assert_eq!(lcm(10, 4), 20);
    assert_eq!(lcm(0, 3), 3);
}
