#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn encode_then_decode_preserves_session() {
    let session = StoredSession { token: "tok".to_owned(), username: "testf".to_owned() };
    assert_eq!(decode(&encode(&session)), Some(session));
}

#[test]
fn decode_rejects_corrupt_or_blank_token() {
    assert_eq!(decode("not json"), None);
    assert_eq!(decode(r#"{"token":"  ","username":"x"}"#), None);
    assert_eq!(decode(r#"{"username":"x"}"#), None);
}

#[test]
fn storage_is_a_noop_outside_the_browser() {
    save(&StoredSession { token: "t".to_owned(), username: "u".to_owned() });
    assert_eq!(load(), None);
    clear();
}
