#![no_main]

use libfuzzer_sys::fuzz_target;
use b58keys::{base58, check};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else { return };

    // Raw engine must agree with itself on anything it accepts
    if let Ok(bytes) = base58::decode(text) {
        assert_eq!(base58::decode(&base58::encode(&bytes)).ok(), Some(bytes));
    }

    if let Ok(payload) = check::decode_checked(text) {
        assert_eq!(check::decode_checked(&check::encode_checked(&[], &payload)).ok(), Some(payload));
    }
});
