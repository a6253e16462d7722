#![no_main]

use libfuzzer_sys::fuzz_target;
use b58keys::{Address, Base58Type, ExtKey58, Network, WifSecret};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else { return };
    let params = Network::Main.params();

    if let Ok(addr) = Address::from_text(text, params) {
        // Secret extended keys never survive into an address
        assert_ne!(addr.payload().version(), params.prefix(Base58Type::ExtSecretKey));
        let _ = addr.get(params);
    }
    if let Ok(wif) = WifSecret::from_text(text, params) {
        let _ = wif.key();
    }
    if let Ok(ext) = ExtKey58::set58(text, params) {
        let _ = ext.key();
    }
});
