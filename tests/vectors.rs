//! Known-answer vectors from the wider Base58Check ecosystem.

use b58keys::{
    Address, Base58Type, Destination, ExtKey58, KeyId, Network, NetworkParams, PrivKey, WifSecret,
};
use hex_literal::hex;

/// Mainnet profile with Bitcoin's single-byte prefixes swapped in.
fn bitcoin_like() -> NetworkParams {
    NetworkParams::builder(Network::Main)
        .prefix(Base58Type::PubkeyAddress, &[0x00])
        .prefix(Base58Type::ScriptAddress, &[0x05])
        .prefix(Base58Type::SecretKey, &[0x80])
        .build()
        .expect("distinct prefixes")
}

#[test]
fn p2pkh_reference_address() {
    let params = bitcoin_like();
    let id = KeyId(hex!("62e907b15cbf27d5425399ebf6f0fb50ebb88f18"));
    let addr = Address::from_key_id(&id, &params);
    assert_eq!(addr.to_text(), "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa");

    let parsed = Address::from_text("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", &params).expect("parse");
    assert_eq!(parsed.payload().version().as_bytes(), &[0x00]);
    assert_eq!(parsed.payload().data(), &id.0);
    assert_eq!(parsed.get(&params), Destination::KeyId(id));
}

#[test]
fn wif_reference_keys() {
    let params = bitcoin_like();
    let secret = hex!("0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d");

    let uncompressed = PrivKey::new(&secret, false).unwrap();
    let text = WifSecret::from_key(&uncompressed, &params).to_text();
    assert_eq!(text, "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ");

    let compressed = PrivKey::new(&secret, true).unwrap();
    let text = WifSecret::from_key(&compressed, &params).to_text();
    assert_eq!(text, "KwdMAjGmerYanjeui5SHS7JkmpZvVipYvB2LJGU1ZxJwYvP98617");

    let back = WifSecret::from_text(&text, &params).unwrap().key().unwrap();
    assert!(back.is_compressed());
    assert_eq!(back.as_bytes(), &secret);
}

// BIP32 test vector 1, chain m. Bitcoin's xprv/xpub prefixes are the legacy
// extended kinds of the built-in profiles.
const XPRV: &str = "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi";
const XPUB: &str = "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8";

#[test]
fn bip32_master_node() {
    let params = Network::Main.params();

    let prv = ExtKey58::set58(XPRV, params).unwrap();
    assert_eq!(prv.kind(), Base58Type::ExtSecretKeyBtc);
    let node = prv.key().unwrap();
    assert!(node.has_secret());
    assert_eq!(node.depth(), 0);
    assert_eq!(node.fingerprint(), [0; 4]);
    assert_eq!(node.child(), 0);
    assert_eq!(node.chain_code(), &hex!("873dff81c02f525623fd1fe5167eac3a55a049de3d314bb42ee227ffed37d508"));
    assert_eq!(node.public_key(), &hex!("0339a36013301597daef41fbe593a02cc513d0b55527ec2df1050e2e8ff49c85c2"));

    let pubk = ExtKey58::set58(XPUB, params).unwrap();
    assert_eq!(pubk.kind(), Base58Type::ExtPublicKeyBtc);
    assert_eq!(pubk.key().unwrap(), node.neutered());

    // Re-encoding reproduces the published strings
    assert_eq!(ExtKey58::new(&node, Base58Type::ExtSecretKeyBtc, params).unwrap().to_text(), XPRV);
    assert_eq!(ExtKey58::new(&node, Base58Type::ExtPublicKeyBtc, params).unwrap().to_text(), XPUB);

    // And the same node moves between prefix families
    let native = ExtKey58::with_public(&node, params);
    let again = ExtKey58::set58(&native.to_text(), params).unwrap();
    assert_eq!(again.kind(), Base58Type::ExtPublicKey);
    assert_eq!(again.key().unwrap(), node.neutered());
}

#[test]
fn bip32_fixed_kind_decode() {
    let params = Network::Main.params();
    assert!(ExtKey58::set58_as(XPUB, Base58Type::ExtPublicKeyBtc, params).is_ok());
    assert!(ExtKey58::set58_as(XPUB, Base58Type::ExtPublicKey, params).is_err());
}

#[test]
fn legacy_extended_prefixes_are_not_addresses() {
    let params = Network::Main.params();
    let addr = Address::from_text(XPUB, params).unwrap();
    assert!(!addr.is_valid(params));
    assert!(!addr.is_bip32(params));
}
