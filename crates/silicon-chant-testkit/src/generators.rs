//! Proptest generators for property-based testing.

use proptest::prelude::*;

use silicon_chant_engine::ChantSpec;

/// Generate an arbitrary phrase of up to `max_len` bytes, any byte values.
pub fn phrase(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a printable-ascii phrase, the kind actually typed at a prompt.
pub fn ascii_phrase() -> impl Strategy<Value = String> {
    "[ -~]{0,64}".prop_map(String::from)
}

/// Generate a chant specification across every sink kind.
pub fn chant_spec() -> impl Strategy<Value = ChantSpec> {
    prop_oneof![
        Just(ChantSpec::Heap),
        Just(ChantSpec::Stack),
        Just(ChantSpec::Stdout),
        Just(ChantSpec::Stderr),
        "[a-z0-9/._-]{1,32}".prop_map(|p| ChantSpec::Disk { path: p.into() }),
        (any::<[u8; 4]>(), any::<u16>()).prop_map(|(ip, port)| ChantSpec::Net {
            dest: std::net::SocketAddrV4::new(ip.into(), port),
        }),
        (any::<u16>(), any::<[u8; 4]>(), any::<u16>()).prop_map(|(listen, ip, port)| {
            ChantSpec::NetRelay {
                listen_port: listen,
                dest: std::net::SocketAddrV4::new(ip.into(), port),
            }
        }),
    ]
}
