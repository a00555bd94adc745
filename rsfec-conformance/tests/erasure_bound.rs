use proptest::prelude::*;
use rsfec::Codec;
use rsfec_conformance::{corrupt, FaultInjector};

proptest! {
    #[test]
    fn corrects_up_to_nsym_erasures(
        nsym in prop::sample::select(vec![2usize, 4, 8, 16, 32]),
        len in 1usize..=200,
        seed in any::<u64>(),
    ) {
        let codec = Codec::new(nsym).unwrap();
        let len = len.min(codec.max_message_len());
        let msg = rsfec_conformance::sample_message(len, seed as u8);
        let cw = codec.encode(&msg).unwrap();

        let e = (seed as usize) % (nsym + 1);
        let (rx, pattern) = FaultInjector::seeded(seed).inject(&cw, 0, e);
        let out = codec.decode(&rx, &pattern.erasures).unwrap();
        prop_assert_eq!(&out.message, &msg);
        prop_assert_eq!(&out.positions, &pattern.erasures);

        let only = codec.decode_erasures_only(&rx, &pattern.erasures).unwrap();
        prop_assert_eq!(only, out);
    }
}

#[test]
fn full_parity_budget_of_erasures() {
    let codec = Codec::new(6).unwrap();
    let cw = codec.encode(b"erasures").unwrap();
    let (rx, pattern) = FaultInjector::seeded(3).inject(&cw, 0, 6);
    let out = codec.decode(&rx, &pattern.erasures).unwrap();
    assert_eq!(out.message, b"erasures");
    assert_eq!(out.corrected_count(), 6);
}

#[test]
fn erasures_beat_unknown_errors() {
    let codec = Codec::new(4).unwrap();
    let cw = codec.encode(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]).unwrap();
    let rx = corrupt(&cw, &[2, 5, 7], 0xff);
    // Three unknown errors need six parity symbols; as erasures they need three.
    assert!(codec.decode(&rx, &[]).is_err());
    assert_eq!(codec.decode(&rx, &[2, 5, 7]).unwrap().codeword, cw);
}
