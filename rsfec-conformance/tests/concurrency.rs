use std::sync::Arc;
use std::thread;

use rsfec::Codec;
use rsfec_conformance::FaultInjector;

#[test]
fn shared_codec_across_threads() {
    let codec = Arc::new(Codec::new(12).unwrap());
    let handles: Vec<_> = (0..8u64)
        .map(|worker| {
            let codec = Arc::clone(&codec);
            thread::spawn(move || {
                let mut inj = FaultInjector::seeded(worker);
                for round in 0..50u8 {
                    let msg = rsfec_conformance::sample_message(20 + round as usize, round);
                    let cw = codec.encode(&msg).unwrap();
                    let (rx, pattern) = inj.inject(&cw, 3, 4);
                    let out = codec.decode(&rx, &pattern.erasures).unwrap();
                    assert_eq!(out.message, msg);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().expect("worker panicked");
    }
}

#[test]
fn codec_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Codec>();
    assert_send_sync::<rsfec::Correction>();
}
