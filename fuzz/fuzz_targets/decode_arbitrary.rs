#![no_main]
use libfuzzer_sys::fuzz_target;
use rsfec::Codec;

// First byte picks nsym, second the erasure count, the rest is the received codeword.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let nsym = 2 * (1 + data[0] as usize % 32);
    let Ok(codec) = Codec::new(nsym) else { return };
    let received = &data[2..];
    let erasures: Vec<usize> = (0..data[1] as usize % (nsym + 1))
        .map(|i| i * 7)
        .filter(|&p| p < received.len())
        .collect();

    if let Ok(out) = codec.decode(received, &erasures) {
        assert!(codec.check(&out.codeword).unwrap());
        assert_eq!(&out.codeword[..out.message.len()], &out.message[..]);
        assert!(out.corrected_count() <= nsym);
    }
});
