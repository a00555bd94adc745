#![no_main]
use libfuzzer_sys::fuzz_target;
use rsfec::Codec;

// Within the correction budget the original message must always come back.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let nsym = 2 * (1 + data[0] as usize % 16);
    let codec = Codec::new(nsym).expect("even nsym in range");
    let message = &data[3..];
    if message.is_empty() || message.len() > codec.max_message_len() {
        return;
    }
    let codeword = codec.encode(message).expect("valid message");
    let n = codeword.len();

    // Distinct positions: stride 1 over at most nsym/2 < n slots.
    let errors = data[1] as usize % (nsym / 2 + 1);
    let mut received = codeword.clone();
    for i in 0..errors {
        let pos = (data[2] as usize + i) % n;
        received[pos] ^= 0x80 | (i as u8);
    }
    let out = codec.decode(&received, &[]).expect("within budget");
    assert_eq!(out.message, message);
});
