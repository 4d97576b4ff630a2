#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdrv_bignum::BigNum;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Should not panic; accepted literals must round-trip modulo leading zeros
    if let Ok(n) = text.parse::<BigNum>() {
        let again: BigNum = n.to_decimal_string().parse().unwrap();
        assert_eq!(n, again);
    }
});
