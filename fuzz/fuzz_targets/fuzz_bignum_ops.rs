#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::{BigInt, Sign};

use fibdrv_bignum::{add, lshift, mult, sub, BigNum};

fn to_bigint(n: &BigNum) -> BigInt {
    let sign = if n.is_negative() { Sign::Minus } else { Sign::Plus };
    BigInt::from_slice(sign, n.words())
}

fn from_bytes(bytes: &[u8], negative: bool) -> BigNum {
    let value = BigInt::from_bytes_le(if negative { Sign::Minus } else { Sign::Plus }, bytes);
    value.to_string().parse().unwrap()
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte: signs and shift; rest split in half into two operands
    let control = data[0];
    let body = &data[1..];
    let (lhs, rhs) = body.split_at(body.len() / 2);
    let a = from_bytes(lhs, control & 1 != 0);
    let b = from_bytes(rhs, control & 2 != 0);
    let shift = u32::from(control >> 3);

    let mut c = BigNum::zero();
    add(&a, &b, &mut c).unwrap();
    assert_eq!(to_bigint(&c), to_bigint(&a) + to_bigint(&b));

    sub(&a, &b, &mut c).unwrap();
    assert_eq!(to_bigint(&c), to_bigint(&a) - to_bigint(&b));

    mult(&a, &b, &mut c).unwrap();
    assert_eq!(to_bigint(&c), to_bigint(&a) * to_bigint(&b));

    lshift(&a, shift, &mut c).unwrap();
    assert_eq!(to_bigint(&c), to_bigint(&a) << shift);

    assert_eq!(a.to_decimal_string(), to_bigint(&a).to_string());
});
