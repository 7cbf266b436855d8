use hilo::{multiply_hi_lo, HiLo};

#[test]
fn serde() {
    let x = HiLo::<u32>::new(0xfedc, 0xba98);
    let s = "(lo:47768,hi:65244)";
    assert_eq!(ron::to_string(&x).unwrap(), s);
    let y: HiLo<u32> = ron::from_str(s).unwrap();
    assert_eq!(x, y);

    // signed words are written as ordinary signed integers
    let (hi, lo) = multiply_hi_lo(i64::MIN, 3);
    let x = HiLo::new(hi, lo);
    let s = "(lo:-9223372036854775808,hi:-2)";
    assert_eq!(ron::to_string(&x).unwrap(), s);
    let y: HiLo<i64> = ron::from_str(s).unwrap();
    assert_eq!(y.to_wide(), (i64::MIN as i128) * 3);

    // field order does not matter
    let y: HiLo<u8> = ron::from_str("(hi:1,lo:2)").unwrap();
    assert_eq!(y, HiLo::new(1, 2));

    assert!(ron::from_str::<HiLo<u8>>("(lo:1)").is_err());
    assert!(ron::from_str::<HiLo<u8>>("(lo:1,hi:2,lo:3)").is_err());
    assert!(ron::from_str::<HiLo<u8>>("(lo:1,hi:256)").is_err());
    assert!(ron::from_str::<HiLo<u8>>("(lo:1,mid:2)").is_err());
}
