use packer::{
    PackError, be_to_u16, be_to_u16_at, be_to_u16_into, be_to_u16s, be_to_u16s_at, le_to_u16,
    le_to_u16_at, u16_to_be, u16_to_be_into, u16_to_le, u16_to_le_into, u16s_to_be,
    u16s_to_be_into,
};

#[test]
fn u16_literal_vectors() {
    assert_eq!(u16_to_be(0x1234), [0x12, 0x34]);
    assert_eq!(u16_to_le(0x1234), [0x34, 0x12]);

    assert_eq!(u16_to_be(0), [0, 0]);
    assert_eq!(u16_to_be(u16::MAX), [0xFF, 0xFF]);
    assert_eq!(u16_to_le(0x00FF), [0xFF, 0x00]);
}

#[test]
fn u16_in_place_writes_at_offset() {
    let mut buf = [0u8; 6];

    u16_to_be_into(0xABCD, &mut buf, 1);
    u16_to_le_into(0xABCD, &mut buf, 4);

    assert_eq!(buf, [0, 0xAB, 0xCD, 0, 0xCD, 0xAB]);
    assert_eq!(be_to_u16_at(&buf, 1), 0xABCD);
    assert_eq!(le_to_u16_at(&buf, 4), 0xABCD);
}

#[test]
fn u16_round_trip_all_values() {
    for n in 0..=u16::MAX {
        assert_eq!(be_to_u16(&u16_to_be(n)), n);
        assert_eq!(le_to_u16(&u16_to_le(n)), n);
    }
}

#[test]
fn u16_array_is_concatenation_of_scalars() {
    let ns = [0x0102u16, 0xFFFE, 0x0000, 0x8001];
    let bs = u16s_to_be(&ns);

    let expected: Vec<u8> = ns.iter().flat_map(|&n| u16_to_be(n)).collect();
    assert_eq!(bs, expected);
    assert_eq!(bs.len(), 8);
    assert_eq!(bs.capacity(), 8);

    assert_eq!(be_to_u16s(&bs).unwrap(), ns);
}

#[test]
fn u16_array_into_and_slot_decode() {
    let ns = [0x1111u16, 0x2222, 0x3333];
    let mut buf = [0xEEu8; 10];

    u16s_to_be_into(&ns, &mut buf, 2);
    assert_eq!(buf[..2], [0xEE, 0xEE]);
    assert_eq!(buf[8..], [0xEE, 0xEE]);

    let mut out = [0u16; 4];
    be_to_u16_into(&buf, 4, &mut out, 3);
    assert_eq!(out, [0, 0, 0, 0x2222]);

    assert_eq!(be_to_u16s_at(&buf, 2, 6).unwrap(), ns);
}

#[test]
fn u16_array_odd_length_fails() {
    let bs = [0x01u8, 0x02, 0x03];

    assert_eq!(be_to_u16s(&bs), Err(PackError::OddLength { len: 3 }));
    assert_eq!(
        be_to_u16s_at(&[0u8; 8], 1, 5),
        Err(PackError::OddLength { len: 5 })
    );
}

#[test]
fn u16_odd_length_error_message() {
    let err = be_to_u16s(&[0u8]).unwrap_err();
    assert_eq!(err.to_string(), "length 1 must be a multiple of 2");
}

#[test]
#[should_panic(expected = "exceeds buffer")]
fn u16_write_past_end_panics() {
    let mut buf = [0u8; 3];
    u16_to_be_into(1, &mut buf, 2);
}

#[test]
#[should_panic(expected = "exceeds buffer")]
fn u16_array_region_past_end_panics() {
    be_to_u16s_at(&[0u8; 4], 2, 4).ok();
}

#[test]
fn u16_odd_length_is_reported_before_bounds() {
    // len = 3 also overruns the buffer, the length check comes first.
    let bs = [0u8; 2];
    assert_eq!(
        be_to_u16s_at(&bs, 0, 3),
        Err(PackError::OddLength { len: 3 })
    );
}

#[test]
fn u16_empty_arrays() {
    assert_eq!(be_to_u16s(&[]), Ok(Vec::new()));
    assert!(u16s_to_be(&[]).is_empty());
}
