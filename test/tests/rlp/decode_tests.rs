use bytes::Bytes;
use swisc_common::{Address, U256};
use swisc_rlp::constants::RLP_NULL;
use swisc_rlp::decode::RLPDecode;
use swisc_rlp::error::RLPDecodeError;

#[test]
fn test_decode_u64() {
    assert_eq!(u64::decode(&[RLP_NULL]).unwrap(), 0);
    assert_eq!(u64::decode(&[0x7f]).unwrap(), 127);
    assert_eq!(u64::decode(&[0x81, 0x80]).unwrap(), 128);
    assert_eq!(u64::decode(&[0x82, 0x01, 0x00]).unwrap(), 256);

    let rlp = vec![0x85, 0x02, 0x54, 0x0b, 0xe4, 0x00];
    assert_eq!(u64::decode(&rlp).unwrap(), 10_000_000_000);
}

#[test]
fn test_decode_u256() {
    let rlp = vec![0x01];
    let decoded = U256::decode(&rlp).unwrap();
    assert_eq!(decoded, U256::from(1));

    let mut rlp = vec![RLP_NULL + 32];
    rlp.extend([0xff; 32]);
    let decoded = U256::decode(&rlp).unwrap();
    assert_eq!(decoded, U256::MAX);

    let mut rlp = vec![RLP_NULL + 33];
    rlp.extend([0xff; 33]);
    assert!(matches!(
        U256::decode(&rlp),
        Err(RLPDecodeError::IntegerTooLarge { .. })
    ));
}

#[test]
fn test_decode_addresses() {
    let mut rlp = vec![RLP_NULL + 20];
    rlp.extend([0x11; 20]);
    let decoded = Address::decode(&rlp).unwrap();
    assert_eq!(decoded, Address::repeat_byte(0x11));

    let mut rlp = vec![RLP_NULL + 20];
    rlp.extend([0x00; 19]);
    rlp.push(0x01);
    assert_eq!(Address::decode(&rlp).unwrap(), Address::from_low_u64_be(1));
}

#[test]
fn test_decode_bytes() {
    let rlp = vec![0x83, b'd', b'o', b'g'];
    let decoded = Bytes::decode(&rlp).unwrap();
    assert_eq!(decoded, Bytes::from_static(b"dog"));

    let rlp = vec![RLP_NULL];
    let decoded = Bytes::decode(&rlp).unwrap();
    assert!(decoded.is_empty());

    let mut rlp = vec![0xb8, 56];
    rlp.extend([0xaa; 56]);
    assert_eq!(Bytes::decode(&rlp).unwrap().len(), 56);
}

#[test]
fn test_decode_list_as_string() {
    let rlp = vec![0xc3, 0x01, 0x02, 0x03];
    assert_eq!(Bytes::decode(&rlp), Err(RLPDecodeError::UnexpectedList));
    assert_eq!(u64::decode(&rlp), Err(RLPDecodeError::UnexpectedList));
}

#[test]
fn test_reject_non_canonical_encodings() {
    // A single byte below 0x80 must not carry a length prefix.
    assert!(matches!(
        U256::decode(&[RLP_NULL + 1, 0x01]),
        Err(RLPDecodeError::NonCanonical(_))
    ));
    assert!(matches!(
        Bytes::decode(&[0x81, 0x05]),
        Err(RLPDecodeError::NonCanonical(_))
    ));

    // Integers must not have leading zeros.
    assert!(matches!(
        u64::decode(&[0x82, 0x00, 0x01]),
        Err(RLPDecodeError::NonCanonical(_))
    ));
    assert!(matches!(
        U256::decode(&[0x00]),
        Err(RLPDecodeError::NonCanonical(_))
    ));

    // Payloads under 56 bytes must use the short form.
    let mut rlp = vec![0xb8, 3];
    rlp.extend(b"dog");
    assert!(matches!(
        Bytes::decode(&rlp),
        Err(RLPDecodeError::NonCanonical(_))
    ));
}

#[test]
fn test_reject_trailing_and_truncated_input() {
    assert_eq!(
        u64::decode(&[0x01, 0x02]),
        Err(RLPDecodeError::TrailingBytes(1))
    );
    assert_eq!(
        Bytes::decode(&[0x83, b'd', b'o']),
        Err(RLPDecodeError::Truncated)
    );
    assert_eq!(u64::decode(&[]), Err(RLPDecodeError::Truncated));
}
