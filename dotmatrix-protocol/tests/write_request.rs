//! Property tests for write request validation

use dotmatrix_protocol::{opcode, WriteError, WriteRequest, ADDRESS_COUNT, MAX_ADDRESS};
use proptest::prelude::*;

proptest! {
    #[test]
    fn in_range_writes_are_accepted(
        address in 0u8..=MAX_ADDRESS,
        data in proptest::collection::vec(any::<u8>(), 1..=ADDRESS_COUNT),
    ) {
        prop_assume!(address as usize + data.len() <= ADDRESS_COUNT);

        let request = WriteRequest::new(address, &data).unwrap();
        let frames = request.frames();

        prop_assert_eq!(frames[0].bytes(), &[opcode::AUTO_INCREMENT][..]);
        prop_assert_eq!(frames[1].opcode(), opcode::ADDRESS_BASE | address);
        prop_assert_eq!(frames[1].data(), &data[..]);
        prop_assert_eq!(frames[2].bytes(), &[opcode::DISPLAY_ON][..]);
    }

    #[test]
    fn bad_addresses_are_refused(
        address in (MAX_ADDRESS + 1)..=u8::MAX,
        data in proptest::collection::vec(any::<u8>(), 0..=ADDRESS_COUNT),
    ) {
        prop_assert_eq!(WriteRequest::new(address, &data), Err(WriteError::AddressOutOfRange));
    }

    #[test]
    fn overruns_are_refused(address in 0u8..=MAX_ADDRESS, extra in 1usize..8) {
        let data = vec![0xA5u8; ADDRESS_COUNT - address as usize + extra];
        prop_assert_eq!(WriteRequest::new(address, &data), Err(WriteError::PayloadTooLong));
    }
}
