//! Property-based tests for the memory bus.

use hook6502::{HookKind, Memory, MemoryBus, MEMORY_SIZE};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

proptest! {
    #[test]
    fn prop_load_read_round_trip(
        bytes in prop::collection::vec(any::<u8>(), 0..64),
        location in 0usize..MEMORY_SIZE,
    ) {
        let mut memory = Memory::new();
        let fits = location + bytes.len() <= MEMORY_SIZE;

        prop_assert_eq!(memory.load(&bytes, location).is_ok(), fits);
        if fits {
            prop_assert_eq!(memory.read(location, bytes.len()).unwrap(), bytes);
        }
    }

    #[test]
    fn prop_read_rejects_out_of_range(location in 0usize..0x20000, count in 0usize..0x100) {
        let memory = Memory::new();
        let valid = location < MEMORY_SIZE && location + count <= MEMORY_SIZE;

        prop_assert_eq!(memory.read(location, count).is_ok(), valid);
    }

    #[test]
    fn prop_hook_fires_only_at_its_address(hooked in any::<u16>(), accessed in any::<u16>(), value in any::<u8>()) {
        let mut memory = Memory::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&events);
        memory.register_read_write_hook(hooked, HookKind::ReadWrite, move |event, _| {
            log.borrow_mut().push(event.address)
        });

        memory.write_byte(accessed, value);
        prop_assert_eq!(memory.read_byte(accessed), value);

        let expected = if hooked == accessed { vec![accessed, accessed] } else { vec![] };
        prop_assert_eq!(&*events.borrow(), &expected);
    }
}
