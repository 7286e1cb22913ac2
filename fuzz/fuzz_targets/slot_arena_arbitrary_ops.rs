#![no_main]

use libfuzzer_sys::fuzz_target;
use slotlru::ds::{SlotArena, SlotId};

// Fuzz arbitrary operation sequences on SlotArena
//
// Tracks live ids alongside the arena and checks that freed slots are the
// first ones handed back out.
fuzz_target!(|data: &[u8]| {
    let mut arena: SlotArena<u32> = SlotArena::new();
    let mut live: Vec<(SlotId, u32)> = Vec::new();
    let mut freed: Vec<SlotId> = Vec::new();

    for pair in data.chunks_exact(2) {
        let op = pair[0] % 5;
        let value = u32::from(pair[1]);

        match op {
            0 => {
                let expected_reuse = freed.pop();
                let id = arena.allocate(value);
                if let Some(reused) = expected_reuse {
                    assert_eq!(id, reused, "allocate must reuse the most recently freed slot");
                }
                assert_eq!(arena.get(id), Some(&value));
                live.push((id, value));
            },
            1 => {
                if !live.is_empty() {
                    let (id, value) = live.swap_remove(value as usize % live.len());
                    assert_eq!(arena.free(id), Some(value));
                    assert_eq!(arena.free(id), None);
                    assert!(!arena.contains(id));
                    freed.push(id);
                }
            },
            2 => {
                if !live.is_empty() {
                    let idx = value as usize % live.len();
                    let (id, _) = live[idx];
                    if let Some(slot) = arena.get_mut(id) {
                        *slot = value;
                    }
                    live[idx].1 = value;
                    assert_eq!(arena.get(id), Some(&value));
                }
            },
            3 => {
                for (id, value) in &live {
                    assert_eq!(arena.get(*id), Some(value));
                }
            },
            _ => {
                if value % 16 == 0 {
                    arena.clear();
                    live.clear();
                    freed.clear();
                    assert!(arena.is_empty());
                    assert_eq!(arena.slot_count(), 0);
                }
            },
        }

        assert_eq!(arena.len(), live.len());
        assert_eq!(arena.slot_count(), arena.len() + arena.free_count());
    }
});
