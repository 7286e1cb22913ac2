#![no_main]

use libfuzzer_sys::fuzz_target;
use slotlru::policy::lru::LruCache;

// Fuzz LruCache against a naive vector model (front = most recent).
//
// First byte picks the capacity; each following pair is (op, key).
fuzz_target!(|data: &[u8]| {
    let Some((&cap_byte, rest)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap_byte % 16);
    let mut cache: LruCache<u8, u32> = LruCache::new(capacity);
    let mut model: Vec<(u8, u32)> = Vec::new();

    for (step, pair) in rest.chunks_exact(2).enumerate() {
        let op = pair[0] % 6;
        let key = pair[1] % 32;
        let value = step as u32;
        let pos = model.iter().position(|(k, _)| *k == key);

        match op {
            0 | 1 => {
                let previous = cache.put(key, value);
                match pos {
                    Some(p) => {
                        let (_, old) = model.remove(p);
                        assert_eq!(previous, Some(old));
                        model.insert(0, (key, value));
                    },
                    None => {
                        assert_eq!(previous, None);
                        if capacity > 0 {
                            if model.len() == capacity {
                                model.pop();
                            }
                            model.insert(0, (key, value));
                        }
                    },
                }
            },
            2 => {
                let got = cache.get(&key).copied();
                match pos {
                    Some(p) => {
                        let entry = model.remove(p);
                        assert_eq!(got, Some(entry.1));
                        model.insert(0, entry);
                    },
                    None => assert_eq!(got, None),
                }
            },
            3 => assert_eq!(cache.contains(&key), pos.is_some()),
            4 => {
                let removed = cache.remove(&key);
                assert_eq!(removed, pos.map(|p| model.remove(p).1));
            },
            _ => {
                if key == 0 {
                    cache.clear();
                    model.clear();
                } else {
                    assert_eq!(cache.pop_lru(), model.pop());
                }
            },
        }

        assert!(cache.len() <= capacity);
        let keys: Vec<u8> = model.iter().map(|(k, _)| *k).collect();
        assert_eq!(cache.dump_recency_order(), keys);
        assert!(cache.check_invariants().is_ok());
    }
});
