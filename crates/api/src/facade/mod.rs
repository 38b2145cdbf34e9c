//! Key-value facade over the document store
//!
//! Maps a single string key to a value using only the document store's
//! `put`, `query` and `delete`.
//!
//! ## Desugaring
//!
//! | Facade | Document store |
//! |--------|----------------|
//! | `put(key, val)` | `put(Record { id: key, value: val })` |
//! | `get(key)` | `query(\|r\| r.id == key).first()` |
//! | `exists(key)` | `get(key).is_some()` |
//! | `remove(key)` | `get(key)` then `delete(key)` if present |
//! | `remove_many(keys)` | concurrent `remove` of each key |
//! | `confirmed_put(key, val, n)` | `put`, then up to `n` × (`exists`, `put`) |
//! | `keys_with_prefix(p)` | `query(\|r\| r.id.starts_with(p))` |

mod kv;

pub use kv::{FacadeImpl, KvFacade};
