//! The version-type abstraction (spec §3, §9 "Dynamic dispatch on version type").
//!
//! Rather than branching on reflected field type at every phase, each semantic
//! type is a variant of [`VersionKind`] that knows its own `initial`, `next`,
//! and `eq`. The Introspector picks the variant once; every other phase just
//! calls into it.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// One of the four version semantic types recognized by the Introspector (spec §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionKind {
    /// Unsigned 64-bit, initial 1, next = previous + 1.
    Int64,
    /// 16-byte opaque, fresh random UUID v4 per write.
    Uuid,
    /// 16-byte opaque, lexicographically sortable, time + monotonic entropy.
    Ulid,
    /// The ORM's configured clock reading, truncated to `precision`.
    Timestamp(TimestampPrecision),
}

/// Storage granularity a timestamp-typed version is truncated to before
/// comparison or persistence (spec §9, Open Question: left under-specified
/// upstream because deployments legitimately differ).
///
/// This plugin defaults to [`TimestampPrecision::Micros`], matching
/// PostgreSQL's native `timestamp` column resolution, and applies the
/// truncation symmetrically to generation (`VersionKind::next`) and
/// comparison (`VersionValue::eq`) so a round trip through the database
/// never spuriously mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampPrecision {
    Seconds,
    Millis,
    Micros,
    Nanos,
}

impl TimestampPrecision {
    fn truncate(self, unix_nanos: i64) -> i64 {
        let divisor = match self {
            TimestampPrecision::Seconds => 1_000_000_000,
            TimestampPrecision::Millis => 1_000_000,
            TimestampPrecision::Micros => 1_000,
            TimestampPrecision::Nanos => 1,
        };
        (unix_nanos / divisor) * divisor
    }
}

/// A concrete version value, tagged by its [`VersionKind`] at the point of use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionValue {
    Int64(u64),
    Uuid([u8; 16]),
    Ulid([u8; 16]),
    /// Unix nanoseconds, already truncated to the owning kind's precision.
    Timestamp(i64),
}

impl VersionValue {
    /// Zero/unset sentinel for this value's shape (spec §3: zero is reserved
    /// as "unset" for UUID and ULID; monotonic integer has no unset besides 0).
    pub fn is_zero(&self) -> bool {
        match self {
            VersionValue::Int64(v) => *v == 0,
            VersionValue::Uuid(b) | VersionValue::Ulid(b) => b.iter().all(|byte| *byte == 0),
            VersionValue::Timestamp(t) => *t == 0,
        }
    }
}

/// Supplies the "current clock reading" for timestamp-typed versions (spec §3:
/// "as supplied by the ORM's configured time source").
pub trait Clock: Send + Sync {
    fn now_unix_nanos(&self) -> i64;
}

/// The default clock: the process's wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix_nanos(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before unix epoch")
            .as_nanos() as i64
    }
}

/// Process-wide monotonic entropy source for ULID generation (spec §5: "must
/// be safe for concurrent calls"). Guarantees strictly increasing output for
/// calls that land in the same millisecond, per the ULID monotonic-generation
/// convention: the 80-bit random tail is incremented instead of re-rolled
/// whenever the millisecond timestamp repeats.
pub struct UlidGenerator {
    state: Mutex<UlidState>,
}

struct UlidState {
    last_millis: u64,
    last_random: u128,
}

impl Default for UlidGenerator {
    fn default() -> Self {
        Self {
            state: Mutex::new(UlidState { last_millis: 0, last_random: 0 }),
        }
    }
}

impl UlidGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the next 16-byte ULID: 48-bit millisecond timestamp followed
    /// by 80 bits of entropy, monotonic within a millisecond.
    pub fn generate(&self, now_unix_nanos: i64) -> [u8; 16] {
        use rand::RngCore;

        let millis = (now_unix_nanos.max(0) as u64) / 1_000_000;
        let mut guard = self.state.lock().expect("ulid generator mutex poisoned");

        let random = if millis == guard.last_millis {
            guard.last_random = guard.last_random.wrapping_add(1);
            guard.last_random
        } else {
            let mut bytes = [0u8; 16];
            rand::rng().fill_bytes(&mut bytes[6..16]);
            let random = u128::from_be_bytes(bytes) & ((1u128 << 80) - 1);
            guard.last_millis = millis;
            guard.last_random = random;
            random
        };

        let mut out = [0u8; 16];
        out[0..6].copy_from_slice(&millis.to_be_bytes()[2..8]);
        out[6..16].copy_from_slice(&random.to_be_bytes()[6..16]);
        out
    }
}

impl VersionKind {
    /// The seeded value on create (spec §4.2).
    pub fn initial(&self, clock: &dyn Clock, ulid: &UlidGenerator) -> VersionValue {
        match self {
            VersionKind::Int64 => VersionValue::Int64(1),
            VersionKind::Uuid => VersionValue::Uuid(fresh_uuid_v4()),
            VersionKind::Ulid => VersionValue::Ulid(ulid.generate(clock.now_unix_nanos())),
            VersionKind::Timestamp(p) => VersionValue::Timestamp(p.truncate(clock.now_unix_nanos())),
        }
    }

    /// The successor of `prev` on update (spec §4.3 Step C).
    pub fn next(&self, prev: VersionValue, clock: &dyn Clock, ulid: &UlidGenerator) -> VersionValue {
        match (self, prev) {
            (VersionKind::Int64, VersionValue::Int64(v)) => VersionValue::Int64(v + 1),
            (VersionKind::Uuid, _) => VersionValue::Uuid(fresh_uuid_v4()),
            (VersionKind::Ulid, _) => VersionValue::Ulid(ulid.generate(clock.now_unix_nanos())),
            (VersionKind::Timestamp(p), _) => VersionValue::Timestamp(p.truncate(clock.now_unix_nanos())),
            _ => panic!("version kind/value mismatch"),
        }
    }

    /// Equality comparison respecting each type's storage semantics (spec §3).
    pub fn eq(&self, a: VersionValue, b: VersionValue) -> bool {
        match self {
            VersionKind::Timestamp(p) => match (a, b) {
                (VersionValue::Timestamp(x), VersionValue::Timestamp(y)) => {
                    p.truncate(x) == p.truncate(y)
                }
                _ => false,
            },
            _ => a == b,
        }
    }
}

fn fresh_uuid_v4() -> [u8; 16] {
    use rand::RngCore;
    let mut bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut bytes);
    // RFC 4122 version/variant bits, matching what the `uuid` crate's `new_v4` produces.
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    bytes
}
