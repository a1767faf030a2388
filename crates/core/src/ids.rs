//! External identifier generation.
//!
//! Every entity is addressed over HTTP by a prefixed, externally-stable
//! string id (`TOUR1717171717171`, `BK1717171717171`, ...). The numeric part
//! is the creation instant in Unix milliseconds, which keeps ids sortable by
//! creation time without exposing database keys.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

static LAST_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Current Unix millis, bumped past the previous value when two ids are
/// requested within the same millisecond. Keeps ids unique per process.
fn next_millis() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_MILLIS.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST_MILLIS.compare_exchange(last, candidate, Ordering::SeqCst, Ordering::Relaxed) {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}

/// Generate a public id with the given prefix.
pub fn generate(prefix: &str) -> String {
    format!("{prefix}{}", next_millis())
}

pub fn tour_id() -> String {
    generate("TOUR")
}

pub fn testimonial_id() -> String {
    generate("TEST")
}

pub fn gallery_id() -> String {
    generate("GAL")
}

pub fn post_id() -> String {
    generate("POST")
}

pub fn booking_id() -> String {
    generate("BK")
}

pub fn contact_id() -> String {
    generate("CT")
}
