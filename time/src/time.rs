use std::time::{SystemTime, UNIX_EPOCH};

pub fn now_millis() -> u64 {
    let now = SystemTime::now();
    now.duration_since(UNIX_EPOCH).unwrap().as_millis() as u64
}
