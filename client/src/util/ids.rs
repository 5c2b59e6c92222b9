//! Client-side identifier synthesis for new shipments.

#[cfg(test)]
#[path = "ids_test.rs"]
mod ids_test;

use time::OffsetDateTime;
use uuid::Uuid;

use super::timestamp::unix_millis;

pub const SHIPMENT_ID_PREFIX: &str = "SHIP-";
const SUFFIX_LEN: usize = 5;
const SUFFIX_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `SHIP-<unix millis>-<random uppercase alphanumeric suffix>`.
pub fn synthesize_shipment_id(now: OffsetDateTime) -> String {
    format!("{SHIPMENT_ID_PREFIX}{}-{}", unix_millis(now), random_suffix(Uuid::new_v4().as_u128()))
}

/// Render the low digits of `seed` in base 36.
fn random_suffix(mut seed: u128) -> String {
    let mut out = String::with_capacity(SUFFIX_LEN);
    for _ in 0..SUFFIX_LEN {
        let digit = usize::try_from(seed % 36).unwrap_or(0);
        out.push(char::from(SUFFIX_ALPHABET[digit]));
        seed /= 36;
    }
    out
}
