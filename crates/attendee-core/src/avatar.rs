//! Avatar initials and stable per-person colours.

/// Fixed palette an id hashes into.
pub const PALETTE: [&str; 15] = [
  "blue", "green", "purple", "pink", "yellow", "indigo", "red", "teal",
  "orange", "cyan", "amber", "lime", "violet", "rose", "emerald",
];

/// Up to two uppercase initials, one per space-separated word.
pub fn initials(name: &str) -> String {
  name
    .split(' ')
    .filter_map(|word| word.chars().next())
    .flat_map(char::to_uppercase)
    .take(2)
    .collect()
}

/// Deterministic palette entry for `id`.
///
/// Rolling hash `h = c + ((h << 5) - h)` over UTF-16 code units. Only the
/// shift is taken in 32 bits; the running sum is not truncated, so the
/// absolute value of the full sum picks the palette entry.
pub fn avatar_color(id: &str) -> &'static str {
  let hash = id.encode_utf16().fold(0i64, |h, unit| {
    let shifted = (h as i32).wrapping_shl(5);
    i64::from(unit) + i64::from(shifted) - h
  });
  PALETTE[(hash.unsigned_abs() % PALETTE.len() as u64) as usize]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn initials_take_first_two_words() {
    assert_eq!(initials("Lando Norris"), "LN");
    assert_eq!(initials("mary ann de la cruz"), "MA");
    assert_eq!(initials("Bob"), "B");
    assert_eq!(initials(""), "");
  }

  #[test]
  fn colour_is_stable_per_id() {
    assert_eq!(avatar_color("custom-1000"), avatar_color("custom-1000"));
    assert!(PALETTE.contains(&avatar_color("2")));
  }

  #[test]
  fn colour_hash_matches_known_values() {
    // "1" → 49, "2" → 50
    assert_eq!(avatar_color("1"), PALETTE[49 % 15]);
    assert_eq!(avatar_color("2"), PALETTE[50 % 15]);
    // "ab" → 97 * 31 + 98 = 3105
    assert_eq!(avatar_color("ab"), PALETTE[3105 % 15]);
  }

  #[test]
  fn long_ids_hash_past_32_bits() {
    // Sum runs to 3530983127, beyond i32::MAX.
    assert_eq!(avatar_color("custom-12345"), "purple");
    // Sum runs to -3035293564.
    assert_eq!(avatar_color("abcdefgh"), "yellow");
  }
}
