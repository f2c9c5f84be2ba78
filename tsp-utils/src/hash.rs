pub fn u8s_from_str(input: &str) -> [u8; 32] {
    blake3::hash(input.as_bytes()).into()
}

/// Derives a 32 byte seed from a base string and a list of salts.
///
/// Salts are joined with `:` so `("a", ["b"])` and `("a:b", [])` hash the same,
/// which is fine for seeding benchmark instances.
pub fn seed_from_parts(base: &str, salts: &[&str]) -> [u8; 32] {
    let mut input = base.to_string();
    for salt in salts {
        input.push(':');
        input.push_str(salt);
    }
    u8s_from_str(&input)
}
