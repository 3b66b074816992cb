/// Validate a MAC address.
///
/// Accepts `XX:XX:XX:XX:XX:XX`, `XX-XX-XX-XX-XX-XX`, or the Cisco
/// dot-grouped `XXXX.XXXX.XXXX` form, case-insensitive.
pub fn is_valid_mac(value: &str) -> bool {
    value.is_empty()
        || is_separated(value, ':')
        || is_separated(value, '-')
        || is_dot_grouped(value)
}

/// Canonicalize a MAC address: uppercase hex, colon-separated octets.
///
/// Strips every non-hex character, truncates to 12 hex digits, and
/// re-inserts `:` every two digits. Idempotent, and safe on partial input
/// while the operator is still typing.
pub fn normalize_mac(raw: &str) -> String {
    let hex: Vec<u8> = raw
        .bytes()
        .filter(u8::is_ascii_hexdigit)
        .map(|b| b.to_ascii_uppercase())
        .take(12)
        .collect();

    let mut out = String::with_capacity(17);
    for (i, chunk) in hex.chunks(2).enumerate() {
        if i > 0 {
            out.push(':');
        }
        for &b in chunk {
            out.push(char::from(b));
        }
    }
    out
}

fn is_separated(value: &str, sep: char) -> bool {
    let mut octets = 0;
    for octet in value.split(sep) {
        octets += 1;
        if octets > 6 || octet.len() != 2 || !octet.bytes().all(|b| b.is_ascii_hexdigit()) {
            return false;
        }
    }
    octets == 6
}

fn is_dot_grouped(value: &str) -> bool {
    let mut groups = 0;
    for group in value.split('.') {
        groups += 1;
        if groups > 3 || group.len() != 4 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return false;
        }
    }
    groups == 3
}

#[cfg(test)]
mod tests {
    use super::{is_valid_mac, normalize_mac};

    #[test]
    fn accepts_common_mac_forms() {
        assert!(is_valid_mac("00:1a:2b:3c:4d:5e"));
        assert!(is_valid_mac("00-1A-2B-3C-4D-5E"));
        assert!(is_valid_mac("001a.2b3c.4d5e"));
        assert!(is_valid_mac(""));
    }

    #[test]
    fn rejects_malformed_macs() {
        assert!(!is_valid_mac("00:1a:2b:3c:4d"));
        assert!(!is_valid_mac("00:1a:2b:3c:4d:5e:6f"));
        assert!(!is_valid_mac("00:1g:2b:3c:4d:5e"));
        assert!(!is_valid_mac("001a2b3c4d5e"));
        assert!(!is_valid_mac("00:1a-2b:3c:4d:5e"));
    }

    #[test]
    fn normalizes_to_uppercase_colon_form() {
        assert_eq!(normalize_mac("00-1a-2b-3c-4d-5e"), "00:1A:2B:3C:4D:5E");
        assert_eq!(normalize_mac("001a.2b3c.4d5e"), "00:1A:2B:3C:4D:5E");
        assert_eq!(normalize_mac("001a2b3c4d5e"), "00:1A:2B:3C:4D:5E");
    }

    #[test]
    fn normalize_truncates_extra_digits() {
        assert_eq!(normalize_mac("001a2b3c4d5eff"), "00:1A:2B:3C:4D:5E");
    }

    #[test]
    fn normalize_handles_partial_input() {
        assert_eq!(normalize_mac(""), "");
        assert_eq!(normalize_mac("0"), "0");
        assert_eq!(normalize_mac("001a2"), "00:1A:2");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["00-1a-2b-3c-4d-5e", "001a.2b3c.4d5e", "0", "zz", "001a2"] {
            let once = normalize_mac(raw);
            assert_eq!(normalize_mac(&once), once);
        }
    }
}
