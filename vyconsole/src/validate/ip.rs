/// Rules for [`is_valid_address`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressRules {
    /// Whether a `/prefix` CIDR suffix is permitted.
    pub allow_cidr: bool,
    /// Validate against IPv6 grammar instead of IPv4.
    pub ipv6: bool,
}

/// Validate an IPv4 address: four dot-separated octets, each 0-255.
///
/// Leading zeros ("01") are accepted; the console's original validator was
/// never RFC-strict about octet spelling and form values round-trip as
/// typed.
pub fn is_valid_ipv4(value: &str) -> bool {
    value.is_empty() || is_dotted_quad(value)
}

/// Validate an IPv6 address: full, `::`-compressed, or IPv4-mapped forms.
pub fn is_valid_ipv6(value: &str) -> bool {
    value.is_empty() || is_ipv6(value)
}

/// Validate a CIDR prefix length: 0-32 for IPv4, 0-128 for IPv6.
///
/// Unlike the address validators this checks a component, not a form
/// value, so an empty suffix (a bare trailing `/`) is invalid.
pub fn is_valid_cidr_suffix(suffix: &str, ipv6: bool) -> bool {
    if suffix.is_empty() || suffix.len() > 3 || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let max = if ipv6 { 128 } else { 32 };
    matches!(suffix.parse::<u32>(), Ok(n) if n <= max)
}

/// Validate an IP address with an optional `/prefix` suffix.
///
/// The address part is always validated. The suffix is validated only
/// when present and `allow_cidr` is set; with `allow_cidr` unset a
/// present suffix is ignored rather than rejected, matching the original
/// console forms.
pub fn is_valid_address(value: &str, rules: &AddressRules) -> bool {
    if value.is_empty() {
        return true;
    }

    let (addr, suffix) = match value.split_once('/') {
        Some((addr, suffix)) => (addr, Some(suffix)),
        None => (value, None),
    };

    let addr_ok = if rules.ipv6 {
        is_ipv6(addr)
    } else {
        is_dotted_quad(addr)
    };
    if !addr_ok {
        return false;
    }

    match suffix {
        Some(suffix) if rules.allow_cidr => is_valid_cidr_suffix(suffix, rules.ipv6),
        _ => true,
    }
}

pub(crate) fn is_dotted_quad(value: &str) -> bool {
    let mut octets = 0;
    for octet in value.split('.') {
        octets += 1;
        if octets > 4
            || octet.is_empty()
            || octet.len() > 3
            || !octet.bytes().all(|b| b.is_ascii_digit())
        {
            return false;
        }
        match octet.parse::<u16>() {
            Ok(n) if n <= 255 => {}
            _ => return false,
        }
    }
    octets == 4
}

fn is_ipv6(value: &str) -> bool {
    match value.matches("::").count() {
        0 => count_groups(value, true) == Some(8),
        1 => {
            let Some((left, right)) = value.split_once("::") else {
                return false;
            };
            // The compressed run stands in for at least one zero group, so
            // the explicit groups on both sides must total at most seven.
            match (count_groups(left, false), count_groups(right, true)) {
                (Some(l), Some(r)) => l + r <= 7,
                _ => false,
            }
        }
        _ => false,
    }
}

/// Count the 16-bit groups in a colon-separated fragment. A trailing
/// dotted quad (IPv4-mapped form) counts as two groups and is only
/// allowed at the very end of the address.
fn count_groups(fragment: &str, allow_v4_tail: bool) -> Option<usize> {
    if fragment.is_empty() {
        return Some(0);
    }

    let groups: Vec<&str> = fragment.split(':').collect();
    let mut count = 0;
    for (i, group) in groups.iter().enumerate() {
        if group.contains('.') {
            if !allow_v4_tail || i != groups.len() - 1 || !is_dotted_quad(group) {
                return None;
            }
            count += 2;
        } else if is_hex_group(group) {
            count += 1;
        } else {
            return None;
        }
    }
    Some(count)
}

fn is_hex_group(group: &str) -> bool {
    !group.is_empty() && group.len() <= 4 && group.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::{is_valid_address, is_valid_cidr_suffix, is_valid_ipv4, is_valid_ipv6, AddressRules};

    #[test]
    fn accepts_plain_ipv4() {
        assert!(is_valid_ipv4("192.168.1.1"));
        assert!(is_valid_ipv4("0.0.0.0"));
        assert!(is_valid_ipv4("255.255.255.255"));
        assert!(is_valid_ipv4("01.2.3.4"));
    }

    #[test]
    fn rejects_malformed_ipv4() {
        assert!(!is_valid_ipv4("256.1.1.1"));
        assert!(!is_valid_ipv4("192.168.1"));
        assert!(!is_valid_ipv4("192.168.1.1.1"));
        assert!(!is_valid_ipv4("a.b.c.d"));
        assert!(!is_valid_ipv4("192.168..1"));
        assert!(!is_valid_ipv4("1.2.3.4/24"));
    }

    #[test]
    fn empty_string_is_valid_everywhere() {
        assert!(is_valid_ipv4(""));
        assert!(is_valid_ipv6(""));
        assert!(is_valid_address("", &AddressRules::default()));
    }

    #[test]
    fn accepts_ipv6_forms() {
        assert!(is_valid_ipv6("2001:0db8:0000:0000:0000:ff00:0042:8329"));
        assert!(is_valid_ipv6("2001:db8::ff00:42:8329"));
        assert!(is_valid_ipv6("::"));
        assert!(is_valid_ipv6("::1"));
        assert!(is_valid_ipv6("fe80::"));
        assert!(is_valid_ipv6("::ffff:192.0.2.128"));
    }

    #[test]
    fn rejects_malformed_ipv6() {
        assert!(!is_valid_ipv6("2001:db8"));
        assert!(!is_valid_ipv6("1:2:3:4:5:6:7:8:9"));
        assert!(!is_valid_ipv6("1::2::3"));
        assert!(!is_valid_ipv6(":::"));
        assert!(!is_valid_ipv6("2001:db8::fffff"));
        assert!(!is_valid_ipv6("192.0.2.128::"));
        assert!(!is_valid_ipv6("2001:db8:g::1"));
    }

    #[test]
    fn compressed_ipv6_cannot_spell_all_eight_groups() {
        assert!(is_valid_ipv6("::1:2:3:4:5:6:7"));
        assert!(!is_valid_ipv6("::1:2:3:4:5:6:7:8"));
    }

    #[test]
    fn cidr_suffix_bounds_depend_on_family() {
        assert!(is_valid_cidr_suffix("0", false));
        assert!(is_valid_cidr_suffix("32", false));
        assert!(!is_valid_cidr_suffix("33", false));
        assert!(is_valid_cidr_suffix("128", true));
        assert!(!is_valid_cidr_suffix("129", true));
        assert!(!is_valid_cidr_suffix("", false));
        assert!(!is_valid_cidr_suffix("+8", false));
    }

    #[test]
    fn address_with_optional_cidr() {
        let v4_cidr = AddressRules {
            allow_cidr: true,
            ipv6: false,
        };
        assert!(is_valid_address("10.0.0.1/24", &v4_cidr));
        assert!(is_valid_address("10.0.0.1", &v4_cidr));
        assert!(!is_valid_address("10.0.0.1/33", &v4_cidr));
        assert!(!is_valid_address("/24", &v4_cidr));

        let v6_cidr = AddressRules {
            allow_cidr: true,
            ipv6: true,
        };
        assert!(is_valid_address("2001:db8::1/64", &v6_cidr));
        assert!(!is_valid_address("2001:db8::1/129", &v6_cidr));
    }

    #[test]
    fn suffix_is_ignored_when_cidr_not_allowed() {
        let rules = AddressRules {
            allow_cidr: false,
            ipv6: false,
        };
        assert!(is_valid_address("10.0.0.1/99", &rules));
        assert!(!is_valid_address("10.0.0.999/24", &rules));
    }
}
