/// Validate a port expression.
///
/// A single port must be an integer in 1-65535. With `allow_range` set,
/// a `start-end` range is also accepted when both endpoints are valid
/// ports and `start <= end`.
pub fn is_valid_port_spec(value: &str, allow_range: bool) -> bool {
    if value.is_empty() {
        return true;
    }

    if allow_range {
        if let Some((start, end)) = value.split_once('-') {
            return match (parse_port(start), parse_port(end)) {
                (Some(start), Some(end)) => start <= end,
                _ => false,
            };
        }
    }

    parse_port(value).is_some()
}

fn parse_port(value: &str) -> Option<u16> {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse::<u16>().ok().filter(|port| *port >= 1)
}
