//! Validation of UNC server names.
//!
//! A UNC authority is accepted when it is either a bracket-less IPv6
//! literal or an RFC 3986 reg-name. Dotted quads are not checked as IPv4
//! addresses here: `127.0.0.256` is a well-formed reg-name and is accepted
//! as such.

const IPV4_MAX_OCTET_VALUE: u16 = 255;
const IPV6_MAX_HEX_GROUPS: usize = 8;
const IPV6_MAX_HEX_DIGITS_PER_GROUP: usize = 4;

/// Checks whether `name` is acceptable as the server part of a UNC path.
///
/// # Examples
///
/// ```
/// use pathnorm::path::host::is_valid_host_name;
///
/// assert!(is_valid_host_name("server.example.org"));
/// assert!(is_valid_host_name("::1"));
/// assert!(is_valid_host_name("127.0.0.256"));
/// assert!(!is_valid_host_name("-server"));
/// assert!(!is_valid_host_name("::1::2"));
/// ```
#[must_use]
pub fn is_valid_host_name(name: &str) -> bool {
    is_ipv6_address(name) || is_reg_name(name)
}

/// Strict dotted-quad check: four decimal octets, each at most 255 and
/// without leading zeros.
#[must_use]
pub fn is_ipv4_address(candidate: &str) -> bool {
    let octets: Vec<&str> = candidate.split('.').collect();
    if octets.len() != 4 {
        return false;
    }
    octets.iter().all(|octet| {
        if octet.is_empty() || octet.len() > 3 || !octet.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        if octet.len() > 1 && octet.starts_with('0') {
            return false;
        }
        octet
            .parse::<u16>()
            .is_ok_and(|value| value <= IPV4_MAX_OCTET_VALUE)
    })
}

/// Loose IPv6 literal check (no brackets, no zone id).
///
/// At most one `::` is allowed. After expanding it, there may be no more
/// than eight groups of one to four hex digits; the last group may be an
/// embedded IPv4 address, which counts as two groups. Without `::` exactly
/// eight groups are required.
#[must_use]
pub fn is_ipv6_address(candidate: &str) -> bool {
    let compressed = candidate.find("::");
    if compressed.is_some() && compressed != candidate.rfind("::") {
        return false;
    }
    let compressed = compressed.is_some();

    if (candidate.starts_with(':') && !candidate.starts_with("::"))
        || (candidate.ends_with(':') && !candidate.ends_with("::"))
    {
        return false;
    }

    let mut groups: Vec<&str> = candidate.split(':').collect();
    while groups.last() == Some(&"") {
        groups.pop();
    }
    if compressed {
        if candidate.ends_with("::") {
            groups.push("");
        } else if candidate.starts_with("::") && !groups.is_empty() {
            groups.remove(0);
        }
    }

    if groups.len() > IPV6_MAX_HEX_GROUPS {
        return false;
    }

    let mut valid_groups = 0;
    let mut empty_run = 0;
    for (index, group) in groups.iter().enumerate() {
        if group.is_empty() {
            empty_run += 1;
            if empty_run > 1 {
                return false;
            }
        } else {
            empty_run = 0;
            if index == groups.len() - 1 && group.contains('.') {
                if !is_ipv4_address(group) {
                    return false;
                }
                valid_groups += 2;
                continue;
            }
            if group.len() > IPV6_MAX_HEX_DIGITS_PER_GROUP
                || !group.bytes().all(|b| b.is_ascii_hexdigit())
            {
                return false;
            }
        }
        valid_groups += 1;
    }

    valid_groups <= IPV6_MAX_HEX_GROUPS && (valid_groups >= IPV6_MAX_HEX_GROUPS || compressed)
}

/// RFC 3986 reg-name check, restricted to DNS-like labels.
///
/// Each dot-separated label starts with an ASCII letter or digit and
/// continues with letters, digits or hyphens. A single trailing dot is
/// allowed; any other empty label is not.
#[must_use]
pub fn is_reg_name(name: &str) -> bool {
    let labels: Vec<&str> = name.split('.').collect();
    for (index, label) in labels.iter().enumerate() {
        if label.is_empty() {
            return index == labels.len() - 1 && index != 0;
        }
        if !is_reg_name_label(label) {
            return false;
        }
    }
    true
}

fn is_reg_name_label(label: &str) -> bool {
    let mut bytes = label.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_alphanumeric())
        && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'-')
}
