//! Parsing for emailed confirmation links.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

/// Extract `email` and `token` for the email-confirmation form.
///
/// Mail providers wrap the final target in a `continueUrl` parameter; values
/// embedded there win, with the direct query parameters as fallback. A
/// literal `%EMAIL%` placeholder (an unexpanded mail template) counts as
/// absent.
pub fn confirmation_params(
    continue_url: Option<&str>,
    email: Option<&str>,
    token: Option<&str>,
) -> (Option<String>, Option<String>) {
    let mut out_email = None;
    let mut out_token = None;

    if let Some(url) = continue_url {
        out_email = query_param(url, "email").map(|v| percent_decode(&v));
        out_token = query_param(url, "token");
    }

    if out_email.is_none() {
        out_email = email
            .filter(|v| *v != "%EMAIL%")
            .map(|v| percent_decode(v));
    }
    if out_token.is_none() {
        out_token = token.map(ToOwned::to_owned);
    }

    (out_email, out_token)
}

/// Pull a single query parameter out of a URL without a full URL parser.
fn query_param(url: &str, name: &str) -> Option<String> {
    let query = url.split_once('?')?.1;
    let query = query.split('#').next().unwrap_or(query);
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_owned())
    })
}

/// Minimal percent-decoding for query values (`%40` → `@`, `+` → space).
pub fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                match (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi * 16 + lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8(out).unwrap_or_else(|_| value.to_owned())
}

fn hex_val(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
