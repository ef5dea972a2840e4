//! Key upsert for `sysctl.conf` style files.

/// Key controlling address space layout randomisation.
pub const ASLR_KEY: &str = "kernel.randomize_va_space";

/// Key controlling TCP SYN cookie protection.
pub const SYN_COOKIES_KEY: &str = "net.ipv4.tcp_syncookies";

/// Returns the key a line assigns, ignoring a leading comment marker.
///
/// `#net.ipv4.tcp_syncookies=1` and `net.ipv4.tcp_syncookies = 1` both
/// yield `net.ipv4.tcp_syncookies`. The `-` prefix sysctl uses for
/// "ignore errors" is skipped as well.
fn assigned_key(line: &str) -> Option<&str> {
    let body = line.trim_start().trim_start_matches(['#', ';']).trim_start();
    let body = body.strip_prefix('-').unwrap_or(body);
    let (key, _) = body.split_once('=')?;
    Some(key.trim())
}

/// Replaces every line assigning `key` with `key=value`, or appends it.
///
/// Lines for other keys are kept verbatim and in order. When the key is
/// absent exactly one line is added at the end, before the final newline if
/// the content has one.
pub fn upsert(content: &str, key: &str, value: &str) -> String {
    let entry = format!("{key}={value}");
    let mut found = false;

    let mut lines: Vec<&str> = content
        .split('\n')
        .map(|line| {
            if assigned_key(line) == Some(key) {
                found = true;
                entry.as_str()
            } else {
                line
            }
        })
        .collect();

    if !found {
        match lines.last() {
            Some(last) if last.is_empty() => {
                let at = lines.len() - 1;
                lines.insert(at, entry.as_str());
            }
            _ => lines.push(entry.as_str()),
        }
    }

    lines.join("\n")
}
