//! Line edits for PAM stack files.
//!
//! PAM lines are whitespace-separated words (`type control module args...`).
//! Edits work on words, so the separators an administrator chose (tabs are
//! common) survive on every word that is kept.

/// Modules that accept a `minlen=` argument.
pub const MIN_LENGTH_MODULES: &[&str] = &["pam_pwquality.so", "pam_cracklib.so", "pam_unix.so"];

/// Modules that accept a `remember=` argument.
pub const REMEMBER_MODULES: &[&str] = &["pam_unix.so"];

/// Arguments that allow an account with an empty password to authenticate.
pub const NULLOK_TOKENS: &[&str] = &["nullok", "nullok_secure"];

/// A word together with the whitespace that precedes it.
struct Word<'a> {
    lead: &'a str,
    text: &'a str,
}

fn split_words(line: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut rest = line;
    loop {
        let trimmed = rest.trim_start();
        if trimmed.is_empty() {
            return words;
        }
        let lead = &rest[..rest.len() - trimmed.len()];
        let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        words.push(Word { lead, text: &trimmed[..end] });
        rest = &trimmed[end..];
    }
}

/// First whitespace character of `lead`, used to close a gap left by a drop.
fn single_separator(lead: &str) -> &str {
    let end = lead.chars().next().map_or(0, char::len_utf8);
    &lead[..end]
}

/// Drops every word matching `drop` along with the whitespace before it.
///
/// Returns `None` when nothing matched so callers can leave the line alone.
/// Trailing whitespace is not carried over into the rebuilt line, and the
/// indentation of a dropped first word moves to the next kept word. Where a
/// dropped word sat between two kept words they end up one separator apart.
fn remove_words(line: &str, drop: impl Fn(&str) -> bool) -> Option<String> {
    let words = split_words(line);
    if !words.iter().any(|word| drop(word.text)) {
        return None;
    }

    let mut rebuilt = String::with_capacity(line.len());
    let mut indentation: Option<&str> = None;
    let mut kept_any = false;
    let mut gap = false;
    for word in &words {
        if drop(word.text) {
            if !kept_any && indentation.is_none() {
                indentation = Some(word.lead);
            }
            gap = kept_any;
            continue;
        }
        let lead = match (kept_any, gap) {
            (false, _) => indentation.unwrap_or(word.lead),
            (true, true) => single_separator(word.lead),
            (true, false) => word.lead,
        };
        gap = false;
        rebuilt.push_str(lead);
        rebuilt.push_str(word.text);
        kept_any = true;
    }
    Some(rebuilt)
}

fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

fn references_module(line: &str, modules: &[&str]) -> bool {
    split_words(line).iter().any(|word| {
        modules.iter().any(|module| {
            word.text == *module
                || word.text.strip_suffix(module).is_some_and(|dir| dir.ends_with('/'))
        })
    })
}

/// Sets `key=value` on one line if it references one of `modules`.
fn set_option_on_line(line: &str, modules: &[&str], key: &str, value: u32) -> String {
    if is_comment(line) || !references_module(line, modules) {
        return line.to_string();
    }

    let prefix = format!("{key}=");
    let base = remove_words(line, |word| word.starts_with(&prefix))
        .unwrap_or_else(|| line.trim_end().to_string());
    format!("{base} {key}={value}")
}

/// Sets `key=value` on every non-comment line that references one of `modules`.
///
/// Existing `key=` arguments on those lines are removed first, so the
/// argument appears exactly once and re-applying the same value is a no-op.
pub fn set_module_option(content: &str, modules: &[&str], key: &str, value: u32) -> String {
    content
        .split('\n')
        .map(|line| set_option_on_line(line, modules, key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Removes `nullok` style arguments from every line.
pub fn remove_nullok(content: &str) -> String {
    content
        .split('\n')
        .map(|line| {
            remove_words(line, |word| NULLOK_TOKENS.contains(&word))
                .unwrap_or_else(|| line.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMON_PASSWORD: &str = "\
# /etc/pam.d/common-password - password-related modules common to all services
password\trequisite\t\t\tpam_pwquality.so retry=3 minlen=8
password\t[success=1 default=ignore]\tpam_unix.so obscure use_authtok try_first_pass yescrypt
password\trequisite\t\t\tpam_deny.so
password\trequired\t\t\tpam_permit.so
";

    #[test]
    fn min_length_replaces_existing_argument() {
        let line = "password requisite pam_pwquality.so retry=3 minlen=8";
        let updated = set_module_option(line, MIN_LENGTH_MODULES, "minlen", 14);

        assert_eq!(updated, "password requisite pam_pwquality.so retry=3 minlen=14");
        assert_eq!(updated.matches("minlen=").count(), 1);
    }

    #[test]
    fn min_length_strips_argument_in_the_middle_of_a_line() {
        let line = "password requisite pam_pwquality.so minlen=8 retry=3";
        let updated = set_module_option(line, MIN_LENGTH_MODULES, "minlen", 12);

        assert_eq!(updated, "password requisite pam_pwquality.so retry=3 minlen=12");
    }

    #[test]
    fn min_length_touches_only_module_lines() {
        let updated = set_module_option(COMMON_PASSWORD, MIN_LENGTH_MODULES, "minlen", 14);
        let lines: Vec<&str> = updated.split('\n').collect();
        let original: Vec<&str> = COMMON_PASSWORD.split('\n').collect();

        assert_eq!(lines.len(), original.len());
        assert_eq!(lines[0], original[0]);
        assert_eq!(lines[1], "password\trequisite\t\t\tpam_pwquality.so retry=3 minlen=14");
        assert_eq!(
            lines[2],
            "password\t[success=1 default=ignore]\tpam_unix.so obscure use_authtok \
             try_first_pass yescrypt minlen=14"
        );
        assert_eq!(lines[3], original[3]);
        assert_eq!(lines[4], original[4]);
        assert_eq!(lines[5], "");
    }

    #[test]
    fn min_length_leaves_comments_alone() {
        let content = "# pam_unix.so minlen=6 is the historical default\n";
        assert_eq!(set_module_option(content, MIN_LENGTH_MODULES, "minlen", 10), content);
    }

    #[test]
    fn min_length_without_module_line_is_unchanged() {
        let content = "auth required pam_env.so\n";
        assert_eq!(set_module_option(content, MIN_LENGTH_MODULES, "minlen", 10), content);
    }

    #[test]
    fn module_match_accepts_absolute_module_paths() {
        let line = "password required /lib/x86_64-linux-gnu/security/pam_unix.so sha512";
        let updated = set_module_option(line, REMEMBER_MODULES, "remember", 5);

        assert_eq!(updated, format!("{line} remember=5"));
    }

    #[test]
    fn remember_ignores_quality_module() {
        let content =
            "password requisite pam_pwquality.so retry=3\npassword required pam_unix.so remember=2";
        let updated = set_module_option(content, REMEMBER_MODULES, "remember", 5);

        assert_eq!(
            updated,
            "password requisite pam_pwquality.so retry=3\npassword required pam_unix.so remember=5"
        );
    }

    #[test]
    fn option_edit_drops_trailing_whitespace_once() {
        let line = "password required pam_unix.so sha512   ";
        let once = set_module_option(line, REMEMBER_MODULES, "remember", 0);
        let twice = set_module_option(&once, REMEMBER_MODULES, "remember", 0);

        assert_eq!(once, "password required pam_unix.so sha512 remember=0");
        assert_eq!(once, twice);
    }

    #[test]
    fn nullok_removed_at_end_of_line() {
        assert_eq!(
            remove_nullok("auth sufficient pam_unix.so nullok"),
            "auth sufficient pam_unix.so"
        );
    }

    #[test]
    fn nullok_removed_mid_line_without_double_space() {
        assert_eq!(
            remove_nullok("auth\t[success=1 default=ignore]\tpam_unix.so nullok try_first_pass"),
            "auth\t[success=1 default=ignore]\tpam_unix.so try_first_pass"
        );
    }

    #[test]
    fn nullok_removal_collapses_whitespace_runs() {
        assert_eq!(
            remove_nullok("auth sufficient pam_unix.so   nullok   try_first_pass"),
            "auth sufficient pam_unix.so try_first_pass"
        );
        assert_eq!(
            remove_nullok("auth\trequired\tpam_unix.so\t\tnullok\t\tshadow"),
            "auth\trequired\tpam_unix.so\tshadow"
        );
    }

    #[test]
    fn adjacent_nullok_tokens_leave_one_separator() {
        assert_eq!(
            remove_nullok("auth required pam_unix.so nullok  nullok_secure   audit"),
            "auth required pam_unix.so audit"
        );
    }

    #[test]
    fn nullok_secure_is_removed_too() {
        assert_eq!(
            remove_nullok("auth required pam_unix.so nullok_secure"),
            "auth required pam_unix.so"
        );
    }

    #[test]
    fn lines_without_nullok_are_unchanged() {
        let content = "auth requisite pam_deny.so   \nauth required pam_permit.so\n";
        assert_eq!(remove_nullok(content), content);
    }

    #[test]
    fn words_containing_nullok_are_not_tokens() {
        let content = "auth optional pam_echo.so file=/etc/nullok.txt";
        assert_eq!(remove_nullok(content), content);
    }
}
