//! Variable substitution for ritual-syntax text.
//!
//! Two substitution forms are applied for every bound variable, in order:
//!
//! | Form       | Meaning                                   |
//! |------------|-------------------------------------------|
//! | `{name}`   | Placeholder form                          |
//! | `name`     | Bare occurrence of the identifier text    |
//!
//! Bare-name replacement is a known quirk, not a bug to fix: when a variable
//! name happens to appear inside unrelated text, that text is rewritten too.
//! Callers accept this as part of the toy-interpreter contract.

use std::collections::BTreeMap;

/// Substitute every bound variable into `text`.
///
/// The variable map is ordered, so repeated runs over the same state produce
/// identical output.
pub fn substitute(text: &str, vars: &BTreeMap<String, String>) -> String {
    let mut out = text.to_owned();
    for (name, value) in vars {
        let placeholder = format!("{{{name}}}");
        out = out.replace(&placeholder, value);
        out = out.replace(name.as_str(), value);
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn placeholder_form() {
        let v = vars(&[("user.name", "Ann")]);
        assert_eq!(substitute("Hello {user.name}!", &v), "Hello Ann!");
    }

    #[test]
    fn bare_name_form() {
        let v = vars(&[("user.name", "Ann")]);
        assert_eq!(substitute("Welcome, user.name.", &v), "Welcome, Ann.");
    }

    #[test]
    fn untouched_without_bindings() {
        let v = BTreeMap::new();
        assert_eq!(substitute("Hello {user.name}!", &v), "Hello {user.name}!");
    }

    #[test]
    fn bare_name_rewrites_unrelated_text() {
        // The accepted quirk: "x" is a substring of "extra" and gets replaced.
        let v = vars(&[("x", "1")]);
        assert_eq!(substitute("extra", &v), "e1tra");
    }

    #[test]
    fn multiple_variables() {
        let v = vars(&[("a", "1"), ("b", "2")]);
        assert_eq!(substitute("{a} and {b}", &v), "1 and 2");
    }
}
