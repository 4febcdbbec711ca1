use std::sync::LazyLock;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use regex::Regex;
use tracing::warn;

/// Regular expression for matching positional placeholders `{id-N}`.
static RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{id-(?<position>\d+)}").expect("a valid regex"));

/// Characters that cannot appear verbatim inside a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn placeholder(position: usize) -> String {
    ["{id-", &position.to_string(), "}"].concat()
}

/// An endpoint path template with its ordered identifiers.
///
/// Placeholders are positional and 1-indexed: `{id-1}` is replaced by the first
/// identifier, `{id-2}` by the second, and so on.
///
/// # Examples
///
/// ```rust
/// use flarekit_core::CallPath;
///
/// let path = CallPath::from("/zones/{id-1}/dns_records/{id-2}")
///     .add_identifiers(["abc", "xyz"]);
///
/// assert_eq!(path.resolve(), "/zones/abc/dns_records/xyz");
/// ```
///
/// A placeholder without identifier is left as literal text:
///
/// ```rust
/// # use flarekit_core::CallPath;
/// let path = CallPath::from("/zones/{id-1}/dns_records/{id-2}").add_identifier("abc");
///
/// assert_eq!(path.resolve(), "/zones/abc/dns_records/{id-2}");
/// assert_eq!(path.unresolved_placeholders(), vec!["{id-2}"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_more::Display)]
#[display("{template}")]
pub struct CallPath {
    template: String,
    identifiers: Vec<String>,
}

impl CallPath {
    /// Appends one identifier.
    pub fn add_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifiers.push(identifier.into());
        self
    }

    /// Appends identifiers in iteration order.
    pub fn add_identifiers<I, S>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.identifiers
            .extend(identifiers.into_iter().map(Into::into));
        self
    }

    /// The unresolved template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The identifiers, in substitution order.
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Substitutes every `{id-N}` with the N-th identifier.
    ///
    /// Plain text replacement in ascending order: identifiers are inserted
    /// verbatim, so an identifier containing `{id-2}` is itself replaced at the
    /// second step. Extra identifiers are ignored. Placeholders without
    /// identifier stay in the returned path.
    pub fn resolve(&self) -> String {
        self.substitute(|identifier| identifier.to_string())
    }

    /// Same as [`resolve`](Self::resolve), with each identifier percent-encoded
    /// as a single path segment. Used to build the request URL.
    pub(in crate::client) fn resolve_encoded(&self) -> String {
        self.substitute(|identifier| utf8_percent_encode(identifier, PATH_SEGMENT).to_string())
    }

    fn substitute<F>(&self, render: F) -> String
    where
        F: Fn(&str) -> String,
    {
        let mut path = self.template.clone();
        for (index, identifier) in self.identifiers.iter().enumerate() {
            path = path.replace(&placeholder(index + 1), &render(identifier));
        }

        if RE.is_match(&path) {
            warn!(template = %self.template, %path, "path has placeholders without identifier");
        }
        path
    }

    /// Placeholders that [`resolve`](Self::resolve) leaves in place.
    pub fn unresolved_placeholders(&self) -> Vec<String> {
        let count = self.identifiers.len();
        RE.captures_iter(&self.template)
            .filter(|caps| {
                caps.name("position")
                    .and_then(|position| position.as_str().parse::<usize>().ok())
                    .is_none_or(|position| position == 0 || position > count)
            })
            .filter_map(|caps| caps.get(0))
            .map(|found| found.as_str().to_string())
            .collect()
    }
}

impl From<&str> for CallPath {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<String> for CallPath {
    fn from(template: String) -> Self {
        Self {
            template,
            identifiers: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_resolve_positional_identifiers() {
        let path = CallPath::from("/zones/{id-1}/dns_records/{id-2}").add_identifiers(["abc", "xyz"]);

        assert_eq!(path.resolve(), "/zones/abc/dns_records/xyz");
    }

    #[test]
    fn should_keep_path_without_placeholders() {
        let path = CallPath::from("/zones").add_identifier("abc");

        assert_eq!(path.resolve(), "/zones");
    }

    #[test]
    fn should_accumulate_identifiers_across_calls() {
        let path = CallPath::from("/accounts/{id-1}/members/{id-2}")
            .add_identifiers(["acc"])
            .add_identifiers(Vec::<String>::new())
            .add_identifier("member");

        assert_eq!(path.identifiers(), ["acc", "member"]);
        assert_eq!(path.resolve(), "/accounts/acc/members/member");
    }

    #[test]
    fn should_replace_every_occurrence() {
        let path = CallPath::from("/test/{id-1}/{id-1}").add_identifier("123");

        assert_eq!(path.resolve(), "/test/123/123");
    }

    #[test]
    fn should_leave_missing_placeholder_literal() {
        let path = CallPath::from("/zones/{id-1}/dns_records/{id-2}").add_identifier("abc");

        assert_eq!(path.resolve(), "/zones/abc/dns_records/{id-2}");
        assert_eq!(path.unresolved_placeholders(), vec!["{id-2}".to_string()]);
    }

    #[test]
    fn should_ignore_extra_identifiers() {
        let path = CallPath::from("/zones/{id-1}").add_identifiers(["abc", "unused"]);

        assert_eq!(path.resolve(), "/zones/abc");
        assert!(path.unresolved_placeholders().is_empty());
    }

    #[test]
    fn should_be_idempotent() {
        let path = CallPath::from("/zones/{id-1}/settings/{id-2}").add_identifiers(["z", "ssl"]);

        assert_eq!(path.resolve(), path.resolve());
    }

    #[test]
    fn should_not_match_double_digit_prefix() {
        let identifiers: Vec<String> = (1..=10).map(|index| format!("v{index}")).collect();
        let path = CallPath::from("/{id-1}/{id-10}").add_identifiers(identifiers);

        assert_eq!(path.resolve(), "/v1/v10");
    }

    #[test]
    fn should_insert_identifiers_verbatim() {
        let path = CallPath::from("/zones/{id-1}").add_identifier("a b/c");

        assert_eq!(path.resolve(), "/zones/a b/c");
    }

    #[test]
    fn should_substitute_placeholder_from_identifier() {
        let path = CallPath::from("/{id-1}/{id-2}").add_identifiers(["{id-2}", "two"]);

        assert_eq!(path.resolve(), "/two/two");
    }

    #[test]
    fn should_encode_reserved_characters_for_url() {
        let path = CallPath::from("/zones/{id-1}/{id-2}").add_identifiers(["a/b?c", "example.com"]);

        assert_eq!(path.resolve_encoded(), "/zones/a%2Fb%3Fc/example.com");
    }

    #[test]
    fn should_not_substitute_encoded_placeholder_for_url() {
        let path = CallPath::from("/{id-1}/{id-2}").add_identifiers(["{id-2}", "two"]);

        assert_eq!(path.resolve_encoded(), "/%7Bid-2%7D/two");
    }
}
