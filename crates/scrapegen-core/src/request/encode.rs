//! URI-component percent-encoding.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )` is encoded.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes `value` as a single URI component (UTF-8, uppercase hex).
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_unreserved_marks() {
        assert_eq!(encode_component("aZ09-_.!~*'()"), "aZ09-_.!~*'()");
    }

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(
            encode_component("https://x.io/a?b=c&d"),
            "https%3A%2F%2Fx.io%2Fa%3Fb%3Dc%26d"
        );
        assert_eq!(encode_component("a b+c%"), "a%20b%2Bc%25");
    }

    #[test]
    fn encodes_utf8_bytes() {
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }
}
