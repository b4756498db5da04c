//! HTML escaping and URL percent-encoding.
//!
//! [§ 13.1.2.6 Restrictions on the contents of raw text and escapable raw text elements](https://html.spec.whatwg.org/multipage/syntax.html#cdata-rcdata-restrictions)
//! [RFC 3986 § 2 Characters](https://www.rfc-editor.org/rfc/rfc3986#section-2)
//!
//! All functions here are pure and total: every input string has an encoding.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// [RFC 3986 § 2.3 Unreserved Characters](https://www.rfc-editor.org/rfc/rfc3986#section-2.3)
///
/// "unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~""
///
/// Everything outside this set is percent-encoded in a URL component.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// [RFC 3986 § 3.3 Path](https://www.rfc-editor.org/rfc/rfc3986#section-3.3)
///
/// "pchar = unreserved / pct-encoded / sub-delims / ":" / "@""
///
/// The path set also keeps `/` so segment structure and the scheme separator
/// survive. `+` is not kept and is always encoded.
const PATH: &AsciiSet = &COMPONENT
    .remove(b'/')
    .remove(b':')
    .remove(b'@')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// HTML-escape `text` for element content or a quoted attribute value.
///
/// Escapes `&`, `<`, `>`, `"` and `'`. Input without any of those characters
/// is returned borrowed.
#[must_use]
pub fn encode_text(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Percent-encode a URL, leaving its query string intact.
///
/// # Algorithm
///
/// STEP 1: Split at the first `?`.
///
/// STEP 2: Percent-encode the part before it as a path.
///
/// STEP 3: Append the query part (from `?` onward) unchanged, so existing
/// `key=value&key2=value2` structure survives.
///
/// A URL without `?` is encoded in full.
#[must_use]
pub fn encode_url(url: &str) -> String {
    // STEP 1
    let (path, query) = url.find('?').map_or((url, ""), |index| url.split_at(index));

    // STEP 2 + STEP 3
    let mut encoded = String::with_capacity(url.len());
    encoded.extend(utf8_percent_encode(path, PATH));
    encoded.push_str(query);
    encoded
}

/// Percent-encode `text` as a single URL component (a query parameter name
/// or value). Only unreserved characters are left as they are.
#[must_use]
pub fn encode_url_parameter(text: &str) -> Cow<'_, str> {
    utf8_percent_encode(text, COMPONENT).into()
}
