use crate::errors::{DecodeError, VideoError};

const CANDIDATE_SELECTOR: &str = "a[target='_blank']";
const REDIRECT_MARKER: &str = "video_redirect";

/// Returns the decoded video URL of the first `video_redirect` anchor that decodes.
///
/// Candidates that fail to decode are logged and skipped.
pub fn resolve(document: &scraper::Html) -> Result<String, VideoError> {
    let selector =
        scraper::Selector::parse(CANDIDATE_SELECTOR).map_err(|_| VideoError::ParseFailed)?;
    document
        .select(&selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| {
            let matched = href.contains(REDIRECT_MARKER);
            if !matched {
                log::debug!("Skipping anchor: {href}");
            }
            matched
        })
        .find_map(|href| match decode_href(href) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("error unescaping href {href}: {e}");
                None
            }
        })
        .ok_or(VideoError::NoVideoFound)
}

fn decode_href(href: &str) -> Result<String, DecodeError> {
    let url = unescape(extract_fragment(href)?)?;
    if url.is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(url)
}

/// The text between the first `=` and the first `&` after it, still percent-encoded.
pub fn extract_fragment(href: &str) -> Result<&str, DecodeError> {
    let (_, rest) = href.split_once('=').ok_or(DecodeError::MissingEquals)?;
    let (fragment, _) = rest.split_once('&').ok_or(DecodeError::MissingAmpersand)?;
    Ok(fragment)
}

/// Query-unescapes `fragment`: `+` becomes a space and `%XX` becomes the byte `XX`.
pub fn unescape(fragment: &str) -> Result<String, DecodeError> {
    let bytes = fragment.as_bytes();
    for (idx, _) in fragment.match_indices('%') {
        let valid = bytes
            .get(idx + 1..idx + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            let end = (idx + 3).min(bytes.len());
            return Err(DecodeError::InvalidEscape(
                String::from_utf8_lossy(&bytes[idx..end]).into_owned(),
            ));
        }
    }
    let spaced = fragment.replace('+', " ");
    Ok(urlencoding::decode(&spaced)?.into_owned())
}
