//! Player embedding for recommendation links.

/// For YouTube links, the URL of the embeddable player for the same video.
///
/// Any `youtube.com` host is recognised, subdomains such as `m.` or `music.`
/// included. The video id comes from the `v` query parameter, or else from a
/// `/shorts/<id>`, `/embed/<id>` or `/live/<id>` path. `youtu.be/<id>` short
/// links are recognised too. Any other link yields `None`, in which case
/// callers should present the link as-is.
pub fn embed_url(link: &str) -> Option<String> {
  let link = link.trim();
  let rest = link
    .strip_prefix("https://")
    .or_else(|| link.strip_prefix("http://"))
    .unwrap_or(link);

  let (host, tail) = rest.split_at(rest.find(['/', '?', '#']).unwrap_or(rest.len()));
  let lower = host.to_ascii_lowercase();
  let host = lower.strip_prefix("www.").unwrap_or(&lower);

  let tail = tail.split('#').next().unwrap_or_default();
  let (path, query) = tail.split_once('?').unwrap_or((tail, ""));
  let mut segments = path.split('/').filter(|s| !s.is_empty());

  let video_id = if host == "youtu.be" {
    segments.next()
  } else if host == "youtube.com" || host.ends_with(".youtube.com") {
    query
      .split('&')
      .find_map(|pair| pair.strip_prefix("v="))
      .or_else(|| match segments.next() {
        Some("shorts" | "embed" | "live") => segments.next(),
        _ => None,
      })
  } else {
    None
  }?;

  if video_id.is_empty() {
    return None;
  }
  Some(format!("https://www.youtube.com/embed/{video_id}"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn watch_links_embed() {
    assert_eq!(
      embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42").as_deref(),
      Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
    );
    assert_eq!(
      embed_url("https://youtube.com/watch?list=abc&v=xyz").as_deref(),
      Some("https://www.youtube.com/embed/xyz")
    );
  }

  #[test]
  fn short_links_embed() {
    assert_eq!(
      embed_url("https://youtu.be/dQw4w9WgXcQ?si=tracking").as_deref(),
      Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
    );
  }

  #[test]
  fn youtube_subdomains_embed() {
    for link in [
      "https://music.youtube.com/watch?v=abc123",
      "https://m.youtube.com/watch?v=abc123&feature=share",
      "http://www.YouTube.com/watch?v=abc123",
    ] {
      assert_eq!(
        embed_url(link).as_deref(),
        Some("https://www.youtube.com/embed/abc123"),
        "{link}"
      );
    }
  }

  #[test]
  fn path_style_ids_embed() {
    for link in [
      "https://www.youtube.com/shorts/abc123",
      "https://www.youtube.com/embed/abc123",
      "https://youtube.com/live/abc123?feature=share",
      "https://www.youtube.com/shorts/abc123/#comments",
    ] {
      assert_eq!(
        embed_url(link).as_deref(),
        Some("https://www.youtube.com/embed/abc123"),
        "{link}"
      );
    }
  }

  #[test]
  fn other_links_do_not() {
    assert_eq!(embed_url("https://open.spotify.com/track/123"), None);
    assert_eq!(embed_url("https://www.youtube.com/channel/abc"), None);
    assert_eq!(embed_url("https://www.youtube.com/@someone"), None);
    assert_eq!(embed_url("https://www.youtube.com/shorts/"), None);
    assert_eq!(embed_url("https://www.youtube.com/watch?v="), None);
    assert_eq!(embed_url("https://notyoutube.com/watch?v=abc123"), None);
    assert_eq!(embed_url("https://youtu.be/"), None);
    assert_eq!(embed_url(""), None);
  }
}
