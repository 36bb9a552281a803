//! Container image reference classification.
//!
//! Splits a raw image string into registry host, repository, tag, and digest,
//! and judges whether the reference names an explicit registry host. The host
//! heuristic is the widely used registry convention, not the full reference
//! grammar: with at least one `/`, the first path segment is a host iff it
//! contains a `.` (domain), contains a `:` (explicit port), or is the literal
//! `localhost`. Anything else is a repository path on the default registry.
//!
//! Parsing is total. Unparseable input classifies as [`ImageStatus::Malformed`]
//! instead of failing.

/// Classification outcome for a single image reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageStatus {
    /// Well-formed reference with an explicit registry host.
    Qualified,
    /// Well-formed reference without an explicit registry host.
    Unqualified,
    /// Reference carrying a structurally invalid digest.
    Malformed,
}

/// A container image reference, decomposed.
///
/// Derived from the raw string on demand; never persisted. The digest is kept
/// verbatim even when invalid so that [`ImageReference::status`] can report
/// malformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    /// Explicit registry host (domain, `localhost`, optionally with port).
    pub registry_host: Option<String>,
    /// Repository path, without host, tag, or digest.
    pub repository: String,
    /// Tag, if present.
    pub tag: Option<String>,
    /// Digest suffix (everything after `@`), if present. May be invalid.
    pub digest: Option<String>,
}

impl ImageReference {
    /// Parse a raw image string. Always succeeds.
    pub fn parse(image: &str) -> Self {
        let (base, digest) = match image.split_once('@') {
            Some((base, digest)) => (base, Some(digest.to_string())),
            None => (image, None),
        };

        // The first path segment denotes a host only when a `/` follows it.
        let (registry_host, remainder) = match base.split_once('/') {
            Some((first, rest)) if looks_like_registry_host(first) => {
                (Some(first.to_string()), rest)
            }
            _ => (None, base),
        };

        // A trailing `:tag` binds to the last path segment, never across a `/`.
        let (repository, tag) = match remainder.rsplit_once(':') {
            Some((repository, tag)) if !tag.contains('/') => {
                (repository.to_string(), Some(tag.to_string()))
            }
            _ => (remainder.to_string(), None),
        };

        Self {
            registry_host,
            repository,
            tag,
            digest,
        }
    }

    /// Whether the reference names an explicit registry host.
    ///
    /// A valid digest does not by itself qualify an image; the host is the
    /// sole criterion.
    pub fn is_fully_qualified(&self) -> bool {
        self.registry_host.is_some()
    }

    /// Classify the reference. Malformation takes precedence over the
    /// qualification judgment.
    pub fn status(&self) -> ImageStatus {
        match &self.digest {
            Some(digest) if !is_valid_digest(digest) => ImageStatus::Malformed,
            _ => {
                if self.is_fully_qualified() {
                    ImageStatus::Qualified
                } else {
                    ImageStatus::Unqualified
                }
            }
        }
    }
}

fn looks_like_registry_host(segment: &str) -> bool {
    segment.contains('.') || segment.contains(':') || segment == "localhost"
}

/// A digest is valid iff it is `sha256:` followed by exactly 64 lowercase
/// hexadecimal characters.
fn is_valid_digest(digest: &str) -> bool {
    match digest.strip_prefix("sha256:") {
        Some(hex) => hex.len() == 64 && hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VALID_DIGEST: &str =
        "sha256:ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

    #[test]
    fn test_bare_name_is_unqualified() {
        let reference = ImageReference::parse("busybox");
        assert_eq!(reference.registry_host, None);
        assert_eq!(reference.repository, "busybox");
        assert_eq!(reference.status(), ImageStatus::Unqualified);
    }

    #[test]
    fn test_tag_on_bare_name_is_not_a_port() {
        let reference = ImageReference::parse("busybox:latest");
        assert_eq!(reference.registry_host, None);
        assert_eq!(reference.repository, "busybox");
        assert_eq!(reference.tag.as_deref(), Some("latest"));
        assert_eq!(reference.status(), ImageStatus::Unqualified);
    }

    #[test]
    fn test_domain_host_is_qualified() {
        let reference = ImageReference::parse("k8s.gcr.io/busybox:1.2.3");
        assert_eq!(reference.registry_host.as_deref(), Some("k8s.gcr.io"));
        assert_eq!(reference.repository, "busybox");
        assert_eq!(reference.tag.as_deref(), Some("1.2.3"));
        assert_eq!(reference.status(), ImageStatus::Qualified);
    }

    #[test]
    fn test_host_with_port_is_qualified() {
        let reference = ImageReference::parse("test:5000/repo/image");
        assert_eq!(reference.registry_host.as_deref(), Some("test:5000"));
        assert_eq!(reference.repository, "repo/image");
        assert_eq!(reference.status(), ImageStatus::Qualified);
    }

    #[test]
    fn test_localhost_is_qualified() {
        let reference = ImageReference::parse("localhost/busybox");
        assert_eq!(reference.registry_host.as_deref(), Some("localhost"));
        assert_eq!(reference.status(), ImageStatus::Qualified);
    }

    #[test]
    fn test_plain_first_segment_is_repository_path() {
        let reference = ImageReference::parse("library/busybox");
        assert_eq!(reference.registry_host, None);
        assert_eq!(reference.repository, "library/busybox");
        assert_eq!(reference.status(), ImageStatus::Unqualified);
    }

    #[test]
    fn test_valid_digest_does_not_qualify() {
        let reference = ImageReference::parse(&format!("repo/image@{VALID_DIGEST}"));
        assert_eq!(reference.registry_host, None);
        assert_eq!(reference.digest.as_deref(), Some(VALID_DIGEST));
        assert_eq!(reference.status(), ImageStatus::Unqualified);
    }

    #[test]
    fn test_host_with_valid_digest() {
        let reference = ImageReference::parse(&format!("test:5000/repo/image@{VALID_DIGEST}"));
        assert_eq!(reference.status(), ImageStatus::Qualified);
    }

    #[test]
    fn test_tag_and_digest_together() {
        let reference =
            ImageReference::parse(&format!("test:5000/repo/image:ignore-tag@{VALID_DIGEST}"));
        assert_eq!(reference.registry_host.as_deref(), Some("test:5000"));
        assert_eq!(reference.tag.as_deref(), Some("ignore-tag"));
        assert_eq!(reference.status(), ImageStatus::Qualified);

        let reference = ImageReference::parse(&format!("repo/image:ignore-tag@{VALID_DIGEST}"));
        assert_eq!(reference.status(), ImageStatus::Unqualified);
    }

    #[test]
    fn test_short_digest_is_malformed() {
        let reference = ImageReference::parse("test:5000/repo/image@sha256:digest");
        assert_eq!(reference.status(), ImageStatus::Malformed);
    }

    #[test]
    fn test_malformed_digest_wins_over_missing_host() {
        let reference = ImageReference::parse("repo/image@sha256:digest");
        assert_eq!(reference.status(), ImageStatus::Malformed);
    }

    #[test]
    fn test_uppercase_hex_digest_is_malformed() {
        let digest = format!("sha256:{}", "F".repeat(64));
        let reference = ImageReference::parse(&format!("repo/image@{digest}"));
        assert_eq!(reference.status(), ImageStatus::Malformed);
    }

    #[test]
    fn test_unknown_digest_algorithm_is_malformed() {
        let reference = ImageReference::parse("repo/image@md5:d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(reference.status(), ImageStatus::Malformed);
    }

    #[test]
    fn test_empty_string_does_not_panic() {
        let reference = ImageReference::parse("");
        assert_eq!(reference.repository, "");
        assert_eq!(reference.status(), ImageStatus::Unqualified);
    }

    proptest! {
        #[test]
        fn prop_dotted_first_segment_is_always_qualified(
            host in "[a-z]{1,8}\\.[a-z]{2,4}",
            repo in "[a-z]{1,12}",
            tag in proptest::option::of("[a-z0-9]{1,8}"),
        ) {
            let mut image = format!("{host}/{repo}");
            if let Some(tag) = &tag {
                image.push(':');
                image.push_str(tag);
            }
            let reference = ImageReference::parse(&image);
            prop_assert_eq!(reference.registry_host.as_deref(), Some(host.as_str()));
            prop_assert_eq!(reference.status(), ImageStatus::Qualified);
        }

        #[test]
        fn prop_64_lowercase_hex_digest_is_valid(hex in "[0-9a-f]{64}") {
            let reference = ImageReference::parse(&format!("repo/image@sha256:{hex}"));
            prop_assert_eq!(reference.status(), ImageStatus::Unqualified);
        }

        #[test]
        fn prop_wrong_length_digest_is_malformed(hex in "[0-9a-f]{1,63}") {
            let reference = ImageReference::parse(&format!("repo/image@sha256:{hex}"));
            prop_assert_eq!(reference.status(), ImageStatus::Malformed);
        }

        #[test]
        fn prop_parse_never_panics(image in "\\PC{0,40}") {
            let _ = ImageReference::parse(&image).status();
        }
    }
}
