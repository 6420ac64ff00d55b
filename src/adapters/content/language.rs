//! Language tag fallback shared by the content stores.

/// Lookup candidates for a requested language, most specific first.
///
/// `"es-MX"` yields `["es-mx", "es"]`. A blank or absent tag yields nothing,
/// which means the default-language content.
pub fn language_candidates(language: Option<&str>) -> Vec<String> {
    let Some(tag) = language.map(|l| l.trim().to_ascii_lowercase().replace('_', "-")) else {
        return Vec::new();
    };
    if tag.is_empty() {
        return Vec::new();
    }
    let mut candidates = vec![tag.clone()];
    if let Some((primary, _)) = tag.split_once('-') {
        if !primary.is_empty() {
            candidates.push(primary.to_string());
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_subtag_falls_back_to_primary() {
        assert_eq!(language_candidates(Some("es_MX")), vec!["es-mx", "es"]);
    }

    #[test]
    fn plain_tag_is_its_own_candidate() {
        assert_eq!(language_candidates(Some(" EN ")), vec!["en"]);
    }

    #[test]
    fn blank_or_missing_tag_means_default() {
        assert!(language_candidates(None).is_empty());
        assert!(language_candidates(Some("  ")).is_empty());
    }
}
