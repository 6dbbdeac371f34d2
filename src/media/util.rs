/// Takes an uploaded filename and returns a cleaned version of it.
///
/// The stem keeps ASCII alphanumerics, dots and dashes, every other run of
/// characters becomes a single underscore. The extension must be ASCII
/// alphanumeric, dashes or underscores, otherwise `None` is returned.
///
/// Examples:
/// "tour.mp4" -> "tour.mp4"
/// "SMU Campus Walk [2023 v2].mp4" -> "SMU_Campus_Walk_2023_v2.mp4"
/// "clip.&%&#^$" -> None
/// "中国人.mp4" -> None
/// "noext" -> "noext"
pub fn clean_filename(original: &str) -> Option<String> {
    if !original.is_ascii() {
        return None;
    }

    let (stem, extension) = match original.rsplit_once('.') {
        Some((stem, extension)) => (stem, Some(extension)),
        None => (original, None),
    };

    if let Some(extension) = extension {
        if extension.is_empty()
            || extension
                .chars()
                .any(|c| !c.is_ascii_alphanumeric() && c != '-' && c != '_')
        {
            return None;
        }
    }

    let clean: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut result = clean.split_whitespace().collect::<Vec<&str>>().join("_");

    // a stem made only of dots would turn into a relative path component
    if result.trim_matches('.').is_empty() {
        return None;
    }

    if let Some(extension) = extension {
        result.push('.');
        result.push_str(extension);
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_good_names() {
        assert_eq!(clean_filename("tour.mp4").as_deref(), Some("tour.mp4"));
        assert_eq!(clean_filename("noext").as_deref(), Some("noext"));
    }

    #[test]
    fn replaces_odd_characters() {
        assert_eq!(
            clean_filename("SMU Campus Walk [2023 v2].mp4").as_deref(),
            Some("SMU_Campus_Walk_2023_v2.mp4")
        );
        assert_eq!(
            clean_filename("walk (1).webm").as_deref(),
            Some("walk_1.webm")
        );
    }

    #[test]
    fn rejects_bad_names() {
        assert_eq!(clean_filename("clip.&%&#^$"), None);
        assert_eq!(clean_filename("中国人.mp4"), None);
        assert_eq!(clean_filename("trailing."), None);
        assert_eq!(clean_filename("...mp4"), None);
        assert_eq!(clean_filename("/.mp4"), None);
    }
}
