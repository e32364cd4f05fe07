use super::types::ConfigOption;

/// First dot-separated segment of a dotted name.
fn first_segment(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

/// Shared first segment of every option name, if there is one.
///
/// Needs at least two options; a single option never has a common prefix.
pub fn common_prefix(options: &[ConfigOption]) -> Option<&str> {
    if options.len() < 2 {
        return None;
    }

    let prefix = first_segment(&options[0].name);
    options
        .iter()
        .all(|o| first_segment(&o.name) == prefix)
        .then_some(prefix)
}

/// Strip the common first segment (and its dot) from every option name.
///
/// Names that are exactly the prefix, or the prefix plus a trailing dot, are
/// kept as they are. Order is preserved.
pub fn strip_common_prefix(mut options: Vec<ConfigOption>) -> Vec<ConfigOption> {
    // Prefix plus the separating dot.
    let Some(prefix_len) = common_prefix(&options).map(|prefix| prefix.len() + 1) else {
        return options;
    };

    for option in &mut options {
        if option.name.len() > prefix_len {
            option.name.replace_range(..prefix_len, "");
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(names: &[&str]) -> Vec<ConfigOption> {
        names
            .iter()
            .map(|name| ConfigOption::new(*name, "v", ""))
            .collect()
    }

    fn names(options: &[ConfigOption]) -> Vec<&str> {
        options.iter().map(|o| o.name.as_str()).collect()
    }

    #[test]
    fn test_common_prefix_found() {
        let options = named(&["carousel.speed", "carousel.loop"]);
        assert_eq!(common_prefix(&options), Some("carousel"));
    }

    #[test]
    fn test_common_prefix_requires_two_options() {
        assert_eq!(common_prefix(&named(&["wrapper.slides"])), None);
        assert_eq!(common_prefix(&[]), None);
    }

    #[test]
    fn test_common_prefix_differs() {
        let options = named(&["carousel.speed", "grid.columns"]);
        assert_eq!(common_prefix(&options), None);
    }

    #[test]
    fn test_strip_common_prefix() {
        let stripped = strip_common_prefix(named(&["carousel.speed", "carousel.loop"]));
        assert_eq!(names(&stripped), vec!["speed", "loop"]);
    }

    #[test]
    fn test_strip_keeps_deeper_segments() {
        let stripped = strip_common_prefix(named(&[
            "slider.autoplay.enabled",
            "slider.autoplay.delay",
            "slider.loop",
        ]));
        assert_eq!(
            names(&stripped),
            vec!["autoplay.enabled", "autoplay.delay", "loop"]
        );
    }

    #[test]
    fn test_strip_single_option_unchanged() {
        let stripped = strip_common_prefix(named(&["wrapper.slides"]));
        assert_eq!(names(&stripped), vec!["wrapper.slides"]);
    }

    #[test]
    fn test_strip_different_prefixes_unchanged() {
        let original = named(&["carousel.speed", "grid.columns", "carousel.loop"]);
        let stripped = strip_common_prefix(original.clone());
        assert_eq!(stripped, original);
    }

    #[test]
    fn test_strip_leaves_bare_prefix_name() {
        let stripped = strip_common_prefix(named(&["slider", "slider.loop", "slider."]));
        assert_eq!(names(&stripped), vec!["slider", "loop", "slider."]);
    }

    #[test]
    fn test_strip_preserves_values_and_comments() {
        let options = vec![
            ConfigOption::new("carousel.speed", "300", "ms"),
            ConfigOption::new("carousel.loop", "true", ""),
        ];
        let stripped = strip_common_prefix(options);
        assert_eq!(
            stripped,
            vec![
                ConfigOption::new("speed", "300", "ms"),
                ConfigOption::new("loop", "true", ""),
            ]
        );
    }

    #[test]
    fn test_strip_is_idempotent() {
        let once = strip_common_prefix(named(&["carousel.speed", "carousel.loop"]));
        let twice = strip_common_prefix(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_strip_top_level_names_without_dots() {
        // Identical bare names share a "prefix" but nothing is longer than it.
        let stripped = strip_common_prefix(named(&["speed", "speed"]));
        assert_eq!(names(&stripped), vec!["speed", "speed"]);
    }
}
