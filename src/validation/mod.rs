use crate::models::{CharacterClass, GenerationConfig};

// A required class passes when at least one character of it is present.
// Classes that are not required always pass.
fn class_satisfied(class: CharacterClass, config: &GenerationConfig, candidate: &str) -> bool {
    !config.is_enabled(class) || candidate.chars().any(|c| class.matches(c, config))
}

/// Returns true when every class enabled in `config` appears in `candidate`.
pub fn is_valid(config: &GenerationConfig, candidate: &str) -> bool {
    CharacterClass::ALL
        .into_iter()
        .all(|class| class_satisfied(class, config, candidate))
}

/// Required classes that `candidate` does not contain, in pool order.
pub fn missing_classes(config: &GenerationConfig, candidate: &str) -> Vec<CharacterClass> {
    CharacterClass::ALL
        .into_iter()
        .filter(|class| !class_satisfied(*class, config, candidate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_classes() -> GenerationConfig {
        GenerationConfig::default().with_class(CharacterClass::Space, true)
    }

    #[test]
    fn disabled_classes_pass_vacuously() {
        let config = GenerationConfig::empty(10);
        assert!(is_valid(&config, ""));
        assert!(is_valid(&config, "anything"));
        assert!(missing_classes(&config, "").is_empty());
    }

    #[test]
    fn each_required_class_is_checked() {
        let config = all_classes();
        assert!(is_valid(&config, "aB3! "));
        assert!(!is_valid(&config, "B3! "));
        assert!(!is_valid(&config, "a3! "));
        assert!(!is_valid(&config, "aB! "));
        assert!(!is_valid(&config, "aB3 "));
        assert!(!is_valid(&config, "aB3!"));
    }

    #[test]
    fn missing_classes_lists_gaps_in_order() {
        let config = all_classes();
        assert_eq!(
            missing_classes(&config, "abc"),
            vec![
                CharacterClass::Uppercase,
                CharacterClass::Numeric,
                CharacterClass::Special,
                CharacterClass::Space,
            ]
        );
    }

    #[test]
    fn backslash_counts_as_special() {
        let config = GenerationConfig::empty(10).with_class(CharacterClass::Special, true);
        assert!(is_valid(&config, r"abc\def"));
        assert!(!is_valid(&config, "abc^def"));
    }

    #[test]
    fn unicode_letters_are_not_lowercase() {
        let config = GenerationConfig::empty(10).with_class(CharacterClass::Lowercase, true);
        assert!(!is_valid(&config, "ÄÖÜ éè"));
    }

    #[test]
    fn validation_is_pure() {
        let config = GenerationConfig::default();
        let candidate = "Passw0rd!";
        let first = is_valid(&config, candidate);
        assert_eq!(first, is_valid(&config, candidate));
        assert!(first);
    }
}
