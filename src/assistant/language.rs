/// A language offered on the picker screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

pub const LANGUAGES: [Language; 4] = [
    Language { code: "en", name: "English", native_name: "English" },
    Language { code: "hi", name: "Hindi", native_name: "हिंदी" },
    Language { code: "te", name: "Telugu", native_name: "తెలుగు" },
    Language { code: "or", name: "Odia", native_name: "ଓଡିଆ" },
];

pub const DEFAULT_LANGUAGE: &str = "en";

pub fn find(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.code == code)
}

/// Header label for a code: the native name, or the raw code when unknown.
pub fn display_label(code: &str) -> &str {
    match find(code) {
        Some(lang) => lang.native_name,
        None => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_show_native_name() {
        assert_eq!(display_label("hi"), "हिंदी");
        assert_eq!(display_label("en"), "English");
    }

    #[test]
    fn unknown_code_falls_back_to_raw_code() {
        assert_eq!(display_label("fr"), "fr");
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn default_language_is_listed() {
        assert!(find(DEFAULT_LANGUAGE).is_some());
    }
}
