//! Sample dictionaries shared by integration tests

pub const EN_US: &str = r#"{
    "greeting": "Hello",
    "welcome": "Hi %{name}",
    "progress": "%{count}%% complete",
    "menu": {
        "file": {
            "open": "Open",
            "recent": {"one": "%{count} recent file", "other": "%{count} recent files"}
        }
    },
    "items": {"zero": "none", "one": "%{count} item", "other": "%{count} items"},
    "messages": {"one": "%{count} message", "other": "%{count} messages"}
}"#;

pub const DE_DE: &str = r#"{
    "greeting": "Hallo",
    "welcome": "Hallo %{name}",
    "menu": {"file": {"open": "Öffnen"}},
    "items": {"zero": "keine", "one": "%{count} Eintrag", "other": "%{count} Einträge"}
}"#;

pub const FR_FR: &str = r#"{
    "greeting": "Bonjour",
    "items": {"one": "%{count} élément", "other": "%{count} éléments"}
}"#;

/// Every sample language with its dictionary
pub fn all_languages() -> Vec<(&'static str, &'static str)> {
    vec![("en-US", EN_US), ("de-DE", DE_DE), ("fr-FR", FR_FR)]
}
