//! Command-line arguments for the `lingokit` binary

use clap::Parser;

use lingokit::config::I18nConfig;
use lingokit::i18n::ParamValue;
use lingokit::FormatParams;

#[derive(Debug, Parser)]
#[command(
    name = "lingokit",
    about = "Resolve a translation key against a directory of language files",
    version
)]
pub struct Cli {
    /// Translation key; dots separate nested entries
    pub key: String,

    /// Interpolation parameters; a numeric `count` selects plural forms
    #[arg(value_name = "NAME=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, ParamValue)>,

    /// Language to activate, tried before the host locale and the default
    #[arg(long, value_name = "LANGUAGE")]
    pub lang: Option<String>,

    /// Directory holding one `<code>.json` file per language
    #[arg(long, value_name = "DIR")]
    pub resource_dir: Option<String>,
}

impl Cli {
    /// Layer command-line choices over the loaded configuration
    pub fn apply(&self, config: &mut I18nConfig) {
        if let Some(lang) = &self.lang {
            config.preferred_language = Some(lang.clone());
        }
        if let Some(dir) = &self.resource_dir {
            config.resource_dir = dir.clone();
        }
    }

    pub fn format_params(&self) -> FormatParams {
        self.params.iter().cloned().collect()
    }
}

/// Parse one `name=value` argument
fn parse_param(arg: &str) -> Result<(String, ParamValue), String> {
    let Some((name, value)) = arg.split_once('=') else {
        return Err(format!("expected name=value, got '{}'", arg));
    };
    if name.is_empty() {
        return Err(format!("missing parameter name in '{}'", arg));
    }
    Ok((name.to_string(), parse_value(value)))
}

/// Numbers become numeric parameters so they can drive plural selection
fn parse_value(raw: &str) -> ParamValue {
    if let Ok(n) = raw.parse::<i64>() {
        return ParamValue::Integer(n);
    }
    if raw.bytes().any(|b| b.is_ascii_digit()) {
        if let Ok(n) = raw.parse::<f64>() {
            return ParamValue::Float(n);
        }
    }
    ParamValue::Text(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_key_and_params() {
        let cli = Cli::try_parse_from(["lingokit", "items", "count=3", "name=Sam", "ratio=0.5"]).unwrap();
        assert_eq!(cli.key, "items");
        let params = cli.format_params();
        assert_eq!(params.count(), Some(&ParamValue::Integer(3)));
        assert_eq!(params.get("name"), Some(&ParamValue::Text("Sam".into())));
        assert_eq!(params.get("ratio"), Some(&ParamValue::Float(0.5)));
    }

    #[test]
    fn test_value_may_contain_equals() {
        let cli = Cli::try_parse_from(["lingokit", "greeting", "expr=a=b"]).unwrap();
        assert_eq!(cli.format_params().get("expr"), Some(&ParamValue::Text("a=b".into())));
    }

    #[test]
    fn test_non_numeric_words_stay_text() {
        assert_eq!(parse_value("inf"), ParamValue::Text("inf".into()));
        assert_eq!(parse_value("NaN"), ParamValue::Text("NaN".into()));
        assert_eq!(parse_value("-4"), ParamValue::Integer(-4));
    }

    #[test]
    fn test_rejects_malformed_params() {
        assert!(Cli::try_parse_from(["lingokit", "greeting", "count"]).is_err());
        assert!(Cli::try_parse_from(["lingokit", "greeting", "=3"]).is_err());
    }

    #[test]
    fn test_options_are_not_params() {
        let cli = Cli::try_parse_from(["lingokit", "greeting", "--lang=de-DE", "--resource-dir", "tr"]).unwrap();
        assert!(cli.params.is_empty());
        assert_eq!(cli.lang.as_deref(), Some("de-DE"));

        let mut config = I18nConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.preferred_language.as_deref(), Some("de-DE"));
        assert_eq!(config.resource_dir, "tr");
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["lingokit", "greeting", "--bogus"]).is_err());
    }

    #[test]
    fn test_key_is_required() {
        assert!(Cli::try_parse_from(["lingokit"]).is_err());
    }
}
