//! Turns the option map and target list into the runner's argument vector.

use std::path::PathBuf;

use crate::config::RunConfig;
use crate::types::{HostOs, OptionValue};

/// Builds the full argument vector: one token per surviving switch, in
/// options insertion order, followed by the target assemblies in input
/// order. Never fails; target validation is the orchestrator's job.
pub fn build_arguments(config: &RunConfig, assemblies: &[PathBuf], host: HostOs) -> Vec<String> {
    let prefix = host.switch_prefix();

    let mut args: Vec<String> = config
        .options
        .iter()
        .filter_map(|(key, value)| format_switch(prefix, key, value))
        .collect();

    args.extend(assemblies.iter().map(|path| path.display().to_string()));
    args
}

fn format_switch(prefix: char, key: &str, value: &OptionValue) -> Option<String> {
    match value {
        OptionValue::Flag(true) => Some(format!("{prefix}{key}")),
        OptionValue::Flag(false) => None,
        // The `where` value is an NUnit filter expression and must pass
        // through unescaped, embedded spaces and all. Known limitation:
        // nothing here guards against shell-ambiguous characters.
        OptionValue::Text(text) if key == "where" => Some(format!("{prefix}{key}:{text}")),
        OptionValue::Text(text) => {
            if text.trim().contains(' ') {
                Some(format!("{prefix}{key}:\"{text}\""))
            } else {
                Some(format!("{prefix}{key}:{text}"))
            }
        }
        OptionValue::Number(number) => Some(format!("{prefix}{key}:{number}")),
        OptionValue::List(values) => Some(format!("{prefix}{key}:{}", values.join(","))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;

    fn targets(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn no_options_yields_targets_only() {
        let config = RunConfig::default();
        let args = build_arguments(
            &config,
            &targets(&["First.Test.dll", "Second.Test.dll"]),
            HostOs::Unix,
        );
        assert_eq!(args, vec!["First.Test.dll", "Second.Test.dll"]);
    }

    #[test]
    fn switches_precede_targets_in_insertion_order() {
        let mut config = RunConfig::default();
        config.options.insert("nologo", true);
        config.options.insert("config", "Release");
        config.options.insert("transform", "x.xslt");

        let args = build_arguments(
            &config,
            &targets(&["First.Test.dll", "Second.Test.dll"]),
            HostOs::Unix,
        );
        assert_eq!(
            args,
            vec![
                "-nologo",
                "-config:Release",
                "-transform:x.xslt",
                "First.Test.dll",
                "Second.Test.dll"
            ]
        );
    }

    #[test]
    fn windows_host_uses_slash_prefix() {
        let mut config = RunConfig::default();
        config.options.insert("nologo", true);
        config.options.insert("config", "Release");

        let args = build_arguments(&config, &targets(&["First.Test.dll"]), HostOs::Windows);
        assert_eq!(args, vec!["/nologo", "/config:Release", "First.Test.dll"]);
    }

    #[test]
    fn false_flag_is_omitted_without_disturbing_order() {
        let mut config = RunConfig::default();
        config.options.insert("nologo", true);
        config.options.insert("labels", false);
        config.options.insert("config", "Release");

        let args = build_arguments(&config, &[], HostOs::Unix);
        assert_eq!(args, vec!["-nologo", "-config:Release"]);
    }

    #[test]
    fn string_with_embedded_space_is_quoted() {
        let mut config = RunConfig::default();
        config.options.insert("transform", "my transform.xslt");

        let args = build_arguments(&config, &[], HostOs::Unix);
        assert_eq!(args, vec!["-transform:\"my transform.xslt\""]);
    }

    #[test]
    fn surrounding_whitespace_alone_does_not_trigger_quoting() {
        // Only an internal space in the trimmed value counts; the original
        // value still lands in the token untouched.
        let mut config = RunConfig::default();
        config.options.insert("config", " Release ");

        let args = build_arguments(&config, &[], HostOs::Unix);
        assert_eq!(args, vec!["-config: Release "]);
    }

    #[test]
    fn where_filter_passes_through_unquoted() {
        let mut config = RunConfig::default();
        config.options.insert("where", "cat != critical");

        let args = build_arguments(&config, &[], HostOs::Unix);
        assert_eq!(args, vec!["-where:cat != critical"]);
    }

    #[test]
    fn list_value_is_comma_joined() {
        let mut config = RunConfig::default();
        config
            .options
            .insert("exclude", vec!["Acceptance".to_string(), "Integration".to_string()]);

        let args = build_arguments(&config, &[], HostOs::Unix);
        assert_eq!(args, vec!["-exclude:Acceptance,Integration"]);
    }

    #[test]
    fn number_value_formats_in_decimal() {
        let mut config = RunConfig::default();
        config.options.insert("timeout", 123i64);

        let args = build_arguments(&config, &[], HostOs::Unix);
        assert_eq!(args, vec!["-timeout:123"]);
    }
}
