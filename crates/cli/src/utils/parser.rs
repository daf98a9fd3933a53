use nunit_runner_core::OptionValue;

/// Parses a `-o KEY[=VALUE]` argument into a switch entry.
///
/// A bare key is a boolean switch. Value literals are inferred:
/// `true`/`false` become flags, numbers stay numeric, a comma-separated
/// literal becomes a list, anything else is text.
pub fn parse_option_arg(arg: &str) -> (String, OptionValue) {
    match arg.split_once('=') {
        None => (arg.to_string(), OptionValue::Flag(true)),
        Some((key, value)) => (key.to_string(), parse_value(value)),
    }
}

fn parse_value(value: &str) -> OptionValue {
    match value {
        "true" => return OptionValue::Flag(true),
        "false" => return OptionValue::Flag(false),
        _ => {}
    }
    if let Ok(int) = value.parse::<i64>() {
        return OptionValue::Number(int.into());
    }
    if let Ok(float) = value.parse::<f64>() {
        if let Some(number) = serde_json::Number::from_f64(float) {
            return OptionValue::Number(number);
        }
    }
    if value.contains(',') {
        return OptionValue::List(value.split(',').map(str::to_string).collect());
    }
    OptionValue::Text(value.to_string())
}
