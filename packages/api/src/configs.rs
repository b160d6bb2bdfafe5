//! Marketplace-configuration editor input handling.
//!
//! Configurations are edited as raw JSON text. Before anything touches the
//! network the text must parse, and the parsed value must have the expected
//! shape (`name`, `fields` with their selector keys, `marketplace_url`).

use serde_json::Value;

use crate::error::Error;
use crate::models::MarketplaceConfig;

/// Parse and structurally validate editor input. Returns the JSON value to
/// submit, or [`Error::MalformedInput`] — in which case the caller must not
/// issue a network call.
pub fn parse_config_input(input: &str) -> Result<Value, Error> {
    let value: Value = serde_json::from_str(input)
        .map_err(|_| Error::MalformedInput("Invalid JSON format".to_string()))?;

    let config: MarketplaceConfig = serde_json::from_value(value.clone())
        .map_err(|err| Error::MalformedInput(format!("Invalid configuration: {err}")))?;
    if config.name.trim().is_empty() {
        return Err(Error::MalformedInput(
            "Invalid configuration: name must not be empty".to_string(),
        ));
    }

    Ok(value)
}

/// Starting point shown in the "new configuration" editor.
pub fn config_template_json() -> String {
    let template = serde_json::json!({
        "name": "",
        "fields": [
            {
                "name": "",
                "html_div_class": "",
                "html_element_in_div_type": "",
                "html_element_in_div_class": [""]
            },
            {
                "name": "",
                "html_div_class": "",
                "html_element_in_div_type": "",
                "html_element_in_div_class": [""]
            }
        ],
        "marketplace_url": [""]
    });
    serde_json::to_string_pretty(&template).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "name": "example-shop",
        "fields": [
            {
                "name": "price",
                "html_div_class": "price-box",
                "html_element_in_div_type": "span",
                "html_element_in_div_class": ["price", "price--current"]
            }
        ],
        "marketplace_url": ["https://example-shop.test"]
    }"#;

    #[test]
    fn accepts_valid_config() {
        let value = parse_config_input(VALID).unwrap();
        assert_eq!(value["name"], "example-shop");
    }

    #[test]
    fn accepts_single_string_marketplace_url() {
        let input = VALID.replace(
            r#"["https://example-shop.test"]"#,
            r#""https://example-shop.test""#,
        );
        assert!(parse_config_input(&input).is_ok());
    }

    #[test]
    fn rejects_unparseable_json() {
        let err = parse_config_input("{not json").unwrap_err();
        assert_eq!(err.user_message("unused"), "Invalid JSON format");
    }

    #[test]
    fn rejects_missing_required_keys() {
        let err = parse_config_input(r#"{"name": "x"}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(ref msg) if msg.starts_with("Invalid configuration")));
    }

    #[test]
    fn rejects_wrongly_typed_field_class_list() {
        let input = VALID.replace(r#"["price", "price--current"]"#, "\"price\"");
        assert!(parse_config_input(&input).is_err());
    }

    #[test]
    fn rejects_empty_name() {
        let input = VALID.replace("example-shop", "  ");
        let err = parse_config_input(&input).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(ref msg) if msg.contains("name")));
    }

    #[test]
    fn template_is_itself_parseable_json() {
        let template = config_template_json();
        let value: serde_json::Value = serde_json::from_str(&template).unwrap();
        assert!(value["fields"].is_array());
    }
}
