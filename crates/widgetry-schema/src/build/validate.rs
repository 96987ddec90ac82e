use crate::{MAX_EVENT_NAME_LEN, MAX_PROPERTY_KEY_LEN, MAX_WIDGET_NAME_LEN};
use convert_case::{Case, Casing};

/// Ensure a widget name is a bounded, ASCII, kebab-case identifier.
pub(crate) fn validate_widget_name(name: &str) -> Result<(), String> {
    validate_ident("widget name", name, MAX_WIDGET_NAME_LEN)?;

    if !name.is_case(Case::Kebab) {
        return Err(format!("widget name '{name}' must be kebab-case"));
    }

    Ok(())
}

/// Ensure a property key is a bounded, ASCII, camelCase identifier.
pub(crate) fn validate_property_key(key: &str) -> Result<(), String> {
    validate_ident("property key", key, MAX_PROPERTY_KEY_LEN)?;

    if !key.is_case(Case::Camel) {
        return Err(format!("property key '{key}' must be camelCase"));
    }

    Ok(())
}

/// Ensure an event name is a bounded, ASCII, camelCase identifier.
pub(crate) fn validate_event_name(name: &str) -> Result<(), String> {
    validate_ident("event name", name, MAX_EVENT_NAME_LEN)?;

    if !name.is_case(Case::Camel) {
        return Err(format!("event name '{name}' must be camelCase"));
    }

    Ok(())
}

/// Ensure a payload field name is a non-empty, ASCII, camelCase identifier.
pub(crate) fn validate_payload_field(field: &str) -> Result<(), String> {
    validate_ident("payload field", field, MAX_PROPERTY_KEY_LEN)?;

    if !field.is_case(Case::Camel) {
        return Err(format!("payload field '{field}' must be camelCase"));
    }

    Ok(())
}

fn validate_ident(what: &str, ident: &str, max_len: usize) -> Result<(), String> {
    if ident.is_empty() {
        return Err(format!("{what} is empty"));
    }
    if ident.len() > max_len {
        return Err(format!("{what} '{ident}' exceeds max length {max_len}"));
    }
    if !ident.is_ascii() {
        return Err(format!("{what} '{ident}' must be ASCII"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_identifiers() {
        assert!(validate_widget_name("").is_err(), "empty widget names should fail");
        assert!(validate_property_key("").is_err(), "empty property keys should fail");
        assert!(validate_event_name("").is_err(), "empty event names should fail");
    }

    #[test]
    fn enforces_case_conventions() {
        assert!(validate_widget_name("phone-input").is_ok());
        assert!(validate_widget_name("PhoneInput").is_err(), "widget names are kebab-case");

        assert!(validate_property_key("focusBorderColor").is_ok());
        assert!(validate_property_key("focus-border-color").is_err());

        assert!(validate_event_name("change").is_ok());
        assert!(validate_payload_field("isValid").is_ok());
    }

    #[test]
    fn enforces_length_and_ascii_bounds() {
        let long = "a".repeat(MAX_PROPERTY_KEY_LEN + 1);
        assert!(validate_property_key(&long).is_err(), "over-long keys should fail");
        assert!(validate_property_key("näppäin").is_err(), "non-ASCII keys should fail");
    }
}
