//! JSON export for the external generator.

use anyhow::{Context, Result};
use std::fs;

use crate::cli::ShowArgs;
use crate::config::SiteConfig;
use crate::export::SiteExport;
use crate::{debug, log};

pub fn run_show(args: &ShowArgs, config: &SiteConfig) -> Result<()> {
    let export = SiteExport::from_config(config);

    let json = match &args.fields {
        None => export.to_json(args.pretty)?,
        Some(fields) => {
            let value = filter_fields(serde_json::to_value(&export)?, fields);
            if args.pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            }
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            debug!("show"; "wrote export to '{}'", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Keep only the requested top-level fields, preserving their order.
fn filter_fields(mut value: serde_json::Value, fields: &[String]) -> serde_json::Value {
    if let serde_json::Value::Object(map) = &mut value {
        for field in fields {
            if !map.contains_key(field) {
                log!("warning"; "unknown field '{}' requested", field);
            }
        }
        map.retain(|key, _| fields.iter().any(|f| f == key));
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_filter_fields_keeps_declaration_order() {
        let config = test_parse_config("");
        let export = SiteExport::from_config_at(&config, 2024);
        let value = serde_json::to_value(&export).unwrap();

        let filtered = filter_fields(
            value,
            &["copyright".to_string(), "title".to_string()],
        );
        let map = filtered.as_object().unwrap();

        // preserve_order keeps serialization order, not request order
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["title", "copyright"]);
    }

    #[test]
    fn test_filter_fields_unknown_field_yields_empty() {
        let config = test_parse_config("");
        let export = SiteExport::from_config_at(&config, 2024);
        let value = serde_json::to_value(&export).unwrap();

        let filtered = filter_fields(value, &["nope".to_string()]);
        assert!(filtered.as_object().unwrap().is_empty());
    }
}
