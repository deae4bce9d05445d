use refine_core::{CheckKind, ColumnCheck};

use crate::errors::CliError;
use crate::parser::{ColumnConfig, Config};

/// Turn a parsed config into the declarative schema the core applies.
pub fn construct_schema(config: &Config) -> Result<Vec<ColumnCheck>, CliError> {
    if config.column.is_empty() {
        return Err(CliError::EmptyConfig);
    }
    config.column.iter().map(construct_check).collect()
}

fn construct_check(column: &ColumnConfig) -> Result<ColumnCheck, CliError> {
    let kind = match column.check.as_str() {
        "integer" => CheckKind::IntegerRange {
            min: column.min,
            max: column.max,
            include_x: column.include_x,
        },
        "one_of" => {
            let values = column.values.clone().ok_or_else(|| CliError::MissingField {
                check: column.check.clone(),
                column_name: column.name.clone(),
                field: "values".to_string(),
            })?;
            CheckKind::OneOf { values }
        }
        "pattern" => {
            let pattern = column
                .pattern
                .clone()
                .ok_or_else(|| CliError::MissingField {
                    check: column.check.clone(),
                    column_name: column.name.clone(),
                    field: "pattern".to_string(),
                })?;
            CheckKind::Pattern { pattern }
        }
        other => {
            return Err(CliError::UnknownCheck {
                check: other.to_string(),
                column_name: column.name.clone(),
            });
        }
    };
    Ok(ColumnCheck {
        column: column.name.clone(),
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, check: &str) -> ColumnConfig {
        ColumnConfig {
            name: name.to_string(),
            check: check.to_string(),
            min: None,
            max: None,
            include_x: false,
            values: None,
            pattern: None,
        }
    }

    #[test]
    fn test_construct_integer_check() {
        let mut cfg = column("Sex", "integer");
        cfg.min = Some(1);
        cfg.max = Some(2);
        let check = construct_check(&cfg).unwrap();
        assert_eq!(
            check.kind,
            CheckKind::IntegerRange {
                min: Some(1),
                max: Some(2),
                include_x: false
            }
        );
    }

    #[test]
    fn test_construct_unknown_check() {
        let cfg = column("Sex", "float");
        let err = construct_check(&cfg).unwrap_err();
        assert!(matches!(err, CliError::UnknownCheck { .. }));
    }

    #[test]
    fn test_one_of_requires_values() {
        let cfg = column("Residence_Type", "one_of");
        let err = construct_check(&cfg).unwrap_err();
        assert!(matches!(err, CliError::MissingField { ref field, .. } if field == "values"));
    }

    #[test]
    fn test_pattern_requires_pattern() {
        let cfg = column("Region", "pattern");
        let err = construct_check(&cfg).unwrap_err();
        assert!(matches!(err, CliError::MissingField { ref field, .. } if field == "pattern"));
    }

    #[test]
    fn test_empty_config_rejected() {
        let config = Config { column: vec![] };
        assert!(matches!(
            construct_schema(&config),
            Err(CliError::EmptyConfig)
        ));
    }
}
