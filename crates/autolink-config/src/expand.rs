//! `${VAR}` and `${VAR:-default}` expansion for link settings.

use std::env::VarError;

use crate::ConfigError;

/// Expand variable references in an optional field, in place.
///
/// Only values containing `${` are expanded, so a bare `$` in a URL base is
/// kept literally. An unset variable without a default is an error.
pub(crate) fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    let Some(raw) = value.as_deref().filter(|raw| raw.contains("${")) else {
        return Ok(());
    };

    let expanded = shellexpand::env(raw).map_err(|e| {
        let reason = match e.cause {
            VarError::NotPresent => "not set",
            VarError::NotUnicode(_) => "is not valid unicode",
        };
        ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} {reason}", e.var_name),
        }
    })?;
    *value = Some(expanded.into_owned());
    Ok(())
}
