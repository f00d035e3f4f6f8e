use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The value payload of a single feature flag.
///
/// Flag payloads arrive from heterogeneous host sources, so a value may be
/// a boolean, a number, or a string; the gate only ever asks for
/// truthiness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Number(f64),
    String(String),
}

impl FlagValue {
    /// `false`, `0`, `NaN` and the empty string are falsy; everything else
    /// is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Number(value) => *value != 0.0 && !value.is_nan(),
            Self::String(value) => !value.is_empty(),
        }
    }
}

/// One entry of a flag table. The `value` field may be absent entirely, in
/// which case the flag is falsy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlagEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FlagValue>,
}

impl FlagEntry {
    /// An entry holding `value`.
    #[must_use]
    pub const fn of(value: FlagValue) -> Self {
        Self { value: Some(value) }
    }

    /// Convenience for a plain boolean entry.
    #[must_use]
    pub const fn on(enabled: bool) -> Self {
        Self::of(FlagValue::Bool(enabled))
    }
}

/// A flag table as rendered by the host, keyed by flag name.
pub type FlagTable = FxHashMap<String, FlagEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_matrix() {
        assert!(FlagValue::Bool(true).is_truthy());
        assert!(!FlagValue::Bool(false).is_truthy());
        assert!(FlagValue::Number(1.0).is_truthy());
        assert!(!FlagValue::Number(0.0).is_truthy());
        assert!(!FlagValue::Number(f64::NAN).is_truthy());
        assert!(FlagValue::String("on".to_owned()).is_truthy());
        assert!(!FlagValue::String(String::new()).is_truthy());
    }

    #[test]
    fn entry_deserializes_with_and_without_value() {
        let entry: FlagEntry = serde_json::from_str(r#"{ "value": "rollout" }"#).unwrap();
        assert_eq!(entry, FlagEntry::of(FlagValue::String("rollout".to_owned())));

        let entry: FlagEntry = serde_json::from_str("{}").unwrap();
        assert_eq!(entry, FlagEntry::default());
    }
}
