/// What to do with a held value whose kind the sink does not accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkPolicy {
    /// Fail with `OmitError::UnsupportedKind`.
    #[default]
    Strict,

    /// Hand the value to the sink as `Value::Json`.
    Passthrough,
}

/// Conversion configuration
///
/// Controls how values are handed to a SQL sink.
#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    /// Policy for kinds outside the sink's allow-list
    pub sink_policy: SinkPolicy,
}

impl ConvertConfig {
    /// Create the default (strict) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sink policy
    pub fn sink_policy(mut self, policy: SinkPolicy) -> Self {
        self.sink_policy = policy;
        self
    }

    /// Shorthand for `sink_policy(SinkPolicy::Passthrough)`
    pub fn passthrough(self) -> Self {
        self.sink_policy(SinkPolicy::Passthrough)
    }

    pub fn is_strict(&self) -> bool {
        self.sink_policy == SinkPolicy::Strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert!(ConvertConfig::new().is_strict());
        assert_eq!(ConvertConfig::default().sink_policy, SinkPolicy::Strict);
    }

    #[test]
    fn test_builder() {
        let config = ConvertConfig::new().passthrough();
        assert_eq!(config.sink_policy, SinkPolicy::Passthrough);
        assert!(!config.is_strict());
    }
}
