// src/config/options.rs

/// What to do when the page has no "CPU" column
/// (httpd built without `HAVE_TIMES`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimesPolicy {
    /// Refuse the page.
    Require,
    /// Accept it and leave `cpu` out of every record.
    Optional,
}

impl Default for TimesPolicy {
    fn default() -> Self {
        TimesPolicy::Require
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputStyle {
    Pretty,
    Compact,
}

impl Default for OutputStyle {
    fn default() -> Self {
        OutputStyle::Pretty
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub times: TimesPolicy,
    pub output: OutputStyle,
}
