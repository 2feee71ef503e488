//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every projection recompute with its inputs and status.
    pub log_recompute: bool,

    /// Log model switches (slider re-range, bonus reset).
    pub log_model_switch: bool,

    /// Log scroll-reveal transitions as sections become visible.
    pub log_reveal: bool,
}

pub const DF: LogFlags = LogFlags {
    log_recompute: false,
    log_model_switch: true,
    log_reveal: false,
};
