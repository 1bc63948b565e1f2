//! Dump configuration

/// Default limit for nested constructed units
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options that control how a stream is walked and printed
///
/// # Usage Example
///
/// ```rust
/// use asn1dump::DumpConfig;
///
/// let config = DumpConfig::new()
///     .with_context_mode(true)
///     .with_start_offset(16);
/// assert!(config.context_mode);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpConfig {
    /// Interpret primitive non-universal content as a nested unit
    pub context_mode: bool,
    /// Render string content as hex pairs only
    pub hex_strings: bool,
    /// Prefix every line with the current stream offset
    pub print_offsets: bool,
    /// Absolute offset the walk starts at
    pub start_offset: u64,
    /// Maximum number of open constructed units
    pub max_depth: usize,
    /// Let End-Of-Contents close every enclosing unit up to the top level
    pub eoc_cascade: bool,
}

impl DumpConfig {
    /// Create a configuration with all options disabled
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context_mode(mut self, enabled: bool) -> Self {
        self.context_mode = enabled;
        self
    }

    pub fn with_hex_strings(mut self, enabled: bool) -> Self {
        self.hex_strings = enabled;
        self
    }

    pub fn with_print_offsets(mut self, enabled: bool) -> Self {
        self.print_offsets = enabled;
        self
    }

    pub fn with_start_offset(mut self, offset: u64) -> Self {
        self.start_offset = offset;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_eoc_cascade(mut self, enabled: bool) -> Self {
        self.eoc_cascade = enabled;
        self
    }
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            context_mode: false,
            hex_strings: false,
            print_offsets: false,
            start_offset: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            eoc_cascade: false,
        }
    }
}
