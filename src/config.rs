/// Depth limit applied when depth-limited search is selected without
/// an explicit limit (menu code 4).
pub const DEFAULT_DEPTH_LIMIT: usize = 5;

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub allow_solid_start: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            allow_solid_start: false,
        }
    }
}
