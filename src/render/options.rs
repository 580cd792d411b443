//! Rendering options configuration.

/// Options for rendering documents.
///
/// The defaults reproduce the editor's Markdown exactly; every option
/// changes the output only when set explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Character for unordered list markers
    pub bullet_marker: char,

    /// Deepest heading level to emit (1-6); `None` leaves levels untouched
    pub max_heading_level: Option<u8>,

    /// Trim leading and trailing whitespace from the final output
    pub trim_output: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bullet_marker: '*',
            max_heading_level: None,
            trim_output: false,
        }
    }
}

impl RenderOptions {
    /// Create new render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unordered list marker.
    pub fn with_bullet_marker(mut self, marker: char) -> Self {
        self.bullet_marker = marker;
        self
    }

    /// Set maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = Some(level.clamp(1, 6));
        self
    }

    /// Trim surrounding whitespace from the output.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim_output = trim;
        self
    }

    /// Apply the heading cap to a decoded level.
    pub(crate) fn heading_level(&self, level: u32) -> u32 {
        match self.max_heading_level {
            Some(max) => level.min(u32::from(max)),
            None => level,
        }
    }

    /// Apply output-wide post-processing.
    pub(crate) fn finish(&self, output: String) -> String {
        if self.trim_output {
            output.trim().to_string()
        } else {
            output
        }
    }
}
