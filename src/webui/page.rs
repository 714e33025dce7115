//! Static page chrome for the rendering layer.

pub const PAGE_TITLE: &str = "Zundamon TTS WebUI";

/// Instructions line shown under the title.
pub const INSTRUCTIONS: &str = "Please follow the steps below to upload a reference \
     audio file, enter text, select the corresponding languages, and then click the \
     **Generate Speech** button.";

/// Section headings, in layout order.
pub const STEP_HEADINGS: [&str; 4] = [
    "Step1 Reference Audio File",
    "Step2 Reference Text",
    "Step3 Target Text",
    "Step4 Language Selection",
];

pub const GENERATE_LABEL: &str = "Generate Speech";
pub const DOWNLOAD_LABEL: &str = "Download Generated Audio";

/// Top-level tabs. Only the TTS tab is functional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Tts,
    OtherFeatures,
}

impl Tab {
    /// Tabs in display order; the first is active by default.
    pub const ALL: [Tab; 2] = [Tab::Tts, Tab::OtherFeatures];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Tts => "TTS",
            Tab::OtherFeatures => "Other Features (Coming Soon)",
        }
    }

    /// Whether the tab has any content behind it.
    pub fn enabled(self) -> bool {
        matches!(self, Tab::Tts)
    }
}
