//! Fixed checkpoint locations.
//!
//! The web UI is single-model: the two checkpoint paths are baked in rather than
//! user-configurable, and there is no persisted configuration beyond them.

use std::path::{Path, PathBuf};

/// Acoustic (GPT) checkpoint, relative to the base directory.
pub const ACOUSTIC_MODEL_FILE: &str = "GPT_weights_v2/zudamon_style_1-e15.ckpt";

/// Vocoder (SoVITS) checkpoint, relative to the base directory.
pub const VOCODER_MODEL_FILE: &str = "SoVITS_weights_v2/zudamon_style_1_e8_s96.pth";

/// The pair of checkpoint paths handed to the request handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
    pub acoustic: PathBuf,
    pub vocoder: PathBuf,
}

impl ModelPaths {
    /// Resolve the bundled checkpoint names against `base`.
    pub fn relative_to(base: &Path) -> Self {
        Self {
            acoustic: base.join(ACOUSTIC_MODEL_FILE),
            vocoder: base.join(VOCODER_MODEL_FILE),
        }
    }
}

impl Default for ModelPaths {
    /// The bundled checkpoints, resolved against the working directory.
    fn default() -> Self {
        Self::relative_to(Path::new("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_name_the_bundled_checkpoints() {
        let paths = ModelPaths::default();
        assert!(paths.acoustic.ends_with(ACOUSTIC_MODEL_FILE));
        assert!(paths.vocoder.ends_with(VOCODER_MODEL_FILE));
    }

    #[test]
    fn relative_to_prefixes_the_base_directory() {
        let paths = ModelPaths::relative_to(Path::new("/srv/models"));
        assert_eq!(
            paths.acoustic,
            PathBuf::from("/srv/models").join(ACOUSTIC_MODEL_FILE)
        );
        assert_eq!(
            paths.vocoder,
            PathBuf::from("/srv/models").join(VOCODER_MODEL_FILE)
        );
    }
}
