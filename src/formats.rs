use std::path::Path;

/// Input extensions the enhancer picks up from a folder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedExtension {
    Jpg,
    Jpeg,
    Png,
    Bmp,
    Gif,
    Tiff,
}

impl SupportedExtension {
    pub const ALL: [SupportedExtension; 6] = [
        Self::Jpg,
        Self::Jpeg,
        Self::Png,
        Self::Bmp,
        Self::Gif,
        Self::Tiff,
    ];

    /// Parse an extension without the leading dot, ignoring case
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" => Some(Self::Jpg),
            "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "bmp" => Some(Self::Bmp),
            "gif" => Some(Self::Gif),
            "tiff" => Some(Self::Tiff),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Bmp => "bmp",
            Self::Gif => "gif",
            Self::Tiff => "tiff",
        }
    }
}

pub fn is_supported(path: &Path) -> bool {
    SupportedExtension::from_path(path).is_some()
}
