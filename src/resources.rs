//! Asset registry
//!
//! Built once at startup and shared read-only with the scenes and the
//! renderer. Decoding is the host's job; this layer only names the assets,
//! checks that their bytes look right, and hands out typed handles.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::ResourceError;

pub const SPLASH_IMAGE: &str = "splash_1920x1080_black.png";
pub const FONT: &str = "spaceage.otf";
pub const BG_SHADER: &str = "bg.kage";

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Where raw asset bytes come from
pub trait AssetSource {
    fn read(&self, name: &'static str) -> Result<Vec<u8>, ResourceError>;
}

/// Assets in a directory on disk
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirSource {
    fn read(&self, name: &'static str) -> Result<Vec<u8>, ResourceError> {
        let path = self.root.join(name);
        std::fs::read(&path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => ResourceError::Missing(name),
            _ => ResourceError::Io { name, source },
        })
    }
}

/// Assets held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<&'static str, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, bytes: impl Into<Vec<u8>>) -> Self {
        self.files.insert(name, bytes.into());
        self
    }
}

impl AssetSource for MemorySource {
    fn read(&self, name: &'static str) -> Result<Vec<u8>, ResourceError> {
        self.files
            .get(name)
            .cloned()
            .ok_or(ResourceError::Missing(name))
    }
}

/// Font face sizes used by the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    /// Logo and countdown, 144 px
    Big,
    /// Gauges, prompts and the record panel, 108 px
    Small,
}

impl FontFace {
    pub fn size(self) -> f32 {
        match self {
            FontFace::Big => 144.0,
            FontFace::Small => 108.0,
        }
    }
}

/// Opaque handle to an image known to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub &'static str);

/// Opaque handle to a shader known to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub &'static str);

/// Immutable registry of every asset the game draws with
#[derive(Debug, Clone)]
pub struct Resources {
    pub splash: ImageHandle,
    pub bg_shader: ShaderHandle,
    verified: bool,
}

impl Resources {
    /// Manifest only; nothing is read
    pub fn builtin() -> Self {
        Self {
            splash: ImageHandle(SPLASH_IMAGE),
            bg_shader: ShaderHandle(BG_SHADER),
            verified: false,
        }
    }

    /// Read and sanity-check every asset from `source`
    pub fn load(source: &dyn AssetSource) -> Result<Self, ResourceError> {
        let splash = source.read(SPLASH_IMAGE)?;
        if !splash.starts_with(&PNG_SIGNATURE) {
            return Err(ResourceError::Invalid {
                name: SPLASH_IMAGE,
                reason: "not a PNG file".into(),
            });
        }

        let font = source.read(FONT)?;
        let is_otf = font.starts_with(b"OTTO") || font.starts_with(&[0x00, 0x01, 0x00, 0x00]);
        if !is_otf {
            return Err(ResourceError::Invalid {
                name: FONT,
                reason: "not an OpenType/TrueType font".into(),
            });
        }

        let shader = source.read(BG_SHADER)?;
        match std::str::from_utf8(&shader) {
            Ok(src) if !src.trim().is_empty() => {}
            Ok(_) => {
                return Err(ResourceError::Invalid {
                    name: BG_SHADER,
                    reason: "empty shader source".into(),
                });
            }
            Err(e) => {
                return Err(ResourceError::Invalid {
                    name: BG_SHADER,
                    reason: e.to_string(),
                });
            }
        }

        log::info!(
            "Loaded assets: splash {} bytes, font {} bytes, shader {} bytes",
            splash.len(),
            font.len(),
            shader.len()
        );
        Ok(Self {
            verified: true,
            ..Self::builtin()
        })
    }

    /// Whether the bytes behind the handles were checked
    pub fn is_verified(&self) -> bool {
        self.verified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good_source() -> MemorySource {
        let mut png = PNG_SIGNATURE.to_vec();
        png.extend_from_slice(&[0; 16]);
        MemorySource::new()
            .with(SPLASH_IMAGE, png)
            .with(FONT, b"OTTO\0\0\0\0".to_vec())
            .with(BG_SHADER, "package main\n")
    }

    #[test]
    fn test_load_valid_assets() {
        let res = Resources::load(&good_source()).unwrap();
        assert!(res.is_verified());
        assert_eq!(res.splash, ImageHandle(SPLASH_IMAGE));
    }

    #[test]
    fn test_missing_asset() {
        let source = MemorySource::new().with(SPLASH_IMAGE, PNG_SIGNATURE.to_vec());
        assert!(matches!(
            Resources::load(&source),
            Err(ResourceError::Missing(FONT))
        ));
    }

    #[test]
    fn test_invalid_image() {
        let source = good_source().with(SPLASH_IMAGE, b"GIF89a".to_vec());
        assert!(matches!(
            Resources::load(&source),
            Err(ResourceError::Invalid { name: SPLASH_IMAGE, .. })
        ));
    }

    #[test]
    fn test_empty_shader() {
        let source = good_source().with(BG_SHADER, "   ");
        assert!(Resources::load(&source).is_err());
    }

    #[test]
    fn test_dir_source_missing_file() {
        let source = DirSource::new("/nonexistent-asset-dir");
        assert!(matches!(
            source.read(FONT),
            Err(ResourceError::Missing(FONT))
        ));
    }

    #[test]
    fn test_builtin_is_unverified() {
        assert!(!Resources::builtin().is_verified());
        assert_eq!(FontFace::Small.size(), 108.0);
    }
}
