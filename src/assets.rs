//! Static assets: the window icon and its fallback.
//!
//! The icon comes from the offline cache when `UNIVERSE_ASSET_ORIGIN` is set,
//! otherwise from `assets/` on disk. Any failure is logged and replaced by a
//! generated placeholder so startup never depends on an asset.

use std::path::Path;

use crate::net::{Fetch, HttpFetcher, OfflineCache, Request};

pub const ICON_PATH: &str = "/icon-192.png";
pub const LOCAL_ICON: &str = "assets/icon-192.png";
pub const ORIGIN_ENV: &str = "UNIVERSE_ASSET_ORIGIN";

const PLACEHOLDER_SIZE: u32 = 64;

/// Decoded image data (RGBA).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct AssetError {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl std::error::Error for AssetError {}

pub fn decode_png(path: &str, bytes: &[u8]) -> Result<ImageData, AssetError> {
    let img = image::load_from_memory(bytes).map_err(|e| AssetError {
        path: path.to_string(),
        message: format!("Decode failed: {}", e),
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

pub fn load_file(path: &Path) -> Result<ImageData, AssetError> {
    let shown = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|e| AssetError {
        path: shown.clone(),
        message: format!("Read failed: {}", e),
    })?;
    decode_png(&shown, &bytes)
}

/// Fetch the icon through an installed, activated offline cache.
pub fn fetch_icon<F: Fetch>(cache: &mut OfflineCache<F>) -> Result<ImageData, AssetError> {
    let url = cache.origin().join(ICON_PATH).map_err(|e| AssetError {
        path: ICON_PATH.to_string(),
        message: format!("Invalid URL: {}", e),
    })?;
    let shown = url.to_string();
    let response = match cache.handle(&Request::get(url)) {
        Some(Ok(r)) => r,
        Some(Err(e)) => {
            return Err(AssetError {
                path: shown,
                message: e.message,
            })
        }
        None => {
            return Err(AssetError {
                path: shown,
                message: "not served by the offline cache".to_string(),
            })
        }
    };
    if !response.is_ok() {
        return Err(AssetError {
            path: shown,
            message: format!("HTTP {}", response.status),
        });
    }
    decode_png(&shown, &response.body)
}

fn load_from_origin(origin: &str) -> Result<ImageData, AssetError> {
    let to_asset_error = |e: crate::net::FetchError| AssetError {
        path: origin.to_string(),
        message: e.message,
    };
    let origin_url = crate::net::fetch::parse_origin(origin).map_err(to_asset_error)?;
    let fetcher = HttpFetcher::new().map_err(to_asset_error)?;
    let mut cache = OfflineCache::new(origin_url, fetcher);
    if let Err(e) = cache.install() {
        log::warn!("offline cache install failed: {}", e);
    }
    cache.activate();
    fetch_icon(&mut cache)
}

/// Dark disc with a soft pink core: recognisable at any icon size.
pub fn placeholder(size: u32) -> ImageData {
    let size = size.max(1);
    let c = (size as f32 - 1.0) * 0.5;
    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let dx = (x as f32 - c) / (c + 0.5);
            let dy = (y as f32 - c) / (c + 0.5);
            let r = (dx * dx + dy * dy).sqrt();
            let glow = (1.0 - r * 2.5).clamp(0.0, 1.0);
            let alpha = if r <= 1.0 { 255 } else { 0 };
            rgba.extend_from_slice(&[
                (10.0 + 245.0 * glow) as u8,
                (10.0 + 95.0 * glow) as u8,
                (30.0 + 150.0 * glow) as u8,
                alpha,
            ]);
        }
    }
    ImageData {
        width: size,
        height: size,
        rgba,
    }
}

/// Window icon, never failing.
pub fn load_icon_or_placeholder() -> ImageData {
    let loaded = match std::env::var(ORIGIN_ENV) {
        Ok(origin) if !origin.is_empty() => load_from_origin(&origin),
        _ => load_file(Path::new(LOCAL_ICON)),
    };
    match loaded {
        Ok(icon) => {
            log::debug!("icon loaded ({}x{})", icon.width, icon.height);
            icon
        }
        Err(e) => {
            log::warn!("icon unavailable, using placeholder: {}", e);
            placeholder(PLACEHOLDER_SIZE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::{FetchError, Response};
    use url::Url;

    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(w, h, image::Rgba([255, 105, 180, 255]));
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    struct PngServer;

    impl Fetch for PngServer {
        fn fetch(&self, url: &Url) -> Result<Response, FetchError> {
            let status = if url.path() == ICON_PATH { 200 } else { 404 };
            Ok(Response {
                url: url.to_string(),
                status,
                content_type: "image/png".to_string(),
                body: png_bytes(4, 3),
            })
        }
    }

    #[test]
    fn decodes_png() {
        let icon = decode_png("mem", &png_bytes(4, 3)).unwrap();
        assert_eq!((icon.width, icon.height), (4, 3));
        assert_eq!(icon.rgba.len(), 4 * 3 * 4);
        assert_eq!(&icon.rgba[..4], &[255, 105, 180, 255]);
    }

    #[test]
    fn garbage_is_an_asset_error() {
        let err = decode_png("icon.png", b"not a png").unwrap_err();
        assert_eq!(err.path, "icon.png");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_file(Path::new("does/not/exist.png")).unwrap_err();
        assert!(err.to_string().contains("exist.png"));
    }

    #[test]
    fn icon_comes_through_the_cache() {
        let origin = Url::parse("https://universe.example/").unwrap();
        let mut cache = OfflineCache::new(origin, PngServer);
        let icon = fetch_icon(&mut cache).unwrap();
        assert_eq!(icon.width, 4);
        assert!(cache
            .cached(&Url::parse("https://universe.example/icon-192.png").unwrap())
            .is_some());
    }

    #[test]
    fn placeholder_has_requested_size() {
        let p = placeholder(16);
        assert_eq!(p.rgba.len(), 16 * 16 * 4);
        let centre = ((8 * 16 + 8) * 4) as usize;
        assert_eq!(p.rgba[centre + 3], 255);
        assert_eq!(p.rgba[3], 0);
    }
}
