use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::Url;
use serde::Deserialize;

use crate::engine::error::ImageError;
use crate::ui::settings::ImageSettings;

/// Finds an illustrative photo for a query. `None` means "no image",
/// which is never an error for the caller.
pub trait ImageLookup {
    fn find_image(&self, query: &str) -> Option<String>;

    /// Downloads the photo behind a URL returned by `find_image`
    fn download(&self, _url: &str) -> Option<DecodedImage> {
        None
    }
}

#[derive(Deserialize)]
struct RandomPhoto {
    urls: PhotoUrls,
}

#[derive(Deserialize)]
struct PhotoUrls {
    regular: String,
}

/// RGBA pixels ready to be uploaded as a texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub size: [usize; 2],
    pub rgba: Vec<u8>,
}

pub struct UnsplashClient {
    http: Client,
    settings: ImageSettings,
    access_key: Option<String>,
}

impl UnsplashClient {
    pub fn from_settings(settings: &ImageSettings) -> Result<Self, ImageError> {
        let access_key = std::env::var(&settings.access_key_env).ok();
        Self::with_access_key(settings, access_key)
    }

    pub fn with_access_key(
        settings: &ImageSettings,
        access_key: Option<String>,
    ) -> Result<Self, ImageError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            settings: settings.clone(),
            access_key,
        })
    }

    fn lookup(&self, query: &str) -> Result<Option<String>, ImageError> {
        let key = self
            .access_key
            .as_deref()
            .ok_or_else(|| ImageError::MissingAccessKey(self.settings.access_key_env.clone()))?;

        let Ok(url) = Url::parse_with_params(
            &self.settings.api_url,
            &[
                ("query", query),
                ("orientation", self.settings.orientation.as_str()),
            ],
        ) else {
            warn!("Invalid image API url: {}", self.settings.api_url);
            return Ok(None);
        };

        debug!("GET {} (query {:?})", self.settings.api_url, query);

        // the key travels in a header and errors drop the url, so it never reaches logs
        let resp = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("Client-ID {key}"))
            .send()
            .map_err(reqwest::Error::without_url)?;
        if !resp.status().is_success() {
            debug!("Image lookup for {:?} returned {}", query, resp.status());
            return Ok(None);
        }

        let photo: RandomPhoto = resp.json().map_err(reqwest::Error::without_url)?;
        Ok(Some(photo.urls.regular))
    }

    /// Downloads and decodes the photo at `url`
    pub fn fetch_image(&self, url: &str) -> Result<DecodedImage, ImageError> {
        let bytes = self
            .http
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.bytes())
            .map_err(reqwest::Error::without_url)?;
        decode_image(&bytes)
    }
}

impl ImageLookup for UnsplashClient {
    fn find_image(&self, query: &str) -> Option<String> {
        match self.lookup(query) {
            Ok(url) => url,
            Err(e) => {
                warn!("No image for {:?}: {}", query, e);
                None
            }
        }
    }

    fn download(&self, url: &str) -> Option<DecodedImage> {
        match self.fetch_image(url) {
            Ok(image) => Some(image),
            Err(e) => {
                warn!("Could not load image {}: {}", url, e);
                None
            }
        }
    }
}

pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, ImageError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];

    Ok(DecodedImage {
        size,
        rgba: rgba.into_raw(),
    })
}
