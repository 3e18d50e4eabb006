use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /channel/{name} endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct ChannelResponse {
    json: ChannelJson,
}

#[derive(serde::Deserialize, Debug)]
struct ChannelJson {
    #[serde(default)]
    images: Vec<ChannelImage>,
}

/// Metadata for one image sitting in vehicle shared memory.
#[derive(serde::Deserialize, Debug, Clone)]
pub(crate) struct ChannelImage {
    /// Shared-memory path of the pixel data, readable via /shm.
    data: String,
    pixelformat: i64,
    width: u32,
    height: u32,
}

impl SerdeJSONBodyHTTPResponseType for ChannelResponse {}

impl ChannelResponse {
    pub(crate) fn images(&self) -> &[ChannelImage] { &self.json.images }

    /// The most recent image, if the channel has published any.
    pub(crate) fn latest_image(&self) -> Option<&ChannelImage> { self.json.images.first() }
}

impl ChannelImage {
    /// UYVY 4:2:2, two bytes per pixel.
    pub(crate) const PIXELFORMAT_YUV: i64 = 1009;
    /// Packed RGB, three bytes per pixel.
    pub(crate) const PIXELFORMAT_RGB: i64 = 1002;

    pub(crate) fn shm_path(&self) -> &str { &self.data }
    pub(crate) fn pixelformat(&self) -> i64 { self.pixelformat }
    pub(crate) fn width(&self) -> u32 { self.width }
    pub(crate) fn height(&self) -> u32 { self.height }

    /// Bytes per pixel for the known pixel formats.
    pub(crate) fn bytes_per_pixel(&self) -> Option<usize> {
        match self.pixelformat {
            Self::PIXELFORMAT_YUV => Some(2),
            Self::PIXELFORMAT_RGB => Some(3),
            _ => None,
        }
    }

    /// Expected size of the raw pixel buffer, if the format is known.
    pub(crate) fn byte_len(&self) -> Option<usize> {
        self.bytes_per_pixel().map(|bpp| self.width as usize * self.height as usize * bpp)
    }
}
