use aperture_model::media::parse_local_timestamp;
use aperture_model::{GalleryMedia, MediaTypeName, ModelError};
use serde::{Deserialize, Serialize};

/// Sort orders accepted by the listing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoPrismOrder {
    Favorites,
    Name,
    #[default]
    Newest,
    Oldest,
    Added,
    Edited,
    Relevance,
}

impl PhotoPrismOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Favorites => "favorites",
            Self::Name => "name",
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Added => "added",
            Self::Edited => "edited",
            Self::Relevance => "relevance",
        }
    }
}

/// Query parameters of `GET /api/v1/albums`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumsRequest {
    pub count: usize,
    pub offset: usize,
    pub order: PhotoPrismOrder,
    #[serde(rename = "type")]
    pub album_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

/// Query parameters of `GET /api/v1/photos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotosRequest {
    pub count: usize,
    pub offset: usize,
    pub order: PhotoPrismOrder,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Return one entry per photo with all its files merged in.
    pub merged: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhotoPrismAlbum {
    #[serde(rename = "UID")]
    pub uid: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Type", default)]
    pub album_type: String,
    #[serde(rename = "Favorite", default)]
    pub favorite: bool,
    #[serde(rename = "Path", default)]
    pub path: String,
    #[serde(rename = "Thumb", default)]
    pub thumb: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhotoPrismPhoto {
    #[serde(rename = "UID")]
    pub uid: String,
    #[serde(rename = "Type", default)]
    pub media_type: String,
    #[serde(rename = "TakenAtLocal")]
    pub taken_at_local: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Hash", default)]
    pub hash: String,
    #[serde(rename = "Width", default)]
    pub width: u32,
    #[serde(rename = "Height", default)]
    pub height: u32,
}

impl TryFrom<PhotoPrismPhoto> for GalleryMedia {
    type Error = ModelError;

    fn try_from(photo: PhotoPrismPhoto) -> Result<Self, Self::Error> {
        let taken_at_local = parse_local_timestamp(&photo.taken_at_local)?;
        // Types newer than this client are still shown, just not specially.
        let media_type = photo
            .media_type
            .parse()
            .unwrap_or(MediaTypeName::Other);

        Ok(GalleryMedia {
            uid: photo.uid,
            media_type,
            taken_at_local,
            title: photo.title,
            hash: photo.hash,
            width: photo.width,
            height: photo.height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHOTOS_JSON: &str = r#"[
        {
            "ID": "1",
            "UID": "pr4kwd63hsx1t2ju",
            "Type": "live",
            "TakenAt": "2023-04-30T20:57:32Z",
            "TakenAtLocal": "2023-04-30T22:57:32Z",
            "Title": "Harbour",
            "Hash": "2cad9168fa6acc5c5c2965ddf6ec465ca42fd818",
            "Width": 4032,
            "Height": 3024,
            "Files": []
        },
        {
            "UID": "pr4kwd63hsx1t2jv",
            "Type": "hologram",
            "TakenAtLocal": "2023-05-01T08:00:00Z"
        }
    ]"#;

    #[test]
    fn decodes_merged_photos() {
        let photos: Vec<PhotoPrismPhoto> =
            serde_json::from_str(PHOTOS_JSON).unwrap();
        let media = photos
            .into_iter()
            .map(GalleryMedia::try_from)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(media[0].uid, "pr4kwd63hsx1t2ju");
        assert_eq!(media[0].media_type, MediaTypeName::Live);
        assert_eq!(media[0].taken_at_local.to_string(), "2023-04-30 22:57:32");
        assert_eq!(media[0].width, 4032);
        assert_eq!(media[1].media_type, MediaTypeName::Other);
        assert_eq!(media[1].title, "");
    }

    #[test]
    fn bad_timestamp_is_a_model_error() {
        let photo = PhotoPrismPhoto {
            uid: "pr4kwd63hsx1t2ju".into(),
            media_type: "image".into(),
            taken_at_local: "yesterday".into(),
            title: String::new(),
            hash: String::new(),
            width: 0,
            height: 0,
        };
        assert_eq!(
            GalleryMedia::try_from(photo),
            Err(ModelError::InvalidTimestamp("yesterday".into()))
        );
    }

    #[test]
    fn albums_request_uses_server_parameter_names() {
        let request = AlbumsRequest {
            count: 30,
            offset: 60,
            order: PhotoPrismOrder::Favorites,
            album_type: "folder".into(),
            q: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "count": 30,
                "offset": 60,
                "order": "favorites",
                "type": "folder",
            })
        );
    }

    #[test]
    fn order_serializes_as_its_wire_name() {
        for order in [
            PhotoPrismOrder::Favorites,
            PhotoPrismOrder::Newest,
            PhotoPrismOrder::Relevance,
        ] {
            assert_eq!(
                serde_json::to_value(order).unwrap(),
                serde_json::Value::String(order.as_str().to_string())
            );
        }
    }
}
