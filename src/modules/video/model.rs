use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::modules::file_upload::{MultipartForm, UploadedFile};
use crate::utils::non_empty;

/// Multipart field carrying the video file.
pub const VIDEO_FILE_FIELD: &str = "video_path";

#[derive(Debug, Validate)]
pub struct CreateVideoForm {
    #[validate(required, length(min = 1))]
    pub video_name: Option<String>,
    pub video_description: Option<String>,
    pub genre: Option<String>,
    #[validate(required)]
    pub file: Option<UploadedFile>,
}

impl From<MultipartForm> for CreateVideoForm {
    fn from(mut form: MultipartForm) -> Self {
        CreateVideoForm {
            video_name: form.take_field("video_name"),
            video_description: form.take_field("video_description"),
            genre: form.take_field("genre"),
            file: form.file.take(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "require_any_field"))]
pub struct UpdateVideoModel {
    pub video_name: Option<String>,
    pub video_description: Option<String>,
    pub genre: Option<String>,
}

fn require_any_field(model: &UpdateVideoModel) -> Result<(), ValidationError> {
    if non_empty(model.video_name.as_ref())
        || non_empty(model.video_description.as_ref())
        || non_empty(model.genre.as_ref())
    {
        return Ok(());
    }
    let mut err = ValidationError::new("no_fields");
    err.message = Some("No fields provided to update".into());
    Err(err)
}

pub struct InsertVideo {
    pub video_name: String,
    pub video_description: Option<String>,
    pub genre: Option<String>,
    pub video_path: String,
}

/// Full replacement of the mutable columns; the store writes every field as given.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateVideo {
    pub video_name: String,
    pub video_description: Option<String>,
    pub genre: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteResult {
    pub affected: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation_message;

    fn update(
        name: Option<&str>,
        description: Option<&str>,
        genre: Option<&str>,
    ) -> UpdateVideoModel {
        UpdateVideoModel {
            video_name: name.map(Into::into),
            video_description: description.map(Into::into),
            genre: genre.map(Into::into),
        }
    }

    #[test]
    fn test_update_requires_some_field() {
        assert!(update(None, None, None).validate().is_err());
        assert!(update(Some(""), Some(""), None).validate().is_err());
        assert!(update(None, None, Some("Drama")).validate().is_ok());
        assert!(update(Some("Ocean"), None, None).validate().is_ok());
    }

    #[test]
    fn test_update_error_message_has_no_field_prefix() {
        let errors = update(None, None, None).validate().unwrap_err();
        assert_eq!(validation_message(&errors), "No fields provided to update");
    }

    #[test]
    fn test_create_form_requires_name_and_file() {
        let file = UploadedFile { original_filename: "clip.mp4".into(), bytes: vec![0; 10] };

        let form = CreateVideoForm {
            video_name: Some("Ocean".into()),
            video_description: None,
            genre: None,
            file: Some(file.clone()),
        };
        assert!(form.validate().is_ok());

        let form = CreateVideoForm {
            video_name: Some(String::new()),
            video_description: None,
            genre: None,
            file: Some(file.clone()),
        };
        assert!(form.validate().is_err());

        let form = CreateVideoForm {
            video_name: Some("Ocean".into()),
            video_description: None,
            genre: None,
            file: None,
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_create_form_from_multipart() {
        let mut multipart = MultipartForm::default();
        multipart.fields.insert("video_name".into(), "Ocean".into());
        multipart.fields.insert("genre".into(), "Nature".into());
        multipart.fields.insert("ignored".into(), "x".into());

        let form = CreateVideoForm::from(multipart);
        assert_eq!(form.video_name.as_deref(), Some("Ocean"));
        assert_eq!(form.genre.as_deref(), Some("Nature"));
        assert!(form.video_description.is_none());
        assert!(form.file.is_none());
    }
}
