use actix_multipart::Multipart;
use futures_util::TryStreamExt;

use crate::api::error;
use crate::modules::file_upload::model::{MultipartForm, UploadedFile};

/// Collects the text fields of a multipart payload and the first file sent under `file_field`.
pub async fn read_multipart(
    mut payload: Multipart,
    file_field: &str,
) -> Result<MultipartForm, error::Error> {
    let mut form = MultipartForm::default();

    while let Some(mut field) = payload.try_next().await.map_err(|e| {
        log::warn!("Malformed multipart payload: {}", e);
        error::Error::bad_request("Malformed multipart payload")
    })? {
        let (name, filename) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().unwrap_or_default().to_string(),
                cd.get_filename().map(|f| f.to_string()),
            ),
            None => continue,
        };

        // Read field bytes
        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|_| error::Error::bad_request("Malformed multipart payload"))?
        {
            bytes.extend_from_slice(&chunk);
        }

        match filename {
            // browsers send an empty filename when no file was picked
            Some(original_filename) if name == file_field && !original_filename.is_empty() => {
                if form.file.is_none() {
                    form.file = Some(UploadedFile { original_filename, bytes });
                }
            }
            Some(_) => {}
            None => {
                form.fields.insert(name, String::from_utf8_lossy(&bytes).into_owned());
            }
        }
    }

    Ok(form)
}
