use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::endpoint::{UrlBuilder, encode_query_value};
use crate::error::{ClientError, Result};
use crate::model::{
    DirectoryListing, ExistingEntry, FileTypeInfo, TextPreview, ZipListing,
};
use crate::paths::base_name;
use crate::validate::is_filename_valid;

const DIRECTORY_ROUTE: &str = "/api/directory";
const CREATE_DIRECTORY_ROUTE: &str = "/api/directory/create";
const DOWNLOAD_ROUTE: &str = "/api/file/download";
pub(crate) const UPLOAD_ROUTE: &str = "/api/file/upload";
const RENAME_ROUTE: &str = "/api/file/rename";
const DELETE_ROUTE: &str = "/api/file/delete";
const EXISTS_ROUTE: &str = "/api/file/exists";
const TYPE_ROUTE: &str = "/api/file/type";
const TEXT_ROUTE: &str = "/api/file/text";
const ZIP_ROUTE: &str = "/api/file/zip";

/// Typed client for the file-serving API.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct FileClient {
    pub(crate) http: reqwest::Client,
    urls: UrlBuilder,
}

impl FileClient {
    /// Create a client bound to `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::with_http(http, base_url))
    }

    /// Create a client reusing an existing `reqwest` client.
    pub fn with_http(
        http: reqwest::Client,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            urls: UrlBuilder::new(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        self.urls.base()
    }

    /// List entries directly under `path` (`""` is the root).
    pub async fn list_directory(&self, path: &str) -> Result<DirectoryListing> {
        log::debug!("list directory {path:?}");
        let url = self.endpoint(DIRECTORY_ROUTE, path)?;
        self.send_json(self.http.get(url)).await
    }

    /// Create the directory at `path`.
    pub async fn create_directory(&self, path: &str) -> Result<()> {
        ensure_valid_name(base_name(path))?;
        let url = self.endpoint(CREATE_DIRECTORY_ROUTE, path)?;
        self.send(self.http.post(url)).await?;
        Ok(())
    }

    /// Fetch the raw bytes of the file at `path`.
    pub async fn download(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.endpoint(DOWNLOAD_ROUTE, path)?;
        let response = self.send(self.http.get(url)).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Rename the entry at `path` to `new_name` within the same directory.
    pub async fn rename(&self, path: &str, new_name: &str) -> Result<()> {
        ensure_valid_name(new_name)?;
        let url = self.endpoint(RENAME_ROUTE, path)?;
        let request = self
            .http
            .put(url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(new_name.to_string());
        self.send(request).await?;
        Ok(())
    }

    /// Delete the entry at `path`.
    pub async fn delete(&self, path: &str, recursive: bool) -> Result<()> {
        let mut url = self.endpoint(DELETE_ROUTE, path)?;
        url.query_pairs_mut()
            .append_pair("recursive", if recursive { "true" } else { "false" });
        self.send(self.http.delete(url)).await?;
        Ok(())
    }

    /// Return the subset of `names` that already exist under `dir`.
    pub async fn existing_names(
        &self,
        dir: &str,
        names: &[String],
    ) -> Result<Vec<String>> {
        let url = self.endpoint(EXISTS_ROUTE, dir)?;
        let entries: Vec<ExistingEntry> =
            self.send_json(self.http.post(url).json(names)).await?;
        Ok(entries
            .into_iter()
            .filter(ExistingEntry::exists)
            .map(|entry| entry.name)
            .collect())
    }

    /// Ask the backend which viewer fits the file at `path`.
    pub async fn file_type(&self, path: &str) -> Result<FileTypeInfo> {
        let url = self.endpoint(TYPE_ROUTE, path)?;
        self.send_json(self.http.get(url)).await
    }

    /// Fetch the (possibly truncated) text preview of `path`.
    pub async fn text_content(&self, path: &str) -> Result<TextPreview> {
        let url = self.endpoint(TEXT_ROUTE, path)?;
        self.send_json(self.http.get(url)).await
    }

    /// Fetch the member tree of the archive at `path`.
    pub async fn zip_listing(&self, path: &str) -> Result<ZipListing> {
        let url = self.endpoint(ZIP_ROUTE, path)?;
        self.send_json(self.http.get(url)).await
    }

    pub(crate) fn endpoint(&self, route: &str, path: &str) -> Result<Url> {
        let query = format!("{route}?path={}", encode_query_value(path));
        Ok(Url::parse(&self.urls.build(&query))?)
    }

    pub(crate) async fn send(
        &self,
        request: RequestBuilder,
    ) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("{} answered {status}", response.url());
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T> {
        let body = self.send(request).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn ensure_valid_name(name: &str) -> Result<()> {
    if is_filename_valid(Some(name)) {
        Ok(())
    } else {
        Err(ClientError::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn client() -> FileClient {
        FileClient::with_http(
            reqwest::Client::new(),
            "http://files.local:9000/",
        )
    }

    #[test]
    fn given_nested_path_when_endpoint_built_then_path_is_query_encoded() {
        let url = client()
            .endpoint(DIRECTORY_ROUTE, "docs/my notes")
            .expect("url");

        assert_eq!(
            url.as_str(),
            "http://files.local:9000/api/directory?path=docs%2Fmy+notes"
        );
    }

    #[test]
    fn given_root_path_when_endpoint_built_then_path_param_is_empty() {
        let url = client().endpoint(TYPE_ROUTE, "").expect("url");

        assert_eq!(url.query(), Some("path="));
    }

    #[test]
    fn given_empty_base_when_endpoint_built_then_url_is_rejected() {
        let client = FileClient::with_http(reqwest::Client::new(), "");

        let result = client.endpoint(DIRECTORY_ROUTE, "docs");

        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn given_invalid_name_when_renaming_then_no_request_is_sent() {
        let result = client().rename("docs/a.txt", "../escape").await;

        assert!(matches!(
            result,
            Err(ClientError::InvalidName(name)) if name == "../escape"
        ));
    }

    #[tokio::test]
    async fn given_invalid_directory_name_when_creating_then_it_is_rejected() {
        let result = client().create_directory("docs/ bad").await;

        assert!(matches!(result, Err(ClientError::InvalidName(_))));
    }
}
