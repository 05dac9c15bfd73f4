use reqwest::{
    header,
    multipart::{Form, Part},
    StatusCode,
};
use serde::Serialize;
use std::fmt;
use tracing::instrument;
use url::Url;

use super::http_client;
use super::response::ApiResponse;
use super::types::UploadedFile;
use crate::config::ClientConfig;
use crate::error::{Result, TelegraphError};

/// Used by `createAccount` when the caller gives no author name.
pub const DEFAULT_AUTHOR_NAME: &str = "Anonymous";

/// `getPageList` always asks for the largest page the service allows.
pub const PAGE_LIST_LIMIT: u32 = 200;

/// The multipart field (and file name) Telegraph expects uploads under.
const UPLOAD_FIELD: &str = "file";

/// Client for the Telegraph API.
///
/// Holds the access token and a connection pool, and nothing that changes
/// between requests, so a single instance can be cloned or shared across
/// tasks freely.
#[derive(Clone)]
pub struct TelegraphClient {
    http: reqwest::Client,
    /// The API root without a trailing slash, e.g. `https://api.telegra.ph`.
    api_url: String,
    upload_url: Url,
    /// The internal access token across API requests.
    access_token: String,
}

#[derive(Serialize)]
struct CreatePageRequest<'a, C: ?Sized> {
    access_token: &'a str,
    title: &'a str,
    content: &'a C,
    return_content: bool,
}

impl TelegraphClient {
    /// Creates a new API client around the given access token,
    /// talking to the public Telegraph endpoints.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new().access_token(access_token))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let api_url = config.api_url.trim_end_matches('/').to_string();
        parse_url(&api_url)?;
        let upload_url = parse_url(&config.upload_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            api_url,
            upload_url,
            access_token: config.access_token.unwrap_or_default(),
        })
    }

    /// Returns a client sharing this one's connection pool but acting as
    /// another account, e.g. one just made with [`create_account`](Self::create_account).
    pub fn with_access_token(&self, access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..self.clone()
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Retrieves a page along with its content.
    ///
    /// `path` is everything after `https://telegra.ph/`, e.g. `Sample-Page-12-15`.
    #[instrument(skip(self))]
    pub async fn get_page(&self, path: &str) -> Result<ApiResponse> {
        let url = self.endpoint(&format!("getPage/{path}"))?;
        let request = self.http.get(url).query(&[("return_content", "true")]);
        http_client::execute(request).await
    }

    /// Creates a new account.
    ///
    /// The new account's token is in the payload; this client keeps using its
    /// own. `author_name` defaults to `Anonymous` and `author_url` to empty.
    #[instrument(skip(self))]
    pub async fn create_account(
        &self,
        short_name: &str,
        author_name: Option<&str>,
        author_url: Option<&str>,
    ) -> Result<ApiResponse> {
        let url = self.endpoint("createAccount/")?;
        let request = self.http.get(url).query(&[
            ("short_name", short_name),
            ("author_name", author_name.unwrap_or(DEFAULT_AUTHOR_NAME)),
            ("author_url", author_url.unwrap_or_default()),
        ]);
        http_client::execute(request).await
    }

    /// Lists pages belonging to this client's account, starting at `offset` (default 0).
    #[instrument(skip(self))]
    pub async fn get_my_page_list(&self, offset: Option<u32>) -> Result<ApiResponse> {
        let url = self.endpoint("getPageList")?;
        let request = self
            .http
            .get(url)
            .query(&[("access_token", self.access_token.as_str())])
            .query(&[("offset", offset.unwrap_or(0)), ("limit", PAGE_LIST_LIMIT)]);
        http_client::execute(request).await
    }

    /// Creates a page under this client's account.
    ///
    /// `content` is serialized as-is: a `Vec<Node>`, a `serde_json::Value`
    /// array, or anything else that serializes to Telegraph's node format.
    #[instrument(skip(self, content))]
    pub async fn create_page<C>(&self, content: &C, title: &str) -> Result<ApiResponse>
    where
        C: Serialize + ?Sized,
    {
        let url = self.endpoint("createPage")?;
        let request = self.http.post(url).json(&CreatePageRequest {
            access_token: &self.access_token,
            title,
            content,
            return_content: true,
        });
        http_client::execute(request).await
    }

    /// Uploads a file. The payload lists the `src` of the stored file.
    #[instrument(skip(self, bytes))]
    pub async fn upload_file(
        &self,
        bytes: impl Into<Vec<u8>>,
        mime_type: &str,
    ) -> Result<ApiResponse> {
        let bytes: Vec<u8> = bytes.into();
        let part = Part::bytes(bytes)
            .file_name(UPLOAD_FIELD)
            .mime_str(mime_type)
            .map_err(|source| TelegraphError::InvalidMimeType {
                mime: mime_type.to_string(),
                source,
            })?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let request = self.http.post(self.upload_url.clone()).multipart(form);
        http_client::execute(request).await
    }

    /// Downloads an image into memory, keeping the MIME type it was served with.
    ///
    /// A 200 response without a `Content-Type` header is an error.
    #[instrument(skip(self))]
    pub async fn download_image(&self, image_url: &str) -> Result<ApiResponse<UploadedFile>> {
        let url = parse_url(image_url)?;
        let response = self.http.get(url).send().await?;
        if response.status() != StatusCode::OK {
            let failure = http_client::into_failure(response).await?;
            return Ok(ApiResponse::Failure(failure));
        }

        let Some(content_type) = response.headers().get(header::CONTENT_TYPE) else {
            return Err(TelegraphError::MissingContentType {
                url: image_url.to_string(),
            });
        };
        let mime_type = content_type
            .to_str()
            .map_err(|_| TelegraphError::InvalidContentType {
                url: image_url.to_string(),
            })?
            .to_string();

        let bytes = response.bytes().await?;
        Ok(ApiResponse::Success(UploadedFile {
            bytes: bytes.to_vec(),
            mime_type,
        }))
    }

    /// Downloads an image from the internet and uploads it to Telegraph.
    ///
    /// If the download itself fails, its failure is returned and nothing is uploaded.
    #[instrument(skip(self))]
    pub async fn fetch_and_upload_image(&self, image_url: &str) -> Result<ApiResponse> {
        match self.download_image(image_url).await? {
            ApiResponse::Success(file) => self.upload_file(file.bytes, &file.mime_type).await,
            ApiResponse::Failure(failure) => Ok(ApiResponse::Failure(failure)),
        }
    }

    fn endpoint(&self, method: &str) -> Result<Url> {
        parse_url(&format!("{}/{}", self.api_url, method))
    }
}

impl fmt::Debug for TelegraphClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegraphClient")
            .field("api_url", &self.api_url)
            .field("upload_url", &self.upload_url.as_str())
            .field("access_token", &"<redacted>")
            .finish()
    }
}

fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|source| TelegraphError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}
