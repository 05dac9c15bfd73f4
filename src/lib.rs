//! A client for the [Telegra.ph](https://telegra.ph/api) publishing API.
//!
//! Every operation issues one request and returns an [`ApiResponse`]:
//! `Success` with the JSON body for HTTP 200, `Failure` with the status,
//! reason and body otherwise. Failures are also logged through `tracing`.
//! Transport errors and malformed bodies come back as [`TelegraphError`].
//!
//! ```no_run
//! # async fn run() -> telegraph::Result<()> {
//! use telegraph::{ClientConfig, Node, Page, TelegraphClient};
//!
//! let client = TelegraphClient::with_config(ClientConfig::new().access_token("..."))?;
//! let content = vec![Node::element("p", vec![Node::text("Hello, world!")])];
//! let page: Page = client
//!     .create_page(&content, "Sample Page")
//!     .await?
//!     .decode()?
//!     .into_result()?;
//! println!("{}", page.url);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
mod error;

pub use api::{
    Account, ApiResponse, Node, NodeElement, Page, PageList, RemoteFailure, TelegraphClient,
    UploadedFile, UploadedSource,
};
pub use config::ClientConfig;
pub use error::{Result, TelegraphError};
