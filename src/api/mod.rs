mod client;
mod http_client;
mod response;
mod types;

pub use client::{TelegraphClient, DEFAULT_AUTHOR_NAME, PAGE_LIST_LIMIT};
pub use response::{ApiResponse, RemoteFailure};
pub use types::{Account, Node, NodeElement, Page, PageList, UploadedFile, UploadedSource};
