//! Typed views over the documented Telegraph schema.
//!
//! Operations return raw JSON; these are what
//! [`ApiResponse::decode`](super::ApiResponse::decode) produces.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where uploaded files are served from.
const TELEGRAPH_ORIGIN: &str = "https://telegra.ph";

/// A Telegraph account.
///
/// `access_token` and `auth_url` are only present right after `createAccount`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub short_name: String,
    pub author_name: String,
    pub author_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
}

/// A Telegraph page.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Page {
    /// Everything after `https://telegra.ph/`, e.g. `Sample-Page-12-15`.
    pub path: String,
    pub url: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Node>>,
    pub views: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_edit: Option<bool>,
}

/// One page of results from `getPageList`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PageList {
    pub total_count: u32,
    pub pages: Vec<Page>,
}

/// A unit of page content: either bare text or an element.
///
/// The client never validates content; this type only exists so callers
/// don't have to hand-assemble JSON. Any `Serialize` value is accepted by
/// [`create_page`](super::TelegraphClient::create_page).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(NodeElement),
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NodeElement {
    /// e.g. `p`, `a`, `img`, `figure`.
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element(NodeElement {
            tag: tag.into(),
            attrs: None,
            children: if children.is_empty() {
                None
            } else {
                Some(children)
            },
        })
    }

    /// Sets an attribute. Text nodes are returned unchanged.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Node::Element(element) = &mut self {
            element
                .attrs
                .get_or_insert_with(BTreeMap::new)
                .insert(name.into(), value.into());
        }
        self
    }
}

/// A file held in memory, ready to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub bytes: Vec<u8>,
    /// e.g. `image/jpeg`.
    pub mime_type: String,
}

/// An entry in the response of `telegra.ph/upload`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadedSource {
    /// Path relative to `https://telegra.ph`, e.g. `/file/abc.jpg`.
    pub src: String,
}

impl UploadedSource {
    /// The absolute URL of the uploaded file.
    pub fn url(&self) -> String {
        format!("{TELEGRAPH_ORIGIN}{}", self.src)
    }
}
