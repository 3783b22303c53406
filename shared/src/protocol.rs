use crate::{CurrentUser, Item, PATH_CURRENT_USER, PATH_ITEMS};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Whether the browser attaches its cookies to the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Credentials {
    /// Anonymous request.
    Omit,
    /// Cross-origin request carrying the session cookie.
    Include,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest {
    /// The response type returned by a successful call.
    type Response: DeserializeOwned;
    /// The URL path, relative to the API origin.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Cookie policy for this endpoint.
    const CREDENTIALS: Credentials;
}

// =========================================================
// Request Definitions
// =========================================================

/// Ask the API who the browser's session belongs to
#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentUserRequest;

impl ApiRequest for CurrentUserRequest {
    type Response = CurrentUser;
    const PATH: &'static str = PATH_CURRENT_USER;
    const METHOD: HttpMethod = HttpMethod::Get;
    const CREDENTIALS: Credentials = Credentials::Include;
}

/// List every item on the board
#[derive(Debug, Serialize, Deserialize)]
pub struct ListItemsRequest;

impl ApiRequest for ListItemsRequest {
    type Response = Vec<Item>;
    const PATH: &'static str = PATH_ITEMS;
    const METHOD: HttpMethod = HttpMethod::Get;
    const CREDENTIALS: Credentials = Credentials::Omit;
}

/// Create an item. The body is multipart (title, description, status, image),
/// so the request itself carries no serializable payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateItemRequest;

impl ApiRequest for CreateItemRequest {
    type Response = Item;
    const PATH: &'static str = PATH_ITEMS;
    const METHOD: HttpMethod = HttpMethod::Post;
    const CREDENTIALS: Credentials = Credentials::Include;
}
