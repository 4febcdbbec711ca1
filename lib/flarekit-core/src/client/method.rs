use http::Method;

/// The HTTP methods used by the Cloudflare API.
///
/// The set is closed: every request is dispatched through an exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HttpMethod {
    /// `GET`, the only method sent without a body.
    #[display("GET")]
    Get,
    /// `POST`
    #[display("POST")]
    Post,
    /// `PUT`
    #[display("PUT")]
    Put,
    /// `PATCH`
    #[display("PATCH")]
    Patch,
    /// `DELETE`
    #[display("DELETE")]
    Delete,
}

impl HttpMethod {
    /// Whether requests with this method carry the JSON body.
    pub fn has_body(self) -> bool {
        match self {
            Self::Get => false,
            Self::Post | Self::Put | Self::Patch | Self::Delete => true,
        }
    }
}

impl From<HttpMethod> for Method {
    fn from(value: HttpMethod) -> Self {
        match value {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_only_send_body_when_not_get() {
        assert!(!HttpMethod::Get.has_body());
        assert!(HttpMethod::Post.has_body());
        assert!(HttpMethod::Put.has_body());
        assert!(HttpMethod::Patch.has_body());
        assert!(HttpMethod::Delete.has_body());
    }

    #[test]
    fn should_convert_to_http_method() {
        let methods = [
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Patch,
            HttpMethod::Delete,
        ];

        for method in methods {
            let http_method = Method::from(method);
            assert_eq!(http_method.as_str(), method.to_string());
        }
    }
}
