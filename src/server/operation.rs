use std::fmt;

use axum::http::Method;

/// The closed set of operations bound to the user route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserOperation {
    Create,
    Read,
    Update,
    Delete
}

impl UserOperation {
    pub fn from_method(method: &Method) -> Option<UserOperation> {
        match *method {
            Method::POST => Some(Self::Create),
            Method::GET => Some(Self::Read),
            Method::PUT => Some(Self::Update),
            Method::DELETE => Some(Self::Delete),
            _ => None
        }
    }
}

impl fmt::Display for UserOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let disp = match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete"
        };
        write!(f, "{}", disp)
    }
}


#[cfg(test)]
mod tests {
    use axum::http::Method;
    use rstest::rstest;

    use super::UserOperation;

    #[rstest]
    #[case(Method::POST, Some(UserOperation::Create))]
    #[case(Method::GET, Some(UserOperation::Read))]
    #[case(Method::PUT, Some(UserOperation::Update))]
    #[case(Method::DELETE, Some(UserOperation::Delete))]
    #[case(Method::PATCH, None)]
    #[case(Method::HEAD, None)]
    #[case(Method::OPTIONS, None)]
    fn maps_methods(#[case] method: Method, #[case] expected: Option<UserOperation>) {
        assert_eq!(UserOperation::from_method(&method), expected);
    }
}
