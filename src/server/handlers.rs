use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json
};
use crate::backend::UserStore;
use crate::core::{User, UserError};
use crate::server::error::{ServiceError, ServiceResult};
use crate::server::operation::UserOperation;

const UPDATE_DECODE_ERROR: &str = "error decode body update";

/// The four user operations over a shared store.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> UserService {
        UserService { store }
    }

    #[cfg(test)]
    fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }

    pub fn create(&self, body: &[u8]) -> ServiceResult<User> {
        let user = User::from_json(body)
            .map_err(|err| ServiceError::Decode(err.to_string()))?;
        user.validate()?;

        let user = self.store.insert(user)?;
        log::debug!("created {:?}", user);
        return Ok(user);
    }

    pub fn read(&self, id: Option<&str>) -> ServiceResult<User> {
        let id = required_id(id)?;
        let user = self.store.get(id)
            .ok_or_else(|| UserError::UnknownUser(id.to_owned()))?;
        return Ok(user);
    }

    /// Replaces the whole record. Empty fields are not rejected here,
    /// an empty id simply fails the lookup.
    pub fn update(&self, body: &[u8]) -> ServiceResult<User> {
        let user = User::from_json(body)
            .map_err(|_| ServiceError::Decode(UPDATE_DECODE_ERROR.to_owned()))?;

        let user = self.store.replace(user)?;
        log::debug!("updated {:?}", user);
        return Ok(user);
    }

    pub fn delete(&self, id: Option<&str>) -> ServiceResult<()> {
        let id = required_id(id)?;
        let user = self.store.remove(id)?;
        log::debug!("deleted {:?}, {} users left", user, self.store.len());
        return Ok(());
    }
}

fn required_id(id: Option<&str>) -> ServiceResult<&str> {
    match id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ServiceError::MissingId)
    }
}

// First `id` pair wins. A query string that fails to parse counts as a missing id.
fn id_param(uri: &Uri) -> Option<String> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri).ok()?;
    pairs.into_iter()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value)
}

/// Single entry point for the user route, branching on the request method.
pub async fn dispatch(
    State(service): State<UserService>,
    method: Method,
    uri: Uri,
    body: Bytes
) -> ServiceResult<Response> {
    let operation = UserOperation::from_method(&method)
        .ok_or_else(|| ServiceError::UnsupportedMethod(method))?;
    log::debug!("{} on {}", operation, uri);

    let response = match operation {
        UserOperation::Create => {
            (StatusCode::CREATED, Json(service.create(&body)?)).into_response()
        },
        UserOperation::Read => {
            Json(service.read(id_param(&uri).as_deref())?).into_response()
        },
        UserOperation::Update => {
            Json(service.update(&body)?).into_response()
        },
        UserOperation::Delete => {
            service.delete(id_param(&uri).as_deref())?;
            Json(()).into_response()
        }
    };
    return Ok(response);
}
