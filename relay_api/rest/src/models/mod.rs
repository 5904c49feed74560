use serde::Serialize;

pub mod contact;

#[derive(Serialize)]
pub struct ApiSuccess {
    pub success: bool,
}

#[derive(Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: &'static str,
}
