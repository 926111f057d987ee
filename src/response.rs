use actix_web::HttpResponse;
use serde::Serialize;

use crate::domain::PageInfo;

/// Envelope of every JSON response
#[derive(Serialize, Debug)]
pub struct ApiResponse<T: Serialize>{
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageInfo>
}

impl<T: Serialize> ApiResponse<T> {
    pub fn with_data(message: impl Into<String>, data: T) -> Self{
        Self{
            success: true,
            message: message.into(),
            data: Some(data),
            pagination: None
        }
    }

    pub fn page(message: impl Into<String>, data: T, pagination: PageInfo) -> Self{
        Self{
            success: true,
            message: message.into(),
            data: Some(data),
            pagination: Some(pagination)
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self{
        Self{
            success: true,
            message: message.into(),
            data: None,
            pagination: None
        }
    }

    pub fn failure(message: impl Into<String>) -> Self{
        Self{
            success: false,
            message: message.into(),
            data: None,
            pagination: None
        }
    }
}

pub fn ok<T: Serialize>(message: &str, data: T) -> HttpResponse{
    HttpResponse::Ok().json(ApiResponse::with_data(message, data))
}

pub fn created<T: Serialize>(message: &str, data: T) -> HttpResponse{
    HttpResponse::Created().json(ApiResponse::with_data(message, data))
}

pub fn ok_page<T: Serialize>(message: &str, data: T, pagination: PageInfo) -> HttpResponse{
    HttpResponse::Ok().json(ApiResponse::page(message, data, pagination))
}
