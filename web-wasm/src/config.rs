//! 予測サービスの所在（ビルド時に固定）
//!
//! - LEAF_DOCTOR_API_URL: ベースURL（既定: http://localhost:8000）
//! - LEAF_DOCTOR_API_ROUTE: `fixed` または `category`

use leaf_doctor_common::{Endpoint, Route, DEFAULT_API_URL};

const API_URL: Option<&str> = option_env!("LEAF_DOCTOR_API_URL");
const API_ROUTE: Option<&str> = option_env!("LEAF_DOCTOR_API_ROUTE");

pub fn endpoint() -> Endpoint {
    endpoint_from(API_URL, API_ROUTE)
}

fn endpoint_from(api_url: Option<&str>, route: Option<&str>) -> Endpoint {
    let route = match route.map(str::parse::<Route>) {
        Some(Ok(route)) => route,
        Some(Err(e)) => {
            log::warn!("{}; falling back to fixed route", e);
            Route::Fixed
        }
        None => Route::Fixed,
    };
    let api_url = api_url.filter(|u| !u.trim().is_empty()).unwrap_or(DEFAULT_API_URL);
    Endpoint::new(api_url, route)
}
