use worker::*;

/// Routing decision for an incoming request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Any path under /api/ gets the static JSON payload
    Api,
    /// Everything else: empty 404
    NotFound,
}

pub fn route(path: &str) -> Route {
    if path.starts_with("/api/") {
        Route::Api
    } else {
        Route::NotFound
    }
}

pub fn api_payload() -> serde_json::Value {
    serde_json::json!({ "name": "Nah" })
}

#[event(fetch)]
pub async fn main(req: Request, _env: Env, _ctx: worker::Context) -> Result<Response> {
    match route(&req.path()) {
        Route::Api => Response::from_json(&api_payload()),
        Route::NotFound => Ok(Response::empty()?.with_status(404)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_prefix_routes_to_payload() {
        assert_eq!(route("/api/"), Route::Api);
        assert_eq!(route("/api/anything"), Route::Api);
        assert_eq!(route("/api/deeply/nested"), Route::Api);
    }

    #[test]
    fn test_other_paths_are_not_found() {
        assert_eq!(route("/"), Route::NotFound);
        assert_eq!(route("/other"), Route::NotFound);
        assert_eq!(route("/api"), Route::NotFound, "No trailing slash, no match");
        assert_eq!(route("/API/x"), Route::NotFound, "Prefix is case-sensitive");
    }

    #[test]
    fn test_payload_shape() {
        assert_eq!(api_payload().to_string(), r#"{"name":"Nah"}"#);
    }
}
