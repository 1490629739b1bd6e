/*---------- Imports ----------*/
use crate::models::response::ResponseDescriptor;

pub struct HttpResponse;

impl HttpResponse {
    pub fn build_success_response(body: String) -> ResponseDescriptor {
        ResponseDescriptor {
            status_code: 200,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_response_has_status_200() {
        let response = HttpResponse::build_success_response("{}".to_owned());

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "{}");
    }
}
