use actix_web::{
    HttpRequest, HttpResponse, Responder, body::BoxBody, http::header::CONTENT_DISPOSITION,
};
use serde::{Deserialize, Serialize};

pub const KML_CONTENT_TYPE: &str = "application/vnd.google-earth.kml+xml";

#[derive(Debug, Serialize, Deserialize)]
pub struct Response<T> {
    pub body: T,
}

impl<T> Response<T> {
    pub fn new(body: T) -> Self {
        Response { body }
    }
}

impl<T> Responder for Response<T>
where
    T: Serialize,
{
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self.body)
    }
}

/// A finished KML document, optionally offered to the client as a download.
#[derive(Debug)]
pub struct KmlResponse {
    pub document: Vec<u8>,
    pub attachment: Option<String>,
}

impl Responder for KmlResponse {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        let mut response = HttpResponse::Ok();
        response.content_type(KML_CONTENT_TYPE);

        if let Some(filename) = self.attachment {
            response.insert_header((
                CONTENT_DISPOSITION,
                format!(r#"attachment; filename="{filename}""#),
            ));
        }

        response.body(self.document)
    }
}
