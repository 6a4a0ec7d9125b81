use std::path::Path;

use actix_web::{
    App,
    http::{StatusCode, header::HeaderMap},
    test,
    web::{Bytes, Data},
};
use serde::de::DeserializeOwned;
use tempfile::TempDir;
use tracks_core::{FixRecord, test_helper::MemoryDatabase};
use web_api::{
    error::ErrorResponse,
    routes::v1::{extent::ExtentParameters, overlay::OverlayParameters},
    settings::OverlaySettings,
    startup::configure_routes,
};

pub struct TestHelper {
    db: Data<MemoryDatabase>,
    overlay: Data<OverlaySettings>,
    dir: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestHelper {
    pub fn new(fixes: Vec<FixRecord>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let overlay = OverlaySettings {
            output_dir: dir.path().to_path_buf(),
        };

        TestHelper {
            db: Data::new(MemoryDatabase::new(fixes)),
            overlay: Data::new(overlay),
            dir,
        }
    }

    pub fn output_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn written_overlays(&self) -> usize {
        std::fs::read_dir(self.output_dir()).unwrap().count()
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let app = test::init_service(
            App::new()
                .app_data(self.db.clone())
                .app_data(self.overlay.clone())
                .configure(configure_routes::<MemoryDatabase>),
        )
        .await;

        let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

        let status = response.status();
        let headers = response.headers().clone();
        let body = test::read_body(response).await;

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get_overlay(&self, params: &OverlayParameters) -> TestResponse {
        self.get(&format!("/v1.0/overlay?{}", serde_qs::to_string(params).unwrap()))
            .await
    }

    pub async fn get_overlay_kml(&self, params: &OverlayParameters) -> TestResponse {
        self.get(&format!(
            "/v1.0/overlay.kml?{}",
            serde_qs::to_string(params).unwrap()
        ))
        .await
    }

    pub async fn get_overlay_file(&self, filename: &str) -> TestResponse {
        self.get(&format!("/v1.0/overlay/{filename}")).await
    }

    pub async fn get_tracks(&self) -> TestResponse {
        self.get("/v1.0/tracks").await
    }

    pub async fn get_extent(&self, params: &ExtentParameters) -> TestResponse {
        self.get(&format!("/v1.0/extent?{}", serde_qs::to_string(params).unwrap()))
            .await
    }
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn error(&self) -> ErrorResponse {
        self.json()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).unwrap()
    }

    pub fn header(&self, name: &str) -> &str {
        self.headers.get(name).unwrap().to_str().unwrap()
    }
}

pub fn params(start: &str, stop: &str) -> OverlayParameters {
    OverlayParameters {
        start: start.into(),
        stop: stop.into(),
        options: "YYYY".into(),
        track: "All".into(),
    }
}
