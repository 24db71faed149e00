use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "legalconnect-backend",
        description = "LegalConnect backend API",
        version = "0.1.0",
    ),
    components(schemas(
        model::Role,
        model::ValidationError,
        model_profile::ProfileUpdate,
        model_profile::UserSummary,
        model_profile::UserProfile,
    ))
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn open_api_json_string() -> Result<String, serde_json::Error> {
        ApiDoc::openapi().to_pretty_json()
    }
}
