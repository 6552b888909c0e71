use axum::Json;
use crate::logger;
use crate::models::Greeting;

// the one payload this service ever returns
pub const GREETING_MESSAGE: &str = "StudyBuddy API is running!";

pub async fn root() -> Json<Greeting> {

    logger::log_request("GET", "/", 200);

    Json(Greeting { message: GREETING_MESSAGE.to_string() })

}
