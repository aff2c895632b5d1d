use lambda_http::{run, tracing, Error};
use soulsync::handlers::{function_router, future_self_route};
use soulsync::service::CommonService;
use std::env::set_var;


#[tokio::main]
async fn main() -> Result<(), Error> {
    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    tracing::init_default_subscriber();

    let service = CommonService::from_env();

    let app = function_router(future_self_route(), service);
    run(app).await
}
