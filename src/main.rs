use assistant_bot::cli::run_app;
use assistant_bot::errors::AppError;
use dotenv::dotenv;

fn main() -> Result<(), AppError> {
    dotenv().ok();
    env_logger::init();

    run_app()
}
