#[tokio::main]
async fn main() -> Result<(), quiznight_backend::error::AppError> {
    quiznight_backend::run().await
}
