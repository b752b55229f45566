#[tokio::main]
async fn main() {
    if pitchsite::app::run().await.is_err() {
        std::process::exit(1);
    }
}
