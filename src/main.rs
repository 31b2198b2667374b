#[tokio::main]
async fn main() {
    lesson_booking_backend::run().await;
}
