//! Sterling Civil Engineering backend - binary entry point
//! Delegates to the library for all app logic.

#[tokio::main]
async fn main() {
    sterling_backend::run().await;
}
