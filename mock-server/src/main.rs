use std::sync::Arc;

use mock_server::Dex;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("listening on {addr}");
    let dex = Arc::new(Dex::new(&format!("http://{addr}")));
    mock_server::run(listener, dex).await
}
