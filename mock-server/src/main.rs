use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("serving mock Tanki Online APIs on http://{addr}");
    println!("point the client at it with Endpoints::local(\"http://{addr}\")");
    mock_server::run(listener).await
}
