/*
RUST_LOG=trace cargo run -p async-http1-response-demo-async-net --bin async_http1_response_demo_async_net_client httpbin.org 80 /ip
*/

use std::env;
use std::io;

use async_net::TcpStream;
use async_sleep::impl_async_io::Timer;
use futures_lite::{future::block_on, AsyncWriteExt as _};

use async_http1_response::{Http1ResponseReader, ReadConfig, StreamSource};

fn main() -> io::Result<()> {
    env_logger::init();

    block_on(run())
}

async fn run() -> io::Result<()> {
    let domain = env::args()
        .nth(1)
        .unwrap_or_else(|| env::var("DOMAIN").unwrap_or("httpbin.org".to_owned()));
    let port: u16 = env::args()
        .nth(2)
        .unwrap_or_else(|| env::var("PORT").unwrap_or("80".to_owned()))
        .parse()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let uri = env::args()
        .nth(3)
        .unwrap_or_else(|| env::var("URI").unwrap_or("/ip".to_owned()));

    println!("client {} {} {}", domain, port, uri);

    //
    let addr = format!("{}:{}", domain, port);
    let mut stream = TcpStream::connect(addr).await?;

    let request = format!(
        "GET {} HTTP/1.1\r\nHost: {}\r\nUser-Agent: curl/7.71.1\r\nAccept: */*\r\nConnection: close\r\n\r\n",
        uri, domain
    );
    stream.write_all(request.as_bytes()).await?;
    stream.flush().await?;

    //
    let mut config = ReadConfig::default();
    config.set_body_max_len(1024 * 1024);
    let reader = Http1ResponseReader::with_config(config);

    let mut source = StreamSource::<_, Timer>::new(stream);
    let response = reader.read(&mut source).await?;

    println!("{}", response.status_line);
    for field in response.headers.iter() {
        println!("{}: {}", field.name, field.value);
    }
    println!();
    println!("{}", String::from_utf8_lossy(&response.body));

    let response = response.into_http_response()?;
    println!("{:?}", response.map(|body| body.len()));

    println!("done");

    Ok(())
}
