//! Hyper server setup and request handling.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming as IncomingBody};
use hyper::{Request, Response};
use hyper_util::rt::TokioExecutor;
use hyper_util::rt::TokioIo;
use hyper_util::server::conn::auto::Builder as ConnectionBuilder;
use tokio::net::TcpListener;

use crate::router::Router;

/// HTTP server for the user API.
pub struct Server {
    addr: SocketAddr,
    router: Arc<Router>,
}

impl Server {
    /// Creates a new server instance.
    ///
    /// # Arguments
    /// * `addr` - Socket address to bind to
    /// * `router` - Request router
    pub fn new(addr: SocketAddr, router: Router) -> Self {
        Self {
            addr,
            router: Arc::new(router),
        }
    }

    /// Binds the listening socket without accepting connections yet.
    pub async fn bind(self) -> Result<BoundServer, std::io::Error> {
        let listener = TcpListener::bind(self.addr).await?;
        Ok(BoundServer {
            listener,
            router: self.router,
        })
    }

    /// Binds and starts the HTTP server.
    pub async fn serve(self) -> Result<(), std::io::Error> {
        self.bind().await?.serve().await
    }
}

/// A server whose socket is bound.
pub struct BoundServer {
    listener: TcpListener,
    router: Arc<Router>,
}

impl BoundServer {
    /// Address the listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, std::io::Error> {
        self.listener.local_addr()
    }

    /// Accepts connections until the task is dropped or accept fails.
    pub async fn serve(self) -> Result<(), std::io::Error> {
        tracing::info!("Server listening on http://{}", self.local_addr()?);

        loop {
            let (stream, peer) = self.listener.accept().await?;
            let io = TokioIo::new(stream);
            let router = Arc::clone(&self.router);

            tokio::task::spawn(async move {
                let builder = ConnectionBuilder::new(TokioExecutor::new());
                if let Err(err) = builder
                    .serve_connection(
                        io,
                        hyper::service::service_fn(move |req| {
                            handle_request(req, Arc::clone(&router))
                        }),
                    )
                    .await
                {
                    tracing::warn!("Error serving connection from {}: {}", peer, err);
                }
            });
        }
    }
}

/// Handles an incoming HTTP request.
async fn handle_request(
    req: Request<IncomingBody>,
    router: Arc<Router>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = router.route(req).await;

    tracing::info!(
        "{} {} {} {:?}",
        method,
        path,
        response.status().as_u16(),
        start.elapsed()
    );
    Ok(response.map(Full::new))
}
