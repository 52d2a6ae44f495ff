//! Shared utilities for integration testing.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use wallet_gateway::provider::{ProviderError, WalletProvider, UNRECOGNIZED_CHAIN};

/// In-memory wallet that behaves like a browser extension.
///
/// Tracks authorized accounts, the chains it knows and the active chain,
/// and records every request it receives.
#[allow(dead_code)]
pub struct ScriptedWallet {
    accounts: Vec<String>,
    known_chains: Mutex<HashSet<String>>,
    active_chain: Mutex<Option<String>>,
    switch_error: Option<ProviderError>,
    add_error: Option<ProviderError>,
    requests: Mutex<Vec<(String, Value)>>,
}

#[allow(dead_code)]
impl ScriptedWallet {
    pub fn new(accounts: &[&str], known_chains: &[&str]) -> Self {
        Self {
            accounts: accounts.iter().map(|a| a.to_string()).collect(),
            known_chains: Mutex::new(known_chains.iter().map(|c| c.to_string()).collect()),
            active_chain: Mutex::new(None),
            switch_error: None,
            add_error: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every switch request fails with this error.
    pub fn failing_switch(mut self, error: ProviderError) -> Self {
        self.switch_error = Some(error);
        self
    }

    /// Every add-chain request fails with this error.
    pub fn failing_add(mut self, error: ProviderError) -> Self {
        self.add_error = Some(error);
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.requests().into_iter().map(|(m, _)| m).collect()
    }

    pub fn active_chain(&self) -> Option<String> {
        self.active_chain.lock().unwrap().clone()
    }
}

#[async_trait]
impl WalletProvider for ScriptedWallet {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        self.requests
            .lock()
            .unwrap()
            .push((method.to_string(), params.clone()));

        match method {
            "eth_requestAccounts" | "eth_accounts" => Ok(json!(self.accounts)),
            "wallet_switchEthereumChain" => {
                if let Some(err) = &self.switch_error {
                    return Err(err.clone());
                }
                let chain_id = params[0]["chainId"].as_str().unwrap_or_default().to_string();
                if !self.known_chains.lock().unwrap().contains(&chain_id) {
                    return Err(ProviderError::rpc(
                        UNRECOGNIZED_CHAIN,
                        format!("Unrecognized chain ID \"{}\"", chain_id),
                    ));
                }
                *self.active_chain.lock().unwrap() = Some(chain_id);
                Ok(Value::Null)
            }
            "wallet_addEthereumChain" => {
                if let Some(err) = &self.add_error {
                    return Err(err.clone());
                }
                let chain_id = params[0]["chainId"].as_str().unwrap_or_default().to_string();
                self.known_chains.lock().unwrap().insert(chain_id.clone());
                *self.active_chain.lock().unwrap() = Some(chain_id);
                Ok(Value::Null)
            }
            other => Err(ProviderError::rpc(4200, format!("Unsupported method {}", other))),
        }
    }
}

/// Start a programmable HTTP endpoint on an ephemeral port.
///
/// The handler receives the request body and returns status and body.
#[allow(dead_code)]
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let body = match read_request_body(&mut socket).await {
                            Some(body) => body,
                            None => return,
                        };
                        let (status, response) = f(body).await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            response.len(),
                            response
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Read one HTTP/1.1 request and return its body.
#[allow(dead_code)]
async fn read_request_body(socket: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let end = (header_end + content_length).min(buf.len());
    Some(String::from_utf8_lossy(&buf[header_end..end]).into_owned())
}

/// JSON-RPC success body answering `request`.
#[allow(dead_code)]
pub fn rpc_result(request: &str, result: Value) -> String {
    let id = serde_json::from_str::<Value>(request)
        .map(|v| v["id"].clone())
        .unwrap_or(Value::Null);
    json!({ "jsonrpc": "2.0", "id": id, "result": result }).to_string()
}

/// JSON-RPC error body answering `request`.
#[allow(dead_code)]
pub fn rpc_error(request: &str, code: i64, message: &str) -> String {
    let id = serde_json::from_str::<Value>(request)
        .map(|v| v["id"].clone())
        .unwrap_or(Value::Null);
    json!({ "jsonrpc": "2.0", "id": id, "error": { "code": code, "message": message } }).to_string()
}
