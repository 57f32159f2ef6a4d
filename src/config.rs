use std::net::SocketAddr;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub base_url: String,
    pub api_token: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("IEX_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .expect("Invalid IEX_LISTEN_ADDR");
        let base_url = std::env::var("IEX_BASE_URL")
            .unwrap_or_else(|_| "https://cloud.iexapis.com/v1".to_string());
        let api_token = std::env::var("IEX_API_TOKEN").expect("IEX_API_TOKEN must be set");
        Self {
            listen_addr,
            base_url,
            api_token,
        }
    }
}
