use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[clap(
    name = "gameinfo_server",
    rename_all = "kebab-case",
    rename_all_env = "screaming-snake"
)]
pub struct Args {
    /// Address the HTTP listener binds to
    #[clap(default_value = "0.0.0.0:80", env)]
    pub host: SocketAddr,
}
