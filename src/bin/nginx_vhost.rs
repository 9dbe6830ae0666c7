use anyhow::Result;

use vhost::domain::ServerKind;

fn main() -> Result<()> {
    vhost::cli::run(ServerKind::Nginx)
}
