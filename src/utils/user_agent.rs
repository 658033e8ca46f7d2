/// User-Agent header sent with every pool request.
pub fn user_agent() -> String {
    format!(
        "aropool-miner {}({})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}
