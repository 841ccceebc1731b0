use clap::Parser;
use spotify_lookup::config::{
    ClientConfig, Credentials, CLIENT_ID_ENV, CLIENT_SECRET_ENV, DEFAULT_ACCOUNTS_URL,
    DEFAULT_ALBUM_MARKET, DEFAULT_API_URL, DEFAULT_TOP_TRACKS_COUNTRY,
};
use spotify_lookup::report::{DEFAULT_ALBUM, DEFAULT_ARTIST};
use spotify_lookup::{run_report, ReportRequest, SpotifyClient};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spotify-lookup-cli")]
#[command(about = "Print an artist's top tracks and an album's tracks from Spotify", long_about = None)]
struct Cli {
    /// Spotify application client ID
    #[arg(long, env = CLIENT_ID_ENV, hide_env_values = true)]
    client_id: String,

    /// Spotify application client secret
    #[arg(long, env = CLIENT_SECRET_ENV, hide_env_values = true)]
    client_secret: String,

    /// Artist whose top tracks are listed
    #[arg(long, default_value = DEFAULT_ARTIST)]
    artist: String,

    /// Album whose tracks are listed
    #[arg(long, default_value = DEFAULT_ALBUM)]
    album: String,

    /// Market used to restrict the album search
    #[arg(long, default_value = DEFAULT_ALBUM_MARKET, conflicts_with = "no_market")]
    market: String,

    /// Search albums in every market
    #[arg(long)]
    no_market: bool,

    /// Country for the artist's top tracks
    #[arg(long, default_value = DEFAULT_TOP_TRACKS_COUNTRY)]
    country: String,

    /// Accounts service base URL
    #[arg(long, env = "SPOTIFY_ACCOUNTS_URL", default_value = DEFAULT_ACCOUNTS_URL)]
    accounts_url: String,

    /// Web API base URL
    #[arg(long, env = "SPOTIFY_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

impl Cli {
    fn client_config(&self) -> spotify_lookup::Result<ClientConfig> {
        let credentials = Credentials::checked(&self.client_id, &self.client_secret)?;
        let market = (!self.no_market).then(|| self.market.clone());
        Ok(ClientConfig::new(credentials)
            .with_accounts_url(&self.accounts_url)
            .with_api_url(&self.api_url)
            .with_album_market(market)
            .with_top_tracks_country(&self.country))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; real environment variables still apply
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Lookup failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> spotify_lookup::Result<()> {
    let client = SpotifyClient::connect(cli.client_config()?).await?;
    let request = ReportRequest {
        artist_name: cli.artist,
        album_name: cli.album,
    };

    let mut stdout = std::io::stdout().lock();
    run_report(&client, &request, &mut stdout).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use spotify_lookup::SpotifyError;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["spotify-lookup-cli"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_empty_client_id_is_config_error() {
        let cli = parse(&["--client-id", "", "--client-secret", "x"]);
        match cli.client_config() {
            Err(SpotifyError::Config(msg)) => assert_eq!(msg, "SPOTIFY_CLIENT_ID is empty"),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_match_script() {
        let cli = parse(&["--client-id", "id", "--client-secret", "secret"]);
        let config = cli.client_config().unwrap();
        assert_eq!(cli.artist, "Bruno Mars");
        assert_eq!(cli.album, "99%");
        assert_eq!(config.album_market.as_deref(), Some("VN"));
        assert_eq!(config.top_tracks_country, "VN");
    }

    #[test]
    fn test_no_market() {
        let cli = parse(&["--client-id", "id", "--client-secret", "secret", "--no-market"]);
        assert_eq!(cli.client_config().unwrap().album_market, None);
    }
}
